use alotame_domain::CliOverrides;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod check;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "alotame")]
#[command(version)]
#[command(about = "Alotame - allowlist-first DNS helper and resolver policy checker")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the allowlist over HTTP
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        host: Option<String>,

        /// Listen port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Query a resolver and check allow/deny expectations
    ///
    /// alotame check <resolver-address:port> [--require-allow csv] [--require-deny csv] [domain...]
    Check {
        #[arg(
            value_name = "ARGS",
            num_args = 0..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };
    if let Command::Serve { host, port } = &cli.command {
        cli_overrides.host = host.clone();
        cli_overrides.port = *port;
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new(&config);

    match cli.command {
        Command::Serve { .. } => {
            info!("Starting Alotame v{}", env!("CARGO_PKG_VERSION"));
            server::start_web_server(&config.server, use_cases.app_state()).await?;
            info!("Server shutdown complete");
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { args } => {
            let code = check::run(&use_cases.run_check, &args).await?;
            Ok(ExitCode::from(code))
        }
    }
}
