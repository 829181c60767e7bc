use alotame_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        host = %config.server.host,
        port = config.server.port,
        request_timeout_ms = config.resolver_check.request_timeout_ms,
        max_retries = config.resolver_check.max_retries,
        "Configuration loaded"
    );

    Ok(config)
}
