mod presenter;

use alotame_application::use_cases::RunResolverCheckUseCase;
use alotame_domain::classify_arguments;
use anyhow::{anyhow, Context};
use std::io::Write;
use tracing::info;

pub use presenter::render_results;

pub const USAGE: &str =
    "usage: alotame check <resolver-address:port> [--require-allow csv] [--require-deny csv] [domain...]";

/// Runs one verification pass and writes the JSON report to stdout.
///
/// Returns the process exit code; invocation and serialization problems are
/// returned as errors so nothing is printed on stdout.
pub async fn run(use_case: &RunResolverCheckUseCase, args: &[String]) -> anyhow::Result<u8> {
    let (server, rest) = args.split_first().ok_or_else(|| anyhow!(USAGE))?;
    let classified = classify_arguments(rest);

    let report = use_case.execute(server, &classified).await?;
    let rendered = render_results(&report.results)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("failed to write results")?;
    stdout.flush().context("failed to write results")?;

    let exit_code = report.exit_code();
    info!(
        domains = report.results.len(),
        outcome = ?report.outcome,
        exit_code,
        "Resolver check finished"
    );

    Ok(u8::try_from(exit_code).unwrap_or(1))
}
