use alotame_domain::QueryResult;
use anyhow::Context;

/// Pretty JSON array with two-space indent, one object per query.
pub fn render_results(results: &[QueryResult]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(results).context("failed to serialize results")
}
