/// Sample allowlist served until a real data source is wired in.
pub const SAMPLE_ALLOWLIST: &str = "
# Sample Allowlist
github.com
example.com
yahoo.com
";

/// Quotes a raw content hash into an HTTP entity tag.
pub fn quoted_etag(raw_hash: &str) -> String {
    format!("\"{}\"", raw_hash)
}

/// Domains listed in an allowlist body, skipping blank lines and `#` comments.
pub fn allowlist_entries(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
