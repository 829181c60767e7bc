mod allowlist_provider;
mod dns_exchange;

pub use allowlist_provider::AllowlistProvider;
pub use dns_exchange::DnsExchange;

// Re-export for convenience
pub use alotame_domain::DnsAnswer;
