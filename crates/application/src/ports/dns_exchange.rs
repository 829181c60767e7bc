use alotame_domain::{DnsAnswer, DomainError};
use async_trait::async_trait;
use std::time::Duration;

/// One address-record exchange with a resolver.
///
/// Implementations make a single attempt bounded by `timeout` and report a
/// timeout as [`DomainError::TransportTimeout`] so callers can decide to retry.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError>;
}
