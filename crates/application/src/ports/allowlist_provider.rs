use alotame_domain::DomainError;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AllowlistProvider: Send + Sync {
    async fn contents(&self) -> Result<Arc<str>, DomainError>;

    /// Content hash used for cache validation, not for security.
    fn etag(&self) -> Result<String, DomainError>;
}
