use crate::hashing::fast_hash;
use alotame_application::ports::AllowlistProvider;
use alotame_domain::allowlist::{allowlist_entries, SAMPLE_ALLOWLIST};
use alotame_domain::DomainError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Serves a fixed allowlist body held in memory.
#[derive(Debug, Clone)]
pub struct StaticAllowlistProvider {
    contents: Arc<str>,
}

impl StaticAllowlistProvider {
    pub fn new(contents: impl Into<Arc<str>>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ALLOWLIST)
    }

    pub fn entry_count(&self) -> usize {
        allowlist_entries(&self.contents).count()
    }
}

impl Default for StaticAllowlistProvider {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl AllowlistProvider for StaticAllowlistProvider {
    async fn contents(&self) -> Result<Arc<str>, DomainError> {
        Ok(Arc::clone(&self.contents))
    }

    fn etag(&self) -> Result<String, DomainError> {
        let hash = fast_hash(self.contents.as_bytes());
        debug!(etag = %hash, size = self.contents.len(), "Allowlist hashed");
        Ok(hash)
    }
}
