use crate::ports::AllowlistProvider;
use alotame_domain::allowlist::quoted_etag;
use alotame_domain::DomainError;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowlistResponse {
    NotModified { etag: String },
    Content { etag: String, body: Arc<str> },
}

/// Serves the allowlist honouring `If-None-Match` revalidation.
pub struct GetAllowlistUseCase {
    provider: Arc<dyn AllowlistProvider>,
}

impl GetAllowlistUseCase {
    pub fn new(provider: Arc<dyn AllowlistProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(
        &self,
        if_none_match: Option<&str>,
    ) -> Result<AllowlistResponse, DomainError> {
        let raw_etag = self.provider.etag().map_err(|e| {
            error!(error = %e, "Failed to compute allowlist ETag");
            DomainError::AllowlistHash(e.to_string())
        })?;
        let etag = quoted_etag(&raw_etag);

        if if_none_match == Some(etag.as_str()) {
            return Ok(AllowlistResponse::NotModified { etag });
        }

        let body = self.provider.contents().await.map_err(|e| {
            error!(error = %e, "Failed to load allowlist");
            DomainError::AllowlistUnavailable(e.to_string())
        })?;

        Ok(AllowlistResponse::Content { etag, body })
    }
}
