use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver address: {0}")]
    InvalidResolverAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS response id mismatch: expected {expected}, got {actual}")]
    ResponseIdMismatch { expected: u16, actual: u16 },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("No domains specified")]
    NoDomainsSpecified,

    #[error("Allowlist hash unavailable: {0}")]
    AllowlistHash(String),

    #[error("Allowlist unavailable: {0}")]
    AllowlistUnavailable(String),
}

impl DomainError {
    /// Only timeouts are worth another attempt; every other failure is final.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }
}
