use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Reachability of a domain as seen through the queried resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryStatus {
    Allowed,
    Blocked,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Allowed => "ALLOWED",
            QueryStatus::Blocked => "BLOCKED",
            QueryStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of grading one result against the configured policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    Undetermined,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Undetermined => "UNDETERMINED",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a resolver answer counts as blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    NxDomain,
    NoAnswer,
    OnlyNullAddresses,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockReason::NxDomain => "NXDOMAIN",
            BlockReason::NoAnswer => "no answer",
            BlockReason::OnlyNullAddresses => "only null addresses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub domain: String,
    pub status: QueryStatus,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl QueryResult {
    pub fn allowed(domain: impl Into<String>, address: Ipv4Addr) -> Self {
        Self::new(domain, QueryStatus::Allowed, address.to_string())
    }

    pub fn blocked(domain: impl Into<String>, reason: BlockReason) -> Self {
        Self::new(domain, QueryStatus::Blocked, reason.as_str())
    }

    pub fn error(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(domain, QueryStatus::Error, message)
    }

    pub fn new(domain: impl Into<String>, status: QueryStatus, detail: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            status,
            detail: detail.into(),
            verdict: None,
        }
    }
}
