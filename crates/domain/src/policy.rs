use crate::query_result::{QueryResult, QueryStatus, Verdict};
use std::collections::HashSet;

/// Which outcome a domain is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Allow,
    Deny,
}

impl Requirement {
    pub fn grade(&self, status: QueryStatus) -> Verdict {
        let satisfied = match self {
            Requirement::Allow => status == QueryStatus::Allowed,
            Requirement::Deny => status == QueryStatus::Blocked,
        };

        if satisfied {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Required-allow and required-deny domains, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub require_allow: Vec<String>,
    pub require_deny: Vec<String>,
}

impl PolicyConfig {
    pub fn new(require_allow: Vec<String>, require_deny: Vec<String>) -> Self {
        Self {
            require_allow,
            require_deny,
        }
    }

    /// Policy grading only runs when at least one list is non-empty.
    pub fn is_active(&self) -> bool {
        !self.require_allow.is_empty() || !self.require_deny.is_empty()
    }

    /// Required-allow first, then required-deny, then the plain domains.
    pub fn query_order(&self, plain_domains: &[String]) -> Vec<String> {
        self.require_allow
            .iter()
            .chain(self.require_deny.iter())
            .chain(plain_domains.iter())
            .cloned()
            .collect()
    }

    pub fn matcher(&self) -> PolicyMatcher<'_> {
        PolicyMatcher {
            allow: self.require_allow.iter().map(String::as_str).collect(),
            deny: self.require_deny.iter().map(String::as_str).collect(),
        }
    }
}

/// Set lookup over a [`PolicyConfig`]. Allow membership is checked before deny,
/// so a domain listed in both is held to the allow requirement.
pub struct PolicyMatcher<'a> {
    allow: HashSet<&'a str>,
    deny: HashSet<&'a str>,
}

impl PolicyMatcher<'_> {
    pub fn requirement_for(&self, domain: &str) -> Option<Requirement> {
        if self.allow.contains(domain) {
            Some(Requirement::Allow)
        } else if self.deny.contains(domain) {
            Some(Requirement::Deny)
        } else {
            None
        }
    }

    pub fn verdict_for(&self, result: &QueryResult) -> Verdict {
        match self.requirement_for(&result.domain) {
            Some(requirement) => requirement.grade(result.status),
            None => Verdict::Undetermined,
        }
    }
}

/// Aggregate result of policy validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    Passed,
    Failed,
}

impl PolicyOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            PolicyOutcome::Passed => 0,
            PolicyOutcome::Failed => 1,
        }
    }
}
