//! Classification of the raw tokens that follow the resolver address.

use crate::policy::PolicyConfig;

pub const REQUIRE_ALLOW_FLAG: &str = "--require-allow";
pub const REQUIRE_DENY_FLAG: &str = "--require-deny";

const REQUIRE_ALLOW_ALIAS: &str = "--require_allow";
const REQUIRE_DENY_ALIAS: &str = "--require_deny";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    pub policy: PolicyConfig,
    pub plain_domains: Vec<String>,
}

impl ClassifiedArgs {
    /// Every domain to query, in query order.
    pub fn domains_to_query(&self) -> Vec<String> {
        self.policy.query_order(&self.plain_domains)
    }
}

/// Splits a comma-separated list, trimming each element and dropping empty ones.
///
/// An empty input yields `None`; an input made only of separators or whitespace
/// yields `Some` of an empty list.
pub fn split_domains(input: &str) -> Option<Vec<String>> {
    if input.is_empty() {
        return None;
    }

    Some(
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Separates `--require-allow` / `--require-deny` lists from plain domains.
///
/// A flag consumes the following token as its list. A flag with nothing after it
/// is ignored. A repeated flag replaces the earlier list.
pub fn classify_arguments<S: AsRef<str>>(args: &[S]) -> ClassifiedArgs {
    let mut classified = ClassifiedArgs::default();
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        match token {
            REQUIRE_ALLOW_FLAG | REQUIRE_ALLOW_ALIAS => {
                if let Some(list) = tokens.next() {
                    classified.policy.require_allow = split_domains(list).unwrap_or_default();
                }
            }
            REQUIRE_DENY_FLAG | REQUIRE_DENY_ALIAS => {
                if let Some(list) = tokens.next() {
                    classified.policy.require_deny = split_domains(list).unwrap_or_default();
                }
            }
            domain => classified.plain_domains.push(domain.to_string()),
        }
    }

    classified
}
