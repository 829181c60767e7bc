use alotame_domain::{BlockReason, DnsAnswer, QueryResult};
use std::net::Ipv4Addr;

/// Maps a decoded resolver reply onto ALLOWED / BLOCKED.
///
/// A blocking resolver is expected to answer with NXDOMAIN, an empty answer
/// section, or the unspecified address `0.0.0.0`. Anything that carries a real
/// IPv4 address counts as reachable.
pub struct AnswerClassifier;

impl AnswerClassifier {
    pub fn classify(domain: &str, answer: &DnsAnswer) -> QueryResult {
        if answer.is_nxdomain() {
            return QueryResult::blocked(domain, BlockReason::NxDomain);
        }

        if answer.answers.is_empty() {
            return QueryResult::blocked(domain, BlockReason::NoAnswer);
        }

        match Self::first_routable(answer) {
            Some(address) => QueryResult::allowed(domain, address),
            None => QueryResult::blocked(domain, BlockReason::OnlyNullAddresses),
        }
    }

    fn first_routable(answer: &DnsAnswer) -> Option<Ipv4Addr> {
        answer
            .ipv4_addresses()
            .find(|address| !address.is_unspecified())
    }
}
