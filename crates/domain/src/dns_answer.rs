use std::net::{Ipv4Addr, Ipv6Addr};

/// Response code of a decoded resolver reply, reduced to what classification needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    NoError,
    NxDomain,
    ServFail,
    Refused,
    Other(u16),
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::NxDomain => "NXDOMAIN",
            ResponseStatus::ServFail => "SERVFAIL",
            ResponseStatus::Refused => "REFUSED",
            ResponseStatus::Other(_) => "UNKNOWN",
        }
    }
}

/// One record from the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    Other { record_type: String },
}

impl AnswerRecord {
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            AnswerRecord::A(addr) => Some(*addr),
            _ => None,
        }
    }
}

/// Decoded reply to a single address query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub status: ResponseStatus,
    pub answers: Vec<AnswerRecord>,
    pub truncated: bool,
}

impl DnsAnswer {
    pub fn new(status: ResponseStatus, answers: Vec<AnswerRecord>) -> Self {
        Self {
            status,
            answers,
            truncated: false,
        }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.status == ResponseStatus::NxDomain
    }

    /// A records in answer order.
    pub fn ipv4_addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.answers.iter().filter_map(AnswerRecord::ipv4)
    }
}
