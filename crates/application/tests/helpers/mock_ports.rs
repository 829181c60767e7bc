#![allow(dead_code)]

use alotame_application::ports::{AllowlistProvider, DnsExchange};
use alotame_domain::{AnswerRecord, DnsAnswer, DomainError, ResponseStatus};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_SERVER: &str = "127.0.0.1:5353";

pub fn a_answer(ips: &[&str]) -> DnsAnswer {
    DnsAnswer::new(
        ResponseStatus::NoError,
        ips.iter()
            .map(|ip| AnswerRecord::A(ip.parse::<Ipv4Addr>().unwrap()))
            .collect(),
    )
}

pub fn nxdomain_answer() -> DnsAnswer {
    DnsAnswer::new(ResponseStatus::NxDomain, vec![])
}

pub fn empty_answer() -> DnsAnswer {
    DnsAnswer::new(ResponseStatus::NoError, vec![])
}

pub fn timeout_error() -> DomainError {
    DomainError::TransportTimeout {
        server: TEST_SERVER.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeCall {
    pub server: String,
    pub domain: String,
    pub timeout: Duration,
}

/// Replays scripted replies per domain. The last scripted reply for a domain
/// repeats once the script is exhausted; unknown domains get NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Result<DnsAnswer, DomainError>>>>>,
    calls: Arc<Mutex<Vec<ExchangeCall>>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, domain: &str, answer: DnsAnswer) {
        self.set_script(domain, vec![Ok(answer)]);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.set_script(domain, vec![Err(error)]);
    }

    pub fn set_script(&self, domain: &str, replies: Vec<Result<DnsAnswer, DomainError>>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(domain.to_string(), replies.into_iter().collect());
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, domain: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.domain == domain)
            .count()
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.domain.clone())
            .collect()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            server: server.to_string(),
            domain: domain.to_string(),
            timeout,
        });

        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(domain) {
            Some(script) if script.len() > 1 => script.pop_front().unwrap(),
            Some(script) => script.front().cloned().unwrap_or_else(|| Ok(nxdomain_answer())),
            None => Ok(nxdomain_answer()),
        }
    }
}

pub struct MockAllowlistProvider {
    contents: Option<Arc<str>>,
    etag: Option<String>,
    contents_calls: Arc<Mutex<usize>>,
}

impl MockAllowlistProvider {
    pub fn new(contents: &str, etag: &str) -> Self {
        Self {
            contents: Some(Arc::from(contents)),
            etag: Some(etag.to_string()),
            contents_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing_etag() -> Self {
        Self {
            contents: Some(Arc::from("github.com\n")),
            etag: None,
            contents_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing_contents(etag: &str) -> Self {
        Self {
            contents: None,
            etag: Some(etag.to_string()),
            contents_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn contents_calls(&self) -> usize {
        *self.contents_calls.lock().unwrap()
    }
}

#[async_trait]
impl AllowlistProvider for MockAllowlistProvider {
    async fn contents(&self) -> Result<Arc<str>, DomainError> {
        *self.contents_calls.lock().unwrap() += 1;
        self.contents
            .clone()
            .ok_or_else(|| DomainError::IoError("allowlist source offline".to_string()))
    }

    fn etag(&self) -> Result<String, DomainError> {
        self.etag
            .clone()
            .ok_or_else(|| DomainError::IoError("hash unavailable".to_string()))
    }
}
