use crate::ports::DnsExchange;
use crate::services::AnswerClassifier;
use alotame_domain::{DnsAnswer, DomainError, QueryResult, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Queries one domain's A record, retrying timeouts within the retry budget.
pub struct QueryDomainUseCase {
    exchange: Arc<dyn DnsExchange>,
    retry: RetryPolicy,
}

impl QueryDomainUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, retry: RetryPolicy) -> Self {
        Self { exchange, retry }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub async fn execute(&self, server: &str, domain: &str) -> QueryResult {
        let result = match self.exchange_with_retry(server, domain).await {
            Ok(answer) => AnswerClassifier::classify(domain, &answer),
            Err(e) => QueryResult::error(domain, e.to_string()),
        };

        info!(
            domain = %result.domain,
            status = %result.status,
            detail = %result.detail,
            "Domain checked"
        );

        result
    }

    /// Queries every domain in turn; the output order matches `domains`.
    pub async fn execute_all(&self, server: &str, domains: &[String]) -> Vec<QueryResult> {
        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            results.push(self.execute(server, domain).await);
        }
        results
    }

    async fn exchange_with_retry(
        &self,
        server: &str,
        domain: &str,
    ) -> Result<DnsAnswer, DomainError> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt: u32 = 1;

        loop {
            debug!(server, domain, attempt, max_attempts, "Sending A query");

            let error = match self
                .exchange
                .exchange(server, domain, self.retry.request_timeout)
                .await
            {
                Ok(answer) => return Ok(answer),
                Err(e) => e,
            };

            if !error.is_timeout() || attempt >= max_attempts {
                return Err(error);
            }

            warn!(
                server,
                domain,
                attempt,
                retry_delay_ms = self.retry.retry_delay.as_millis() as u64,
                "Query timed out, retrying"
            );

            tokio::time::sleep(self.retry.retry_delay).await;
            attempt += 1;
        }
    }
}
