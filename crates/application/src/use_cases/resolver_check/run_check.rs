use super::{QueryDomainUseCase, ValidatePolicyUseCase};
use alotame_domain::{ClassifiedArgs, DomainError, PolicyOutcome, QueryResult};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub results: Vec<QueryResult>,
    /// `None` when no policy was configured.
    pub outcome: Option<PolicyOutcome>,
}

impl CheckReport {
    pub fn exit_code(&self) -> i32 {
        self.outcome.map_or(0, |outcome| outcome.exit_code())
    }
}

/// Queries every requested domain and, when a policy is present, grades the results.
pub struct RunResolverCheckUseCase {
    query: Arc<QueryDomainUseCase>,
    validate: ValidatePolicyUseCase,
}

impl RunResolverCheckUseCase {
    pub fn new(query: Arc<QueryDomainUseCase>) -> Self {
        Self {
            query,
            validate: ValidatePolicyUseCase::new(),
        }
    }

    pub async fn execute(
        &self,
        server: &str,
        args: &ClassifiedArgs,
    ) -> Result<CheckReport, DomainError> {
        let domains = args.domains_to_query();
        if domains.is_empty() {
            return Err(DomainError::NoDomainsSpecified);
        }

        info!(
            server,
            domains = domains.len(),
            require_allow = args.policy.require_allow.len(),
            require_deny = args.policy.require_deny.len(),
            "Starting resolver check"
        );

        let mut results = self.query.execute_all(server, &domains).await;

        let outcome = if args.policy.is_active() {
            Some(self.validate.execute(&mut results, &args.policy))
        } else {
            None
        };

        Ok(CheckReport { results, outcome })
    }
}
