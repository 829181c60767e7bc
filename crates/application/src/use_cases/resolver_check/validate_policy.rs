use alotame_domain::{PolicyConfig, PolicyOutcome, QueryResult};
use tracing::debug;

/// Grades query results against the required-allow / required-deny lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatePolicyUseCase;

impl ValidatePolicyUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Sets the verdict of every result and reports whether any of them failed.
    pub fn execute(&self, results: &mut [QueryResult], policy: &PolicyConfig) -> PolicyOutcome {
        let matcher = policy.matcher();
        let mut failed = false;

        for result in results.iter_mut() {
            let verdict = matcher.verdict_for(result);
            debug!(domain = %result.domain, status = %result.status, verdict = %verdict, "Verdict assigned");

            failed |= verdict.is_failure();
            result.verdict = Some(verdict);
        }

        if failed {
            PolicyOutcome::Failed
        } else {
            PolicyOutcome::Passed
        }
    }
}
