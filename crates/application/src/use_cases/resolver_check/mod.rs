pub mod query_domain;
pub mod run_check;
pub mod validate_policy;

pub use query_domain::QueryDomainUseCase;
pub use run_check::{CheckReport, RunResolverCheckUseCase};
pub use validate_policy::ValidatePolicyUseCase;
