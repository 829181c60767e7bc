pub mod allowlist;
pub mod resolver_check;

// Re-export use cases
pub use allowlist::{AllowlistResponse, GetAllowlistUseCase};
pub use resolver_check::{
    CheckReport, QueryDomainUseCase, RunResolverCheckUseCase, ValidatePolicyUseCase,
};
