//! Alotame Domain Layer
pub mod allowlist;
pub mod arguments;
pub mod config;
pub mod dns_answer;
pub mod errors;
pub mod policy;
pub mod query_result;

pub use arguments::{classify_arguments, split_domains, ClassifiedArgs};
pub use config::{CliOverrides, Config, RetryPolicy};
pub use dns_answer::{AnswerRecord, DnsAnswer, ResponseStatus};
pub use errors::DomainError;
pub use policy::{PolicyConfig, PolicyMatcher, PolicyOutcome, Requirement};
pub use query_result::{BlockReason, QueryResult, QueryStatus, Verdict};
