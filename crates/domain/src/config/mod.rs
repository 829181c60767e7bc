pub mod errors;
pub mod logging;
pub mod resolver_check;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver_check::{ResolverCheckConfig, RetryPolicy};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
