pub mod get_allowlist;

pub use get_allowlist::{AllowlistResponse, GetAllowlistUseCase};
