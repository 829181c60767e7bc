pub mod allowlist;

pub use allowlist::get_allowlist;
