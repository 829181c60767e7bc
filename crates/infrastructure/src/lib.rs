//! Alotame Infrastructure Layer
pub mod allowlist;
pub mod dns;
pub mod hashing;
