use sha3::digest::ExtendableOutput;
use sha3::{Digest, Sha3_256, Shake256};
use std::fmt::Write;
use xxhash_rust::xxh3::xxh3_64;

/// XXH3-64 of `data` as unpadded lowercase hex. Used for ETags, not for
/// anything security related.
pub fn fast_hash(data: &[u8]) -> String {
    format!("{:x}", xxh3_64(data))
}

/// `len` bytes of SHAKE256 over `data`, hex encoded.
///
/// A `len` of `0` falls back to the fixed 32-byte SHA3-256 digest.
pub fn secure_hash(data: &[u8], len: usize) -> String {
    if len == 0 {
        return to_hex(&Sha3_256::digest(data));
    }

    let mut out = vec![0u8; len];
    Shake256::digest_xof(data, &mut out);
    to_hex(&out)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
            let _ = write!(out, "{:02x}", byte);
            out
        })
}
