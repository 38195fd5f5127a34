/*!
 * Content fingerprinting for cache invalidation.
 *
 * A fragment's cache identity is its content key plus a digest of its text.
 * When the text changes the digest changes, so stale cache rows are simply
 * never matched again - there is no explicit invalidation API.
 */

use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Number of digest bytes kept in the fingerprint (64 bits).
const HASH_BYTES: usize = 8;

/// Compute the content fingerprint of a text fragment.
///
/// Returns the first 8 bytes of the SHA-256 digest as 16 lowercase hex
/// characters. Deterministic across platforms and process restarts, so hashes
/// stay compatible with rows already persisted in the cache table. Accepts
/// empty strings and arbitrarily large HTML bodies.
pub fn hash_content(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(HASH_BYTES * 2);
    for byte in digest.iter().take(HASH_BYTES) {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
