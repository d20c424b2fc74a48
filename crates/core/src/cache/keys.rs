//! Cache key derivation for queries and page URLs.
//!
//! Query keys stay human-readable (a slug of the canonicalized query) so
//! the cache directory can be inspected by eye while debugging. Whenever
//! the slug would lose characters, a digest of the canonical form is
//! appended so distinct queries never share an entry. Page keys are
//! SHA-256 digests of the canonicalized URL.

use sha2::{Digest, Sha256};

/// Derive the cache key for a search query.
///
/// Canonicalization: trim, lowercase, collapse internal whitespace, join
/// words with `-`. When every canonical character is filename-safe
/// (ASCII alphanumeric, `-`, `_`, `.`) the key is just the slug. When
/// filtering would drop characters - punctuation, any non-Latin script -
/// a short SHA-256 digest of the canonical form is appended (or stands
/// alone if nothing survives), so queries differing only in dropped
/// characters still get distinct entries.
pub fn query_key(query: &str) -> String {
    let canonical = query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    let slug: String = canonical
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    if slug == canonical {
        format!("q-{slug}")
    } else if slug.is_empty() {
        format!("q-{}", short_digest(&canonical))
    } else {
        format!("q-{slug}-{}", short_digest(&canonical))
    }
}

/// Derive the cache key for a search request with non-default parameters.
///
/// Parameters that change the response body (result count, pagination,
/// safe search) get their own entry per combination; `params` is a
/// stable serialization of the effective values.
pub fn query_params_key(query: &str, params: &str) -> String {
    format!("{}-{}", query_key(query), short_digest(params))
}

/// Derive the cache key for a page URL.
///
/// The key is the SHA-256 hex digest of the URL string; callers pass the
/// canonicalized form so equivalent spellings share an entry.
pub fn page_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

/// First 8 bytes of a SHA-256 digest, hex-encoded.
fn short_digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}
