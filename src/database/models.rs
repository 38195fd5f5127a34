/*!
 * Cache table models and composite key type.
 */

use serde::{Deserialize, Serialize};

use crate::content_hash::hash_content;

/// Composite cache identity within one target locale.
///
/// A value type rather than a concatenated string, so lookups rely on
/// structural equality instead of key formatting conventions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Stable fragment identifier, e.g. "proposal:<id>:title"
    pub content_key: String,
    /// Content fingerprint of the fragment text
    pub content_hash: String,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(content_key: impl Into<String>, content_hash: impl Into<String>) -> Self {
        Self {
            content_key: content_key.into(),
            content_hash: content_hash.into(),
        }
    }

    /// Build the cache key for a fragment's current text
    pub fn for_text(content_key: impl Into<String>, text: &str) -> Self {
        Self::new(content_key, hash_content(text))
    }
}

/// Persisted translation cache record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Stable fragment identifier
    pub content_key: String,
    /// Content fingerprint of the source text at translation time
    pub content_hash: String,
    /// Provider locale code the fragment was translated into
    pub target_locale: String,
    /// Detected source language, uppercase, as reported by the provider
    pub source_locale: String,
    /// The cached translation
    pub translated_text: String,
    /// Last write timestamp (ISO 8601), bumped on upsert
    pub updated_at: String,
}

impl CacheRecord {
    /// Create a new cache record with the current timestamp
    pub fn new(
        content_key: String,
        content_hash: String,
        target_locale: String,
        source_locale: String,
        translated_text: String,
    ) -> Self {
        Self {
            content_key,
            content_hash,
            target_locale,
            source_locale,
            translated_text,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Composite key of this record
    pub fn key(&self) -> CacheKey {
        CacheKey::new(self.content_key.clone(), self.content_hash.clone())
    }
}
