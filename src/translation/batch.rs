/*!
 * Batch translation orchestration.
 *
 * One `translate_batch` call is a single unit of work in three sequential
 * stages - bulk cache lookup, one provider call for the misses, bulk
 * write-through - so round trips are bounded at three regardless of batch
 * size. Nothing persists across calls; a provider failure after the lookup
 * performs no cache write, leaving the table consistent for a retry.
 */

use anyhow::Result;
use log::debug;
use std::collections::HashMap;

use crate::content_hash::hash_content;
use crate::database::{CacheKey, CacheRecord, CacheRepository};
use crate::errors::TranslationError;
use crate::providers::{TranslateOptions, TranslationClient};

/// Input unit: one named text fragment of a content entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableEntry {
    /// Stable identifier, unique within an entity+field combination,
    /// e.g. "proposal:<id>:title". Does not change when the text changes.
    pub content_key: String,
    /// Source text, plain or HTML markup
    pub text: String,
}

impl TranslatableEntry {
    /// Create a new translatable entry
    pub fn new(content_key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content_key: content_key.into(),
            text: text.into(),
        }
    }
}

/// Output unit: one translation per input entry, same order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Content key of the source entry
    pub content_key: String,
    /// Translated text
    pub translated_text: String,
    /// Detected source language, uppercase
    pub source_locale: String,
    /// True when served from the cache, false when freshly translated
    pub cached: bool,
}

/// Batch translator orchestrating cache and provider access
#[derive(Clone)]
pub struct BatchTranslator {
    /// Translation cache store
    repo: CacheRepository,
}

impl BatchTranslator {
    /// Create a new batch translator over the given cache repository
    pub fn new(repo: CacheRepository) -> Self {
        Self { repo }
    }

    /// Access the underlying cache repository
    pub fn repository(&self) -> &CacheRepository {
        &self.repo
    }

    /// Translate a batch of entries into the target locale.
    ///
    /// Entries with a valid cached translation are served from the cache;
    /// the rest are sent to the provider in one batched call and written
    /// through. Results come back in input order, indistinguishable to the
    /// caller except for the `cached` flag.
    ///
    /// The target locale is passed through verbatim to both the cache store
    /// and the provider client.
    pub async fn translate_batch(
        &self,
        entries: &[TranslatableEntry],
        target_locale: &str,
        client: &dyn TranslationClient,
    ) -> Result<Vec<TranslationResult>> {
        // Nothing to do: no store or provider call
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        // Hash every entry. Purely local, cannot fail.
        let hashed: Vec<(&TranslatableEntry, String)> = entries
            .iter()
            .map(|entry| (entry, hash_content(&entry.text)))
            .collect();

        // Bulk cache lookup over all composite keys
        let keys: Vec<CacheKey> = hashed
            .iter()
            .map(|(entry, hash)| CacheKey::new(entry.content_key.clone(), hash.clone()))
            .collect();
        let hits = self.repo.lookup_many(&keys, target_locale).await?;

        // Partition, preserving the original relative order of misses: the
        // provider's response is zipped back onto exactly this order.
        let misses: Vec<(&TranslatableEntry, &str)> = hashed
            .iter()
            .filter(|(entry, hash)| {
                !hits.contains_key(&CacheKey::new(entry.content_key.clone(), hash.clone()))
            })
            .map(|(entry, hash)| (*entry, hash.as_str()))
            .collect();

        debug!(
            "translate_batch: {} entries, {} cache hits, {} misses (target {})",
            entries.len(),
            hits.len(),
            misses.len(),
            target_locale
        );

        // Dispatch all misses in a single provider call, then write through.
        let mut fresh: HashMap<CacheKey, CacheRecord> = HashMap::new();
        if !misses.is_empty() {
            let texts: Vec<String> = misses.iter().map(|(entry, _)| entry.text.clone()).collect();
            let translations = client
                .translate(&texts, target_locale, &TranslateOptions::html())
                .await
                .map_err(TranslationError::Provider)?;

            if translations.len() != misses.len() {
                // A misaligned response would corrupt every subsequent
                // content_key -> text mapping; fail loudly instead.
                return Err(TranslationError::ResponseLengthMismatch {
                    expected: misses.len(),
                    actual: translations.len(),
                    index: misses.len().min(translations.len()),
                }
                .into());
            }

            let records: Vec<CacheRecord> = misses
                .iter()
                .zip(translations)
                .map(|((entry, hash), translation)| {
                    CacheRecord::new(
                        entry.content_key.clone(),
                        (*hash).to_string(),
                        target_locale.to_string(),
                        translation.detected_source_lang.to_uppercase(),
                        translation.text,
                    )
                })
                .collect();

            for record in &records {
                fresh.insert(record.key(), record.clone());
            }

            self.repo.upsert_many(records).await?;
        }

        // Merge in original entry order. Every entry must resolve from
        // exactly one of the two maps.
        let mut results = Vec::with_capacity(entries.len());
        for (entry, hash) in &hashed {
            let key = CacheKey::new(entry.content_key.clone(), hash.clone());
            let result = if let Some(record) = hits.get(&key) {
                TranslationResult {
                    content_key: entry.content_key.clone(),
                    translated_text: record.translated_text.clone(),
                    source_locale: record.source_locale.clone(),
                    cached: true,
                }
            } else if let Some(record) = fresh.get(&key) {
                TranslationResult {
                    content_key: entry.content_key.clone(),
                    translated_text: record.translated_text.clone(),
                    source_locale: record.source_locale.clone(),
                    cached: false,
                }
            } else {
                return Err(TranslationError::UnresolvedEntry {
                    content_key: entry.content_key.clone(),
                }
                .into());
            };
            results.push(result);
        }

        Ok(results)
    }
}
