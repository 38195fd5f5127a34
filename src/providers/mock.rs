/*!
 * Mock translation client for testing.
 *
 * Counts invocations and records every batch of texts it receives, so tests
 * can assert the batching contract (one call for N misses, zero calls on a
 * full cache hit) as well as the translated output itself.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{ProviderTranslation, TranslateOptions, TranslationClient};

/// Behavior mode for the mock client
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Succeeds, echoing each text with a target-locale prefix
    Working,
    /// Always fails with an API error
    Failing,
    /// Returns one result fewer than requested (simulates a misaligned
    /// provider response)
    Truncated,
}

/// Mock translation client
#[derive(Debug)]
pub struct MockClient {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate invocations
    call_count: Arc<AtomicUsize>,
    /// Every batch of texts received, in call order
    received: Arc<Mutex<Vec<Vec<String>>>>,
    /// Source language reported for every item
    detected_lang: String,
}

impl MockClient {
    /// Create a new mock client with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
            detected_lang: "EN".to_string(),
        }
    }

    /// Create a working mock client that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock client that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that drops the last result from each response
    pub fn truncated() -> Self {
        Self::new(MockBehavior::Truncated)
    }

    /// Set the detected source language reported for every item
    pub fn with_detected_lang(mut self, lang: impl Into<String>) -> Self {
        self.detected_lang = lang.into();
        self
    }

    /// Number of translate invocations so far
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Texts received by the Nth invocation, if it happened
    pub fn received_texts(&self, call: usize) -> Option<Vec<String>> {
        self.received
            .lock()
            .ok()
            .and_then(|batches| batches.get(call).cloned())
    }

    /// Total number of texts received across all invocations
    pub fn total_texts(&self) -> usize {
        self.received
            .lock()
            .map(|batches| batches.iter().map(Vec::len).sum())
            .unwrap_or(0)
    }
}

impl Clone for MockClient {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            received: Arc::clone(&self.received),
            detected_lang: self.detected_lang.clone(),
        }
    }
}

#[async_trait]
impl TranslationClient for MockClient {
    async fn translate(
        &self,
        texts: &[String],
        target_locale: &str,
        _options: &TranslateOptions,
    ) -> Result<Vec<ProviderTranslation>, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut batches) = self.received.lock() {
            batches.push(texts.to_vec());
        }

        match self.behavior {
            MockBehavior::Working => Ok(texts
                .iter()
                .map(|text| ProviderTranslation {
                    text: format!("[{}] {}", target_locale, text),
                    detected_source_lang: self.detected_lang.clone(),
                })
                .collect()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Truncated => {
                let keep = texts.len().saturating_sub(1);
                Ok(texts
                    .iter()
                    .take(keep)
                    .map(|text| ProviderTranslation {
                        text: format!("[{}] {}", target_locale, text),
                        detected_source_lang: self.detected_lang.clone(),
                    })
                    .collect())
            }
        }
    }
}
