/*!
 * Translation provider clients.
 *
 * This module defines the narrow interface the batch translator depends on
 * and the available implementations:
 * - DeepL: HTTP API adapter
 * - Mock: scriptable test double with call accounting
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// How the provider should treat markup embedded in the source texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagHandling {
    /// Preserve inline HTML structure; only prose between tags is translated
    #[default]
    Html,
    /// Treat the input as plain text
    PlainText,
}

impl TagHandling {
    /// Wire value expected by the provider API
    pub fn as_api_value(&self) -> Option<&'static str> {
        match self {
            Self::Html => Some("html"),
            Self::PlainText => None,
        }
    }
}

/// Per-request translation options
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateOptions {
    /// Markup handling mode
    pub tag_handling: TagHandling,
}

impl TranslateOptions {
    /// Options for HTML fragments (titles and rich-text bodies alike; plain
    /// text passes through HTML tag handling unharmed)
    pub fn html() -> Self {
        Self {
            tag_handling: TagHandling::Html,
        }
    }
}

/// One translated text with the language the provider detected for it
#[derive(Debug, Clone)]
pub struct ProviderTranslation {
    /// Translated text, same position as the corresponding input
    pub text: String,
    /// Detected source language code as reported by the provider
    pub detected_source_lang: String,
}

/// Common trait for translation provider clients
///
/// The batch translator depends only on this interface; it is implemented by
/// the real provider adapter and by test doubles. The response list must have
/// the same length and order as `texts` - the caller treats any deviation as
/// a fatal integration bug.
#[async_trait]
pub trait TranslationClient: Send + Sync + Debug {
    /// Translate an ordered list of texts into the target locale
    ///
    /// # Arguments
    /// * `texts` - Source texts, order significant
    /// * `target_locale` - Provider locale code, passed through verbatim
    /// * `options` - Markup handling options
    ///
    /// # Returns
    /// * One `ProviderTranslation` per input text, in input order
    async fn translate(
        &self,
        texts: &[String],
        target_locale: &str,
        options: &TranslateOptions,
    ) -> Result<Vec<ProviderTranslation>, ProviderError>;
}

pub mod deepl;
pub mod mock;

pub use deepl::DeepLClient;
pub use mock::MockClient;
