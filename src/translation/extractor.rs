/*!
 * Content extraction for proposals.
 *
 * Bridges the domain entity and the batch translator: flattens a proposal's
 * translatable fields into keyed entries, maps the platform locale to the
 * provider's code, and folds the ordered results back into a field map.
 */

use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::locales::LocaleMap;
use crate::providers::TranslationClient;
use crate::translation::batch::{BatchTranslator, TranslatableEntry};

/// A proposal with its translatable text fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Stable proposal identifier
    pub id: String,
    /// Proposal title, plain text
    #[serde(default)]
    pub title: String,
    /// Category label, plain text
    #[serde(default)]
    pub category: String,
    /// Named body fragments, HTML markup. Ordered map so extraction
    /// order is deterministic across runs. The names `title` and `category`
    /// are reserved for the built-in fields; fragments carrying them are
    /// ignored during extraction.
    #[serde(default)]
    pub content: BTreeMap<String, String>,
}

impl Proposal {
    /// Create a proposal with no body fragments
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            content: BTreeMap::new(),
        }
    }

    /// Add a named body fragment
    pub fn with_fragment(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.content.insert(name.into(), text.into());
        self
    }
}

/// Translated view of a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalTranslation {
    /// Field name -> translated text. Fields that were empty in the
    /// source are absent.
    pub translated: HashMap<String, String>,
    /// Detected source locale of the first translated field, uppercase.
    /// Empty when nothing was translatable.
    pub source_locale: String,
    /// Platform locale the proposal was translated into
    pub target_locale: String,
}

/// Translates whole proposals through the batch translator
pub struct ProposalTranslator {
    batch: BatchTranslator,
    locales: LocaleMap,
}

impl ProposalTranslator {
    /// Create a proposal translator with the default locale mapping
    pub fn new(batch: BatchTranslator) -> Self {
        Self {
            batch,
            locales: LocaleMap::default(),
        }
    }

    /// Create a proposal translator with a custom locale mapping
    pub fn with_locales(batch: BatchTranslator, locales: LocaleMap) -> Self {
        Self { batch, locales }
    }

    /// Translate every non-empty text field of a proposal into the given
    /// platform locale.
    ///
    /// Fails fast when the locale is not in the mapping table. A proposal
    /// with no translatable text returns an empty result without touching
    /// the cache or the provider.
    pub async fn translate_proposal(
        &self,
        proposal: &Proposal,
        target_locale: &str,
        client: &dyn TranslationClient,
    ) -> Result<ProposalTranslation> {
        let provider_code = self.locales.provider_code(target_locale)?;

        let entries = extract_entries(proposal);
        if entries.is_empty() {
            debug!("proposal {} has no translatable text", proposal.id);
            return Ok(ProposalTranslation {
                translated: HashMap::new(),
                source_locale: String::new(),
                target_locale: target_locale.to_string(),
            });
        }

        let results = self
            .batch
            .translate_batch(&entries, &provider_code, client)
            .await?;

        let prefix = field_key(&proposal.id, "");
        let mut translated = HashMap::with_capacity(results.len());
        let mut source_locale = String::new();
        for result in results {
            if source_locale.is_empty() && !result.source_locale.is_empty() {
                source_locale = result.source_locale.clone();
            }
            let field = result
                .content_key
                .strip_prefix(&prefix)
                .unwrap_or(&result.content_key)
                .to_string();
            translated.insert(field, result.translated_text);
        }

        Ok(ProposalTranslation {
            translated,
            source_locale,
            target_locale: target_locale.to_string(),
        })
    }
}

/// Field names occupied by the built-in proposal fields
const RESERVED_FIELDS: &[&str] = &["title", "category"];

/// Build the content key for one proposal field
fn field_key(proposal_id: &str, field: &str) -> String {
    format!("proposal:{}:{}", proposal_id, field)
}

/// Flatten a proposal into keyed entries, skipping empty fields
fn extract_entries(proposal: &Proposal) -> Vec<TranslatableEntry> {
    let mut entries = Vec::with_capacity(2 + proposal.content.len());

    let mut push = |field: &str, text: &str| {
        if !text.trim().is_empty() {
            entries.push(TranslatableEntry::new(
                field_key(&proposal.id, field),
                text.to_string(),
            ));
        }
    };

    push("title", &proposal.title);
    push("category", &proposal.category);
    for (name, text) in &proposal.content {
        // A fragment named after a built-in field would collide with its
        // content key and overwrite it in the returned field map
        if RESERVED_FIELDS.contains(&name.as_str()) {
            warn!(
                "proposal {}: fragment '{}' shadows a built-in field, skipping",
                proposal.id, name
            );
            continue;
        }
        push(name, text);
    }

    entries
}
