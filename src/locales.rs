/*!
 * Locale mapping between platform locale codes and provider codes.
 *
 * The platform exposes short lowercase locale codes ("en", "pt") while the
 * translation provider expects its own regional-variant codes ("EN-US",
 * "PT-BR"). The mapping is an explicit configuration structure consulted by
 * the content extractor; the batch translator only ever sees the provider
 * code as an opaque string.
 */

use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Default platform locale -> provider code table.
///
/// Where the provider distinguishes regional variants the platform's choice
/// is pinned here (Brazilian Portuguese, American English).
const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("en", "EN-US"),
    ("es", "ES"),
    ("pt", "PT-BR"),
    ("fr", "FR"),
    ("de", "DE"),
    ("it", "IT"),
    ("nl", "NL"),
    ("ja", "JA"),
];

/// Mapping from platform locale codes to provider locale codes
#[derive(Debug, Clone)]
pub struct LocaleMap {
    mapping: HashMap<String, String>,
}

impl LocaleMap {
    /// Create a locale map from an explicit mapping
    pub fn from_map(mapping: HashMap<String, String>) -> Self {
        Self { mapping }
    }

    /// Create a locale map from the defaults with overrides merged on top
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut locales = Self::default();
        for (platform, provider) in overrides {
            locales
                .mapping
                .insert(platform.trim().to_lowercase(), provider.clone());
        }
        locales
    }

    /// Resolve the provider code for a platform locale
    pub fn provider_code(&self, platform_locale: &str) -> Result<&str> {
        let normalized = platform_locale.trim().to_lowercase();
        self.mapping
            .get(&normalized)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Unsupported target locale: {}", platform_locale))
    }

    /// Check whether a platform locale is supported
    pub fn is_supported(&self, platform_locale: &str) -> bool {
        self.mapping
            .contains_key(&platform_locale.trim().to_lowercase())
    }

    /// All supported platform locales, sorted for stable output
    pub fn supported_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.mapping.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

impl Default for LocaleMap {
    fn default() -> Self {
        let mapping = DEFAULT_LOCALES
            .iter()
            .map(|(platform, provider)| (platform.to_string(), provider.to_string()))
            .collect();
        Self { mapping }
    }
}
