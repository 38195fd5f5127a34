use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;

use super::{ProviderTranslation, TranslateOptions, TranslationClient};

/// DeepL client for the v2 translate endpoint
#[derive(Debug)]
pub struct DeepLClient {
    /// Base URL of the API (free and pro tiers differ)
    endpoint: String,
    /// API key sent as DeepL-Auth-Key
    api_key: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request body
#[derive(Debug, Serialize)]
struct TranslateRequest {
    /// Source texts, order significant
    text: Vec<String>,
    /// Target locale code, e.g. "PT-BR"
    target_lang: String,
    /// Omitted for source language auto-detection
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
    /// Markup handling ("html" preserves inline tags)
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_handling: Option<String>,
}

/// Translation response body
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// One item per request text, same order
    translations: Vec<TranslationItem>,
}

/// One translated item
#[derive(Debug, Deserialize)]
struct TranslationItem {
    /// Translated text
    text: String,
    /// Detected source language, uppercase
    detected_source_language: String,
}

impl DeepLClient {
    /// Default request timeout
    const TIMEOUT_SECS: u64 = 30;

    /// Create a new DeepL client
    ///
    /// Fails fast when the API key is empty so a misconfigured deployment
    /// surfaces before any translation work begins.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(endpoint, api_key, Self::TIMEOUT_SECS)
    }

    /// Create a new DeepL client with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::AuthenticationError(
                "DeepL API key is not configured".to_string(),
            ));
        }

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl TranslationClient for DeepLClient {
    async fn translate(
        &self,
        texts: &[String],
        target_locale: &str,
        options: &TranslateOptions,
    ) -> Result<Vec<ProviderTranslation>, ProviderError> {
        let url = format!("{}/v2/translate", self.endpoint);

        let request = TranslateRequest {
            text: texts.to_vec(),
            target_lang: target_locale.to_string(),
            source_lang: None,
            tag_handling: options
                .tag_handling
                .as_api_value()
                .map(|v| v.to_string()),
        };

        debug!(
            "Dispatching {} texts to DeepL (target {})",
            texts.len(),
            target_locale
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("DeepL request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepL API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse DeepL response: {}", e)))?;

        Ok(parsed
            .translations
            .into_iter()
            .map(|item| ProviderTranslation {
                text: item.text,
                detected_source_lang: item.detected_source_language,
            })
            .collect())
    }
}
