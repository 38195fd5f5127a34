/*!
 * End-to-end proposal translation tests over a shared cache
 */

use content_translator::database::CacheRepository;
use content_translator::locales::LocaleMap;
use content_translator::providers::MockClient;
use content_translator::translation::{BatchTranslator, Proposal, ProposalTranslator};

use crate::common;

#[tokio::test]
async fn test_translationFlow_repeatedTranslation_shouldOnlyCallProviderOnce() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();
    let proposal = common::create_test_proposal("1");

    let first = translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();
    let second = translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();

    assert_eq!(first.translated, second.translated);
    assert_eq!(first.source_locale, second.source_locale);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_translationFlow_editedField_shouldRetranslateOnlyThatField() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();

    let proposal = common::create_test_proposal("1");
    translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();

    let mut edited = proposal.clone();
    edited.title = "Community garden (revised)".to_string();
    let result = translator
        .translate_proposal(&edited, "es", &client)
        .await
        .unwrap();

    assert_eq!(result.translated["title"], "[ES] Community garden (revised)");

    // The second provider call carried exactly the edited field
    assert_eq!(client.calls(), 2);
    assert_eq!(
        client.received_texts(1).unwrap(),
        vec!["Community garden (revised)".to_string()]
    );
}

#[tokio::test]
async fn test_translationFlow_multipleLocales_shouldCacheIndependently() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();
    let proposal = common::create_test_proposal("1");

    let spanish = translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();
    let german = translator
        .translate_proposal(&proposal, "de", &client)
        .await
        .unwrap();

    assert_eq!(spanish.translated["title"], "[ES] Community garden");
    assert_eq!(german.translated["title"], "[DE] Community garden");
    assert_eq!(client.calls(), 2);

    // Both locales now served from cache
    translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();
    translator
        .translate_proposal(&proposal, "de", &client)
        .await
        .unwrap();
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_translationFlow_localeMappingOverride_shouldReachProvider() {
    let repo = CacheRepository::new_in_memory().unwrap();
    let mut overrides = std::collections::HashMap::new();
    overrides.insert("pt".to_string(), "PT-PT".to_string());
    let locales = LocaleMap::with_overrides(&overrides);
    let translator = ProposalTranslator::with_locales(BatchTranslator::new(repo), locales);

    let client = MockClient::working();
    let proposal = Proposal::new("1", "A title", "Environment");

    let result = translator
        .translate_proposal(&proposal, "pt", &client)
        .await
        .unwrap();

    // The overridden provider code is what the client sees
    assert_eq!(result.translated["title"], "[PT-PT] A title");
}

#[tokio::test]
async fn test_translationFlow_sharedDatabase_shouldServeAcrossTranslators() {
    // Two translator instances over the same store share the cache
    let repo = CacheRepository::new_in_memory().unwrap();
    let first = ProposalTranslator::new(BatchTranslator::new(repo.clone()));
    let second = ProposalTranslator::new(BatchTranslator::new(repo));

    let client = MockClient::working();
    let proposal = common::create_test_proposal("1");

    first
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();
    second
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();

    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_translationFlow_failingProvider_shouldLeaveCacheUsable() {
    let repo = CacheRepository::new_in_memory().unwrap();
    let translator = ProposalTranslator::new(BatchTranslator::new(repo.clone()));
    let proposal = common::create_test_proposal("1");

    let failing = MockClient::failing();
    let result = translator
        .translate_proposal(&proposal, "es", &failing)
        .await;
    assert!(result.is_err());
    assert_eq!(repo.count().await.unwrap(), 0);

    // A later pass with a healthy provider succeeds normally
    let working = MockClient::working();
    let translation = translator
        .translate_proposal(&proposal, "es", &working)
        .await
        .unwrap();
    assert_eq!(translation.translated.len(), 4);
}
