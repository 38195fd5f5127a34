/*!
 * Tests for the batch translator's cache-through behavior
 */

use content_translator::content_hash::hash_content;
use content_translator::database::CacheRecord;
use content_translator::providers::MockClient;
use content_translator::translation::TranslatableEntry;

use crate::common;

#[test]
fn test_translateBatch_fromSyncContext_shouldResolveBatch() {
    // The translator is usable from non-async callers through a blocking
    // runtime handle
    let translator = common::create_batch_translator();
    let client = MockClient::working();
    let entries = vec![
        TranslatableEntry::new("k:a", "text a"),
        TranslatableEntry::new("k:b", "text b"),
    ];

    let results =
        tokio_test::block_on(translator.translate_batch(&entries, "ES", &client)).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].translated_text, "[ES] text a");
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_translateBatch_withSeededCache_shouldServeWithoutProviderCall() {
    let translator = common::create_batch_translator();
    let client = MockClient::working();

    // Seed the cache directly, bypassing the translator
    translator
        .repository()
        .upsert_many(vec![CacheRecord::new(
            "k1".to_string(),
            hash_content("Hello"),
            "ES".to_string(),
            "EN".to_string(),
            "[ES-CACHED] Hello".to_string(),
        )])
        .await
        .unwrap();

    let results = translator
        .translate_batch(&[TranslatableEntry::new("k1", "Hello")], "ES", &client)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].cached);
    assert_eq!(results[0].translated_text, "[ES-CACHED] Hello");
    assert_eq!(results[0].source_locale, "EN");
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_translateBatch_withRandomlyWarmedCache_shouldPreserveInputOrder() {
    let translator = common::create_batch_translator();
    let client = MockClient::working();

    let entries: Vec<TranslatableEntry> = (0..30)
        .map(|i| TranslatableEntry::new(format!("k:{}", i), format!("text {}", i)))
        .collect();

    // Warm a random subset so hits and misses interleave arbitrarily
    let warmed: Vec<bool> = (0..30).map(|_| rand::random::<bool>()).collect();
    let warm_entries: Vec<TranslatableEntry> = entries
        .iter()
        .zip(&warmed)
        .filter(|(_, warm)| **warm)
        .map(|(entry, _)| entry.clone())
        .collect();
    translator
        .translate_batch(&warm_entries, "ES", &client)
        .await
        .unwrap();

    let results = translator
        .translate_batch(&entries, "ES", &client)
        .await
        .unwrap();

    // Output order matches input order exactly, regardless of which
    // entries were cached
    let keys: Vec<&str> = results.iter().map(|r| r.content_key.as_str()).collect();
    let expected: Vec<&str> = entries.iter().map(|e| e.content_key.as_str()).collect();
    assert_eq!(keys, expected);

    let cached: Vec<bool> = results.iter().map(|r| r.cached).collect();
    assert_eq!(cached, warmed);
}

#[tokio::test]
async fn test_translateBatch_withDuplicateTexts_shouldResolveEveryEntry() {
    let translator = common::create_batch_translator();
    let client = MockClient::working();

    // Distinct keys, identical text: distinct cache rows, both resolved
    let entries = vec![
        TranslatableEntry::new("k:a", "Same text"),
        TranslatableEntry::new("k:b", "Same text"),
    ];

    let results = translator
        .translate_batch(&entries, "ES", &client)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].translated_text, results[1].translated_text);
    assert_eq!(translator.repository().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_translateBatch_afterTextEdit_shouldLeaveStaleRowBehind() {
    let translator = common::create_batch_translator();
    let client = MockClient::working();

    translator
        .translate_batch(&[TranslatableEntry::new("k:a", "Original")], "ES", &client)
        .await
        .unwrap();
    translator
        .translate_batch(&[TranslatableEntry::new("k:a", "Edited")], "ES", &client)
        .await
        .unwrap();

    // The old row stays, harmlessly orphaned under the old hash
    assert_eq!(translator.repository().count().await.unwrap(), 2);

    // Reverting the text hits the original row again
    let results = translator
        .translate_batch(&[TranslatableEntry::new("k:a", "Original")], "ES", &client)
        .await
        .unwrap();
    assert!(results[0].cached);
    assert_eq!(client.calls(), 2);
}
