/*!
 * Tests for proposal field extraction and reassembly
 */

use content_translator::providers::MockClient;
use content_translator::translation::Proposal;

use crate::common;

#[tokio::test]
async fn test_translateProposal_shouldStripKeyPrefixesFromFieldNames() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();
    let proposal = common::create_test_proposal("77");

    let result = translator
        .translate_proposal(&proposal, "de", &client)
        .await
        .unwrap();

    // Field names come back without the proposal:<id>: prefix
    let mut fields: Vec<&str> = result.translated.keys().map(String::as_str).collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["body", "category", "summary", "title"]);
}

#[tokio::test]
async fn test_translateProposal_shouldKeyFragmentsByProposalId() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();

    // Same text under two proposal ids caches separately
    let first = Proposal::new("1", "Shared title", "Environment");
    let second = Proposal::new("2", "Shared title", "Environment");

    translator
        .translate_proposal(&first, "es", &client)
        .await
        .unwrap();
    translator
        .translate_proposal(&second, "es", &client)
        .await
        .unwrap();

    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_translateProposal_withHtmlFragments_shouldPassTextVerbatim() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();
    let proposal =
        Proposal::new("9", "Title", "Category").with_fragment("body", "<p>Hello <b>world</b></p>");

    translator
        .translate_proposal(&proposal, "fr", &client)
        .await
        .unwrap();

    let sent = client.received_texts(0).unwrap();
    assert!(sent.contains(&"<p>Hello <b>world</b></p>".to_string()));
}

#[tokio::test]
async fn test_translateProposal_withParsedJson_shouldRoundTrip() {
    let translator = common::create_proposal_translator();
    let client = MockClient::working();

    let proposal: Proposal = serde_json::from_str(
        r#"{
            "id": "abc-123",
            "title": "A title",
            "content": { "body": "<p>Body</p>" }
        }"#,
    )
    .unwrap();

    // Missing category deserializes to empty and is skipped
    let result = translator
        .translate_proposal(&proposal, "es", &client)
        .await
        .unwrap();

    assert_eq!(result.translated.len(), 2);
    assert!(result.translated.contains_key("title"));
    assert!(result.translated.contains_key("body"));
    assert!(!result.translated.contains_key("category"));
}
