mod common;

use std::sync::Arc;

use common::{CountingTokens, DenyingTokens, TOKEN, client, document_json, service};
use pretty_assertions::assert_eq;
use qs_bridge::SaveHandler;
use qs_core::{BridgeRequest, QuizCapture, SaveResponse, TargetDocumentRef};
use qs_docs::{AppendEngine, DocsError, KeyValueStore, MemoryStore, TARGET_DOC_KEY};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_document(server: &MockServer, id: &str, end_index: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/documents/{id}")))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(id, end_index)))
        .mount(server)
        .await;
}

fn persisted_store(id: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.set(TARGET_DOC_KEY, id).unwrap();
    store
}

#[tokio::test]
async fn inserts_template_one_before_terminal_offset() {
    let server = MockServer::start().await;
    mount_document(&server, "doc-1", 42).await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-1:batchUpdate"))
        .and(body_json(json!({
            "requests": [{
                "insertText": {
                    "location": { "index": 41 },
                    "text": "Question: Q1\nAnswer: A1\nExplanation: E1\n\n"
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "replies": [{}] })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = AppendEngine::new(client(&server), Arc::new(CountingTokens::default()));
    let capture = QuizCapture::new("Q1", "A1", Some("E1")).unwrap();
    engine
        .append_capture(&TargetDocumentRef::new("doc-1"), &capture)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_explanation_uses_placeholder_text() {
    let server = MockServer::start().await;
    mount_document(&server, "doc-1", 10).await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-1:batchUpdate"))
        .and(body_json(json!({
            "requests": [{
                "insertText": {
                    "location": { "index": 9 },
                    "text": "Question: Q1\nAnswer: A1\nExplanation: No explanation provided\n\n"
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let engine = AppendEngine::new(client(&server), Arc::new(CountingTokens::default()));
    let capture = QuizCapture::new("Q1", "A1", None).unwrap();
    engine
        .append_capture(&TargetDocumentRef::new("doc-1"), &capture)
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_edit_is_reported() {
    let server = MockServer::start().await;
    mount_document(&server, "doc-1", 5).await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-1:batchUpdate"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid requests[0].insertText"))
        .mount(&server)
        .await;

    let engine = AppendEngine::new(client(&server), Arc::new(CountingTokens::default()));
    let capture = QuizCapture::new("Q1", "A1", None).unwrap();
    let err = engine
        .append_capture(&TargetDocumentRef::new("doc-1"), &capture)
        .await
        .unwrap_err();
    assert!(matches!(err, DocsError::EditRejected(_)));
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn unavailable_document_skips_edit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/doc-gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let engine = AppendEngine::new(client(&server), Arc::new(CountingTokens::default()));
    let capture = QuizCapture::new("Q1", "A1", None).unwrap();
    let err = engine
        .append_capture(&TargetDocumentRef::new("doc-gone"), &capture)
        .await
        .unwrap_err();
    assert!(matches!(err, DocsError::DocumentUnavailable(_)));
}

#[tokio::test]
async fn token_denial_yields_failure_and_no_edit() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service(&server, Arc::new(DenyingTokens), persisted_store("doc-1"));
    let capture = QuizCapture::new("2+2?", "4", None).unwrap();
    let response = service.handle(BridgeRequest::SaveQuiz(capture)).await;

    assert!(!response.success);
    assert!(
        response
            .error
            .as_deref()
            .is_some_and(|e| e.contains("user cancelled consent"))
    );
}

#[tokio::test]
async fn first_save_runs_create_fetch_edit_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json("doc-new", 2)))
        .expect(1)
        .mount(&server)
        .await;
    mount_document(&server, "doc-new", 2).await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-new:batchUpdate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = Arc::new(CountingTokens::default());
    let store = Arc::new(MemoryStore::new());
    let service = service(&server, tokens.clone(), Arc::clone(&store));
    let capture = QuizCapture::new("2+2?", "4", None).unwrap();

    let response = service.handle(BridgeRequest::SaveQuiz(capture)).await;
    assert_eq!(response, SaveResponse::ok());

    let requests = server.received_requests().await.unwrap();
    let calls: Vec<(String, String)> = requests
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("POST".to_string(), "/documents".to_string()),
            ("GET".to_string(), "/documents/doc-new".to_string()),
            ("POST".to_string(), "/documents/doc-new:batchUpdate".to_string()),
        ]
    );
    // Locator and append engine each acquire their own token.
    assert_eq!(tokens.calls(), 2);
    assert_eq!(store.get(TARGET_DOC_KEY).unwrap().as_deref(), Some("doc-new"));
}

#[tokio::test]
async fn later_saves_reuse_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json("doc-x", 2)))
        .expect(0)
        .mount(&server)
        .await;
    mount_document(&server, "doc-1", 30).await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-1:batchUpdate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let tokens = Arc::new(CountingTokens::default());
    let service = service(&server, tokens.clone(), persisted_store("doc-1"));

    for answer in ["4", "5"] {
        let capture = QuizCapture::new("2+2?", answer, None).unwrap();
        assert!(service.save(&capture).await.is_ok());
    }
    assert_eq!(tokens.calls(), 2);
}
