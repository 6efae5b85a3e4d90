//! Tests for the verification session steps

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

use super::mocks::*;
use crate::domain::value_objects::DocumentType;
use crate::errors::KycError;
use crate::services::session::{
    BackendReply, CaptureSet, HttpMethod, KycSession, SessionState, SCENARIO_DOCUMENT,
    SCENARIO_DOCUMENT_FACE,
};

const BASE_URL: &str = "https://kyc.example.test/api/v1/scenarios/";

fn id_card_with_selfie() -> CaptureSet {
    CaptureSet::new(b"front".to_vec())
        .with_back(b"back".to_vec())
        .with_selfie(b"selfie".to_vec())
        .with_document_type(DocumentType::IdCard)
}

fn session(captures: CaptureSet, transport: &Arc<MockTransport>) -> KycSession<MockTransport> {
    KycSession::new(BASE_URL, captures, Arc::clone(transport))
}

#[tokio::test]
async fn test_document_and_selfie_success() {
    let transport = Arc::new(MockTransport::with_json(vec![
        created(),
        document_waiting(),
        selfie_finished(),
    ]));
    let mut session = session(id_card_with_selfie(), &transport);

    let response = session.submit().await.unwrap();

    assert_eq!(session.state(), SessionState::Done);
    assert_eq!(session.session_id(), Some(SESSION_ID));
    assert_eq!(response.message, "Document verified");
    assert_eq!(response.document.verification_result.full_name(), "Anna Novak");
    assert_eq!(response.face.as_ref().map(|face| face.score), Some(92));

    let requests = transport.recorded();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, BASE_URL);
    assert_eq!(requests[0].body["name"], SCENARIO_DOCUMENT_FACE);
    assert_eq!(requests[0].body["input"]["captureMethod"], "SDK");
    assert_eq!(requests[0].body["input"]["frontWhiteImage"], STANDARD.encode(b"front"));
    assert_eq!(requests[0].body["input"]["backWhiteImage"], STANDARD.encode(b"back"));
    assert_eq!(requests[0].body["input"]["type"], "ID");

    assert_eq!(requests[1].method, HttpMethod::Patch);
    assert_eq!(
        requests[1].url,
        format!("https://kyc.example.test/api/v1/scenarios/{}/state/steps/verifyResults", SESSION_ID)
    );
    assert_eq!(requests[1].body, json!({ "name": SCENARIO_DOCUMENT_FACE }));

    assert_eq!(
        requests[2].url,
        format!("https://kyc.example.test/api/v1/scenarios/{}/state/steps/faceMatch", SESSION_ID)
    );
    assert_eq!(requests[2].body["input"]["face"], STANDARD.encode(b"selfie"));
}

#[tokio::test]
async fn test_document_only_flow_finishes_after_document_step() {
    let transport = Arc::new(MockTransport::with_json(vec![created(), document_finished()]));
    let captures = CaptureSet::new(b"front".to_vec());

    let response = session(captures, &transport).run().await.unwrap();

    assert!(response.face.is_none());
    assert!(response.is_passed());
    let requests = transport.recorded();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body["name"], SCENARIO_DOCUMENT);
    assert!(requests[0].body["input"].get("backWhiteImage").is_none());
}

#[tokio::test]
async fn test_failed_status_reports_result_message() {
    let transport = Arc::new(MockTransport::with_json(vec![
        created(),
        json!({
            "id": SESSION_ID,
            "status": "Failed",
            "state": { "result": { "message": "Document expired" } }
        }),
    ]));
    let mut session = session(id_card_with_selfie(), &transport);

    let err = session.submit().await.unwrap_err();

    assert_eq!(err.to_string(), "Document expired");
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_failed_status_without_message() {
    let transport = Arc::new(MockTransport::with_json(vec![json!({
        "id": SESSION_ID,
        "status": "Failed"
    })]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err.to_string(), "Unknown error");
}

#[tokio::test]
async fn test_error_status_is_configuration_error() {
    let transport = Arc::new(MockTransport::with_json(vec![json!({
        "id": SESSION_ID,
        "status": "Error"
    })]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err, KycError::BackendConfiguration);
}

#[tokio::test]
async fn test_malformed_document_reply_skips_selfie() {
    let transport = Arc::new(MockTransport::new(vec![
        Ok(ok_reply(created())),
        Ok(BackendReply::new(200, "<html>gateway</html>")),
    ]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert!(matches!(err, KycError::Parse { .. }));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_unexpected_document_state() {
    // Document-only flow must not stop at Waiting
    let transport = Arc::new(MockTransport::with_json(vec![created(), document_waiting()]));

    let err = session(CaptureSet::new(b"front".to_vec()), &transport)
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unexpected server state.");
}

#[tokio::test]
async fn test_selfie_failure_discards_document_result() {
    let transport = Arc::new(MockTransport::with_json(vec![
        created(),
        document_waiting(),
        json!({ "id": SESSION_ID, "status": "Waiting" }),
    ]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err.to_string(), "Unexpected server response.");
}

#[tokio::test]
async fn test_selfie_outcome_used_when_document_step_has_no_result() {
    let transport = Arc::new(MockTransport::with_json(vec![
        created(),
        json!({ "id": SESSION_ID, "status": "Waiting" }),
        json!({
            "id": SESSION_ID,
            "status": "Finished",
            "state": {
                "result": {
                    "code": 3,
                    "message": "Face mismatch",
                    "type": "Passport",
                    "object": {
                        "document": { "verificationResults": { "result": "Passed" } },
                        "face": { "result": "Failed", "score": 12 }
                    }
                }
            }
        }),
    ]));

    let response = session(id_card_with_selfie(), &transport).run().await.unwrap();

    assert_eq!(response.code, 3);
    assert!(!response.is_success_code());
    assert_eq!(response.message, "Face mismatch");
    assert_eq!(response.doc_type, "Passport");
    assert!(response.is_passed());
    assert_eq!(response.face.map(|face| face.score), Some(12));
}

#[tokio::test]
async fn test_malformed_selfie_reply_is_error() {
    let transport = Arc::new(MockTransport::new(vec![
        Ok(ok_reply(created())),
        Ok(ok_reply(document_waiting())),
        Ok(BackendReply::new(200, "{\"id\":")),
    ]));

    let result = session(id_card_with_selfie(), &transport).run().await;

    assert!(matches!(result, Err(KycError::Parse { .. })));
}

#[tokio::test]
async fn test_transport_error_ends_session() {
    let transport = Arc::new(MockTransport::new(vec![Err(KycError::Transport {
        message: "The request timed out.".to_string(),
    })]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.to_string(), "The request timed out.");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_http_error_with_backend_message() {
    let transport = Arc::new(MockTransport::new(vec![Ok(BackendReply::new(
        401,
        json!({ "message": "Invalid API key" }).to_string(),
    ))]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test]
async fn test_http_error_without_message() {
    let transport = Arc::new(MockTransport::new(vec![Ok(BackendReply::new(502, ""))]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err, KycError::HttpStatus { status: 502 });
    assert_eq!(err.to_string(), "HTTP error: 502");
}

#[tokio::test]
async fn test_missing_session_id() {
    let transport = Arc::new(MockTransport::with_json(vec![json!({ "status": "Running" })]));

    let err = session(id_card_with_selfie(), &transport).run().await.unwrap_err();

    assert_eq!(err, KycError::MissingSessionId);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_invalid_captures_send_nothing() {
    let transport = Arc::new(MockTransport::with_json(vec![]));
    let captures = CaptureSet::new(b"front".to_vec()).with_document_type(DocumentType::IdCard);

    let err = session(captures, &transport).run().await.unwrap_err();

    assert!(matches!(err, KycError::InvalidCapture { .. }));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_session_is_single_use() {
    let transport = Arc::new(MockTransport::with_json(vec![created(), document_finished()]));
    let mut session = session(CaptureSet::new(b"front".to_vec()), &transport);

    session.submit().await.unwrap();
    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, KycError::Internal { .. }));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() {
    let transport = Arc::new(MockTransport::with_json(vec![created(), document_finished()]));

    session(CaptureSet::new(b"front".to_vec()), &transport)
        .with_bearer_token("jwt-token")
        .run()
        .await
        .unwrap();

    assert!(transport
        .recorded()
        .iter()
        .all(|request| request.bearer_token.as_deref() == Some("jwt-token")));
}

#[test]
fn test_urls_require_session_id() {
    let transport = Arc::new(MockTransport::with_json(vec![]));
    let mut session = session(id_card_with_selfie(), &transport);

    assert!(session.url_document().is_none());
    assert!(session.url_selfie().is_none());

    session
        .parse_result_and_handle_errors(created().to_string().as_bytes())
        .unwrap();
    assert_eq!(
        session.url_selfie().as_deref(),
        Some("https://kyc.example.test/api/v1/scenarios/5f0c2a1e-session/state/steps/faceMatch")
    );
    assert_eq!(session.portrait(), Some(&b"selfie"[..]));
}

#[test]
fn test_parse_rejects_non_object() {
    let transport = Arc::new(MockTransport::with_json(vec![]));
    let mut session = session(id_card_with_selfie(), &transport);

    assert!(matches!(
        session.parse_result_and_handle_errors(b"[1, 2]"),
        Err(KycError::Parse { .. })
    ));
    assert!(matches!(
        session.parse_result_and_handle_errors(b"not json"),
        Err(KycError::Parse { .. })
    ));
    assert_eq!(
        session.parse_result_and_handle_errors(br#"{"id": ""}"#),
        Err(KycError::MissingSessionId)
    );
}
