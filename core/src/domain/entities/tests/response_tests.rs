use serde_json::json;

use crate::domain::entities::{Face, VerificationResponse};

fn document_result_json() -> serde_json::Value {
    json!({
        "code": 0,
        "message": "Document verified",
        "type": "Passport",
        "object": {
            "document": {
                "verificationResults": {
                    "result": "Passed",
                    "firstName": "Anna",
                    "surname": "Novak",
                    "totalVerificationsDone": 3,
                    "alerts": [
                        { "Name": "Visible Pattern", "Result": "Passed" },
                        { "Name": "Expiration Date", "Result": "Caution" }
                    ]
                }
            }
        }
    })
}

#[test]
fn test_from_json_reads_top_level_fields() {
    let response = VerificationResponse::from_json(&document_result_json());

    assert_eq!(response.code, 0);
    assert_eq!(response.message, "Document verified");
    assert_eq!(response.doc_type, "Passport");
    assert!(response.is_success_code());
    assert!(response.is_passed());
    assert!(response.face.is_none());

    let result = &response.document.verification_result;
    assert_eq!(result.full_name(), "Anna Novak");
    assert_eq!(result.total_verifications_done, 3);
    assert_eq!(result.alerts.len(), 2);
    assert!(!result.alerts[0].is_attention());
    assert!(result.alerts[1].is_attention());
}

#[test]
fn test_from_json_empty_object_yields_defaults() {
    let response = VerificationResponse::from_json(&json!({}));

    assert_eq!(response, VerificationResponse::default());
    assert_eq!(response.message, "");
    assert_eq!(response.code, 0);
    assert!(response.document.verification_result.alerts.is_empty());
    assert!(response.document.verification_result.fields.is_empty());
    assert!(response.document.portrait.is_none());
}

#[test]
fn test_from_json_tolerates_nulls_and_wrong_types() {
    let response = VerificationResponse::from_json(&json!({
        "code": "7",
        "message": null,
        "type": 12,
        "object": { "document": "not-an-object", "face": [] }
    }));

    assert_eq!(response.code, 0);
    assert_eq!(response.message, "");
    assert_eq!(response.doc_type, "");
    assert_eq!(response.document, Default::default());
    assert!(response.face.is_none());
}

#[test]
fn test_from_json_non_object_input() {
    assert_eq!(
        VerificationResponse::from_json(&json!([1, 2, 3])),
        VerificationResponse::default()
    );
    assert_eq!(
        VerificationResponse::from_json(&serde_json::Value::Null),
        VerificationResponse::default()
    );
}

#[test]
fn test_float_code_does_not_coerce() {
    let response = VerificationResponse::from_json(&json!({ "code": 2.5 }));
    assert_eq!(response.code, 0);
}

#[test]
fn test_update_with_selfie_json_populates_face_only() {
    let mut response = VerificationResponse::from_json(&document_result_json());
    let document_before = response.document.clone();

    response.update_with_selfie_json(&json!({
        "message": "ignored",
        "object": {
            "face": { "result": "Passed", "score": 87, "liveness": "Live" }
        }
    }));

    assert_eq!(response.message, "Document verified");
    assert_eq!(response.document, document_before);
    assert_eq!(
        response.face,
        Some(Face {
            result: "Passed".to_string(),
            score: 87,
            liveness: "Live".to_string(),
            portrait: None,
        })
    );
}

#[test]
fn test_update_with_selfie_json_without_face() {
    let mut response = VerificationResponse::default();
    response.update_with_selfie_json(&json!({ "object": {} }));
    assert!(response.face.is_none());
}

#[test]
fn test_update_with_selfie_json_keeps_reported_document() {
    let mut response = VerificationResponse::from_json(&document_result_json());
    response.update_with_selfie_json(&json!({
        "object": {
            "document": { "verificationResults": { "firstName": "Other" } },
            "face": { "result": "Passed" }
        }
    }));
    assert_eq!(response.document.verification_result.first_name, "Anna");
}

#[test]
fn test_update_with_selfie_json_fills_missing_document() {
    let mut response = VerificationResponse::default();
    response.update_with_selfie_json(&json!({
        "object": {
            "document": { "verificationResults": { "firstName": "Anna", "result": "Passed" } },
            "face": { "result": "Passed", "score": 91 }
        }
    }));
    assert_eq!(response.document.verification_result.first_name, "Anna");
    assert!(response.is_passed());
    assert_eq!(response.face.map(|face| face.score), Some(91));
}

#[test]
fn test_failure_summary_lists_alert_names() {
    let response = VerificationResponse::from_json(&document_result_json());
    assert_eq!(
        response.failure_summary("Document rejected"),
        "Document rejected\nVisible Pattern, Expiration Date"
    );

    let empty = VerificationResponse::default();
    assert_eq!(empty.failure_summary("Document rejected"), "Document rejected");
}

#[test]
fn test_update_with_selfie_json_fills_missing_outcome() {
    let mut response = VerificationResponse::from_json(&serde_json::Value::Null);
    response.update_with_selfie_json(&json!({
        "code": 3,
        "message": "Face mismatch",
        "type": "Passport",
        "object": { "face": { "result": "Failed", "score": 12 } }
    }));

    assert_eq!(response.code, 3);
    assert!(!response.is_success_code());
    assert_eq!(response.message, "Face mismatch");
    assert_eq!(response.doc_type, "Passport");
}

#[test]
fn test_update_with_selfie_json_failure_code_overrides_document_step() {
    let mut response = VerificationResponse::from_json(&document_result_json());
    response.update_with_selfie_json(&json!({
        "code": 3,
        "message": "Face mismatch",
        "type": "Passport",
        "object": { "face": { "result": "Failed" } }
    }));

    assert_eq!(response.code, 3);
    assert_eq!(response.message, "Face mismatch");
    assert_eq!(response.doc_type, "Passport");
    assert_eq!(response.document.verification_result.first_name, "Anna");
}
