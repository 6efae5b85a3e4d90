use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

use crate::domain::entities::{Alert, Document, Fields, NameValue, Template, VerificationResult};

#[test]
fn test_document_decodes_images() {
    let front = STANDARD.encode(b"front-bytes");
    let document = Document::from_json(&json!({
        "frontWhiteImage": front,
        "backWhiteImage": "%%%not-base64%%%",
        "portrait": ""
    }));

    assert_eq!(document.image_white_front.as_deref(), Some(&b"front-bytes"[..]));
    assert!(document.image_white_back.is_none());
    assert!(document.portrait.is_none());
}

#[test]
fn test_fields_preserve_backend_order() {
    let fields = Fields::from_json(&json!({
        "OCR": [
            { "name": "Surname", "value": "Novak" },
            { "name": "Given Names", "value": "Anna" }
        ],
        "MRZ": [
            { "Name": "Document Number", "Value": "X1234567" }
        ],
        "BARCODE_2D": null,
        "NATIVE": "unexpected"
    }));

    assert_eq!(
        fields.ocr,
        vec![
            NameValue::new("Surname", "Novak"),
            NameValue::new("Given Names", "Anna"),
        ]
    );
    assert_eq!(fields.mrz, vec![NameValue::new("Document Number", "X1234567")]);
    assert!(fields.magstripe.is_empty());
    assert!(fields.barcode2d.is_empty());
    assert!(fields.native.is_empty());
    assert_eq!(fields.lookup("Document Number"), Some("X1234567"));
    assert_eq!(fields.lookup("Missing"), None);
}

#[test]
fn test_fields_skip_malformed_entries() {
    let fields = Fields::from_json(&json!({
        "OCR": [ "garbage", 4, { "name": "Sex", "value": "F" }, { "name": 9 } ]
    }));

    assert_eq!(
        fields.ocr,
        vec![NameValue::new("Sex", "F"), NameValue::new("", "")]
    );
}

#[test]
fn test_fields_accept_both_key_casings_in_one_entry() {
    let fields = Fields::from_json(&json!({
        "OCR": [
            { "name": "Surname", "Name": "SURNAME", "value": "", "Value": "Novak" },
            { "Name": "Sex", "name": null, "Value": "F" }
        ]
    }));

    assert_eq!(
        fields.ocr,
        vec![NameValue::new("Surname", "Novak"), NameValue::new("Sex", "F")]
    );
}

#[test]
fn test_verification_result_nested_parts() {
    let result = VerificationResult::from_json(&json!({
        "result": "Failed",
        "documentNumber": "X1234567",
        "expirationDate": "2031-02-30",
        "numberOfImagesProcessed": 2,
        "template": {
            "id": "tpl-42",
            "issue": "2019",
            "issuerType": "Country",
            "issuerName": "Czech Republic",
            "keesingCode": "CZE-BO-04001"
        },
        "alerts": [
            { "Description": "Checked if the document is expired", "Disposition": "expired",
              "Information": "", "Name": "Document Expired", "Result": "Failed" }
        ]
    }));

    assert!(!result.is_passed());
    // dates are opaque, even when they are not real dates
    assert_eq!(result.expiration_date, "2031-02-30");
    assert_eq!(result.number_of_images_processed, 2);
    assert_eq!(
        result.template,
        Template {
            template_id: "tpl-42".to_string(),
            issue: "2019".to_string(),
            issuer_type: "Country".to_string(),
            issuer_name: "Czech Republic".to_string(),
            keesing_code: "CZE-BO-04001".to_string(),
        }
    );
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].disposition, "expired");
}

#[test]
fn test_alert_without_result_is_not_attention() {
    let alert = Alert::from_json(&json!({ "Name": "Unknown" }));
    assert!(!alert.is_attention());
}
