//! Top-level verification response.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use super::{Document, Face};

/// Typed result of one verification session.
///
/// Built from the document step's JSON and completed in place by the selfie
/// step through [`VerificationResponse::update_with_selfie_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResponse {
    /// Details about the request
    pub message: String,
    /// Document type: passport, ID, driving license
    pub doc_type: String,
    /// 0 on success, greater than 0 on error
    pub code: i64,
    pub document: Document,
    /// Present once the selfie step finished
    pub face: Option<Face>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponseWire {
    #[serde(deserialize_with = "lenient::integer")]
    code: i64,
    #[serde(deserialize_with = "lenient::string")]
    message: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    doc_type: String,
    #[serde(deserialize_with = "lenient::object")]
    object: ResultObject,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResultObject {
    #[serde(deserialize_with = "lenient::object")]
    document: Document,
    #[serde(deserialize_with = "lenient::optional_object")]
    face: Option<Face>,
}

impl From<ResponseWire> for VerificationResponse {
    fn from(wire: ResponseWire) -> Self {
        Self {
            message: wire.message,
            doc_type: wire.doc_type,
            code: wire.code,
            document: wire.object.document,
            face: wire.object.face,
        }
    }
}

impl VerificationResponse {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value::<ResponseWire>(json).into()
    }

    /// Complete the response with the selfie step's result.
    ///
    /// `face` always comes from `object.face`. A non-zero selfie `code` and
    /// its `message` replace the document step's outcome. Otherwise `message`,
    /// `type` and the document are only taken from the selfie result when the
    /// document step did not report them.
    pub fn update_with_selfie_json(&mut self, json: &Value) {
        let object = json.get("object");
        self.face = object
            .and_then(|object| object.get("face"))
            .filter(|face| face.is_object())
            .map(Face::from_json);

        let selfie = lenient::from_value::<ResponseWire>(json);
        if selfie.code != 0 {
            self.code = selfie.code;
            if !selfie.message.is_empty() {
                self.message = selfie.message;
            }
        } else if self.message.is_empty() {
            self.message = selfie.message;
        }
        if self.doc_type.is_empty() {
            self.doc_type = selfie.doc_type;
        }

        if self.document == Document::default() {
            if let Some(document) = object
                .and_then(|object| object.get("document"))
                .filter(|document| document.is_object())
            {
                self.document = Document::from_json(document);
            }
        }
    }

    pub fn is_success_code(&self) -> bool {
        self.code == 0
    }

    pub fn is_passed(&self) -> bool {
        self.document.verification_result.is_passed()
    }

    /// `prefix`, followed by the names of all alerts when there are any
    pub fn failure_summary(&self, prefix: &str) -> String {
        let alerts = &self.document.verification_result.alerts;
        if alerts.is_empty() {
            return prefix.to_string();
        }

        let names = alerts
            .iter()
            .map(|alert| alert.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}\n{}", prefix, names)
    }
}
