//! Personal data and checks extracted from the document.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use super::{Alert, Fields, Template};

/// Overall result value for documents that passed verification
pub const RESULT_PASSED: &str = "Passed";

/// Document verification outcome. Dates are opaque strings as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationResult {
    #[serde(deserialize_with = "lenient::string")]
    pub result: String,
    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub middle_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub surname: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gender: String,
    #[serde(deserialize_with = "lenient::string")]
    pub nationality: String,
    #[serde(deserialize_with = "lenient::string")]
    pub expiration_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub birth_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub document_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub document_type: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_verifications_done: i64,
    #[serde(deserialize_with = "lenient::object")]
    pub fields: Fields,
    #[serde(deserialize_with = "lenient::object")]
    pub template: Template,
    #[serde(deserialize_with = "lenient::integer")]
    pub number_of_images_processed: i64,
    #[serde(deserialize_with = "lenient::sequence")]
    pub alerts: Vec<Alert>,
}

impl VerificationResult {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }

    pub fn is_passed(&self) -> bool {
        self.result == RESULT_PASSED
    }

    /// "First Surname", skipping empty parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.middle_name.as_str(), self.surname.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
