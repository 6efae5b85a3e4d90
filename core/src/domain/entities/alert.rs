//! Anomalies flagged during document verification.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Alert result value for checks that passed
pub const ALERT_RESULT_PASSED: &str = "Passed";

/// A flagged anomaly. Shape and wording are owned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Alert {
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub disposition: String,
    #[serde(deserialize_with = "lenient::string")]
    pub information: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub result: String,
}

impl Alert {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }

    /// Whether the alert reports anything other than a passed check
    pub fn is_attention(&self) -> bool {
        !self.result.is_empty() && self.result != ALERT_RESULT_PASSED
    }
}
