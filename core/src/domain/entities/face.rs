//! Selfie verification result.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Face match and liveness outcome, computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Face {
    #[serde(deserialize_with = "lenient::string")]
    pub result: String,
    /// Match score between document portrait and selfie
    #[serde(deserialize_with = "lenient::integer")]
    pub score: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub liveness: String,
    #[serde(deserialize_with = "lenient::image")]
    pub portrait: Option<Vec<u8>>,
}

impl Face {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }
}
