//! Document template recognised by the backend.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "id", deserialize_with = "lenient::string")]
    pub template_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issue: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub keesing_code: String,
}

impl Template {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }
}
