//! Verified document and the images the backend extracted from it.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use super::VerificationResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(rename = "verificationResults", deserialize_with = "lenient::object")]
    pub verification_result: VerificationResult,
    /// Portrait cropped from the document
    #[serde(deserialize_with = "lenient::image")]
    pub portrait: Option<Vec<u8>>,
    #[serde(rename = "frontWhiteImage", deserialize_with = "lenient::image")]
    pub image_white_front: Option<Vec<u8>>,
    #[serde(rename = "backWhiteImage", deserialize_with = "lenient::image")]
    pub image_white_back: Option<Vec<u8>>,
}

impl Document {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }
}
