//! OCR, MRZ, magstripe, barcode and native-script field groups.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// One extracted field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "NameValueWire")]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

// Both key casings are accepted; the lowercase key wins when both are set
#[derive(Deserialize, Default)]
#[serde(default)]
struct NameValueWire {
    #[serde(deserialize_with = "lenient::string")]
    name: String,
    #[serde(rename = "Name", deserialize_with = "lenient::string")]
    name_capitalized: String,
    #[serde(deserialize_with = "lenient::string")]
    value: String,
    #[serde(rename = "Value", deserialize_with = "lenient::string")]
    value_capitalized: String,
}

impl From<NameValueWire> for NameValue {
    fn from(wire: NameValueWire) -> Self {
        let pick = |lower: String, upper: String| if lower.is_empty() { upper } else { lower };
        Self {
            name: pick(wire.name, wire.name_capitalized),
            value: pick(wire.value, wire.value_capitalized),
        }
    }
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }
}

/// Field groups read from the document, each in backend order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fields {
    /// Human-readable text
    #[serde(rename = "OCR", deserialize_with = "lenient::sequence")]
    pub ocr: Vec<NameValue>,
    /// Machine Readable Zone
    #[serde(rename = "MRZ", deserialize_with = "lenient::sequence")]
    pub mrz: Vec<NameValue>,
    #[serde(rename = "MAGSTRIPE", deserialize_with = "lenient::sequence")]
    pub magstripe: Vec<NameValue>,
    #[serde(rename = "BARCODE_2D", deserialize_with = "lenient::sequence")]
    pub barcode2d: Vec<NameValue>,
    /// Non-latin versions of the fields
    #[serde(rename = "NATIVE", deserialize_with = "lenient::sequence")]
    pub native: Vec<NameValue>,
}

impl Fields {
    pub fn from_json(json: &Value) -> Self {
        lenient::from_value(json)
    }

    /// First OCR value with the given name, falling back to the MRZ group
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.ocr
            .iter()
            .chain(self.mrz.iter())
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.ocr.is_empty()
            && self.mrz.is_empty()
            && self.magstripe.is_empty()
            && self.barcode2d.is_empty()
            && self.native.is_empty()
    }
}
