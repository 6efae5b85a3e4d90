//! Verification result entities parsed from backend JSON.
//!
//! Every entity exposes a `from_json` factory that never fails: missing keys,
//! `null` and values of the wrong JSON type fall back to empty strings, zero,
//! empty lists or `None`.

mod lenient;

pub mod alert;
pub mod document;
pub mod face;
pub mod fields;
pub mod response;
pub mod template;
pub mod verification_result;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use alert::{Alert, ALERT_RESULT_PASSED};
pub use document::Document;
pub use face::Face;
pub use fields::{Fields, NameValue};
pub use response::VerificationResponse;
pub use template::Template;
pub use verification_result::{VerificationResult, RESULT_PASSED};
