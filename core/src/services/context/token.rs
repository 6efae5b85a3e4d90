//! JSON web token inspection.
//!
//! The token is only inspected, never verified: the signature is checked by
//! the verification backend.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use serde::Deserialize;

use crate::errors::{KycError, KycResult};

/// Shown in the settings screen when no usable token is stored
pub const NO_VALID_TOKEN: &str = "No valid token";

#[derive(Deserialize)]
struct ExpirationClaim {
    exp: i64,
}

/// Expiration of a structurally valid JWT carrying an `exp` claim
pub fn json_web_token_expiration(token: &str) -> KycResult<DateTime<Utc>> {
    let data = decode::<ExpirationClaim>(token.trim(), &DecodingKey::from_secret(&[]), &inspection())
        .map_err(|e| match e.kind() {
            ErrorKind::MissingRequiredClaim(claim) => invalid(&format!("missing {} claim", claim)),
            _ => invalid(&e.to_string()),
        })?;

    DateTime::from_timestamp(data.claims.exp, 0).ok_or_else(|| invalid("expiration out of range"))
}

// Structure and claims only; expired tokens are still reported
fn inspection() -> Validation {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);
    validation
}

/// Expiration formatted for display, or [`NO_VALID_TOKEN`]
pub fn expiration_text(token: &str) -> String {
    match json_web_token_expiration(token) {
        Ok(expires_at) => expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => NO_VALID_TOKEN.to_string(),
    }
}

fn invalid(message: &str) -> KycError {
    KycError::InvalidToken {
        message: message.to_string(),
    }
}
