//! # KYC Core
//!
//! Verification result model, session pipeline and client context for the
//! KYC client. This crate contains the typed result graph parsed from the
//! verification backend, the document/selfie session state machine with its
//! transport and dispatcher seams, and the settings, capture-step and
//! notification descriptors consumed by a host UI.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
