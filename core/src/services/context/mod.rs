//! Application context module
//!
//! Replaces a process-wide manager singleton: the host builds one
//! [`KycContext`] at startup, shares it by `Arc` and disposes it at shutdown.
//! It holds:
//! - User settings and the JSON web token
//! - Scanned image buffers
//! - Settings descriptors rendered by a generic settings screen

mod options;
mod service;
mod settings;
mod token;

#[cfg(test)]
mod tests;

pub use options::{
    options_for, ButtonAction, OptionKind, OptionSection, OptionType, OptionValue, SettingOption,
    APP_VERSION,
};
pub use service::{KycContext, ScannedImages};
pub use settings::{
    Settings, FACE_BLINK_TIMEOUT_RANGE, FACE_LIVENESS_THRESHOLD_RANGE, FACE_QUALITY_THRESHOLD_RANGE,
    LIVENESS_MODE_ACTIVE, LIVENESS_MODE_PASSIVE,
};
pub use token::{expiration_text, json_web_token_expiration};
