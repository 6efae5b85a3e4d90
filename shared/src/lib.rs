//! Shared configuration types for the KYC client workspace
//!
//! This crate provides the configuration sections used by every layer:
//! - Backend endpoint, credentials and timeouts
//! - Environment detection
//! - Logging configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{BackendConfig, Environment, KycConfig, LogFormat, LoggingConfig};
