//! # Infrastructure Layer
//!
//! Concrete implementations behind the seams of `kyc_core`:
//! - **HTTP**: reqwest transport for the verification backend
//! - **Configuration**: layered loading of `KycConfig` (defaults, file, environment)
//! - **Telemetry**: tracing subscriber setup

use std::path::Path;
use std::sync::Arc;

use kyc_core::KycContext;
use kyc_shared::KycConfig;

// Re-export core types for convenience
pub use kyc_core::errors::*;

/// HTTP transport for the verification backend
pub mod http;

/// Configuration loading
pub mod configuration;

/// Tracing subscriber setup
pub mod telemetry;

pub use configuration::load_config;
pub use http::ReqwestTransport;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pub config: KycConfig,
    pub context: Arc<KycContext>,
    pub transport: Arc<ReqwestTransport>,
}

impl InfrastructureServices {
    /// Build the context and transport from a loaded configuration
    pub fn new(config: KycConfig) -> Result<Self, InfrastructureError> {
        let transport = Arc::new(ReqwestTransport::new(&config.backend)?);
        let context = Arc::new(KycContext::new(&config));
        Ok(Self {
            config,
            context,
            transport,
        })
    }
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - Configuration from defaults, the optional file and the environment
/// - Tracing subscriber
/// - Shared client context and HTTP transport
pub fn initialize(config_path: Option<&Path>) -> Result<InfrastructureServices, InfrastructureError> {
    let config = load_config(config_path)?;
    telemetry::init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        event = "infrastructure_initializing",
        "Initializing infrastructure services"
    );
    let services = InfrastructureServices::new(config)?;
    tracing::info!(
        event = "infrastructure_initialized",
        "Infrastructure services initialized successfully"
    );

    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration source or deserialization error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration value rejected by validation
    #[error("Configuration error: {0}")]
    Configuration(String),
}
