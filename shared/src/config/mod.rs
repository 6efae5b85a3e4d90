//! Configuration module with sub-modules per concern
//!
//! - `backend` - Verification backend endpoint, credentials and timeouts
//! - `environment` - Environment detection and logging configuration

pub mod backend;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use backend::BackendConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KycConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Verification backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for KycConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            backend: BackendConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl KycConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            backend: BackendConfig::from_env(),
            logging,
        }
    }
}
