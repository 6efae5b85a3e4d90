//! Configuration loading
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults and the plain `KYC_*` / `ENVIRONMENT` / `LOG_LEVEL` variables
//! 2. A TOML file: the given path (required) or `kyc.{environment}.toml` (optional)
//! 3. `KYC__SECTION__KEY` variables, e.g. `KYC__BACKEND__BASE_URL`

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvironmentSource, File};
use kyc_shared::KycConfig;

use crate::InfrastructureError;

/// Load and validate the client configuration
pub fn load_config(path: Option<&Path>) -> Result<KycConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let defaults = KycConfig::from_env();
    let file = match path {
        Some(path) => File::from(path.to_path_buf()).required(true),
        None => File::from(PathBuf::from(defaults.environment.config_file())).required(false),
    };

    let config: KycConfig = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(file)
        .add_source(EnvironmentSource::with_prefix("KYC").separator("__"))
        .build()?
        .try_deserialize()?;

    validate(&config)?;
    tracing::debug!(
        environment = %config.environment,
        base_url = %config.backend.base_url,
        event = "config_loaded",
        "Configuration loaded"
    );
    Ok(config)
}

fn validate(config: &KycConfig) -> Result<(), InfrastructureError> {
    let base_url = config.backend.base_url.trim();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        return Err(InfrastructureError::Configuration(format!(
            "backend.base_url must be an http(s) URL, got '{}'",
            base_url
        )));
    }
    if config.backend.request_timeout_secs == 0 || config.backend.connect_timeout_secs == 0 {
        return Err(InfrastructureError::Configuration(
            "backend timeouts must be greater than zero".to_string(),
        ));
    }
    if config.environment.is_production() && config.backend.api_key.is_empty() {
        tracing::warn!(
            event = "missing_api_key",
            "No API key configured for the production backend"
        );
    }
    Ok(())
}
