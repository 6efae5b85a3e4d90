//! Backend deployment selection and log output settings

use serde::{Deserialize, Serialize};
use std::env;

/// Verification backend deployment the client is pointed at.
///
/// Selects the optional `kyc.<name>.toml` file and the default log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local or sandbox backend
    #[default]
    Development,
    /// Pre-release backend with test documents
    Staging,
    /// Live verification backend
    Production,
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Production requires an API key; see `kyc_infra::load_config`
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// `KYC_ENVIRONMENT`, then `ENVIRONMENT`; unknown values select development
    pub fn from_env() -> Self {
        ["KYC_ENVIRONMENT", "ENVIRONMENT"]
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn config_file(&self) -> String {
        format!("kyc.{}.toml", self.name())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "sandbox" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" | "live" => Ok(Environment::Production),
            other => Err(format!("unknown KYC environment: {}", other)),
        }
    }
}

/// Log output of the client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `warn,kyc_core=debug`
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Include file and line in each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: default_log_format(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Session steps are logged at debug against development backends only
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("info,kyc_core=debug,kyc_infra=debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Compact),
            Environment::Production => ("warn,kyc_core=info", LogFormat::Json),
        };
        Self {
            level: level.to_string(),
            format,
            source_location: env == Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
