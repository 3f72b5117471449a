use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default outbound request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub generation: GenerationConfig,
}

/// Connection settings for the downstream text-generation service.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Base URL; requests go to `{base_url}/generate`.
    pub base_url: String,
    /// Timeout applied to each outbound generation request.
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(RelayConfig {
            common: common_config,
            generation: GenerationConfig {
                base_url: get_env("GENERATION_BASE_URL", Some("http://localhost:8000"), is_prod)?,
                timeout_secs: get_env(
                    "GENERATION_TIMEOUT_SECS",
                    Some(&DEFAULT_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
