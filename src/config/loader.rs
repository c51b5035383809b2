//! Configuration Loader
//!
//! Environment-aware configuration loading. Sources are layered in order of
//! increasing precedence:
//!
//! 1. Compiled defaults from [`StatsConfig::default`]
//! 2. `brawls-stats.yaml` in the configuration directory
//! 3. `brawls-stats.<environment>.yaml` in the configuration directory
//! 4. `BRAWLS_STATS__SECTION__FIELD` environment variables
//! 5. `DATABASE_URL`, which always wins for `database.url`
//!
//! Missing files are skipped, so a bare checkout runs on defaults.

use super::error::{ConfigResult, ConfigurationError};
use super::StatsConfig;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const CONFIG_FILE_STEM: &str = "brawls-stats";
const ENV_PREFIX: &str = "BRAWLS_STATS";

/// Loaded configuration together with the environment it was resolved for
#[derive(Debug)]
pub struct ConfigManager {
    config: StatsConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    /// This is useful for testing without modifying global environment variables
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(|| PathBuf::from("config"));

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config = Self::load_layered(&config_directory, environment)?;
        config.validate()?;

        let sanitized_config = Self::sanitize_config_for_logging(&config);
        debug!(
            "Configuration loaded successfully: {}",
            serde_json::to_string_pretty(&sanitized_config)
                .unwrap_or_else(|_| "[serialization error]".to_string())
        );

        info!(
            environment = environment,
            pool_size = config.database.max_connections,
            bind_address = %config.web.bind_address,
            auth_enabled = config.auth.enabled,
            "⚙️ CONFIG: Configuration loaded"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Get the current environment
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Get the configuration directory
    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// Configuration as JSON with credentials masked
    pub fn debug_config(&self) -> serde_json::Value {
        Self::sanitize_config_for_logging(&self.config)
    }

    /// Detect current environment from environment variables
    /// BRAWLS_ENV || APP_ENV || 'development'
    pub fn detect_environment() -> String {
        env::var("BRAWLS_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
    }

    fn load_layered(config_directory: &Path, environment: &str) -> ConfigResult<StatsConfig> {
        let defaults = Config::try_from(&StatsConfig::default())
            .map_err(|e| ConfigurationError::load(environment, e))?;

        let base_file = config_directory.join(format!("{CONFIG_FILE_STEM}.yaml"));
        let env_file = config_directory.join(format!("{CONFIG_FILE_STEM}.{environment}.yaml"));

        debug!(
            base = %base_file.display(),
            overlay = %env_file.display(),
            "Resolving configuration files"
        );

        let merged = Config::builder()
            .add_source(defaults)
            .add_source(File::from(base_file.as_path()).required(false))
            .add_source(File::from(env_file.as_path()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())
            .map_err(|e| ConfigurationError::load(environment, e))?
            .build()
            .map_err(|e| ConfigurationError::load(environment, e))?;

        let mut config = merged
            .try_deserialize::<StatsConfig>()
            .map_err(ConfigurationError::deserialize)?;
        config.environment = environment.to_string();
        Ok(config)
    }

    /// Mask credentials before configuration reaches a log line
    fn sanitize_config_for_logging(config: &StatsConfig) -> serde_json::Value {
        let mut config_json = serde_json::json!(config);
        let sensitive_patterns = ["password", "secret", "key", "token", "url"];
        Self::sanitize_json_recursive(&mut config_json, &sensitive_patterns);
        config_json
    }

    fn sanitize_json_recursive(value: &mut serde_json::Value, sensitive_patterns: &[&str]) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, val) in map.iter_mut() {
                    let key_lower = key.to_lowercase();
                    let is_sensitive = sensitive_patterns
                        .iter()
                        .any(|pattern| key_lower.contains(pattern));

                    if is_sensitive {
                        *val = match val {
                            serde_json::Value::String(s) if s.is_empty() => {
                                serde_json::Value::String("[EMPTY]".to_string())
                            }
                            _ => serde_json::Value::String("[MASKED]".to_string()),
                        };
                    } else {
                        Self::sanitize_json_recursive(val, sensitive_patterns);
                    }
                }
            }
            serde_json::Value::Array(arr) => {
                for item in arr.iter_mut() {
                    Self::sanitize_json_recursive(item, sensitive_patterns);
                }
            }
            _ => {}
        }
    }
}
