use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Validates the configuration
///
/// Timeouts and the redirect limit must be non-zero: a zero timeout would let
/// a dead host hang the whole run, and a zero redirect limit would reject
/// every response before the first request is even sent.
///
/// Called by [`load_config`] and again by the CLI after command-line flags
/// are merged over the loaded values, so an override cannot smuggle in a
/// value the file itself would have been rejected for.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.connect_timeout_secs == 0 || config.fetch.read_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeouts must be at least 1 second".to_string(),
        ));
    }

    if config.fetch.redirect_limit == 0 {
        return Err(ConfigError::Validation(
            "redirect-limit must be at least 1".to_string(),
        ));
    }

    if config.fetch.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
