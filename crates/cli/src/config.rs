//! Configuration loading from playground.toml.

use augment::Scale;
use capability::Person;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
///
/// Every section is optional; missing keys take the values the
/// demonstrations are documented with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Names used by the greeting demonstrations.
    pub names: NameConfig,

    /// Input for the temperature demonstration.
    pub temperature: TemperatureConfig,

    /// The person whose conformance is declared separately.
    pub person: Person,
}

/// Names fed to each greeting demonstration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Name greeted through the string extension.
    pub greeting: String,

    /// Name stored on the protocol host.
    pub host: String,

    /// Name of the entity relying on the default greeting.
    pub world_person: String,

    /// Name of the entity overriding the greeting.
    pub groot: String,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            greeting: "Andrew".to_string(),
            host: "Elena".to_string(),
            world_person: "Groot".to_string(),
            groot: "Groot".to_string(),
        }
    }
}

/// Temperature demonstration input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    /// Value in degrees Celsius.
    pub value: f64,

    /// Scales to print, in order.
    pub scales: Vec<Scale>,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            value: 18.0,
            scales: Scale::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.temperature.value.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "temperature.value must be finite, got {}",
                self.temperature.value
            )));
        }
        if self.temperature.scales.is_empty() {
            return Err(ConfigError::Invalid(
                "temperature.scales must list at least one scale".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}
