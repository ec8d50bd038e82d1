//! Configuration loading and typed config structures for the Kismet simulation.
//!
//! The canonical configuration lives in `kismet-config.yaml` at the project
//! root. Every field has a default, so an empty document is a valid
//! configuration equivalent to the default world.

use std::collections::BTreeMap;
use std::path::Path;

use kismet_agents::archetype_by_label;
use kismet_agents::destiny::DEFAULT_DESTINY_STRENGTH;
use kismet_types::{AgentLabel, Theme};
use serde::Deserialize;

use crate::world::AgentOverride;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unusable simulation.
    #[error("invalid config: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `kismet-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, horizon, destiny, themes).
    #[serde(default)]
    pub world: WorldConfig,

    /// Population parameters.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Manual per-agent adjustments applied at the start of every month.
    #[serde(default)]
    pub overrides: BTreeMap<AgentLabel, AgentOverride>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Check the configuration describes a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the horizon is zero, the theme
    /// rotation is empty, or a roster entry names no known archetype.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.total_months == 0 {
            return Err(ConfigError::Invalid {
                reason: "world.total_months must be at least 1".to_owned(),
            });
        }
        if self.world.themes.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "world.themes must name at least one theme".to_owned(),
            });
        }
        for label in &self.population.roster {
            if archetype_by_label(label.as_str()).is_err() {
                return Err(ConfigError::Invalid {
                    reason: format!("population.roster names unknown archetype '{label}'"),
                });
            }
        }
        Ok(())
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of months to simulate.
    #[serde(default = "default_total_months")]
    pub total_months: u32,

    /// Run-wide destiny strength, clamped to `[0, 100]` when applied.
    #[serde(default = "default_destiny_strength")]
    pub destiny_strength: f64,

    /// Theme rotation, one per month, cycling.
    #[serde(default = "Theme::default_rotation")]
    pub themes: Vec<Theme>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            total_months: default_total_months(),
            destiny_strength: default_destiny_strength(),
            themes: Theme::default_rotation(),
        }
    }
}

/// Population configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationConfig {
    /// Whether per-interaction luck noise applies to every agent.
    #[serde(default = "default_true")]
    pub luck_enabled: bool,

    /// Subset of default archetype labels to spawn. Empty means all ten.
    #[serde(default)]
    pub roster: Vec<AgentLabel>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            luck_enabled: true,
            roster: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Kismet".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_total_months() -> u32 {
    12
}

const fn default_destiny_strength() -> f64 {
    DEFAULT_DESTINY_STRENGTH
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kismet_types::Domain;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.world.total_months, 12);
        assert_eq!(config.world.themes.len(), 5);
        assert!(config.population.luck_enabled);
        assert!(config.population.roster.is_empty());
        assert!(config.overrides.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
world:
  name: Test Kismet
  seed: 7
  total_months: 24
  destiny_strength: 80
  themes: [ROMANCE, CAREER_HUSTLE, MYSTERY]
population:
  luck_enabled: false
  roster: [vayu, neer]
logging:
  level: debug
overrides:
  neer:
    trauma_increase: 5
    bless: true
    lock_choice: true
    lock_domain: love
  vayu:
    desire_boost_domain: learning
    desire_boost_value: 12.5
";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.world.name, "Test Kismet");
        assert_eq!(config.world.total_months, 24);
        assert!((config.world.destiny_strength - 80.0).abs() < 1e-9);
        assert_eq!(
            config.world.themes,
            vec![
                Theme::Romance,
                Theme::CareerHustle,
                Theme::Other("MYSTERY".to_owned())
            ]
        );
        assert!(!config.population.luck_enabled);
        assert_eq!(config.population.roster.len(), 2);
        assert_eq!(config.logging.level, "debug");

        let neer = config.overrides.get("neer").unwrap();
        assert!(neer.bless);
        assert_eq!(neer.locked_domain(), Some(Domain::Love));
        let vayu = config.overrides.get("vayu").unwrap();
        assert_eq!(vayu.boosted_domain(), Some(Domain::Learning));
        assert!(!vayu.bless);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = SimulationConfig::parse("world:\n  seed: 9\n").unwrap();
        assert_eq!(config.world.seed, 9);
        assert_eq!(config.world.total_months, 12);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = SimulationConfig::parse("world: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn validate_rejects_unusable_configs() {
        let mut config = SimulationConfig::default();
        config.world.total_months = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = SimulationConfig::default();
        config.world.themes.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = SimulationConfig::default();
        config.population.roster.push(AgentLabel::from("nobody"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("kismet-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
            assert!(config.unwrap().validate().is_ok());
        }
    }
}
