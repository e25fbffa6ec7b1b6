//! Configuration loading and typed config structures for the Life simulation.
//!
//! Configuration is resolved in layers, later layers winning:
//!
//! 1. Built-in defaults (10x10 interior, 10 generations, seed `life.txt`).
//! 2. An optional `life-config.yaml` file.
//! 3. Environment overrides (`LIFE_SEED_FILE`, `LIFE_GENERATIONS`).
//! 4. Command-line arguments, applied by the binary.
//!
//! Call [`LifeConfig::validate`] once every layer has been applied.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::output::OutputFormat;

/// Environment variable overriding `simulation.seed_file`.
pub const ENV_SEED_FILE: &str = "LIFE_SEED_FILE";

/// Environment variable overriding `simulation.generations`.
pub const ENV_GENERATIONS: &str = "LIFE_GENERATIONS";

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

    /// A value is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending setting.
        field: &'static str,
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `life-config.yaml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifeConfig {
    /// Interior grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Run length and seed source.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Output layout.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifeConfig {
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
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `LIFE_GENERATIONS` is not a
    /// non-negative integer.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `LIFE_GENERATIONS` is not a
    /// non-negative integer.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_SEED_FILE) {
            self.simulation.seed_file = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_GENERATIONS) {
            let parsed = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "simulation.generations",
                reason: format!("{ENV_GENERATIONS}={raw:?}: {e}"),
            })?;
            self.simulation.generations = parsed;
        }
        Ok(())
    }

    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero grid dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 {
            return Err(ConfigError::Invalid {
                field: "grid.rows",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.grid.cols == 0 {
            return Err(ConfigError::Invalid {
                field: "grid.cols",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Interior grid dimensions. The dead border is added on top of these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Interior rows.
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Interior columns.
    #[serde(default = "default_cols")]
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

/// Run length and seed source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Number of evolution steps; generations `0..=generations` are printed.
    #[serde(default = "default_generations")]
    pub generations: u64,

    /// Text file holding the initial interior.
    #[serde(default = "default_seed_file")]
    pub seed_file: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            seed_file: default_seed_file(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Output layout: `text` or `json`.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log line layout.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_rows() -> usize {
    10
}

const fn default_cols() -> usize {
    10
}

const fn default_generations() -> u64 {
    10
}

fn default_seed_file() -> PathBuf {
    PathBuf::from("life.txt")
}

fn default_log_level() -> String {
    "warn".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.grid.rows, 10);
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.simulation.generations, 10);
        assert_eq!(config.simulation.seed_file, PathBuf::from("life.txt"));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
grid:
  rows: 20
  cols: 40

simulation:
  generations: 100
  seed_file: "patterns/glider.txt"

output:
  format: json

logging:
  level: "debug"
  format: json
"#;

        let config = LifeConfig::parse(yaml).unwrap();
        assert_eq!(config.grid.rows, 20);
        assert_eq!(config.grid.cols, 40);
        assert_eq!(config.simulation.generations, 100);
        assert_eq!(
            config.simulation.seed_file,
            PathBuf::from("patterns/glider.txt")
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = LifeConfig::parse("grid:\n  rows: 7\n").unwrap();
        // Rows is overridden
        assert_eq!(config.grid.rows, 7);
        // Everything else uses defaults
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.simulation.generations, 10);
    }

    #[test]
    fn parse_empty_yaml() {
        assert_eq!(LifeConfig::parse("").unwrap(), LifeConfig::default());
        assert_eq!(LifeConfig::parse("\n  \n").unwrap(), LifeConfig::default());
    }

    #[test]
    fn rejects_unknown_output_format() {
        let err = LifeConfig::parse("output:\n  format: xml\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn rejects_negative_dimensions() {
        assert!(LifeConfig::parse("grid:\n  rows: -3\n").is_err());
    }

    #[test]
    fn zero_dimensions_fail_validation() {
        let config = LifeConfig::parse("grid:\n  cols: 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "grid.cols",
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid grid.cols: must be at least 1");
    }

    #[test]
    fn overrides_replace_file_values() {
        let env = BTreeMap::from([(ENV_SEED_FILE, "other.txt"), (ENV_GENERATIONS, " 3 ")]);
        let mut config = LifeConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| (*v).to_owned()))
            .unwrap();
        assert_eq!(config.simulation.seed_file, PathBuf::from("other.txt"));
        assert_eq!(config.simulation.generations, 3);
    }

    #[test]
    fn bad_generation_override_is_rejected() {
        let mut config = LifeConfig::default();
        let err = config
            .apply_overrides(|key| (key == ENV_GENERATIONS).then(|| "many".to_owned()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "simulation.generations",
                ..
            }
        ));
        assert_eq!(config.simulation.generations, 10);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("life-config.yaml");
        if path.exists() {
            let config = LifeConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
