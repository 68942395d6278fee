//! Run configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use optimiser_core::solvers::{DEFAULT_INITIAL_STEP, DEFAULT_MAX_ITERATIONS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding `max_iterations`
pub const ENV_MAX_ITERATIONS: &str = "DESCENT_MAX_ITERATIONS";
/// Environment variable overriding `initial_step`
pub const ENV_INITIAL_STEP: &str = "DESCENT_INITIAL_STEP";
/// Environment variable overriding `output_dir`
pub const ENV_OUTPUT_DIR: &str = "DESCENT_OUTPUT_DIR";
/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "DESCENT_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid max iterations: {0}. Must be greater than 0")]
    InvalidMaxIterations(usize),

    #[error("Invalid initial step: {0}. Must be finite and positive")]
    InvalidInitialStep(f64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Run configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Iteration bound shared by all solvers
    pub max_iterations: usize,
    /// Gradient descent base step
    pub initial_step: f64,
    /// Directory receiving trace files
    pub output_dir: PathBuf,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_step: DEFAULT_INITIAL_STEP,
            output_dir: PathBuf::from("output"),
            log_level: LogLevel::Info,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::FileError(e.to_string()))
    }

    /// Apply overrides from `DESCENT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(ENV_MAX_ITERATIONS) {
            self.max_iterations = value.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not an integer", ENV_MAX_ITERATIONS, value))
            })?;
        }
        if let Ok(value) = std::env::var(ENV_INITIAL_STEP) {
            self.initial_step = value.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a number", ENV_INITIAL_STEP, value))
            })?;
        }
        if let Ok(value) = std::env::var(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations(self.max_iterations));
        }
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(ConfigError::InvalidInitialStep(self.initial_step));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(max_iterations) = cli.max_iterations {
            self.max_iterations = max_iterations;
        }
        if let Some(initial_step) = cli.initial_step {
            self.initial_step = initial_step;
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }

        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Iteration bound override
    pub max_iterations: Option<usize>,
    /// Gradient descent base step override
    pub initial_step: Option<f64>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<RunConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        RunConfig::from_file(config_path)?
    } else {
        RunConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.initial_step, 1.0);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_validate() {
        let mut config = RunConfig::default();
        config.max_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxIterations(0))
        ));

        config.max_iterations = 10;
        config.initial_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInitialStep(_))
        ));

        config.initial_step = f64::NAN;
        assert!(config.validate().is_err());

        config.initial_step = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = RunConfig::default();
        let cli = CliArgs {
            max_iterations: Some(50),
            initial_step: Some(0.25),
            output_dir: Some(PathBuf::from("traces")),
            log_level: Some("debug".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.initial_step, 0.25);
        assert_eq!(config.output_dir, PathBuf::from("traces"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_args_merge_rejects_bad_log_level() {
        let mut config = RunConfig::default();
        let cli = CliArgs {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            max_iterations = 250
            initial_step = 0.5
            output_dir = "results"
            log_level = "warn"
        "#;

        let config: RunConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.initial_step, 0.5);
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: RunConfig = toml::from_str("max_iterations = 10").unwrap();
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.initial_step, 1.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        assert!(toml::from_str::<RunConfig>("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_iterations = 42").unwrap();

        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_iterations, 42);
    }

    #[test]
    fn test_from_missing_file() {
        let result = RunConfig::from_file(Path::new("/nonexistent/descent.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_build_config_with_file_and_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_iterations = 42\ninitial_step = 0.5").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            initial_step: Some(2.0),
            ..Default::default()
        };

        // Environment variables are process-wide; only assert on values the
        // CLI pins down.
        let config = build_config(&cli).unwrap();
        assert_eq!(config.initial_step, 2.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidMaxIterations(0);
        assert!(err.to_string().contains("Invalid max iterations"));

        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));
    }
}
