//! CLI configuration management
//!
//! Settings are layered, highest priority first:
//! 1. command-line arguments
//! 2. environment variables (`PRNG_ENGINE`, `PRNG_SEED`, `PRNG_LOG_LEVEL`,
//!    `PRNG_SAMPLE_COUNT`)
//! 3. TOML configuration file
//! 4. defaults

use prng_core::engine::Engine;
use prng_core::engines::EngineKind;
use prng_core::seed::SeedDiffuser;
use prng_core::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the engine.
pub const ENV_ENGINE: &str = "PRNG_ENGINE";
/// Environment variable holding the seed text.
pub const ENV_SEED: &str = "PRNG_SEED";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "PRNG_LOG_LEVEL";
/// Environment variable holding the default sample count.
pub const ENV_SAMPLE_COUNT: &str = "PRNG_SAMPLE_COUNT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid engine: {0}")]
    InvalidEngine(String),

    #[error("Invalid sample count: {0}. Must be a positive integer")]
    InvalidSampleCount(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
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
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Tracing filter directive for this level
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

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrngConfig {
    /// Engine used by every command
    #[serde(deserialize_with = "deserialize_engine")]
    pub engine: EngineKind,
    /// Seed text; `None` seeds from transient entropy
    pub seed: Option<String>,
    /// Fallback log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of values `sample` prints when `-n` is absent
    pub sample_count: usize,
}

fn deserialize_engine<'de, D>(deserializer: D) -> Result<EngineKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_engine(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_engine(s: &str) -> Result<EngineKind, ConfigError> {
    EngineKind::from_str(s).map_err(|e| ConfigError::InvalidEngine(e.to_string()))
}

fn parse_sample_count(s: &str) -> Result<usize, ConfigError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidSampleCount(s.to_string())),
    }
}

impl Default for PrngConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            seed: None,
            log_level: LogLevel::Info,
            sample_count: 10,
        }
    }
}

impl PrngConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PrngConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields for which `lookup` yields a value
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup(ENV_ENGINE) {
            self.engine = parse_engine(&engine)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(count) = lookup(ENV_SAMPLE_COUNT) {
            self.sample_count = parse_sample_count(&count)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(engine) = &cli.engine {
            self.engine = parse_engine(engine)?;
        }
        if let Some(seed) = &cli.seed {
            self.seed = Some(seed.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(count) = cli.sample_count {
            self.sample_count = count;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::InvalidSampleCount("0".to_string()));
        }
        Ok(())
    }

    /// Builds the configured engine.
    ///
    /// With a seed the engine is a pure function of the seed text; without
    /// one it is seeded from transient entropy and will differ per run.
    pub fn build_engine(&self) -> Result<Box<dyn Engine>, EngineError> {
        match &self.seed {
            Some(text) => self.engine.create(&mut SeedDiffuser::from_text(text)),
            None => {
                tracing::warn!(engine = %self.engine, "no seed configured, output is not reproducible");
                self.engine.create(&mut SeedDiffuser::from_entropy())
            }
        }
    }
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Engine override
    pub engine: Option<String>,
    /// Seed override
    pub seed: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Sample count override
    pub sample_count: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PrngConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<PrngConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => PrngConfig::from_file(path)?,
        None => PrngConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::engine::BitEngine;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PrngConfig::default();
        assert_eq!(config.engine, EngineKind::XorShiftAdd);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.sample_count, 10);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let config = PrngConfig::from_toml_str(
            r#"
            engine = "XorShift128Plus"
            seed = "harbour"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine, EngineKind::XorShift128Plus);
        assert_eq!(config.seed.as_deref(), Some("harbour"));
        assert_eq!(config.log_level, LogLevel::Debug);
        // Missing keys fall back to defaults
        assert_eq!(config.sample_count, 10);
    }

    #[test]
    fn test_from_toml_rejects_unknown_engine() {
        assert!(matches!(
            PrngConfig::from_toml_str(r#"engine = "mersenne""#),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_zero_count() {
        assert!(PrngConfig::from_toml_str("sample_count = 0").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine = \"splitmix64\"\nsample_count = 3").unwrap();

        let config = PrngConfig::from_file(file.path()).unwrap();
        assert_eq!(config.engine, EngineKind::SplitMix64);
        assert_eq!(config.sample_count, 3);
    }

    #[test]
    fn test_missing_file() {
        let result = PrngConfig::from_file(Path::new("/nonexistent/prng.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut config = PrngConfig::default();
        config
            .apply_env(env(&[
                (ENV_ENGINE, "splitmix64"),
                (ENV_SEED, "tide"),
                (ENV_SAMPLE_COUNT, "25"),
            ]))
            .unwrap();
        assert_eq!(config.engine, EngineKind::SplitMix64);
        assert_eq!(config.seed.as_deref(), Some("tide"));
        assert_eq!(config.sample_count, 25);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = PrngConfig::default();
        assert!(config.apply_env(env(&[(ENV_SAMPLE_COUNT, "many")])).is_err());
        assert!(config.apply_env(env(&[(ENV_SAMPLE_COUNT, "0")])).is_err());
        assert!(config.apply_env(env(&[(ENV_LOG_LEVEL, "loud")])).is_err());
        assert!(config.apply_env(env(&[(ENV_ENGINE, "nope")])).is_err());
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "engine = \"splitmix64\"\nseed = \"file\"\nlog_level = \"warn\"\nsample_count = 4"
        )
        .unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            seed: Some("cli".to_string()),
            ..Default::default()
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_SEED, "env"), (ENV_ENGINE, "xorshift128plus")]),
        )
        .unwrap();

        assert_eq!(config.seed.as_deref(), Some("cli"));
        assert_eq!(config.engine, EngineKind::XorShift128Plus);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.sample_count, 4);
    }

    #[test]
    fn test_seeded_engine_is_reproducible() {
        let config = PrngConfig {
            seed: Some("level-3".to_string()),
            ..Default::default()
        };
        let mut a = config.build_engine().unwrap();
        let mut b = config.build_engine().unwrap();
        for _ in 0..100 {
            assert_eq!(a.next64(), b.next64());
        }
    }
}
