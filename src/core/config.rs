//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.termfolio/config.toml`. The file is optional and only
//! ever read; a missing file just means defaults.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::animation::{DEFAULT_DOMAIN, DEFAULT_PREFIX};
use crate::core::i18n::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TermfolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub welcome: WelcomeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WelcomeConfig {
    pub skip: Option<bool>,
    pub tick_interval_ms: Option<u64>,
    pub domain: Option<String>,
    pub prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 80;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub skip_welcome: bool,
    pub tick_interval: Duration,
    pub domain: String,
    pub prefix: String,
    /// No file means no logger is installed.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.termfolio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termfolio").join("config.toml"))
}

/// Load config from `~/.termfolio/config.toml`.
///
/// A missing file (or an unknown home directory) yields
/// `TermfolioConfig::default()`. A malformed file yields `ConfigError::Parse`.
pub fn load_config() -> Result<TermfolioConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TermfolioConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<TermfolioConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(TermfolioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TermfolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &TermfolioConfig) -> ResolvedConfig {
    // Language: env → config → default
    let language = std::env::var("TERMFOLIO_LANG")
        .ok()
        .and_then(|code| Language::from_code(&code))
        .or(config.general.language)
        .unwrap_or_default();

    let tick_interval_ms = config
        .welcome
        .tick_interval_ms
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

    // Log file: env → config
    let log_file = std::env::var("TERMFOLIO_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from);

    // Log level: env → config → default
    let log_level = std::env::var("TERMFOLIO_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        language,
        skip_welcome: config.welcome.skip.unwrap_or(false),
        tick_interval: Duration::from_millis(tick_interval_ms),
        domain: config
            .welcome
            .domain
            .clone()
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        prefix: config
            .welcome
            .prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        log_file,
        log_level,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(level.trim()) {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", level);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = TermfolioConfig::default();
        assert!(config.general.language.is_none());
        assert!(config.welcome.domain.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TermfolioConfig::default());
        assert!(!resolved.skip_welcome);
        assert_eq!(resolved.tick_interval, Duration::from_millis(80));
        assert_eq!(resolved.domain, "termfolio.dev");
        assert_eq!(resolved.prefix, "Mohamed.Gacha@");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TermfolioConfig {
            welcome: WelcomeConfig {
                skip: Some(true),
                tick_interval_ms: Some(40),
                domain: Some("example.org".to_string()),
                prefix: Some("me@".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config);
        assert!(resolved.skip_welcome);
        assert_eq!(resolved.tick_interval, Duration::from_millis(40));
        assert_eq!(resolved.domain, "example.org");
        assert_eq!(resolved.prefix, "me@");
    }

    #[test]
    fn test_zero_tick_interval_falls_back_to_default() {
        let config = TermfolioConfig {
            welcome: WelcomeConfig {
                tick_interval_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config).tick_interval, Duration::from_millis(80));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
language = "fr"

[welcome]
skip = true
tick_interval_ms = 100
domain = "example.org"

[logging]
file = "/tmp/termfolio.log"
level = "info"
"#;
        let config: TermfolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language, Some(Language::Fr));
        assert_eq!(config.welcome.skip, Some(true));
        assert_eq!(config.welcome.tick_interval_ms, Some(100));
        assert!(config.welcome.prefix.is_none());
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/termfolio.log"));
        assert_eq!(parse_level("info"), Some(LevelFilter::Info));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[welcome]
domain = "my.site"
"#;
        let config: TermfolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.welcome.domain.as_deref(), Some("my.site"));
        assert!(config.general.language.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_unknown_language_is_a_parse_error() {
        let result: Result<TermfolioConfig, _> = toml::from_str("[general]\nlanguage = \"de\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("termfolio-no-such-dir").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.welcome.skip.is_none());
    }

    #[test]
    fn test_bad_level_is_ignored() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(" warn "), Some(LevelFilter::Warn));
    }
}
