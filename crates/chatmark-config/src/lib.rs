//! Configuration management for chatmark.
//!
//! Parses `chatmark.toml` files with serde and provides auto-discovery of
//! the config file in the working directory and its parents.
//!
//! Presentation values are forgiving: an unknown theme or a wrongly typed
//! field logs a warning and keeps its default instead of failing the load.
//! Only unreadable files and malformed TOML are errors.
//!
//! ```toml
//! [render]
//! show_sentiment = true
//! theme = "light"
//! compact = false
//!
//! [cache]
//! enabled = true
//! capacity = 256
//! ```

mod lenient;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lenient::{Lenient, resolve};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "chatmark.toml";

/// Default number of rendered messages kept in memory.
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub show_sentiment: Option<bool>,
    pub theme: Option<Theme>,
    pub compact: Option<bool>,
    pub cache_enabled: Option<bool>,
}

/// Color theme of the rendered container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Terminal,
    Custom,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Terminal => "terminal",
            Self::Custom => "custom",
        }
    }

    /// CSS class applied to the content container.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
            Self::Terminal => "theme-terminal",
            Self::Custom => "theme-custom",
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            "terminal" => Self::Terminal,
            "custom" => Self::Custom,
            _ => {
                tracing::warn!(theme = %value, "Unknown theme, falling back to dark");
                Self::Dark
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation knobs. None of them affect structural parsing.
///
/// Deserializes from TOML (`show_sentiment`) and from the message-layer
/// JSON contract (`showSentiment`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RenderConfigRaw")]
pub struct RenderConfig {
    /// Whether the mood/sentiment indicator is produced.
    pub show_sentiment: bool,
    pub theme: Theme,
    /// Tighter spacing for dense layouts.
    pub compact: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_sentiment: true,
            theme: Theme::Dark,
            compact: false,
        }
    }
}

/// Raw render section, each field parsed independently.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RenderConfigRaw {
    #[serde(alias = "showSentiment")]
    show_sentiment: Option<Lenient<bool>>,
    theme: Option<Lenient<Theme>>,
    compact: Option<Lenient<bool>>,
}

impl From<RenderConfigRaw> for RenderConfig {
    fn from(raw: RenderConfigRaw) -> Self {
        let defaults = Self::default();
        Self {
            show_sentiment: resolve(
                raw.show_sentiment,
                "render.show_sentiment",
                defaults.show_sentiment,
            ),
            theme: resolve(raw.theme, "render.theme", defaults.theme),
            compact: resolve(raw.compact, "render.compact", defaults.compact),
        }
    }
}

/// In-memory cache of rendered markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CacheConfigRaw")]
pub struct CacheConfig {
    /// Whether rendered messages are memoized.
    pub enabled: bool,
    /// Maximum number of cached messages.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CacheConfigRaw {
    enabled: Option<Lenient<bool>>,
    capacity: Option<Lenient<usize>>,
}

impl From<CacheConfigRaw> for CacheConfig {
    fn from(raw: CacheConfigRaw) -> Self {
        let mut capacity = resolve(raw.capacity, "cache.capacity", DEFAULT_CACHE_CAPACITY);
        if capacity == 0 {
            tracing::warn!(field = "cache.capacity", "Capacity must be positive, using default");
            capacity = DEFAULT_CACHE_CAPACITY;
        }
        Self {
            enabled: resolve(raw.enabled, "cache.enabled", true),
            capacity,
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Cache configuration.
    pub cache: CacheConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `chatmark.toml` in the current directory and its parents, falling
    /// back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and take precedence.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if the file
    /// cannot be read or is not valid TOML.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid TOML or a
    /// section has the wrong shape.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Apply CLI settings to the configuration.
    pub fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(show_sentiment) = settings.show_sentiment {
            self.render.show_sentiment = show_sentiment;
        }
        if let Some(theme) = settings.theme {
            self.render.theme = theme;
        }
        if let Some(compact) = settings.compact {
            self.render.compact = compact;
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.cache.enabled = cache_enabled;
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.render.show_sentiment);
        assert_eq!(config.render.theme, Theme::Dark);
        assert!(!config.render.compact);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.capacity, 256);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
[render]
show_sentiment = false
theme = "terminal"
compact = true

[cache]
enabled = false
capacity = 32
"#,
        )
        .unwrap();
        assert_eq!(
            config.render,
            RenderConfig {
                show_sentiment: false,
                theme: Theme::Terminal,
                compact: true,
            }
        );
        assert_eq!(
            config.cache,
            CacheConfig {
                enabled: false,
                capacity: 32,
            }
        );
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let config = Config::from_toml_str("[render]\ntheme = \"neon\"\ncompact = true").unwrap();
        assert_eq!(config.render.theme, Theme::Dark);
        assert!(config.render.compact);
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let config = Config::from_toml_str("[render]\ntheme = \"Light\"").unwrap();
        assert_eq!(config.render.theme, Theme::Light);
    }

    #[test]
    fn test_wrongly_typed_fields_keep_defaults() {
        let config = Config::from_toml_str(
            "[render]\nshow_sentiment = \"sometimes\"\ntheme = 3\ncompact = true\n[cache]\ncapacity = -5",
        )
        .unwrap();
        assert!(config.render.show_sentiment);
        assert_eq!(config.render.theme, Theme::Dark);
        assert!(config.render.compact);
        assert_eq!(config.cache.capacity, 256);
    }

    #[test]
    fn test_zero_capacity_uses_default() {
        let config = Config::from_toml_str("[cache]\ncapacity = 0").unwrap();
        assert_eq!(config.cache.capacity, 256);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = Config::from_toml_str("[render\ntheme = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_render_config_from_message_layer_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"showSentiment": false, "theme": "custom", "compact": true}"#)
                .unwrap();
        assert_eq!(
            config,
            RenderConfig {
                show_sentiment: false,
                theme: Theme::Custom,
                compact: true,
            }
        );
    }

    #[test]
    fn test_render_config_serializes_camel_case() {
        let json = serde_json::to_string(&RenderConfig::default()).unwrap();
        assert_eq!(json, r#"{"showSentiment":true,"theme":"dark","compact":false}"#);
    }

    #[test]
    fn test_theme_class() {
        assert_eq!(Theme::Light.class(), "theme-light");
        assert_eq!(Theme::Terminal.to_string(), "terminal");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\ncompact = true").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert!(config.render.compact);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_discover_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_ignores_directories_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_ne!(
            Config::discover(dir.path()),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            show_sentiment: Some(false),
            theme: Some(Theme::Light),
            compact: None,
            cache_enabled: Some(false),
        });
        assert!(!config.render.show_sentiment);
        assert_eq!(config.render.theme, Theme::Light);
        assert!(!config.render.compact);
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn test_load_applies_cli_settings_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render]\ntheme = \"light\"").unwrap();

        let settings = CliSettings {
            theme: Some(Theme::Custom),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.render.theme, Theme::Custom);
    }
}
