//! Configuration management for folia.
//!
//! Parses `folia.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Caller-side settings can be applied during load via [`Overrides`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `repository.url`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folia.toml";

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override the site name.
    pub site_name: Option<String>,
    /// Override the default language.
    pub default_language: Option<String>,
    /// Override the repository url.
    pub repository_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Language configuration.
    pub languages: LanguagesConfig,
    /// Repository configuration.
    pub repository: RepositoryConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site display name.
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "folia".to_owned(),
        }
    }
}

/// What to do when a category lacks a translation for the requested
/// language.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Substitute the default language's url segment.
    #[default]
    DefaultLanguage,
    /// Leave untranslated categories out; paths through them fail.
    Skip,
}

/// Language configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LanguagesConfig {
    /// Default language code (e.g. "`en_GB`").
    pub default: String,
    /// Missing-translation policy for menus and paths.
    pub fallback: FallbackPolicy,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            default: "en_GB".to_owned(),
            fallback: FallbackPolicy::default(),
        }
    }
}

/// Repository configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Backend url; `memory://` selects the in-memory backend.
    pub url: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            url: "memory://".to_owned(),
        }
    }
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
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. "`repository.url`").
        field: String,
        /// Error message (e.g. "${`FOLIA_DB_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a language code in the usual `ll_CC` shape: ascii letters,
/// digits and underscores, no whitespace.
fn require_language_code(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::Validation(format!(
            "{field} must be a language code like en_GB"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folia.toml` in current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// Overrides are applied after loading, taking precedence over config
    /// file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// fails.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(name) = &overrides.site_name {
            self.site.name.clone_from(name);
        }
        if let Some(default_language) = &overrides.default_language {
            self.languages.default.clone_from(default_language);
        }
        if let Some(url) = &overrides.repository_url {
            self.repository.url.clone_from(url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and expansion
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        require_language_code(&self.languages.default, "languages.default")?;
        require_non_empty(&self.repository.url, "repository.url")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.repository.url = expand::expand_env(&self.repository.url, "repository.url")?;
        Ok(())
    }
}
