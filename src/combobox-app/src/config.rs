//! Application configuration.
//!
//! Read from TOML. Every field has a default so a partial file (or no file at
//! all) yields a working setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use combobox_components::ColorScheme;
use combobox_components::combobox::{DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_VISIBLE};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Default REST endpoint for country names.
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where country names come from.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Widget presentation.
    #[serde(default)]
    pub ui: UiConfig,

    /// One combobox per entry, top to bottom.
    #[serde(default = "default_instances")]
    pub instances: Vec<InstanceConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            ui: UiConfig::default(),
            instances: default_instances(),
        }
    }
}

/// Country source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Names compiled into the binary
    #[default]
    Builtin,
    /// JSON array of names read from `path`
    File,
    /// REST endpoint at `url`
    Rest,
}

/// Provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,

    /// REST endpoint for `kind = "rest"`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Country file for `kind = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_COUNTRIES_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            url: default_url(),
            path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Palette selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Widget colors for this theme.
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            Theme::Dark => ColorScheme::dark(),
            Theme::Light => ColorScheme::light(),
        }
    }
}

/// Presentation settings shared by every instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Popup rows shown before scrolling.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Characters of the joined selection shown in a closed combobox.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    #[serde(default)]
    pub theme: Theme,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            display_limit: default_display_limit(),
            theme: Theme::default(),
        }
    }
}

/// One combobox on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Field label.
    pub label: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_true")]
    pub searchable: bool,

    /// Options that cannot be toggled.
    #[serde(default)]
    pub disabled: Vec<String>,
}

fn default_placeholder() -> String {
    "Select countries".to_string()
}

fn default_true() -> bool {
    true
}

impl InstanceConfig {
    /// A searchable instance with the default placeholder.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: default_placeholder(),
            searchable: true,
            disabled: Vec::new(),
        }
    }
}

fn default_instances() -> Vec<InstanceConfig> {
    vec![
        InstanceConfig::new("Visited"),
        InstanceConfig {
            disabled: vec!["Antarctica".to_string()],
            ..InstanceConfig::new("Want to visit")
        },
        InstanceConfig {
            placeholder: "Pick from the list".to_string(),
            searchable: false,
            ..InstanceConfig::new("Lived in")
        },
    ]
}

impl AppConfig {
    /// `<config_dir>/combobox/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("combobox").join("config.toml"))
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise the default path
    /// if that file exists, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the application cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.instances.is_empty() {
            return Err(AppError::InvalidConfig(
                "at least one [[instances]] entry is required".to_string(),
            ));
        }
        if self.ui.max_visible == 0 {
            return Err(AppError::InvalidConfig(
                "ui.max_visible must be at least 1".to_string(),
            ));
        }
        if self.provider.kind == ProviderKind::File && self.provider.path.is_none() {
            return Err(AppError::InvalidConfig(
                "provider.path is required when provider.kind = \"file\"".to_string(),
            ));
        }
        Ok(())
    }
}
