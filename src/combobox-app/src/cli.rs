//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ProviderKind};

/// Pick countries with multi-select comboboxes.
#[derive(Debug, Parser)]
#[command(name = "combobox", version, about)]
pub struct Args {
    /// Config file (defaults to <config dir>/combobox/config.toml)
    #[arg(short, long, env = "COMBOBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to load country names from
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// JSON array of country names (implies --provider file)
    #[arg(long)]
    pub countries_file: Option<PathBuf>,

    /// REST endpoint for --provider rest
    #[arg(long)]
    pub url: Option<String>,

    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log file (defaults to <cache dir>/combobox/combobox.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Override config values given on the command line.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.countries_file {
            config.provider.kind = ProviderKind::File;
            config.provider.path = Some(path.clone());
        }
        if let Some(kind) = self.provider {
            config.provider.kind = kind;
        }
        if let Some(url) = &self.url {
            config.provider.url = url.clone();
        }
    }

    /// The log file path, explicit or default.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}

/// `<cache dir>/combobox/combobox.log`, or `combobox.log` in the working
/// directory when the platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("combobox").join("combobox.log"))
        .unwrap_or_else(|| PathBuf::from("combobox.log"))
}

/// Log level for the file logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
