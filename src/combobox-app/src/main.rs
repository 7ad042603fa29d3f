//! `combobox` binary.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use combobox_app::cli::{Args, LogLevel};
use combobox_app::{AppConfig, country, runner};

/// Keeps the non-blocking log writer flushing until exit.
struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Log to `path`; stdout belongs to the terminal UI.
fn setup_logging(path: &Path, level: LogLevel) -> Result<LogGuard> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(LogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(&args.log_path(), args.log_level)?;

    let mut config =
        AppConfig::resolve(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);
    config.validate()?;

    tracing::info!(
        provider = ?config.provider.kind,
        instances = config.instances.len(),
        "starting combobox"
    );

    let provider = country::from_config(&config.provider)?;
    let summary = runner::run(&config, provider).await?;

    for (label, selection) in summary {
        if selection.is_empty() {
            println!("{label}: (none)");
        } else {
            println!("{label}: {}", selection.join(", "));
        }
    }

    Ok(())
}
