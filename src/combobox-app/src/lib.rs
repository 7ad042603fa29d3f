//! Terminal country picker.
//!
//! Loads country names from a configurable source and shows one multi-select
//! combobox per configured instance, recording each instance's selection.

pub mod cli;
pub mod config;
pub mod country;
pub mod error;
pub mod runner;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use shell::{AppShell, InstanceSelections, LoadState};
