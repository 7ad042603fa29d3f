//! Country names from a local JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::CountryProvider;
use crate::error::{AppError, Result};

/// Reads a JSON array of names, e.g. `["France", "Germany"]`.
///
/// Names keep the file's order.
#[derive(Debug, Clone)]
pub struct FileCountries {
    path: PathBuf,
}

impl FileCountries {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CountryProvider for FileCountries {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_country_names(&self) -> Result<Vec<String>> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| AppError::FileRead {
                    path: self.path.clone(),
                    source,
                })?;
        let names: Vec<String> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = names.len(), "loaded country file");
        Ok(names)
    }
}
