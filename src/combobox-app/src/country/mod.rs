//! Country name sources.
//!
//! The shell asks a [`CountryProvider`] for names once at startup and feeds
//! them to every combobox.

mod builtin;
mod file;
mod rest;

pub use builtin::BuiltinCountries;
pub use file::FileCountries;
pub use rest::RestCountries;

use async_trait::async_trait;

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{AppError, Result};

/// Asynchronous source of country names.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Fetch every country name, in display order.
    async fn fetch_country_names(&self) -> Result<Vec<String>>;
}

/// Build the provider selected by `config`.
pub fn from_config(config: &ProviderConfig) -> Result<Box<dyn CountryProvider>> {
    let provider: Box<dyn CountryProvider> = match config.kind {
        ProviderKind::Builtin => Box::new(BuiltinCountries),
        ProviderKind::File => {
            let path = config.path.clone().ok_or_else(|| {
                AppError::InvalidConfig("the file provider needs a path".to_string())
            })?;
            Box::new(FileCountries::new(path))
        }
        ProviderKind::Rest => Box::new(RestCountries::new(&config.url, config.timeout())),
    };
    tracing::debug!(provider = provider.name(), "country provider selected");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_picks_kind() {
        let mut config = ProviderConfig::default();
        assert_eq!(from_config(&config).unwrap().name(), "builtin");

        config.kind = ProviderKind::Rest;
        assert_eq!(from_config(&config).unwrap().name(), "rest");

        config.kind = ProviderKind::File;
        assert!(matches!(
            from_config(&config).map(|p| p.name()),
            Err(AppError::InvalidConfig(_))
        ));
        config.path = Some("countries.json".into());
        assert_eq!(from_config(&config).unwrap().name(), "file");
    }
}
