use std::env;
use std::path::{Path, PathBuf};

use define_registry::{ProviderConfig, ProviderConfigs, Registry};

pub mod file;
pub mod json;
pub mod merge;

#[cfg(test)]
mod testing;

pub use file::{expand_home, load_file};
pub use merge::merge;

pub const INDENT_SIZE_ENV: &str = "DEFINE_APP_INDENT_SIZE";
pub const PREFERRED_SOURCE_ENV: &str = "DEFINE_APP_PREFERRED_SOURCE";

/// Effective settings for one run
///
/// Serializes to a flat JSON object: the named fields plus one nested object
/// per non-empty provider configuration, keyed by the provider's JSON key.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub indentation_size: u32,
    pub preferred_source: String,

    config_file_location: Option<PathBuf>,
    provider_configs: ProviderConfigs,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Cause is only logged, never shown
    #[error("error reading config file")]
    ReadFile,

    #[error("no registered source providers")]
    NoProviders,

    #[error("preferred provider/source {0:?} does not exist")]
    UnknownPreferredSource(String),
}

impl Configuration {
    pub fn new(indentation_size: u32, preferred_source: impl Into<String>) -> Self {
        Self {
            indentation_size,
            preferred_source: preferred_source.into(),
            ..Self::default()
        }
    }

    pub fn with_config_file_location(mut self, location: Option<PathBuf>) -> Self {
        self.config_file_location = location;
        self
    }

    pub fn with_provider_configs(mut self, provider_configs: ProviderConfigs) -> Self {
        self.provider_configs = provider_configs;
        self
    }

    /// Read the global settings from the process environment
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read the global settings through `lookup`. Unparsable values count as
    /// unset.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let indentation_size = lookup(INDENT_SIZE_ENV)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default();

        let preferred_source = lookup(PREFERRED_SOURCE_ENV).unwrap_or_default();

        Self::new(indentation_size, preferred_source)
    }

    /// Layer the four sources in priority order: flags, config file,
    /// environment, defaults.
    ///
    /// Without an explicit file location in `flags`, `default_config_file`
    /// is used if it exists. A missing default file is fine, a missing
    /// explicit one is an error.
    pub fn from_runtime(
        flags: Configuration,
        environment: Configuration,
        defaults: Configuration,
        default_config_file: &str,
        registry: &Registry,
    ) -> Result<Self, ConfigError> {
        let location = file::resolve_location(flags.config_file_location.as_deref(), default_config_file);

        let file_config = match &location {
            Some(path) => load_file(path, registry)?,
            None => Configuration::default(),
        };

        let mut merged = merge([flags, file_config, environment, defaults]);
        merged.config_file_location = location;

        Ok(merged)
    }

    pub fn config_file_location(&self) -> Option<&Path> {
        self.config_file_location.as_deref()
    }

    pub fn provider_configs(&self) -> impl Iterator<Item = &dyn ProviderConfig> {
        self.provider_configs.values().map(AsRef::as_ref)
    }

    pub fn provider_config(&self, key: &str) -> Option<&dyn ProviderConfig> {
        self.provider_configs.get(key).map(AsRef::as_ref)
    }

    pub fn attach_provider_config(&mut self, config: Box<dyn ProviderConfig>) {
        self.provider_configs
            .insert(config.json_key().to_string(), config);
    }

    /// Give every provider its post-merge pass
    pub fn finalize(&mut self, registry: &Registry) {
        for config in self.provider_configs.values_mut() {
            registry.finalize(config.as_mut());
        }
    }

    /// The configuration of the provider to look words up with
    ///
    /// An empty preferred source falls back to the first provider.
    pub fn preferred_provider_config(&self) -> Result<&dyn ProviderConfig, ConfigError> {
        if !self.preferred_source.is_empty() {
            return self
                .provider_config(&self.preferred_source)
                .ok_or_else(|| ConfigError::UnknownPreferredSource(self.preferred_source.clone()));
        }

        self.provider_configs()
            .next()
            .ok_or(ConfigError::NoProviders)
    }
}
