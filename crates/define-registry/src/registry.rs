use clap::{ArgMatches, Command};
use define_core::Source;
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ProvideError, RegistryError};
use crate::provider::{Provider, ProviderConfig};

/// Provider configurations keyed by their JSON key, in registration order
pub type ProviderConfigs = IndexMap<String, Box<dyn ProviderConfig>>;

/// Explicit, caller-owned collection of providers
#[derive(Default)]
pub struct Registry {
    providers: IndexMap<&'static str, Box<dyn Provider>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its JSON key
    ///
    /// Keys are unique: a second registration under the same key is
    /// rejected and the first one stays in place.
    pub fn register(&mut self, provider: impl Provider + 'static) -> Result<(), RegistryError> {
        let key = provider.json_key();

        if self.providers.contains_key(key) {
            return Err(RegistryError::DuplicateProvider(key.to_string()));
        }

        tracing::debug!("registered provider {key}");
        self.providers.insert(key, Box::new(provider));
        Ok(())
    }

    /// Let every provider contribute its command line flags
    pub fn declare_flags(&self, command: Command) -> Command {
        self.providers
            .values()
            .flat_map(|provider| provider.args())
            .fold(command, |command, arg| command.arg(arg))
    }

    /// Collect each provider's initial configuration from the parsed flags
    pub fn configure_providers(&self, matches: &ArgMatches) -> ProviderConfigs {
        self.providers
            .values()
            .map(|provider| {
                let config = provider.configure(matches);
                (config.json_key().to_string(), config)
            })
            .collect()
    }

    /// Run the provider's post-merge hook for `config`
    pub fn finalize(&self, config: &mut dyn ProviderConfig) {
        match self.providers.get(config.json_key()) {
            Some(provider) => provider.finalize(config),
            None => tracing::warn!("no provider to finalize {}", config.json_key()),
        }
    }

    /// Instantiate the live client matching `config`
    pub fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        let key = config.json_key();
        let provider = self
            .providers
            .get(key)
            .ok_or_else(|| ProvideError::UnknownProvider(key.to_string()))?;

        tracing::debug!("providing source for {key}");
        provider.provide(config)
    }

    /// Decode a raw configuration section for the provider registered
    /// under `key`. Returns `None` for unknown keys.
    pub fn decode_config(
        &self,
        key: &str,
        value: Value,
    ) -> Option<serde_json::Result<Box<dyn ProviderConfig>>> {
        self.providers
            .get(key)
            .map(|provider| provider.decode_config(value))
    }

    pub fn json_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.keys().copied()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.values().map(|provider| provider.name()).collect()
    }

    /// Display name for `config`, falling back to its JSON key
    pub fn provider_name(&self, config: &dyn ProviderConfig) -> &'static str {
        let key = config.json_key();
        self.providers
            .get(key)
            .map(|provider| provider.name())
            .unwrap_or(key)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
