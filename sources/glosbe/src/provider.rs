use clap::ArgMatches;
use define_core::Source;
use define_registry::{
    ProvideError, Provider, ProviderConfig, ProviderSettings, Registry, RegistryError, decode,
    downcast,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::GlosbeSource;
use crate::{JSON_KEY, NAME};

/// Glosbe needs no credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlosbeConfig {}

impl ProviderSettings for GlosbeConfig {
    const JSON_KEY: &'static str = JSON_KEY;

    fn fill_from(&mut self, _lower: &Self) {}
}

pub struct GlosbeProvider;

impl Provider for GlosbeProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn json_key(&self) -> &'static str {
        JSON_KEY
    }

    fn configure(&self, _matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        Box::new(GlosbeConfig::default())
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<GlosbeConfig>(value)
    }

    fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        downcast::<GlosbeConfig>(config)?;

        let client =
            define_core::http::client().map_err(|e| ProvideError::Construction(Box::new(e)))?;

        Ok(Box::new(GlosbeSource::new(client)))
    }
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(GlosbeProvider)
}
