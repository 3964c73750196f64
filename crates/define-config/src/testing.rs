use clap::{Arg, ArgMatches};
use define_core::{LookupResult, Source, SourceError};
use define_registry::{
    ProvideError, Provider, ProviderConfig, ProviderSettings, Registry, decode, downcast,
    downcast_mut, fill_blank,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl ProviderSettings for KeyConfig {
    const JSON_KEY: &'static str = "KeyAPI";

    fn fill_from(&mut self, lower: &Self) {
        fill_blank(&mut self.api_key, &lower.api_key);
        fill_blank(&mut self.endpoint, &lower.endpoint);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionConfig {
    pub region: String,
}

impl ProviderSettings for RegionConfig {
    const JSON_KEY: &'static str = "RegionAPI";

    fn fill_from(&mut self, lower: &Self) {
        fill_blank(&mut self.region, &lower.region);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlainConfig {}

impl ProviderSettings for PlainConfig {
    const JSON_KEY: &'static str = "Plain";

    fn fill_from(&mut self, _lower: &Self) {}
}

struct NamedSource(&'static str);

#[async_trait::async_trait]
impl Source for NamedSource {
    fn name(&self) -> &str {
        self.0
    }

    async fn define(&self, word: &str) -> Result<LookupResult, SourceError> {
        Err(SourceError::EmptyResult {
            word: word.to_string(),
        })
    }
}

pub struct KeyProvider;

impl Provider for KeyProvider {
    fn name(&self) -> &'static str {
        "Key API"
    }

    fn json_key(&self) -> &'static str {
        KeyConfig::JSON_KEY
    }

    fn args(&self) -> Vec<Arg> {
        vec![Arg::new("api-key").long("api-key")]
    }

    fn configure(&self, matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        Box::new(KeyConfig {
            api_key: matches.get_one::<String>("api-key").cloned().unwrap_or_default(),
            endpoint: String::new(),
        })
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<KeyConfig>(value)
    }

    fn finalize(&self, config: &mut dyn ProviderConfig) {
        if let Some(config) = downcast_mut::<KeyConfig>(config) {
            fill_blank(&mut config.api_key, "finalized-key");
        }
    }

    fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        downcast::<KeyConfig>(config)?;
        Ok(Box::new(NamedSource(self.name())))
    }
}

pub struct PlainProvider;

impl Provider for PlainProvider {
    fn name(&self) -> &'static str {
        "Plain API"
    }

    fn json_key(&self) -> &'static str {
        PlainConfig::JSON_KEY
    }

    fn configure(&self, _matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        Box::new(PlainConfig {})
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<PlainConfig>(value)
    }

    fn provide(&self, _config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        Ok(Box::new(NamedSource(self.name())))
    }
}

pub struct RegionProvider;

impl Provider for RegionProvider {
    fn name(&self) -> &'static str {
        "Region API"
    }

    fn json_key(&self) -> &'static str {
        RegionConfig::JSON_KEY
    }

    fn configure(&self, _matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        Box::new(RegionConfig::default())
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<RegionConfig>(value)
    }

    fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        downcast::<RegionConfig>(config)?;
        Ok(Box::new(NamedSource(self.name())))
    }
}

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(PlainProvider).unwrap();
    registry.register(KeyProvider).unwrap();
    registry.register(RegionProvider).unwrap();
    registry
}

pub fn key_config(api_key: &str, endpoint: &str) -> Box<dyn ProviderConfig> {
    Box::new(KeyConfig {
        api_key: api_key.to_string(),
        endpoint: endpoint.to_string(),
    })
}

pub fn region_config(region: &str) -> Box<dyn ProviderConfig> {
    Box::new(RegionConfig {
        region: region.to_string(),
    })
}
