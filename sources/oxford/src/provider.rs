use std::env;

use clap::{Arg, ArgMatches};
use define_core::Source;
use define_registry::{
    ProvideError, Provider, ProviderConfig, ProviderSettings, Registry, RegistryError, decode,
    downcast, downcast_mut, fill_blank,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::OxfordSource;
use crate::{JSON_KEY, NAME};

pub const APP_ID_ENV: &str = "OXFORD_DICTIONARY_APP_ID";
pub const APP_KEY_ENV: &str = "OXFORD_DICTIONARY_APP_KEY";

const APP_ID_FLAG: &str = "oxford-dictionary-app-id";
const APP_KEY_FLAG: &str = "oxford-dictionary-app-key";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxfordConfig {
    #[serde(rename = "AppID")]
    pub app_id: String,
    #[serde(rename = "AppKey")]
    pub app_key: String,
}

impl ProviderSettings for OxfordConfig {
    const JSON_KEY: &'static str = JSON_KEY;

    fn fill_from(&mut self, lower: &Self) {
        fill_blank(&mut self.app_id, &lower.app_id);
        fill_blank(&mut self.app_key, &lower.app_key);
    }
}

pub struct OxfordProvider;

impl Provider for OxfordProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn json_key(&self) -> &'static str {
        JSON_KEY
    }

    fn args(&self) -> Vec<Arg> {
        vec![
            Arg::new(APP_ID_FLAG)
                .long(APP_ID_FLAG)
                .value_name("ID")
                .help(format!("The app ID for the {NAME}")),
            Arg::new(APP_KEY_FLAG)
                .long(APP_KEY_FLAG)
                .value_name("KEY")
                .help(format!("The app key for the {NAME}")),
        ]
    }

    fn configure(&self, matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        let flag = |id: &str| {
            matches
                .try_get_one::<String>(id)
                .ok()
                .flatten()
                .cloned()
                .unwrap_or_default()
        };

        Box::new(OxfordConfig {
            app_id: flag(APP_ID_FLAG),
            app_key: flag(APP_KEY_FLAG),
        })
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<OxfordConfig>(value)
    }

    /// Credentials from the environment fill whatever flags and the config
    /// file left blank
    fn finalize(&self, config: &mut dyn ProviderConfig) {
        let Some(config) = downcast_mut::<OxfordConfig>(config) else {
            return;
        };

        if let Ok(app_id) = env::var(APP_ID_ENV) {
            fill_blank(&mut config.app_id, &app_id);
        }

        if let Ok(app_key) = env::var(APP_KEY_ENV) {
            fill_blank(&mut config.app_key, &app_key);
        }
    }

    fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        let config = downcast::<OxfordConfig>(config)?;

        if config.app_id.is_empty() {
            return Err(ProvideError::RequiredConfig { key: "AppID" });
        }

        if config.app_key.is_empty() {
            return Err(ProvideError::RequiredConfig { key: "AppKey" });
        }

        let client =
            define_core::http::client().map_err(|e| ProvideError::Construction(Box::new(e)))?;

        Ok(Box::new(OxfordSource::new(
            client,
            config.app_id.clone(),
            config.app_key.clone(),
        )))
    }
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(OxfordProvider)
}
