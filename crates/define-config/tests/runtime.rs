use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use define_config::{ConfigError, Configuration};
use define_core::{LookupResult, Source, SourceError};
use define_registry::{
    ProvideError, Provider, ProviderConfig, ProviderConfigs, ProviderSettings, Registry, decode,
    downcast, fill_blank,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AppConfig {
    app_id: String,
}

impl ProviderSettings for AppConfig {
    const JSON_KEY: &'static str = "App";

    fn fill_from(&mut self, lower: &Self) {
        fill_blank(&mut self.app_id, &lower.app_id);
    }
}

struct AppSource;

#[async_trait::async_trait]
impl Source for AppSource {
    fn name(&self) -> &str {
        "App"
    }

    async fn define(&self, word: &str) -> Result<LookupResult, SourceError> {
        Err(SourceError::EmptyResult {
            word: word.to_string(),
        })
    }
}

struct AppProvider;

impl Provider for AppProvider {
    fn name(&self) -> &'static str {
        "App Dictionary"
    }

    fn json_key(&self) -> &'static str {
        AppConfig::JSON_KEY
    }

    fn configure(&self, _matches: &ArgMatches) -> Box<dyn ProviderConfig> {
        Box::new(AppConfig::default())
    }

    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
        decode::<AppConfig>(value)
    }

    fn provide(&self, _config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError> {
        Ok(Box::new(AppSource))
    }
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(AppProvider).unwrap();
    registry
}

fn flags(config_file: Option<PathBuf>) -> Configuration {
    let mut provider_configs = ProviderConfigs::new();
    provider_configs.insert("App".to_string(), Box::new(AppConfig::default()));

    Configuration::default()
        .with_config_file_location(config_file)
        .with_provider_configs(provider_configs)
}

fn defaults() -> Configuration {
    Configuration::new(2, "App")
}

#[test]
fn test_missing_default_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let default_file = dir.path().join("missing.json");

    let conf = Configuration::from_runtime(
        flags(None),
        Configuration::new(0, ""),
        defaults(),
        default_file.to_str().unwrap(),
        &registry(),
    )
    .unwrap();

    assert_eq!(conf.indentation_size, 2);
    assert_eq!(conf.preferred_source, "App");
    assert!(conf.config_file_location().is_none());
}

#[test]
fn test_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("missing.json");

    let err = Configuration::from_runtime(
        flags(Some(explicit)),
        Configuration::default(),
        defaults(),
        "",
        &registry(),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile));
    assert_eq!(err.to_string(), "error reading config file");
}

#[test]
fn test_default_file_layers_between_flags_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let default_file = dir.path().join("define.conf.json");
    fs::write(
        &default_file,
        r#"{"IndentationSize": 6, "PreferredSource": "", "App": {"AppId": "from-file"}}"#,
    )
    .unwrap();

    let env = Configuration::new(4, "App");
    let conf = Configuration::from_runtime(
        flags(None),
        env,
        defaults(),
        default_file.to_str().unwrap(),
        &registry(),
    )
    .unwrap();

    assert_eq!(conf.indentation_size, 6);
    assert_eq!(conf.preferred_source, "App");
    assert_eq!(conf.config_file_location(), Some(default_file.as_path()));

    let app = downcast::<AppConfig>(conf.provider_config("App").unwrap()).unwrap();
    assert_eq!(app.app_id, "from-file");
}

#[test]
fn test_flags_beat_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("custom.json");
    fs::write(&file, r#"{"IndentationSize": 6}"#).unwrap();

    let mut flag_layer = flags(Some(file));
    flag_layer.indentation_size = 1;

    let conf = Configuration::from_runtime(
        flag_layer,
        Configuration::default(),
        defaults(),
        "",
        &registry(),
    )
    .unwrap();

    assert_eq!(conf.indentation_size, 1);
}

#[test]
fn test_unparsable_file_hides_details() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.json");
    fs::write(&file, "{ not json").unwrap();

    let err = Configuration::from_runtime(
        flags(Some(file)),
        Configuration::default(),
        defaults(),
        "",
        &registry(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "error reading config file");
}

#[test]
fn test_empty_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.json");
    fs::write(&file, "").unwrap();

    let conf = Configuration::from_runtime(
        flags(Some(file)),
        Configuration::default(),
        defaults(),
        "",
        &registry(),
    )
    .unwrap();

    assert_eq!(conf.indentation_size, 2);
}
