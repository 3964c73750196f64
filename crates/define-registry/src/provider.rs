use std::any::Any;
use std::fmt::Debug;

use clap::{Arg, ArgMatches};
use define_core::Source;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProvideError;

/// A pluggable component that knows how to talk to one upstream dictionary API
pub trait Provider: Send + Sync {
    /// Human readable name, used for listing and messages
    fn name(&self) -> &'static str;

    /// Identifier used for registry lookup and as the key of the provider's
    /// section in a serialized configuration
    fn json_key(&self) -> &'static str;

    /// Command line flags contributed by the provider
    fn args(&self) -> Vec<Arg> {
        Vec::new()
    }

    /// Build the initial configuration from parsed command line flags
    fn configure(&self, matches: &ArgMatches) -> Box<dyn ProviderConfig>;

    /// Decode the provider's section of a configuration file
    fn decode_config(&self, value: Value) -> serde_json::Result<Box<dyn ProviderConfig>>;

    /// Post-merge hook, run once every configuration layer has been applied
    fn finalize(&self, _config: &mut dyn ProviderConfig) {}

    /// Construct the live client
    fn provide(&self, config: &dyn ProviderConfig) -> Result<Box<dyn Source>, ProvideError>;
}

/// Type-erased, provider-owned configuration record
pub trait ProviderConfig: Debug + Send + Sync {
    fn json_key(&self) -> &'static str;

    fn to_json(&self) -> serde_json::Result<Value>;

    /// Fill this config's blank fields from a lower priority config of the
    /// same provider. Configs of other types are ignored.
    fn fill_blanks_from(&mut self, lower: &dyn ProviderConfig);

    fn clone_box(&self) -> Box<dyn ProviderConfig>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete provider settings; implementing this is enough to get a
/// [`ProviderConfig`].
pub trait ProviderSettings:
    Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static
{
    const JSON_KEY: &'static str;

    fn fill_from(&mut self, lower: &Self);
}

impl<T: ProviderSettings> ProviderConfig for T {
    fn json_key(&self) -> &'static str {
        T::JSON_KEY
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn fill_blanks_from(&mut self, lower: &dyn ProviderConfig) {
        if let Some(lower) = lower.as_any().downcast_ref::<T>() {
            self.fill_from(lower);
        }
    }

    fn clone_box(&self) -> Box<dyn ProviderConfig> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn ProviderConfig> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Decode a raw JSON section into the settings type `T`
pub fn decode<T: ProviderSettings>(value: Value) -> serde_json::Result<Box<dyn ProviderConfig>> {
    let settings: T = serde_json::from_value(value)?;
    Ok(Box::new(settings))
}

/// Borrow a type-erased config as the provider's concrete settings
pub fn downcast<T: ProviderSettings>(config: &dyn ProviderConfig) -> Result<&T, ProvideError> {
    config
        .as_any()
        .downcast_ref::<T>()
        .ok_or(ProvideError::ConfigMismatch(T::JSON_KEY))
}

pub fn downcast_mut<T: ProviderSettings>(config: &mut dyn ProviderConfig) -> Option<&mut T> {
    config.as_any_mut().downcast_mut::<T>()
}

/// Copy `lower` into `target` when `target` is blank
pub fn fill_blank(target: &mut String, lower: &str) {
    if target.is_empty() && !lower.is_empty() {
        *target = lower.to_string();
    }
}
