mod api;
mod provider;

pub use api::OxfordSource;
pub use provider::{APP_ID_ENV, APP_KEY_ENV, OxfordConfig, OxfordProvider, register};

/// Display name of the source
pub const NAME: &str = "Oxford Dictionaries API";

/// Key of the provider in the registry and in config files
pub const JSON_KEY: &str = "OxfordDictionary";
