mod api;
mod provider;

pub use api::GlosbeSource;
pub use provider::{GlosbeConfig, GlosbeProvider, register};

/// Display name of the source
pub const NAME: &str = "Glosbe API";

/// Key of the provider in the registry and in config files
pub const JSON_KEY: &str = "GlosbeAPI";
