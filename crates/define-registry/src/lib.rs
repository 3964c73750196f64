mod error;
mod provider;
mod registry;

pub use error::{ProvideError, RegistryError};
pub use provider::{
    Provider, ProviderConfig, ProviderSettings, decode, downcast, downcast_mut, fill_blank,
};
pub use registry::{ProviderConfigs, Registry};
