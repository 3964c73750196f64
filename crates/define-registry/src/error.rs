#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("a provider is already registered under {0:?}")]
    DuplicateProvider(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProvideError {
    /// A mandatory provider field is blank
    #[error("required configuration key {key:?} is missing")]
    RequiredConfig { key: &'static str },

    #[error("no provider registered for {0:?}")]
    UnknownProvider(String),

    #[error("configuration does not belong to provider {0:?}")]
    ConfigMismatch(&'static str),

    #[error("failed to construct source: {0}")]
    Construction(#[source] Box<dyn std::error::Error + Send + Sync>),
}
