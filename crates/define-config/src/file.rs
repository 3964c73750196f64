use std::fs;
use std::path::{Path, PathBuf};

use define_registry::Registry;

use crate::{ConfigError, Configuration};

/// Expand a leading `~` to the user's home directory
pub fn expand_home(location: &str) -> PathBuf {
    let rest = match location.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(location),
    };

    match dirs_next::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(location),
    }
}

/// Pick the config file to load, if any
///
/// An explicit location is always returned, even if it does not exist, so
/// reading it fails later. An empty one counts as not given. The default
/// location is only used when present.
pub(crate) fn resolve_location(explicit: Option<&Path>, default_location: &str) -> Option<PathBuf> {
    if let Some(explicit) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        return Some(expand_home(&explicit.to_string_lossy()));
    }

    if default_location.is_empty() {
        return None;
    }

    let default_location = expand_home(default_location);

    if default_location.exists() {
        Some(default_location)
    } else {
        tracing::debug!("no config file at {}", default_location.display());
        None
    }
}

/// Load a configuration file, decoding provider sections known to `registry`
pub fn load_file(path: &Path, registry: &Registry) -> Result<Configuration, ConfigError> {
    tracing::info!("Loading config file {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| {
        tracing::debug!("failed to read {}: {e}", path.display());
        ConfigError::ReadFile
    })?;

    Configuration::from_json(&contents, registry).map_err(|e| {
        tracing::debug!("failed to parse {}: {e}", path.display());
        ConfigError::ReadFile
    })
}
