use crate::Configuration;

/// Merge configurations from highest to lowest priority
///
/// Each field takes the first non-zero value found walking left to right.
/// A zero value (`0`, `""`) is indistinguishable from "unset", so a lower
/// priority source can never be overridden back to zero. Provider configs
/// with the same key are layered the same way through their own
/// `fill_blanks_from`; the merger never looks inside them.
pub fn merge(sources: impl IntoIterator<Item = Configuration>) -> Configuration {
    sources
        .into_iter()
        .fold(Configuration::default(), |mut merged, source| {
            if merged.indentation_size == 0 {
                merged.indentation_size = source.indentation_size;
            }

            if merged.preferred_source.is_empty() {
                merged.preferred_source = source.preferred_source;
            }

            for (key, config) in source.provider_configs {
                match merged.provider_configs.get_mut(&key) {
                    Some(existing) => existing.fill_blanks_from(config.as_ref()),
                    None => {
                        merged.provider_configs.insert(key, config);
                    }
                }
            }

            merged
        })
}
