use define_registry::{ProviderConfigs, Registry};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer, de};
use serde_json::Value;

use crate::Configuration;

/// The named, provider-independent part of the serialized form
#[derive(Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct BaseFields {
    indentation_size: u32,
    preferred_source: String,
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut sections = Vec::with_capacity(self.provider_configs.len());

        for config in self.provider_configs.values() {
            let value = config.to_json().map_err(S::Error::custom)?;

            // Providers without any settings are left out
            if matches!(&value, Value::Object(fields) if fields.is_empty()) || value.is_null() {
                continue;
            }

            sections.push((config.json_key(), value));
        }

        let mut map = serializer.serialize_map(Some(2 + sections.len()))?;
        map.serialize_entry("IndentationSize", &self.indentation_size)?;
        map.serialize_entry("PreferredSource", &self.preferred_source)?;
        for (key, value) in &sections {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Configuration {
    /// Decode a configuration, picking up the sections of every provider
    /// known to `registry`. Other keys are ignored.
    pub fn from_json(data: &str, registry: &Registry) -> serde_json::Result<Self> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_str(data)?;
        let base = BaseFields::deserialize(&value)?;

        let Value::Object(mut sections) = value else {
            return Err(de::Error::custom("configuration must be a JSON object"));
        };

        let mut provider_configs = ProviderConfigs::new();
        for key in registry.json_keys() {
            let Some(section) = sections.remove(key) else {
                continue;
            };

            if let Some(decoded) = registry.decode_config(key, section) {
                provider_configs.insert(key.to_string(), decoded?);
            }
        }

        Ok(Self::new(base.indentation_size, base.preferred_source)
            .with_provider_configs(provider_configs))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
