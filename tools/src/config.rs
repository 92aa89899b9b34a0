use config::Config;
use serde::Deserialize;
use storage::StoreConfiguration;

use crate::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
pub struct FormsmithConfiguration {
    #[serde(default)]
    pub store: StoreConfiguration,
    pub log: Option<String>,
}

impl FormsmithConfiguration {
    pub fn load() -> Result<Self, ToolError> {
        let default_store = StoreConfiguration::default();
        let loaded = Config::builder()
            .add_source(
                config::Environment::with_prefix("FORMSMITH")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .separator("__")
                    .prefix_separator("_"),
            )
            .set_default("store.id_length", default_store.id_length as u64)?
            .set_default(
                "store.name_suffix_length",
                default_store.name_suffix_length as u64,
            )?
            .build()?;
        let configuration: Self = loaded.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ToolError> {
        Ok(self.store.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let configuration = FormsmithConfiguration::load().unwrap();
        if std::env::var_os("FORMSMITH_STORE__ID_LENGTH").is_none() {
            assert_eq!(configuration.store.id_length, 8);
        }
        if std::env::var_os("FORMSMITH_STORE__NAME_SUFFIX_LENGTH").is_none() {
            assert_eq!(configuration.store.name_suffix_length, 4);
        }
    }

    #[test]
    fn zero_id_length_is_rejected() {
        let configuration = FormsmithConfiguration {
            store: StoreConfiguration {
                id_length: 0,
                name_suffix_length: 4,
            },
            log: None,
        };
        assert!(matches!(
            configuration.validate(),
            Err(ToolError::Store(storage::StoreError::InvalidIdLength { length: 0, .. }))
        ));
    }
}
