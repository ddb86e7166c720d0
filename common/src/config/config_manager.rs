use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config of type `TConfig`.
///
/// The first successful `get_config` caches the result; `set_config` replaces both the
/// stored content and the cache. When the provider has nothing stored, the
/// `Default` config is returned without being cached or written.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        side: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { side: 3 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.side == 0 {
                return Err("side must be positive".to_string());
            }
            Ok(())
        }
    }

    fn manager(
        content: Option<&str>,
    ) -> ConfigManager<InMemoryConfigProvider, SampleConfig, YamlConfigSerializer> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager(None);
        assert_eq!(manager.get_config(), Ok(SampleConfig::default()));
        assert_eq!(manager.content_provider().content(), None);
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = manager(Some("side: 4\n"));
        assert_eq!(manager.get_config(), Ok(SampleConfig { side: 4 }));
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = manager(Some("side: 0\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = manager(Some("side: [not, a, number]\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_set_config_writes_and_caches() {
        let manager = manager(None);
        manager.set_config(&SampleConfig { side: 5 }).unwrap();
        assert_eq!(manager.get_config(), Ok(SampleConfig { side: 5 }));
        let stored = manager.content_provider().content().unwrap();
        assert!(stored.contains("side: 5"));
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { side: 0 }).is_err());
        assert_eq!(manager.content_provider().content(), None);
    }
}
