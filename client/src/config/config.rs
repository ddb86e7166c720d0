use std::path::{Path, PathBuf};

use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub log_prefix: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}
