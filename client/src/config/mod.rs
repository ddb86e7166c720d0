mod config;
mod game_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, get_config_manager};
pub use game_config::GameConfig;
