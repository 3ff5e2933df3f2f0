//! Configuration loading
//!
//! Defaults are embedded from `.config/config.json5` and merged with an
//! optional user file from the platform config directory. Unlike most of
//! the loader's ancestors, a missing user file is not an error: the counter
//! runs fine on its built-in bindings.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default(
                "_data_dir",
                data_dir.to_str().ok_or_else(|| {
                    ConfigError::Message("data dir is not valid UTF-8".to_string())
                })?,
            )?
            .set_default(
                "_config_dir",
                config_dir.to_str().ok_or_else(|| {
                    ConfigError::Message("config dir is not valid UTF-8".to_string())
                })?,
            )?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!("No user configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings under user config (flat mapping)
        for (keyseq, msg) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*msg);
        }
        for (keyseq, msg) in KeyBindings::defaults().iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*msg);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::Msg;

    #[test]
    fn test_embedded_defaults_parse() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config must parse");

        let space = vec![KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty())];
        let q = vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())];

        assert_eq!(cfg.keybindings.get(&space), Some(&Msg::Increment));
        assert_eq!(cfg.keybindings.get(&q), Some(&Msg::Quit));
    }

    #[test]
    fn test_embedded_defaults_match_builtin() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        assert_eq!(cfg.keybindings, KeyBindings::defaults());
    }
}
