use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use ttt_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use ttt_common::games::tictactoe::FirstPlayer;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayer,
    pub human_glyph: char,
    pub computer_glyph: char,
    #[serde(default)]
    pub play_again_prompt: bool,
}

fn validate_glyph(name: &str, glyph: char) -> Result<(), String> {
    if glyph.is_whitespace() || glyph.is_control() {
        return Err(format!("{} must be a visible character", name));
    }
    Ok(())
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_glyph("human_glyph", self.human_glyph)?;
        validate_glyph("computer_glyph", self.computer_glyph)?;
        if self.human_glyph == self.computer_glyph {
            return Err(format!(
                "human_glyph and computer_glyph must differ, both are '{}'",
                self.human_glyph
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Ask,
            human_glyph: 'X',
            computer_glyph: 'O',
            play_again_prompt: false,
        }
    }
}
