use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RecipeConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    result.config_path = Some(RecipeConfig::path(config_dir));

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => result.add_message(CmdMessage::warning(format!(
                "Unknown config key: {}",
                key
            ))),
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key).unwrap_or(value)
            )));
        }
    }

    Ok(result.with_config(config))
}
