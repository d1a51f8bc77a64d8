use crate::commands::{CheatPaths, CmdMessage, CmdResult};
use crate::config::CheatConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or edits `config.json` in the data directory.
///
/// Bad keys and bad values come back as error messages, and nothing is written for them.
pub fn run(paths: &CheatPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CheatConfig::load(&paths.data)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            let message = config
                .get(&key)
                .map(CmdMessage::info)
                .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key)));
            result.add_message(message);
        }
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Err(e) => result.add_message(CmdMessage::error(e)),
            Ok(()) => {
                config.save(&paths.data)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                result = result.with_config(config);
            }
        },
    }
    Ok(result)
}
