use crate::commands::{CmdMessage, CmdResult, LinkmartPaths};
use crate::config::LinkmartConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetDefaultLink(String),
    SetAdminPassword { current: String, new: String },
}

pub fn run(paths: &LinkmartPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LinkmartConfig::load(&paths.data)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::SetDefaultLink(url) => {
            config.set_default_link(&url)?;
            config.save(&paths.data)?;
            result.add_message(CmdMessage::success(format!(
                "Default link changed to: {}",
                url
            )));
        }
        ConfigAction::SetAdminPassword { current, new } => {
            config.set_admin_password(&current, &new)?;
            config.save(&paths.data)?;
            result.add_message(CmdMessage::success("Admin password changed."));
        }
    }

    Ok(result.with_config(config))
}
