use clap::Subcommand;

use crate::error::AppError;
use crate::models::config::{self, UserConfig, CONFIG_KEYS};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Change one setting
    Set { key: String, value: String },
    /// Restore every setting to its default
    Reset,
}

pub fn handle_config(
    action: Option<ConfigAction>,
    mut user_config: UserConfig,
) -> Result<(), AppError> {
    match action {
        None => {
            println!("Config file: {}", config::get_config_path()?.display());
            println!();
            println!("codeforces-url: {}", user_config.codeforces_url);
            println!("uva-url:        {}", user_config.uva_url);
            println!("timeout:        {}s", user_config.request_timeout_secs);
            println!("format:         {}", user_config.default_format.as_str());
            println!();
            println!("To change: cplist config set <{}> <value>", CONFIG_KEYS.join("|"));
        }
        Some(ConfigAction::Set { key, value }) => {
            user_config.set(&key, &value)?;
            let path = config::save_config(&user_config)?;
            println!("Set {} to {} in {}", key, value.trim(), path.display());
        }
        Some(ConfigAction::Reset) => {
            let path = config::save_config(&UserConfig::default())?;
            println!("Restored default settings in {}", path.display());
        }
    }
    Ok(())
}
