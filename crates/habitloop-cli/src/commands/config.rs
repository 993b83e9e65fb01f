//! Configuration commands for CLI.

use clap::Subcommand;
use habitloop_core::{Config, CoreError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,
    /// Reset configuration to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| CoreError::Custom(e.to_string()))?;
            print!("{rendered}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("ok");
        }
    }
    Ok(())
}
