use super::Outcome;
use crate::config::Config;
use crate::display::{print_info, print_success, print_warning};
use crate::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Get configuration value
    Get {
        /// Section name
        section: String,
        /// Key name
        key: String,
    },
    /// Set configuration value
    Set {
        /// Section name
        section: String,
        /// Key name
        key: String,
        /// Value to set
        value: String,
    },
    /// Remove configuration value
    Unset {
        /// Section name
        section: String,
        /// Key name
        key: String,
    },
    /// Show configuration file path
    Path,
}

pub fn handle(action: ConfigCommands, config: &mut Config) -> Result<Outcome> {
    match action {
        ConfigCommands::Show => {
            let shown = config.show_config();
            if shown.is_empty() {
                print_info("Configuration is empty; using defaults.");
            } else {
                print!("{}", shown);
            }
        }
        ConfigCommands::Get { section, key } => match config.get_value(&section, &key) {
            Some(value) => println!("{}", value),
            None => print_warning(&format!("{}.{} is not set", section, key)),
        },
        ConfigCommands::Set {
            section,
            key,
            value,
        } => {
            config.set_value(&section, &key, &value)?;
            config.save()?;
            print_success(&format!("Set {}.{}", section, key));
        }
        ConfigCommands::Unset { section, key } => {
            if config.unset_value(&section, &key) {
                config.save()?;
                print_success(&format!("Removed {}.{}", section, key));
            } else {
                print_warning(&format!("{}.{} is not set", section, key));
            }
        }
        ConfigCommands::Path => println!("{}", config.path().display()),
    }

    Ok(Outcome::Completed)
}
