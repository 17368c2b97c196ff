//! Init command - Initialize a new configuration file

use colored::Colorize;
use std::path::Path;

use super::{write_output, InitArgs};
use crate::cli::exit_codes;
use crate::config::{Config, Preset, CONFIG_FILENAME};
use crate::error::{A11yLensError, ConfigError};

pub async fn execute(args: InitArgs) -> Result<i32, A11yLensError> {
    let config_path = Path::new(CONFIG_FILENAME);
    let preset = write_config(config_path, args.preset.as_deref(), args.force)?;

    println!(
        "{} Created {} with preset '{}'",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan(),
        preset.name().yellow()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", CONFIG_FILENAME.cyan());
    println!("  2. Run {} to check a page", "a11ylens scan <FILE>".cyan());
    println!(
        "  3. Run {} to export a report",
        "a11ylens report <FILE>".cyan()
    );

    Ok(exit_codes::SUCCESS)
}

/// Write a preset configuration to `path`
fn write_config(path: &Path, preset: Option<&str>, force: bool) -> Result<Preset, A11yLensError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.display().to_string()).into());
    }

    let preset = match preset {
        Some(name) => {
            Preset::from_name(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
        }
        None => Preset::Baseline,
    };

    let config = Config::from_preset(preset);
    write_output(path, &config.to_toml()?)?;
    tracing::debug!(path = %path.display(), preset = preset.name(), "Configuration written");

    Ok(preset)
}
