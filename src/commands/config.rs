use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => handle_show(config),
        Some(("path", _)) => handle_path(),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("reset", _)) => handle_reset(),
        _ => {
            println!("Use 'sysprobe config --help' for more information.");
            Ok(())
        }
    }
}

/// Show the effective configuration (file plus environment overrides)
fn handle_show(config: &Config) -> Result<()> {
    println!("{}", "Effective configuration:".cyan().bold());
    for key in Config::keys() {
        if let Some(value) = config.get(key) {
            println!("  {:<24} {}", key, value);
        }
    }
    Ok(())
}

fn handle_path() -> Result<()> {
    let path = Config::get_config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    // Edit the stored file, not the env-overridden view
    let path = Config::get_config_path()?;
    let mut config = Config::load_from(&path)?;
    config.set(key, value)?;
    config.validate()?;
    config.save_to(&path)?;

    println!(
        "{}",
        format!("✓ {} set to {}", key, config.get(key).unwrap_or_default()).green()
    );
    Ok(())
}

fn handle_reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}
