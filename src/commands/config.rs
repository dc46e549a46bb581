//! Configuration commands for managing larder settings.

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    println!("{} {}", "directory_url:".dimmed(), config.directory_url);
    println!("{} {}", "catalog_url:".dimmed(), config.catalog_url);
    println!("{} {}", "page_size:".dimmed(), config.page_size);
    println!("{} {}", "remote_timeout:".dimmed(), config.remote_timeout);
    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {} = {}", "Set".green(), key, value);
    Ok(())
}
