//! Config command implementation

use crate::config::{ConfigKey, GlobalConfig};
use anyhow::Result;

/// Execute the config command
pub fn execute(key: String, value: Option<String>) -> Result<()> {
    let key = ConfigKey::parse(&key)?;
    match value {
        Some(value) => {
            let mut config = GlobalConfig::load()?;
            config.set(key, value);
            config.save()?;
        }
        None => {
            let config = GlobalConfig::load()?;
            if let Some(value) = config.get(key) {
                println!("{value}");
            }
        }
    }
    Ok(())
}
