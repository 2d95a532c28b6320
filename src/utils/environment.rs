use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "history-splitter";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default config file path (`<config_dir>/history-splitter/config.toml`)
pub fn default_config_path() -> Result<PathBuf> {
    let config_base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(config_path_under(config_base))
}

fn config_path_under(config_base: PathBuf) -> PathBuf {
    config_base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = config_path_under(PathBuf::from("/home/testuser/.config"));
        assert_eq!(path, PathBuf::from("/home/testuser/.config/history-splitter/config.toml"));
    }
}
