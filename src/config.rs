//! Application settings
//!
//! A small TOML file next to the stored game data. Auto-created with
//! defaults on first use so `gambit chat` works out of the box.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default endpoint of the coach chat backend.
const DEFAULT_CHAT_ENDPOINT: &str =
    "https://functions.poehali.dev/6b8cbe2c-f0a6-4b5d-acda-da8e8be7b661";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where `gambit chat` sends user messages.
    pub chat_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the data directory.
    /// If no file exists, one is created with defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.toml");

        if !path.exists() {
            let settings = Self::default();
            let content =
                toml::to_string_pretty(&settings).context("Failed to serialize default settings")?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_auto_creates_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
        assert!(dir.path().join("config.toml").exists());

        // Second load reads the file it just wrote
        let again = Settings::load(dir.path()).unwrap();
        assert_eq!(again.chat_endpoint, settings.chat_endpoint);
    }
}
