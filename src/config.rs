use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Event poll timeout; also the animation frame interval.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_ripple_ms")]
    pub ripple_ms: u64,

    #[serde(default = "default_copied_ms")]
    pub copied_ms: u64,

    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_tick_ms() -> u64 {
    100
}

fn default_ripple_ms() -> u64 {
    600
}

fn default_copied_ms() -> u64 {
    2000
}

fn default_toast_ms() -> u64 {
    3500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            ripple_ms: default_ripple_ms(),
            copied_ms: default_copied_ms(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn copied_lifetime(&self) -> Duration {
        Duration::from_millis(self.copied_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config in {}", path.as_ref().display()))
    }

    /// Load from the platform config directory; a missing file means
    /// defaults, a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cursorpeek").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_ui_timings() {
        let config = Config::default();
        assert_eq!(config.ripple_lifetime(), Duration::from_millis(600));
        assert_eq!(config.copied_lifetime(), Duration::from_millis(2000));
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            tick_ms: 50,
            ripple_ms: 300,
            copied_ms: 1000,
            toast_ms: 2500,
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.tick_ms, 50);
        assert_eq!(loaded.ripple_ms, 300);
        assert_eq!(loaded.copied_ms, 1000);
        assert_eq!(loaded.toast_ms, 2500);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = Config::from_toml_str("tick_ms = 200\n").unwrap();
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.ripple_ms, 600);
        assert_eq!(config.copied_ms, 2000);
        assert_eq!(config.toast_ms, 3500);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = \"fast\"").unwrap();
        assert!(Config::load_from_file(&path).is_err());
    }
}
