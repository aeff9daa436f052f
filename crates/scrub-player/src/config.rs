//! Player configuration for scrub-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/scrub-player/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playback settings (duration of the simulated clip, start position)
    pub playback: PlaybackConfig,
    /// Display settings (tick cadence, window size)
    pub display: DisplayConfig,
}

/// Playback configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Length of the simulated clip in seconds
    pub duration_secs: f64,
    /// Position to start at in seconds
    pub start_secs: f64,
    /// Start playing immediately instead of paused
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration_secs: 3600.0,
            start_secs: 0.0,
            autoplay: false,
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// UI tick interval in milliseconds (drives the clock and redraws)
    pub tick_ms: u64,
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33, // ~30fps, plenty for a control strip
            window_width: 960.0,
            window_height: 540.0,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/scrub-player/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("scrub-player")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - duration: {:.1}s, start: {:.1}s, tick: {}ms",
                    config.playback.duration_secs,
                    config.playback.start_secs,
                    config.display.tick_ms
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.playback.duration_secs, 3600.0);
        assert_eq!(config.playback.start_secs, 0.0);
        assert!(!config.playback.autoplay);
        assert_eq!(config.display.tick_ms, 33);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PlayerConfig {
            playback: PlaybackConfig {
                duration_secs: 120.0,
                start_secs: 30.0,
                autoplay: true,
            },
            display: DisplayConfig {
                tick_ms: 16,
                window_width: 1280.0,
                window_height: 720.0,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.playback.duration_secs, 120.0);
        assert_eq!(parsed.playback.start_secs, 30.0);
        assert!(parsed.playback.autoplay);
        assert_eq!(parsed.display.tick_ms, 16);
        assert_eq!(parsed.display.window_width, 1280.0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: PlayerConfig =
            serde_yaml::from_str("playback:\n  duration_secs: 90.0\n").unwrap();
        assert_eq!(parsed.playback.duration_secs, 90.0);
        assert_eq!(parsed.playback.start_secs, 0.0);
        assert_eq!(parsed.display.tick_ms, 33);
    }
}
