//! Theme configuration for scrub-player
//!
//! Provides configurable colors for the playback console.
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/scrub-player/theme.yaml

use iced::Color;
use scrub_widgets::ConsolePalette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global palette instance (initialized once at startup)
static PALETTE: OnceLock<ConsolePalette> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Console colors
    pub console: ConsoleColors,
}

/// Console color configuration
///
/// Colors are specified as hex strings (e.g., "#555555")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleColors {
    /// Backdrop behind the controls (default: dark gray)
    pub backdrop: String,
    /// Unfilled slider track (default: black)
    pub track_back: String,
    /// Filled slider track (default: gray)
    pub track_front: String,
    /// Slider drag handle (default: white)
    pub handle: String,
    /// Time label text (default: white)
    pub label_text: String,
}

impl Default for ConsoleColors {
    fn default() -> Self {
        Self {
            backdrop: "#555555".to_string(),
            track_back: "#000000".to_string(),
            track_front: "#808080".to_string(),
            handle: "#FFFFFF".to_string(),
            label_text: "#FFFFFF".to_string(),
        }
    }
}

impl ConsoleColors {
    /// Build the widget palette used by view code
    pub fn to_palette(&self) -> ConsolePalette {
        ConsolePalette {
            backdrop: parse_hex_color(&self.backdrop),
            track_back: parse_hex_color(&self.track_back),
            track_front: parse_hex_color(&self.track_front),
            handle: parse_hex_color(&self.handle),
            label_text: parse_hex_color(&self.label_text),
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

/// Get the default theme file path
///
/// Returns: ~/.config/scrub-player/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("scrub-player")
        .join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ThemeConfig {
    log::info!("load_theme: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_theme: Theme file doesn't exist, using defaults");
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("load_theme: Failed to parse theme: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_theme: Failed to read theme file: {}, using defaults",
                e
            );
            ThemeConfig::default()
        }
    }
}

/// Initialize the global palette from the theme file (call once at startup)
pub fn init_theme() {
    let config = load_theme(&default_theme_path());
    if PALETTE.set(config.console.to_palette()).is_err() {
        log::warn!("Theme already initialized");
    }
}

/// Get the console palette
///
/// Returns configured colors from theme.yaml, or defaults if not initialized.
pub fn palette() -> &'static ConsolePalette {
    PALETTE.get_or_init(|| ConsoleColors::default().to_palette())
}
