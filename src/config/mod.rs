// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode of the demo window
//! - `[toast]` - Replace policy, display and fade durations, easing, placement
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `FADE_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use fade_toast::config;
//! use fade_toast::ui::toast::Policy;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toast.policy = Some(Policy::DropWhileActive);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{ControllerSettings, DisplayDuration, Easing, FadeDuration, Policy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Window theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast behaviour and placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// What to do with `show` calls while a toast is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,

    /// Display time used when `show` is called without a duration.
    #[serde(
        default = "default_display_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_duration_ms: Option<u64>,

    /// Fade-in/fade-out length.
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,

    /// Fade curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,

    /// Distance between the toast and the bottom edge, in pixels.
    #[serde(
        default = "default_bottom_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom_offset: Option<f32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            policy: Some(Policy::default()),
            display_duration_ms: default_display_duration_ms(),
            fade_duration_ms: default_fade_duration_ms(),
            easing: Some(Easing::default()),
            bottom_offset: default_bottom_offset(),
        }
    }
}

impl ToastConfig {
    /// Resolves the section into controller settings, filling gaps with defaults.
    #[must_use]
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            policy: self.policy.unwrap_or_default(),
            default_duration: DisplayDuration::from_millis(
                self.display_duration_ms
                    .unwrap_or(DEFAULT_DISPLAY_DURATION_MS),
            ),
            fade: FadeDuration::from_millis(
                self.fade_duration_ms.unwrap_or(DEFAULT_FADE_DURATION_MS),
            ),
            easing: self.easing.unwrap_or_default(),
        }
    }

    /// Bottom offset clamped to `0..=MAX_BOTTOM_OFFSET`.
    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        let offset = self.bottom_offset.unwrap_or(DEFAULT_BOTTOM_OFFSET);
        if offset.is_finite() {
            offset.clamp(0.0, MAX_BOTTOM_OFFSET)
        } else {
            DEFAULT_BOTTOM_OFFSET
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_display_duration_ms() -> Option<u64> {
    Some(DEFAULT_DISPLAY_DURATION_MS)
}

fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

fn default_bottom_offset() -> Option<f32> {
    Some(DEFAULT_BOTTOM_OFFSET)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("{CONFIG_FILE} could not be read; using defaults")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            toast: ToastConfig {
                policy: Some(Policy::DropWhileActive),
                display_duration_ms: Some(1500),
                fade_duration_ms: Some(120),
                easing: Some(Easing::Linear),
                bottom_offset: Some(64.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\npolicy = \"queue\"\n").expect("write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_section_fills_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\npolicy = \"drop-while-active\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.toast.policy, Some(Policy::DropWhileActive));
        assert_eq!(
            loaded.toast.display_duration_ms,
            Some(DEFAULT_DISPLAY_DURATION_MS)
        );
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn controller_settings_use_section_values() {
        let section = ToastConfig {
            policy: Some(Policy::DropWhileActive),
            display_duration_ms: Some(750),
            fade_duration_ms: Some(9_999),
            easing: None,
            bottom_offset: None,
        };
        let settings = section.controller_settings();

        assert_eq!(settings.policy, Policy::DropWhileActive);
        assert_eq!(
            settings.default_duration.as_duration(),
            Duration::from_millis(750)
        );
        assert_eq!(settings.fade.as_millis(), MAX_FADE_DURATION_MS);
        assert_eq!(settings.easing, Easing::EaseInOut);
    }

    #[test]
    fn bottom_offset_is_clamped() {
        let mut section = ToastConfig::default();
        assert_eq!(section.bottom_offset(), DEFAULT_BOTTOM_OFFSET);

        section.bottom_offset = Some(-5.0);
        assert_eq!(section.bottom_offset(), 0.0);

        section.bottom_offset = Some(f32::NAN);
        assert_eq!(section.bottom_offset(), DEFAULT_BOTTOM_OFFSET);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.toast.policy, Some(Policy::Replace));
        assert_eq!(config.toast.display_duration_ms, Some(3000));
        assert_eq!(config.toast.fade_duration_ms, Some(200));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }
}
