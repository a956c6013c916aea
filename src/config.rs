//! Overlay settings registry
//!
//! Supports multiple profiles with different settings, layered under
//! environment overrides. The hooks only ever read settings through this
//! registry; persistence of the underlying files belongs to the host glue.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from the console-facing write path of the registry
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Variable \"{0}\" not found.")]
    UnknownKey(String),
    #[error("Variable \"{0}\" cannot be set from the console.")]
    NotSettable(String),
}

/// One remappable control setting: the registry key and the logical
/// control name currently assigned to it. Ordered by value so mappings
/// that share a control sort adjacently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMapping {
    pub key: &'static str,
    pub value: String,
}

impl ControlMapping {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl Ord for ControlMapping {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.key.cmp(other.key))
    }
}

impl PartialOrd for ControlMapping {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// User-configurable overlay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical control held to loot a single item at a time
    pub single_loot_modifier: String,
    /// Logical control that takes the highlighted stack
    pub take_method: String,
    /// Logical control that takes everything in the container
    pub take_all_method: String,
    /// Logical control that falls back to the host's own activation
    pub search_method: String,
    /// Skip installing the crosshair prompt-text hooks entirely
    pub disable_acti_text_hook: bool,
    /// Keep the overlay closed for empty containers
    pub disable_if_empty: bool,
    /// Disable the hold-modifier single-loot behavior
    pub disable_single_loot: bool,
    /// Most item rows the overlay lists at once
    pub item_limit: u32,
    /// Overlay window scale, percent
    pub scale: i32,
    pub position_x: i32,
    pub position_y: i32,
    /// Overlay window opacity, percent
    pub opacity: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            single_loot_modifier: "sprint".to_string(),
            take_method: "activate".to_string(),
            take_all_method: "readyWeapon".to_string(),
            search_method: "togglePOV".to_string(),
            disable_acti_text_hook: false,
            disable_if_empty: false,
            disable_single_loot: false,
            item_limit: 100,
            scale: 100,
            position_x: -1,
            position_y: -1,
            opacity: 100,
        }
    }
}

impl Settings {
    /// Loads settings based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{profile}.toml (profile-specific overrides)
    /// 3. Environment variables with prefix LOOT_ (e.g., LOOT_ITEM_LIMIT=50)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            .add_source(
                Environment::with_prefix("LOOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Loads settings using the LOOT_PROFILE environment variable,
    /// defaulting to "default" if not set
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("LOOT_PROFILE").unwrap_or_else(|_| "default".to_string());
        Self::load(&profile)
    }

    /// Loads settings from one explicit file, for host glue that already
    /// knows where its settings live
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder().add_source(File::from(path)).build()?;
        config.try_deserialize()
    }

    /// The four remappable control settings in registry order
    pub fn control_mappings(&self) -> Vec<ControlMapping> {
        vec![
            ControlMapping::new("singleLootModifier", &self.single_loot_modifier),
            ControlMapping::new("takeMethod", &self.take_method),
            ControlMapping::new("takeAllMethod", &self.take_all_method),
            ControlMapping::new("searchMethod", &self.search_method),
        ]
    }

    /// Writes a named setting from the console path. Returns the applied
    /// value rendered for display.
    ///
    /// The control mapping settings are strings and cannot take an integer,
    /// so they report [`SettingsError::NotSettable`] instead of coercing.
    pub fn set(&mut self, name: &str, value: i32) -> Result<String, SettingsError> {
        match name {
            "disableActiTextHook" => {
                self.disable_acti_text_hook = value != 0;
                Ok(self.disable_acti_text_hook.to_string())
            }
            "disableIfEmpty" => {
                self.disable_if_empty = value != 0;
                Ok(self.disable_if_empty.to_string())
            }
            "disableSingleLoot" => {
                self.disable_single_loot = value != 0;
                Ok(self.disable_single_loot.to_string())
            }
            "itemLimit" => {
                self.item_limit = value.max(0) as u32;
                Ok(self.item_limit.to_string())
            }
            "scale" => {
                self.scale = value;
                Ok(self.scale.to_string())
            }
            "positionX" => {
                self.position_x = value;
                Ok(self.position_x.to_string())
            }
            "positionY" => {
                self.position_y = value;
                Ok(self.position_y.to_string())
            }
            "opacity" => {
                self.opacity = value;
                Ok(self.opacity.to_string())
            }
            "singleLootModifier" | "takeMethod" | "takeAllMethod" | "searchMethod" => {
                Err(SettingsError::NotSettable(name.to_string()))
            }
            _ => Err(SettingsError::UnknownKey(name.to_string())),
        }
    }
}
