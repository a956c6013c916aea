//! Logical control roles and their physical bindings

use enum_map::{Enum, EnumMap, enum_map};
use tracing::error;

use crate::overlay::Platform;

/// Abstract control roles the mapping settings can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum LogicalControl {
    Activate,
    ReadyWeapon,
    TogglePov,
    Jump,
    Sprint,
    Sneak,
    Shout,
    ToggleRun,
    AutoMove,
    Favorites,
    /// Placeholder for slots that must never trigger an action
    None,
}

impl LogicalControl {
    /// Parses the spelling used by the mapping settings. Favorites and
    /// None are not remappable and have no spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "activate" => Some(Self::Activate),
            "readyWeapon" => Some(Self::ReadyWeapon),
            "togglePOV" => Some(Self::TogglePov),
            "jump" => Some(Self::Jump),
            "sprint" => Some(Self::Sprint),
            "sneak" => Some(Self::Sneak),
            "shout" => Some(Self::Shout),
            "toggleRun" => Some(Self::ToggleRun),
            "autoMove" => Some(Self::AutoMove),
            _ => None,
        }
    }
}

/// Physical binding strings for every control role, plus the extra
/// bindings controller resolution and the menu gesture need.
///
/// The host owns the real table; this is a read-only snapshot taken at
/// install time.
#[derive(Debug, Clone)]
pub struct InputBindings {
    controls: EnumMap<LogicalControl, String>,
    charge_item: String,
    journal: String,
    pause: String,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            controls: enum_map! {
                LogicalControl::Activate => "Activate".to_string(),
                LogicalControl::ReadyWeapon => "Ready Weapon".to_string(),
                LogicalControl::TogglePov => "Toggle POV".to_string(),
                LogicalControl::Jump => "Jump".to_string(),
                LogicalControl::Sprint => "Sprint".to_string(),
                LogicalControl::Sneak => "Sneak".to_string(),
                LogicalControl::Shout => "Shout".to_string(),
                LogicalControl::ToggleRun => "Toggle Always Run".to_string(),
                LogicalControl::AutoMove => "Auto-Move".to_string(),
                LogicalControl::Favorites => "Favorites".to_string(),
                LogicalControl::None => String::new(),
            },
            charge_item: "Charge Item".to_string(),
            journal: "Journal".to_string(),
            pause: "Pause".to_string(),
        }
    }
}

impl InputBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the binding for one control role
    pub fn set_binding(&mut self, control: LogicalControl, binding: impl Into<String>) {
        self.controls[control] = binding.into();
    }

    /// The controller-equivalent binding Shout resolves to off PC
    pub fn charge_item(&self) -> &str {
        &self.charge_item
    }

    /// The menu-open binding while a gamepad is active
    pub fn journal(&self) -> &str {
        &self.journal
    }

    /// The menu-open binding on keyboard
    pub fn pause(&self) -> &str {
        &self.pause
    }

    /// Resolves a logical control to the physical binding the host
    /// currently associates with it.
    ///
    /// Shout is platform-dependent: controllers put the overlay action on
    /// the charge-item button instead. `None` yields the empty binding,
    /// which matches no event; asking for it directly is a caller bug and
    /// logged as such.
    pub fn resolve(&self, control: LogicalControl, platform: Platform) -> &str {
        match control {
            LogicalControl::Shout => match platform {
                Platform::Pc => &self.controls[LogicalControl::Shout],
                Platform::Other => &self.charge_item,
            },
            LogicalControl::None => {
                error!("invalid control role requested for binding resolution");
                ""
            }
            control => &self.controls[control],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_controls() {
        let bindings = InputBindings::new();
        assert_eq!(
            bindings.resolve(LogicalControl::Activate, Platform::Pc),
            "Activate"
        );
        assert_eq!(
            bindings.resolve(LogicalControl::Sprint, Platform::Other),
            "Sprint"
        );
    }

    #[test]
    fn test_resolve_shout_depends_on_platform() {
        let bindings = InputBindings::new();
        assert_eq!(bindings.resolve(LogicalControl::Shout, Platform::Pc), "Shout");
        assert_eq!(
            bindings.resolve(LogicalControl::Shout, Platform::Other),
            "Charge Item"
        );
    }

    #[test]
    fn test_resolve_none_is_empty() {
        let bindings = InputBindings::new();
        assert_eq!(bindings.resolve(LogicalControl::None, Platform::Pc), "");
    }

    #[test]
    fn test_set_binding_overrides() {
        let mut bindings = InputBindings::new();
        bindings.set_binding(LogicalControl::Jump, "Space");
        assert_eq!(bindings.resolve(LogicalControl::Jump, Platform::Pc), "Space");
    }

    #[test]
    fn test_from_name_round_trip() {
        for (name, control) in [
            ("activate", LogicalControl::Activate),
            ("readyWeapon", LogicalControl::ReadyWeapon),
            ("togglePOV", LogicalControl::TogglePov),
            ("jump", LogicalControl::Jump),
            ("sprint", LogicalControl::Sprint),
            ("sneak", LogicalControl::Sneak),
            ("shout", LogicalControl::Shout),
            ("toggleRun", LogicalControl::ToggleRun),
            ("autoMove", LogicalControl::AutoMove),
        ] {
            assert_eq!(LogicalControl::from_name(name), Some(control));
        }
        assert_eq!(LogicalControl::from_name("favorites"), None);
        assert_eq!(LogicalControl::from_name(""), None);
    }
}
