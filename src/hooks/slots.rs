//! Interception slot identities and the install primitive

use super::gesture::ProcessButtonFn;
use super::interceptor::Interceptor;
use super::prompt::CrosshairTextFn;
use crate::host::TargetClass;

/// The host's per-control can-process dispatch entries.
///
/// Each slot holds at most one override. Installing into the same slot
/// twice clobbers the saved original behavior and silently breaks
/// restoration, so it is unsupported; the installer runs once per
/// session to guarantee this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanProcessSlot {
    Activate,
    ReadyWeapon,
    FirstPersonState,
    ThirdPersonState,
    Jump,
    Sprint,
    Sneak,
    Shout,
    ToggleRun,
    AutoMove,
    Favorites,
}

/// External process-patching primitive, resolved against stable symbolic
/// slot names by the host glue.
///
/// Implementations write the override into the host's dispatch table and
/// surrender the original behavior to the caller. Every install method
/// must be called at most once per slot per session.
pub trait HookRegistrar {
    /// Overrides the can-process entry for one control slot
    fn register_can_process(&mut self, slot: CanProcessSlot, interceptor: Interceptor);

    /// Overrides the menu-open ProcessButton entry, handing back the
    /// original handler
    fn install_menu_open(&mut self) -> ProcessButtonFn;

    /// Overrides the crosshair-text entry for one target class, handing
    /// back the original handler
    fn install_crosshair_text(&mut self, class: TargetClass) -> CrosshairTextFn;
}
