//! Input interception and action dispatch
//!
//! Sits between the host's raw input dispatch and its own handlers:
//! every overridden slot runs its interceptor first, and the interceptor
//! decides unilaterally whether the original behavior runs at all.
//!
//! # Architecture
//!
//! ```text
//! Host input dispatch ──► can-process slots ──► Interceptor
//!                                                (consult Overlay,
//!                                                 maybe run an Action,
//!                                                 Continue or Suppress)
//! Menu-open slot      ──► ToggleGesture      ──► original handler
//! Crosshair-text slot ──► PromptTextHook     ──► original handler
//! ```
//!
//! Everything runs synchronously on the host's single input thread;
//! collaborators are reached through a per-event [`HookContext`], never
//! through globals.

mod actions;
mod controls;
mod events;
mod gesture;
mod install;
mod interceptor;
mod prompt;
mod slots;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public API
pub use actions::ActionKind;
pub use controls::{InputBindings, LogicalControl};
pub use events::{ButtonEvent, InputEvent};
pub use gesture::{ProcessButtonFn, TOGGLE_HOLD_SECS, ToggleGesture};
pub use install::{InstalledHooks, check_mapping_conflicts, install_hooks};
pub use interceptor::{Disposition, Interceptor};
pub use prompt::{CrosshairTextFn, PromptTextHook};
pub use slots::{CanProcessSlot, HookRegistrar};

use crate::host::Host;
use crate::overlay::Overlay;

/// Per-event view of the collaborators every hook needs.
///
/// Built fresh by the host glue for each dispatched event; holding it
/// across events would freeze overlay state the interceptors must see
/// live.
pub struct HookContext<'a> {
    pub overlay: &'a mut dyn Overlay,
    pub host: &'a mut dyn Host,
    pub bindings: &'a InputBindings,
}
