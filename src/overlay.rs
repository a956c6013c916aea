//! Overlay collaborator contract
//!
//! The loot menu overlay itself (rendering, item lists, Scaleform views)
//! lives outside this crate. The hooks talk to it exclusively through the
//! [`Overlay`] trait so every interception path stays testable with a mock.

use crate::host::Target;

/// Messages the overlay can flash to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Control mappings conflicted and no configurable hooks were installed
    NoInputLoaded,
    /// The hold-to-toggle gesture flipped the overlay's enabled state
    MenuToggled,
}

/// Overlay views that can be (re-)registered after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The open-container item list
    OpenContainer,
    /// The settings/setup view
    Setup,
}

/// Input platform the overlay reports for control resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Pc,
    Other,
}

/// The four user-remappable roles mirrored into the overlay's input filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingRole {
    SingleLoot,
    Take,
    TakeAll,
    Search,
}

/// Operations the overlay exposes to the input hooks
pub trait Overlay {
    fn is_visible(&self) -> bool;

    /// True while input received before the overlay closed must be ignored
    fn should_skip_next_input(&self) -> bool;

    /// Clears the skip flag once the held button is finally released
    fn next_input_skipped(&mut self);

    /// Whether the overlay is eligible to open for this target right now
    fn can_open(&self, target: &Target, is_sneaking: bool) -> bool;

    fn take_item_stack(&mut self);

    fn take_all_items(&mut self);

    /// Forwards the activation label shown next to the crosshair
    fn set_acti_text(&mut self, text: &str);

    fn toggle_enabled(&mut self);

    /// Force-closes the overlay regardless of its current state
    fn close(&mut self);

    fn queue_message(&mut self, kind: MessageKind);

    fn register_view(&mut self, view: ViewKind);

    fn platform(&self) -> Platform;

    /// Mirrors a resolved physical binding into the overlay's own filter
    /// table so its other systems agree on the mapping
    fn set_mapping(&mut self, role: MappingRole, binding: &str);
}
