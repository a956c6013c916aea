//! Hold-to-toggle gesture over the host's menu-open button
//!
//! Overrides the menu-open ProcessButton slot. A long hold of the pause
//! (or journal, on gamepad) button toggles overlay enablement; a short
//! tap must keep opening the host menu exactly as before.

use super::HookContext;
use super::events::ButtonEvent;
use crate::overlay::MessageKind;

/// Signature of the host's ProcessButton slot. The boolean is the host's
/// own "handled" result and is passed back through unchanged.
pub type ProcessButtonFn = Box<dyn FnMut(&mut ButtonEvent) -> bool>;

/// How long the menu button must be held to flip overlay enablement
pub const TOGGLE_HOLD_SECS: f32 = 2.0;

/// Singleton gesture tracker wrapping the original menu-open handler.
///
/// `processed` is false only while a hold is in flight and has not
/// toggled yet; it resets once the button comes back up.
pub struct ToggleGesture {
    original: ProcessButtonFn,
    processed: bool,
}

impl ToggleGesture {
    /// Wraps the original handler taken from the slot at install time
    pub fn new(original: ProcessButtonFn) -> Self {
        Self {
            original,
            processed: true,
        }
    }

    /// Replacement for the host's ProcessButton slot
    pub fn process_button(&mut self, ctx: &mut HookContext<'_>, event: &mut ButtonEvent) -> bool {
        let bindings = ctx.bindings;
        let tracked = if ctx.host.is_gamepad_enabled() {
            bindings.journal()
        } else {
            bindings.pause()
        };
        if event.control != tracked || ctx.host.is_game_paused() {
            return (self.original)(event);
        }

        let mut result = true;
        if event.is_down() {
            self.processed = false;
        } else if event.is_held() {
            if !self.processed && event.timer >= TOGGLE_HOLD_SECS {
                self.processed = true;
                ctx.overlay.toggle_enabled();
                ctx.overlay.queue_message(MessageKind::MenuToggled);
            }
        } else if !self.processed {
            // Short tap: the original handler only recognizes a fresh
            // press, so hand it a synthetic one and put the event back
            let pressure = event.pressure;
            let timer = event.timer;
            event.pressure = 1.0;
            event.timer = 0.0;
            result = (self.original)(event);
            event.pressure = pressure;
            event.timer = timer;
            self.processed = true;
        }

        result
    }
}
