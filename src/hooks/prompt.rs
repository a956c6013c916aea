//! Crosshair prompt-text rewrite hook
//!
//! Overrides the host's crosshair-text slot for activators, containers,
//! and actors. When the overlay is eligible to open for the target, the
//! host's computed label is redirected into the overlay and the host's
//! default prompt is suppressed.

use super::HookContext;
use crate::host::{Target, TargetClass};

/// Signature of the host's crosshair-text slot: computes the prompt line
/// into the string and returns whether the host should draw it
pub type CrosshairTextFn = Box<dyn FnMut(&Target, &mut String) -> bool>;

/// One installed crosshair-text override
pub struct PromptTextHook {
    class: TargetClass,
    original: CrosshairTextFn,
}

impl PromptTextHook {
    /// Wraps the original slot entry taken at install time
    pub fn new(class: TargetClass, original: CrosshairTextFn) -> Self {
        Self { class, original }
    }

    pub fn class(&self) -> TargetClass {
        self.class
    }

    /// Replacement for the host's crosshair-text slot.
    ///
    /// Always lets the original compute its text first; eligibility then
    /// decides whether that text is handed to the overlay or shown by the
    /// host as usual.
    pub fn crosshair_text(
        &mut self,
        ctx: &mut HookContext<'_>,
        target: &Target,
        text: &mut String,
    ) -> bool {
        let result = (self.original)(target, text);

        if !ctx.overlay.can_open(target, ctx.host.is_sneaking()) {
            return result;
        }

        if let Some(line) = text.lines().next() {
            if let Some(label) = display_label(line) {
                ctx.overlay.set_acti_text(label);
            }
        }

        if ctx.host.has_activate_label_perks() {
            ctx.host.apply_activate_label_perks(target);
        }

        // The overlay owns the prompt now; the host must not draw its own
        false
    }
}

/// Pulls the display label out of the first line of prompt text.
///
/// Tag-wrapped lines (`<font>Open</font>`) yield the span between the
/// first `>` and the last `<`; a lone leading tag (`<Take> Sword`) yields
/// the tag's inner span; a plain line is used verbatim; an empty line
/// yields nothing.
fn display_label(line: &str) -> Option<&str> {
    if line.is_empty() {
        return None;
    }
    if let Some(rest) = line.strip_prefix('<') {
        if let Some(beg) = rest.find('>') {
            match rest.rfind('<') {
                Some(end) if end > beg => return Some(&rest[beg + 1..end]),
                _ => return Some(&rest[..beg]),
            }
        }
        // Unterminated markup: fall through to the verbatim line
    }
    Some(line)
}
