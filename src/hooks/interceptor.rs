//! Can-process interceptors for the configurable controls
//!
//! One interceptor value sits in front of each overridden can-process
//! slot. It inspects the event's type, press phase, and control id,
//! consults the overlay, and decides whether the host's own handler ever
//! sees the event.

use super::HookContext;
use super::actions::ActionKind;
use super::controls::LogicalControl;
use super::events::InputEvent;

/// What an interceptor tells the host's input dispatcher to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Defer to the host's own handler
    Continue,
    /// The event is consumed; the host must not process it
    Suppress,
}

/// One installed (action, control) interception point.
///
/// Built through [`Interceptor::for_control`] so the activate control
/// always gets its specialized variant; every other pairing shares the
/// generic logic.
#[derive(Debug, Clone, Copy)]
pub enum Interceptor {
    /// Generic handler for every control except activate
    Control {
        action: ActionKind,
        control: LogicalControl,
    },
    /// Activate needs extra care around the host's object-grab behavior
    Activate { action: ActionKind },
}

impl Interceptor {
    pub fn for_control(action: ActionKind, control: LogicalControl) -> Self {
        match control {
            LogicalControl::Activate => Self::Activate { action },
            control => Self::Control { action, control },
        }
    }

    /// True when this interceptor only carries the null action
    pub fn is_stub(&self) -> bool {
        match self {
            Self::Control { action, .. } | Self::Activate { action } => action.is_null(),
        }
    }

    /// Replacement for the slot's can-process entry
    pub fn can_process(&self, ctx: &mut HookContext<'_>, event: &InputEvent) -> Disposition {
        match self {
            Self::Control { action, control } => can_process_control(*action, *control, ctx, event),
            Self::Activate { action } => can_process_activate(*action, ctx, event),
        }
    }
}

fn can_process_control(
    action: ActionKind,
    control: LogicalControl,
    ctx: &mut HookContext<'_>,
    event: &InputEvent,
) -> Disposition {
    let InputEvent::Button(button) = event else {
        return Disposition::Continue;
    };

    // If the overlay closes while the button is still held, input could
    // process when it shouldn't
    if button.is_repeating() && ctx.overlay.should_skip_next_input() {
        if button.is_up() {
            ctx.overlay.next_input_skipped();
        }
        return Disposition::Suppress;
    }

    if ctx.overlay.is_visible() {
        // Must be the press edge, otherwise input received in another
        // context could fire the action. The None placeholder never has a
        // trigger, so it is not resolved at all.
        let platform = ctx.overlay.platform();
        if button.is_down()
            && control != LogicalControl::None
            && button.control == ctx.bindings.resolve(control, platform)
        {
            action.run(&mut *ctx.overlay, &mut *ctx.host);
        }
        return Disposition::Suppress;
    }

    Disposition::Continue
}

fn can_process_activate(
    action: ActionKind,
    ctx: &mut HookContext<'_>,
    event: &InputEvent,
) -> Disposition {
    // Grabbing takes priority; the overlay must not hold state while the
    // host is dragging an object around
    if ctx.host.is_grabbing() {
        ctx.overlay.close();
        return Disposition::Continue;
    }

    let InputEvent::Button(button) = event else {
        return Disposition::Continue;
    };

    if ctx.overlay.is_visible() {
        let platform = ctx.overlay.platform();
        if button.is_up()
            && button.control == ctx.bindings.resolve(LogicalControl::Activate, platform)
        {
            // Release edge, not press: taking on press would race the
            // host's own grab initiation
            action.run(&mut *ctx.overlay, &mut *ctx.host);
            return Disposition::Suppress;
        } else if button.is_down() {
            // Without this a host menu activation queues up and fires later
            return Disposition::Suppress;
        }
    }

    Disposition::Continue
}
