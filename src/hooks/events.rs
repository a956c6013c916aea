//! Raw host input events as the can-process hooks see them

/// One button event as delivered by the host's input dispatcher.
///
/// The host encodes the press phase in the `pressure`/`timer` pair:
/// a fresh press has full pressure and a zero timer, a held button keeps
/// pressure while the timer counts up, and a release drops pressure while
/// the timer still carries the hold duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonEvent {
    /// Control id string the host resolved for the physical key
    pub control: String,
    /// Analog press value; zero once the button is released
    pub pressure: f32,
    /// Seconds the button has been held; zero on the initial press
    pub timer: f32,
}

impl ButtonEvent {
    /// A fresh press of the given control
    pub fn down(control: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            pressure: 1.0,
            timer: 0.0,
        }
    }

    /// A button still held after `secs` seconds
    pub fn held(control: impl Into<String>, secs: f32) -> Self {
        Self {
            control: control.into(),
            pressure: 1.0,
            timer: secs,
        }
    }

    /// A release after `secs` seconds of holding
    pub fn up(control: impl Into<String>, secs: f32) -> Self {
        Self {
            control: control.into(),
            pressure: 0.0,
            timer: secs,
        }
    }

    /// Initial press edge
    pub fn is_down(&self) -> bool {
        self.pressure > 0.0 && self.timer == 0.0
    }

    /// Still held past the initial press
    pub fn is_held(&self) -> bool {
        self.pressure > 0.0 && self.timer > 0.0
    }

    /// Release edge
    pub fn is_up(&self) -> bool {
        self.pressure == 0.0 && self.timer > 0.0
    }

    /// Anything past the initial press, held or released
    pub fn is_repeating(&self) -> bool {
        self.timer > 0.0
    }
}

/// Input events the host routes through the can-process slots
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Button(ButtonEvent),
    /// Analog stick motion; never consumed here
    Thumbstick { x: f32, y: f32 },
    /// Raw cursor motion; never consumed here
    MouseMove { dx: i32, dy: i32 },
}
