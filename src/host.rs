//! Host-process collaborator contract
//!
//! Everything the hooks need from the surrounding game process: player
//! queries, the standard activation entry point, console output, and the
//! command registry. All of it is reachable only through the [`Host`]
//! trait; the hooks never touch host memory directly.

use crate::console::CommandInfo;

/// The three object categories whose prompt text gets rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetClass {
    Activator,
    Container,
    Actor,
}

/// A potential interaction target under the crosshair
#[derive(Debug, Clone)]
pub struct Target {
    pub class: TargetClass,
    pub name: String,
}

impl Target {
    pub fn new(class: TargetClass, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
        }
    }
}

/// Operations the host process exposes to the input hooks
pub trait Host {
    /// True while the player is free-grabbing a physical object
    fn is_grabbing(&self) -> bool;

    fn is_sneaking(&self) -> bool;

    /// The host's standard object-activation entry point
    fn start_activation(&mut self);

    fn is_gamepad_enabled(&self) -> bool;

    fn is_game_paused(&self) -> bool;

    /// Whether any activation-label perk entries apply to the player
    fn has_activate_label_perks(&self) -> bool;

    /// Runs the activation-label perk visitor against the target
    fn apply_activate_label_perks(&mut self, target: &Target);

    fn is_console_open(&self) -> bool;

    fn print_console(&mut self, line: &str);

    /// Adds a command to the host's console command table. Returns false
    /// when no slot was available for it.
    fn register_console_command(&mut self, info: &CommandInfo) -> bool;
}
