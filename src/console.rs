//! In-game console command surface
//!
//! One command, two parameters: a setting name and an integer value.
//! Output goes to the host's console stream; nothing here fails outward.

use tracing::{debug, error};

use crate::config::Settings;
use crate::host::Host;
use crate::overlay::{Overlay, ViewKind};

/// Longest raw command payload the executor will look at; anything longer
/// is silently ignored
const MAX_INPUT_LEN: usize = 60;

/// Command-table metadata handed to the host's command registry
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub long_name: &'static str,
    pub short_name: &'static str,
    pub help_text: &'static str,
}

/// The settings write command
pub const SET_VARIABLE_COMMAND: CommandInfo = CommandInfo {
    long_name: "SetLootMenuVariable",
    short_name: "slmv",
    help_text: "Set loot menu variables \"slmv [variable name] [new value]\"",
};

/// Registers the console commands with the host's command table
pub fn register_commands(host: &mut dyn Host) {
    if host.register_console_command(&SET_VARIABLE_COMMAND) {
        debug!(
            command = SET_VARIABLE_COMMAND.long_name,
            alias = SET_VARIABLE_COMMAND.short_name,
            "registered console command"
        );
    } else {
        error!("failed to register console command");
    }
}

/// Executes the set-variable command against the settings registry.
///
/// A successful write re-registers the overlay's setup view so the new
/// value is reflected immediately. Returns true when a setting was
/// written.
pub fn run_set_variable(
    settings: &mut Settings,
    overlay: &mut dyn Overlay,
    host: &mut dyn Host,
    name: &str,
    value: i32,
) -> bool {
    if name.len() >= MAX_INPUT_LEN || name.len() <= 1 {
        return false;
    }

    match settings.set(name, value) {
        Ok(applied) => {
            overlay.register_view(ViewKind::Setup);
            if host.is_console_open() {
                host.print_console(&format!("> [LootMenu] Set \"{}\" = {}", name, applied));
            }
            true
        }
        Err(err) => {
            if host.is_console_open() {
                host.print_console(&format!("> [LootMenu] ERROR: {}", err));
            }
            false
        }
    }
}
