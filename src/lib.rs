//! Loot menu input hooks
//!
//! The input-interception and action-dispatch layer of a loot-menu
//! overlay: it takes over selected host input slots, maps remappable
//! controls to overlay actions, rewrites the crosshair prompt, and
//! detects the hold-to-toggle gesture that enables or disables the
//! overlay.

/// Settings registry - remappable control mappings and overlay tuning
pub mod config;

/// In-game console command surface
pub mod console;

/// Input interception - events, interceptors, gesture, prompt text, installer
pub mod hooks;

/// Host-process collaborator contract
pub mod host;

/// Overlay collaborator contract
pub mod overlay;
