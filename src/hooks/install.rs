//! Startup binding installation and conflict detection
//!
//! Runs once per session: checks the four remappable settings for
//! duplicate assignments, resolves each to a can-process slot, and
//! installs the interceptors, falling back to null stubs wherever a
//! mapping is absent, conflicting, or unrecognized. The host dispatch
//! always ends up fully installed or safely stubbed, never half-defined.

use tracing::{debug, error};

use super::actions::ActionKind;
use super::controls::{InputBindings, LogicalControl};
use super::gesture::ToggleGesture;
use super::interceptor::Interceptor;
use super::prompt::PromptTextHook;
use super::slots::{CanProcessSlot, HookRegistrar};
use crate::config::Settings;
use crate::console;
use crate::host::{Host, TargetClass};
use crate::overlay::{MappingRole, MessageKind, Overlay};

/// Everything the installer hands back for the host runtime to drive
pub struct InstalledHooks {
    pub gesture: ToggleGesture,
    pub prompts: Vec<PromptTextHook>,
}

/// Per-run installer state replacing the old hooked-flag globals
#[derive(Default)]
struct InstallFlags {
    activate_hooked: bool,
    camera_hooked: bool,
}

/// Scans the four remappable settings for two roles sharing a control.
///
/// Sorting groups equal values, so comparing adjacent pairs is enough.
/// The first conflict is reported and surfaces as a "no input loaded"
/// notification; the caller then installs no configurable interceptors.
pub fn check_mapping_conflicts(settings: &Settings, overlay: &mut dyn Overlay) -> bool {
    let mut mappings = settings.control_mappings();
    if mappings.len() < 2 {
        return false;
    }

    mappings.sort();
    for pair in mappings.windows(2) {
        if pair[0].value == pair[1].value {
            error!(
                first = pair[0].key,
                second = pair[1].key,
                control = %pair[0].value,
                "mappings are assigned to the same control"
            );
            overlay.queue_message(MessageKind::NoInputLoaded);
            return true;
        }
    }

    false
}

/// The can-process slots a logical control dispatches through. The
/// camera toggle fans out to both camera-state slots.
fn slots_for(control: LogicalControl) -> &'static [CanProcessSlot] {
    match control {
        LogicalControl::Activate => &[CanProcessSlot::Activate],
        LogicalControl::ReadyWeapon => &[CanProcessSlot::ReadyWeapon],
        LogicalControl::TogglePov => &[
            CanProcessSlot::FirstPersonState,
            CanProcessSlot::ThirdPersonState,
        ],
        LogicalControl::Jump => &[CanProcessSlot::Jump],
        LogicalControl::Sprint => &[CanProcessSlot::Sprint],
        LogicalControl::Sneak => &[CanProcessSlot::Sneak],
        LogicalControl::Shout => &[CanProcessSlot::Shout],
        LogicalControl::ToggleRun => &[CanProcessSlot::ToggleRun],
        LogicalControl::AutoMove => &[CanProcessSlot::AutoMove],
        LogicalControl::Favorites => &[CanProcessSlot::Favorites],
        LogicalControl::None => &[],
    }
}

/// Resolves one mapping setting and installs its interceptor(s).
/// Unrecognized control names install nothing and report false.
fn apply_mapping(
    registrar: &mut dyn HookRegistrar,
    flags: &mut InstallFlags,
    overlay: &mut dyn Overlay,
    bindings: &InputBindings,
    action: ActionKind,
    role: MappingRole,
    control_name: &str,
) -> bool {
    let Some(control) = LogicalControl::from_name(control_name) else {
        return false;
    };

    for slot in slots_for(control) {
        registrar.register_can_process(*slot, Interceptor::for_control(action, control));
    }

    let platform = overlay.platform();
    let binding = bindings.resolve(control, platform).to_string();
    overlay.set_mapping(role, &binding);

    match control {
        LogicalControl::Activate => flags.activate_hooked = true,
        LogicalControl::TogglePov => flags.camera_hooked = true,
        _ => {}
    }

    true
}

/// Installs every hook for the session.
///
/// Must run exactly once; the registrar's slots do not survive a second
/// installation. Conflicting or invalid mappings degrade to stubs, they
/// never abort the rest of the installation.
pub fn install_hooks(
    registrar: &mut dyn HookRegistrar,
    settings: &Settings,
    overlay: &mut dyn Overlay,
    host: &mut dyn Host,
    bindings: &InputBindings,
) -> InstalledHooks {
    if !check_mapping_conflicts(settings, overlay) {
        let mut flags = InstallFlags::default();

        let roles: [(ActionKind, MappingRole, &'static str, &str); 4] = [
            (
                ActionKind::Null,
                MappingRole::SingleLoot,
                "singleLootModifier",
                &settings.single_loot_modifier,
            ),
            (
                ActionKind::Take,
                MappingRole::Take,
                "takeMethod",
                &settings.take_method,
            ),
            (
                ActionKind::TakeAll,
                MappingRole::TakeAll,
                "takeAllMethod",
                &settings.take_all_method,
            ),
            (
                ActionKind::Search,
                MappingRole::Search,
                "searchMethod",
                &settings.search_method,
            ),
        ];

        for (action, role, key, control_name) in roles {
            if apply_mapping(
                registrar,
                &mut flags,
                overlay,
                bindings,
                action,
                role,
                control_name,
            ) {
                debug!(setting = key, control = control_name, "applied control mapping");
            } else {
                error!(
                    setting = key,
                    control = control_name,
                    "unrecognized control mapping"
                );
            }
        }

        // A slot left without an override would fall back to raw host
        // behavior while the overlay is open; stub anything unclaimed
        if !flags.activate_hooked {
            registrar.register_can_process(
                CanProcessSlot::Activate,
                Interceptor::for_control(ActionKind::Null, LogicalControl::Activate),
            );
            debug!("stubbed activate handler");
        }
        if !flags.camera_hooked {
            for slot in [
                CanProcessSlot::FirstPersonState,
                CanProcessSlot::ThirdPersonState,
            ] {
                registrar.register_can_process(
                    slot,
                    Interceptor::for_control(ActionKind::Null, LogicalControl::Activate),
                );
            }
            debug!("stubbed camera state handlers");
        }
    } else {
        error!("mapping conflicts detected, no configurable hooks applied");
    }

    registrar.register_can_process(
        CanProcessSlot::Favorites,
        Interceptor::for_control(ActionKind::Null, LogicalControl::None),
    );
    debug!("stubbed favorites handler");

    let mut prompts = Vec::new();
    if !settings.disable_acti_text_hook {
        for class in [
            TargetClass::Activator,
            TargetClass::Container,
            TargetClass::Actor,
        ] {
            let original = registrar.install_crosshair_text(class);
            prompts.push(PromptTextHook::new(class, original));
            debug!(?class, "installed crosshair text hook");
        }
    }

    let gesture = ToggleGesture::new(registrar.install_menu_open());
    debug!("installed menu open hook");

    console::register_commands(host);

    InstalledHooks { gesture, prompts }
}
