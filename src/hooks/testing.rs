//! Shared mock collaborators for the hook unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::HookContext;
use super::controls::InputBindings;
use super::events::ButtonEvent;
use super::gesture::ProcessButtonFn;
use super::interceptor::Interceptor;
use super::prompt::CrosshairTextFn;
use super::slots::{CanProcessSlot, HookRegistrar};
use crate::console::CommandInfo;
use crate::host::{Host, Target, TargetClass};
use crate::overlay::{MappingRole, MessageKind, Overlay, Platform, ViewKind};

/// Builds a hook context over mock collaborators
pub(crate) fn ctx<'a>(
    overlay: &'a mut MockOverlay,
    host: &'a mut MockHost,
    bindings: &'a InputBindings,
) -> HookContext<'a> {
    HookContext {
        overlay,
        host,
        bindings,
    }
}

/// Recording overlay stand-in
pub(crate) struct MockOverlay {
    pub visible: bool,
    pub enabled: bool,
    pub skip_next_input: bool,
    pub can_open: bool,
    pub platform: Platform,
    pub closed: bool,
    pub take_stack_calls: u32,
    pub take_all_calls: u32,
    pub toggle_calls: u32,
    pub acti_text: Option<String>,
    pub messages: Vec<MessageKind>,
    pub views: Vec<ViewKind>,
    pub mappings: Vec<(MappingRole, String)>,
    /// When set, records the sneak flag passed to `can_open`
    pub sneak_queries: Option<Rc<RefCell<Option<bool>>>>,
}

impl Default for MockOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            enabled: true,
            skip_next_input: false,
            can_open: false,
            platform: Platform::Pc,
            closed: false,
            take_stack_calls: 0,
            take_all_calls: 0,
            toggle_calls: 0,
            acti_text: None,
            messages: Vec::new(),
            views: Vec::new(),
            mappings: Vec::new(),
            sneak_queries: None,
        }
    }
}

impl Overlay for MockOverlay {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn should_skip_next_input(&self) -> bool {
        self.skip_next_input
    }

    fn next_input_skipped(&mut self) {
        self.skip_next_input = false;
    }

    fn can_open(&self, _target: &Target, is_sneaking: bool) -> bool {
        if let Some(queries) = &self.sneak_queries {
            *queries.borrow_mut() = Some(is_sneaking);
        }
        self.can_open
    }

    fn take_item_stack(&mut self) {
        self.take_stack_calls += 1;
    }

    fn take_all_items(&mut self) {
        self.take_all_calls += 1;
    }

    fn set_acti_text(&mut self, text: &str) {
        self.acti_text = Some(text.to_string());
    }

    fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
        self.toggle_calls += 1;
    }

    fn close(&mut self) {
        self.visible = false;
        self.closed = true;
    }

    fn queue_message(&mut self, kind: MessageKind) {
        self.messages.push(kind);
    }

    fn register_view(&mut self, view: ViewKind) {
        self.views.push(view);
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn set_mapping(&mut self, role: MappingRole, binding: &str) {
        self.mappings.push((role, binding.to_string()));
    }
}

/// Recording host stand-in
#[derive(Default)]
pub(crate) struct MockHost {
    pub grabbing: bool,
    pub sneaking: bool,
    pub gamepad: bool,
    pub paused: bool,
    pub activate_label_perks: bool,
    pub console_open: bool,
    pub activations: u32,
    pub perk_visits: u32,
    pub console_lines: Vec<String>,
    pub registered_commands: Vec<&'static str>,
}

impl Host for MockHost {
    fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn start_activation(&mut self) {
        self.activations += 1;
    }

    fn is_gamepad_enabled(&self) -> bool {
        self.gamepad
    }

    fn is_game_paused(&self) -> bool {
        self.paused
    }

    fn has_activate_label_perks(&self) -> bool {
        self.activate_label_perks
    }

    fn apply_activate_label_perks(&mut self, _target: &Target) {
        self.perk_visits += 1;
    }

    fn is_console_open(&self) -> bool {
        self.console_open
    }

    fn print_console(&mut self, line: &str) {
        self.console_lines.push(line.to_string());
    }

    fn register_console_command(&mut self, info: &CommandInfo) -> bool {
        self.registered_commands.push(info.long_name);
        true
    }
}

/// Registrar stand-in recording what lands in each slot
#[derive(Default)]
pub(crate) struct MockRegistrar {
    pub can_process: HashMap<CanProcessSlot, Interceptor>,
    pub menu_open_installs: u32,
    pub crosshair_installs: u32,
}

impl HookRegistrar for MockRegistrar {
    fn register_can_process(&mut self, slot: CanProcessSlot, interceptor: Interceptor) {
        self.can_process.insert(slot, interceptor);
    }

    fn install_menu_open(&mut self) -> ProcessButtonFn {
        self.menu_open_installs += 1;
        Box::new(|_event: &mut ButtonEvent| true)
    }

    fn install_crosshair_text(&mut self, _class: TargetClass) -> CrosshairTextFn {
        self.crosshair_installs += 1;
        Box::new(|_target: &Target, _text: &mut String| true)
    }
}
