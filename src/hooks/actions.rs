//! Named overlay actions triggered by intercepted controls

use crate::host::Host;
use crate::overlay::{Overlay, ViewKind};

/// The parameterless operations a configurable control can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Take the highlighted item stack and refresh the container view
    Take,
    /// Take everything and refresh the container view
    TakeAll,
    /// Fall through to the host's standard activation
    Search,
    /// Stub for unconfigured or conflicting mappings
    Null,
}

impl ActionKind {
    pub fn run(self, overlay: &mut dyn Overlay, host: &mut dyn Host) {
        match self {
            Self::Take => {
                overlay.take_item_stack();
                overlay.register_view(ViewKind::OpenContainer);
            }
            Self::TakeAll => {
                overlay.take_all_items();
                overlay.register_view(ViewKind::OpenContainer);
            }
            Self::Search => host.start_activation(),
            Self::Null => {}
        }
    }

    pub fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::testing::{MockHost, MockOverlay};

    #[test]
    fn test_take_refreshes_container_view() {
        let mut overlay = MockOverlay::default();
        let mut host = MockHost::default();
        ActionKind::Take.run(&mut overlay, &mut host);
        assert_eq!(overlay.take_stack_calls, 1);
        assert_eq!(overlay.views, vec![ViewKind::OpenContainer]);
    }

    #[test]
    fn test_take_all_refreshes_container_view() {
        let mut overlay = MockOverlay::default();
        let mut host = MockHost::default();
        ActionKind::TakeAll.run(&mut overlay, &mut host);
        assert_eq!(overlay.take_all_calls, 1);
        assert_eq!(overlay.views, vec![ViewKind::OpenContainer]);
    }

    #[test]
    fn test_search_delegates_to_host_activation() {
        let mut overlay = MockOverlay::default();
        let mut host = MockHost::default();
        ActionKind::Search.run(&mut overlay, &mut host);
        assert_eq!(host.activations, 1);
        assert!(overlay.views.is_empty());
    }

    #[test]
    fn test_null_does_nothing() {
        let mut overlay = MockOverlay::default();
        let mut host = MockHost::default();
        ActionKind::Null.run(&mut overlay, &mut host);
        assert_eq!(overlay.take_stack_calls, 0);
        assert_eq!(overlay.take_all_calls, 0);
        assert_eq!(host.activations, 0);
        assert!(ActionKind::Null.is_null());
    }
}
