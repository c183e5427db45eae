// OverlayCoordinator
//
// Every mutator is idempotent and returns whether anything changed, so the
// focus engine can tell a real close from a no-op.

use crate::overlay::types::{BlockingModal, OverlayId, OverlayState};

#[derive(Debug, Clone, Default)]
pub struct OverlayCoordinator {
    state: OverlayState,
    search_open: bool,
    file_browser_open: bool,
    virtual_keyboard_open: bool,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn current_overlay(&self) -> Option<OverlayId> {
        self.state.current
    }

    pub fn previous_overlay(&self) -> Option<OverlayId> {
        self.state.previous
    }

    pub fn left_sidebar_open(&self) -> bool {
        self.state.left_sidebar_open
    }

    pub fn right_sidebar_open(&self) -> bool {
        self.state.right_sidebar_open
    }

    /// Always shifts current into previous, even when `id` is already showing
    pub fn show_overlay(&mut self, id: OverlayId) -> bool {
        let before = self.state;
        self.state.previous = self.state.current;
        self.state.current = Some(id);
        self.state != before
    }

    pub fn hide_overlay(&mut self) -> bool {
        let changed = self.state.current.is_some() || self.state.previous.is_some();
        self.state.current = None;
        self.state.previous = None;
        changed
    }

    pub fn toggle_overlay(&mut self, id: OverlayId) -> bool {
        if self.state.current == Some(id) {
            self.hide_overlay()
        } else {
            self.show_overlay(id)
        }
    }

    /// Single-level undo: a second call clears to nothing
    pub fn go_back(&mut self) -> bool {
        let changed = self.state.current.is_some() || self.state.previous.is_some();
        self.state.current = self.state.previous.take();
        changed
    }

    pub fn open_left_sidebar(&mut self) -> bool {
        !std::mem::replace(&mut self.state.left_sidebar_open, true)
    }

    pub fn close_left_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.state.left_sidebar_open, false)
    }

    pub fn toggle_left_sidebar(&mut self) -> bool {
        self.state.left_sidebar_open = !self.state.left_sidebar_open;
        true
    }

    pub fn open_right_sidebar(&mut self) -> bool {
        !std::mem::replace(&mut self.state.right_sidebar_open, true)
    }

    pub fn close_right_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.state.right_sidebar_open, false)
    }

    pub fn toggle_right_sidebar(&mut self) -> bool {
        self.state.right_sidebar_open = !self.state.right_sidebar_open;
        true
    }

    pub fn close_all_sidebars(&mut self) -> bool {
        let left = self.close_left_sidebar();
        let right = self.close_right_sidebar();
        left || right
    }

    fn modal_flag(&mut self, modal: BlockingModal) -> &mut bool {
        match modal {
            BlockingModal::Search => &mut self.search_open,
            BlockingModal::FileBrowser => &mut self.file_browser_open,
            BlockingModal::VirtualKeyboard => &mut self.virtual_keyboard_open,
        }
    }

    /// Record a collaborator's `is_open` flag
    pub fn set_blocking_modal(&mut self, modal: BlockingModal, open: bool) -> bool {
        std::mem::replace(self.modal_flag(modal), open) != open
    }

    pub fn is_modal_open(&self, modal: BlockingModal) -> bool {
        match modal {
            BlockingModal::Search => self.search_open,
            BlockingModal::FileBrowser => self.file_browser_open,
            BlockingModal::VirtualKeyboard => self.virtual_keyboard_open,
        }
    }

    /// Topmost open blocking modal; the virtual keyboard sits above search
    pub fn open_modal(&self) -> Option<BlockingModal> {
        [
            BlockingModal::VirtualKeyboard,
            BlockingModal::FileBrowser,
            BlockingModal::Search,
        ]
        .into_iter()
        .find(|m| self.is_modal_open(*m))
    }

    /// True while anything sits above the hero/library layer
    pub fn is_navigation_suspended(&self) -> bool {
        self.state.current.is_some()
            || self.state.left_sidebar_open
            || self.state.right_sidebar_open
            || self.open_modal().is_some()
    }
}
