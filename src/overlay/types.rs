// Overlay types

/// Full-screen modals managed by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayId {
    Settings,
    GameDetails,
    Achievements,
    Power,
}

/// Modals owned by collaborators that only report open/closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockingModal {
    Search,
    FileBrowser,
    VirtualKeyboard,
}

impl BlockingModal {
    pub const ALL: [BlockingModal; 3] = [
        BlockingModal::Search,
        BlockingModal::FileBrowser,
        BlockingModal::VirtualKeyboard,
    ];
}

/// Snapshot of the coordinator
///
/// `current` and the sidebar flags are independent; `previous` is only set
/// right after a `current` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub current: Option<OverlayId>,
    pub previous: Option<OverlayId>,
    pub left_sidebar_open: bool,
    pub right_sidebar_open: bool,
}
