//! Focus and navigation types for the ten-foot shell

use crate::library::CarouselPartition;
use crate::overlay::BlockingModal;

/// Region that owns incoming navigation events
///
/// Exactly one is active at a time.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub enum FocusArea {
    Hero, // Featured game panel above the library
    #[default]
    Library, // Carousel rows
    SidebarMenu, // Main side menu
    Search,
    VirtualKeyboard,
    OverlayLeft,  // In-game menu panel
    OverlayRight, // Quick settings panel
}

impl FocusArea {
    /// Area that represents an open blocking modal, if it has one
    pub fn for_modal(modal: BlockingModal) -> Option<FocusArea> {
        match modal {
            BlockingModal::Search => Some(FocusArea::Search),
            BlockingModal::VirtualKeyboard => Some(FocusArea::VirtualKeyboard),
            BlockingModal::FileBrowser => None,
        }
    }

    /// Hero, Library and SidebarMenu sit below every overlay
    pub fn is_top_level(self) -> bool {
        matches!(self, FocusArea::Hero | FocusArea::Library | FocusArea::SidebarMenu)
    }
}

/// Rows of the in-game menu (left side panel)
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum GameMenuItem {
    Resume,
    QuickSettings,
    Quit,
}

impl GameMenuItem {
    pub const ALL: [GameMenuItem; 3] = [
        GameMenuItem::Resume,
        GameMenuItem::QuickSettings,
        GameMenuItem::Quit,
    ];

    pub fn from_index(index: usize) -> Option<GameMenuItem> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMenuItem::Resume => "Resume",
            GameMenuItem::QuickSettings => "Quick Settings",
            GameMenuItem::Quit => "Quit Game",
        }
    }
}

/// Per-region selection, each clamped to its region's length
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct ActiveIndices {
    pub active_index: usize,
    pub sidebar_index: usize,
    pub game_menu_index: usize,
    pub slider_index: usize,
}

/// Result of handling a navigation event
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    SetFocusArea(FocusArea),
    SetActiveIndex(usize),
    SetSidebarIndex(usize),
    SetGameMenuIndex(usize),
    SetSliderIndex(usize),
    /// Open the side menu at its first row, remembering the current area
    OpenSideMenu,
    /// Return to the area the side menu was opened from
    CloseSideMenu,
    Launch(usize),
    SidebarSelect(usize),
    GameMenuSelect(GameMenuItem),
    AdjustSlider { direction: f32, slider: usize },
    CloseLeftSidebar,
    CloseRightSidebar,
    /// Step the full-screen overlay back one level
    CloseOverlay,
    /// Ask the owner of a blocking modal to close it
    CloseModal(BlockingModal),
}

/// State snapshot needed for navigation decisions
pub struct NavContext<'a> {
    pub area: FocusArea,
    pub indices: ActiveIndices,
    pub partition: &'a CarouselPartition,
    pub sidebar_len: usize,
    pub slider_len: usize,
    pub suspended: bool,
    pub left_sidebar_open: bool,
    pub right_sidebar_open: bool,
    pub overlay_open: bool,
    pub open_modal: Option<BlockingModal>,
}
