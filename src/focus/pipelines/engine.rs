//! Focus engine
//!
//! Owns the focus/index tuple and the overlay coordinator. Every event goes
//! through `dispatch`: snapshot a `NavContext`, run the pure `navigate`, then
//! apply the returned actions. Region-enter calls from the view (hover,
//! click, overlay open/close) are the only other writers.

use crate::config::{OverlayDismissFocus, ShellConfig};
use crate::focus::pure::navigate;
use crate::focus::types::{ActiveIndices, FocusArea, GameMenuItem, NavAction, NavContext};
use crate::input::InputDevice;
use crate::library::{apply_filter, CarouselPartition, CarouselRule, Game, LibraryFilter};
use crate::nav::NavigationEvent;
use crate::overlay::{BlockingModal, OverlayCoordinator, OverlayId};

/// Hooks into the host application
///
/// Callbacks run while the engine is mid-dispatch and get no handle back to
/// it; hosts that need to react (open an overlay, close a modal) queue the
/// request and apply it after `dispatch` returns.
pub trait ShellCallbacks {
    /// Launch the game at this flat library index
    fn launch(&mut self, index: usize);
    /// Activate a side menu row
    fn sidebar_select(&mut self, index: usize);
    /// Quit the running game from the in-game menu
    fn quit(&mut self);
    fn resume(&mut self) {}
    /// Nudge a quick-settings slider; `direction` is signed and scaled
    fn slider_adjust(&mut self, direction: f32, slider: usize);
    fn menu_opened(&mut self) {}
    /// A full-screen overlay left the screen
    fn overlay_closed(&mut self, _id: OverlayId) {}
    /// Back was pressed over a blocking modal owned by a collaborator
    fn modal_close_requested(&mut self, _modal: BlockingModal) {}
}

pub struct FocusEngine {
    area: FocusArea,
    indices: ActiveIndices,
    /// Area the side menu returns to
    pre_menu_area: FocusArea,
    /// Top-level area focused when the first overlay layer opened
    pre_overlay_area: Option<FocusArea>,
    games: Vec<Game>,
    filter: LibraryFilter,
    rule: CarouselRule,
    partition: CarouselPartition,
    sidebar_len: usize,
    slider_len: usize,
    dismiss_focus: OverlayDismissFocus,
    overlays: OverlayCoordinator,
    callbacks: Box<dyn ShellCallbacks>,
}

impl FocusEngine {
    pub fn new(cfg: &ShellConfig, callbacks: Box<dyn ShellCallbacks>) -> Self {
        let rule = match cfg.carousel_row_len {
            0 => CarouselRule::ByCategory,
            n => CarouselRule::Chunked(n),
        };
        Self {
            area: FocusArea::default(),
            indices: ActiveIndices::default(),
            pre_menu_area: FocusArea::default(),
            pre_overlay_area: None,
            games: Vec::new(),
            filter: LibraryFilter::All,
            rule,
            partition: CarouselPartition::default(),
            sidebar_len: cfg.sidebar_items.len(),
            slider_len: cfg.quick_settings_sliders.len(),
            dismiss_focus: cfg.overlay_dismiss_focus,
            overlays: OverlayCoordinator::new(),
            callbacks,
        }
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    pub fn focus_area(&self) -> FocusArea {
        self.area
    }

    pub fn indices(&self) -> ActiveIndices {
        self.indices
    }

    pub fn active_index(&self) -> usize {
        self.indices.active_index
    }

    pub fn sidebar_index(&self) -> usize {
        self.indices.sidebar_index
    }

    pub fn game_menu_index(&self) -> usize {
        self.indices.game_menu_index
    }

    pub fn slider_index(&self) -> usize {
        self.indices.slider_index
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.area == FocusArea::SidebarMenu
    }

    pub fn is_navigation_suspended(&self) -> bool {
        self.overlays.is_navigation_suspended()
    }

    pub fn overlays(&self) -> &OverlayCoordinator {
        &self.overlays
    }

    pub fn partition(&self) -> &CarouselPartition {
        &self.partition
    }

    pub fn filter(&self) -> &LibraryFilter {
        &self.filter
    }

    pub fn active_game(&self) -> Option<&Game> {
        self.partition.game(self.indices.active_index)
    }

    // =========================================================================
    // Library
    // =========================================================================

    /// Replace the game list; rows are rebuilt and the active index clamped
    pub fn set_games(&mut self, games: Vec<Game>) {
        self.games = games;
        self.repartition();
    }

    pub fn set_filter(&mut self, filter: LibraryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.repartition();
        }
    }

    pub fn set_carousel_rule(&mut self, rule: CarouselRule) {
        if self.rule != rule {
            self.rule = rule;
            self.repartition();
        }
    }

    fn repartition(&mut self) {
        let visible = apply_filter(&self.games, &self.filter);
        self.partition = self.rule.apply(&visible);
        self.indices.active_index = clamp_index(self.indices.active_index, self.partition.len());
        log::debug!(
            "focus: {} games in {} rows, active {}",
            self.partition.len(),
            self.partition.row_count(),
            self.indices.active_index
        );
        self.check_invariants();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Route one navigation event by the active focus area
    pub fn dispatch(&mut self, event: &NavigationEvent) {
        let actions = navigate(&self.build_nav_context(), event);
        if !actions.is_empty() {
            log::trace!("focus: {:?} in {:?} -> {:?}", event.kind, self.area, actions);
        }
        self.apply_nav_actions(actions);
    }

    /// Snapshot the state the pure navigation functions decide on
    pub fn build_nav_context(&self) -> NavContext<'_> {
        NavContext {
            area: self.area,
            indices: self.indices,
            partition: &self.partition,
            sidebar_len: self.sidebar_len,
            slider_len: self.slider_len,
            suspended: self.overlays.is_navigation_suspended(),
            left_sidebar_open: self.overlays.left_sidebar_open(),
            right_sidebar_open: self.overlays.right_sidebar_open(),
            overlay_open: self.overlays.current_overlay().is_some(),
            open_modal: self.overlays.open_modal(),
        }
    }

    pub fn apply_nav_actions(&mut self, actions: Vec<NavAction>) {
        for action in actions {
            match action {
                NavAction::SetFocusArea(area) => {
                    self.set_area(area);
                }
                NavAction::SetActiveIndex(idx) => {
                    self.set_active_index(idx);
                }
                NavAction::SetSidebarIndex(idx) => {
                    self.indices.sidebar_index = clamp_index(idx, self.sidebar_len);
                }
                NavAction::SetGameMenuIndex(idx) => {
                    self.indices.game_menu_index = clamp_index(idx, GameMenuItem::ALL.len());
                }
                NavAction::SetSliderIndex(idx) => {
                    self.indices.slider_index = clamp_index(idx, self.slider_len);
                }
                NavAction::OpenSideMenu => self.open_side_menu(),
                NavAction::CloseSideMenu => self.close_side_menu(),
                NavAction::Launch(idx) => {
                    log::debug!("focus: Launch {}", idx);
                    self.callbacks.launch(idx);
                }
                NavAction::SidebarSelect(idx) => self.callbacks.sidebar_select(idx),
                NavAction::GameMenuSelect(item) => self.select_game_menu_item(item),
                NavAction::AdjustSlider { direction, slider } => {
                    self.callbacks.slider_adjust(direction, slider);
                }
                NavAction::CloseLeftSidebar => {
                    self.close_left_sidebar();
                }
                NavAction::CloseRightSidebar => {
                    self.close_right_sidebar();
                }
                NavAction::CloseOverlay => {
                    self.go_back_overlay();
                }
                NavAction::CloseModal(modal) => self.callbacks.modal_close_requested(modal),
            }
        }
        self.check_invariants();
    }

    fn select_game_menu_item(&mut self, item: GameMenuItem) {
        match item {
            GameMenuItem::Resume => {
                self.callbacks.resume();
                self.close_left_sidebar();
            }
            GameMenuItem::QuickSettings => {
                self.open_right_sidebar();
            }
            GameMenuItem::Quit => {
                self.callbacks.quit();
                self.close_all_sidebars();
            }
        }
    }

    // =========================================================================
    // Region-enter calls
    // =========================================================================

    /// Collaborator focus request
    ///
    /// Side-panel areas are refused while their panel is closed. The side
    /// menu goes through `open_side_menu` so Back has somewhere to return.
    pub fn set_focus_area(&mut self, area: FocusArea) -> bool {
        let allowed = match area {
            FocusArea::OverlayLeft => self.overlays.left_sidebar_open(),
            FocusArea::OverlayRight => self.overlays.right_sidebar_open(),
            FocusArea::SidebarMenu => {
                if self.area != FocusArea::SidebarMenu {
                    self.open_side_menu();
                }
                return true;
            }
            _ => true,
        };
        if allowed {
            self.set_area(area);
        }
        allowed
    }

    pub fn set_active_index(&mut self, index: usize) {
        self.indices.active_index = clamp_index(index, self.partition.len());
    }

    /// Pointer entered a library tile; honored only for an active mouse
    pub fn hover_library(&mut self, index: usize, device: InputDevice) -> bool {
        if !self.pointer_honored(device) {
            return false;
        }
        self.set_area(FocusArea::Library);
        self.set_active_index(index);
        true
    }

    pub fn hover_hero(&mut self, device: InputDevice) -> bool {
        if !self.pointer_honored(device) {
            return false;
        }
        self.set_area(FocusArea::Hero);
        true
    }

    /// Click on a library tile: focus it and launch
    pub fn click_library(&mut self, index: usize) -> bool {
        if self.overlays.is_navigation_suspended() || index >= self.partition.len() {
            return false;
        }
        self.set_area(FocusArea::Library);
        self.set_active_index(index);
        self.callbacks.launch(index);
        true
    }

    pub fn click_hero(&mut self) -> bool {
        if self.overlays.is_navigation_suspended() || self.partition.is_empty() {
            return false;
        }
        self.set_area(FocusArea::Hero);
        self.callbacks.launch(self.indices.active_index);
        true
    }

    fn pointer_honored(&self, device: InputDevice) -> bool {
        device == InputDevice::Mouse && !self.overlays.is_navigation_suspended()
    }

    pub fn open_side_menu(&mut self) {
        if self.area != FocusArea::SidebarMenu {
            self.pre_menu_area = self.top_level_area();
        }
        self.set_area(FocusArea::SidebarMenu);
        self.indices.sidebar_index = 0;
        self.callbacks.menu_opened();
    }

    pub fn close_side_menu(&mut self) {
        if self.area == FocusArea::SidebarMenu {
            self.set_area(self.pre_menu_area);
        }
    }

    // =========================================================================
    // Overlays
    // =========================================================================

    pub fn show_overlay(&mut self, id: OverlayId) -> bool {
        self.begin_layer();
        let changed = self.overlays.show_overlay(id);
        if changed && self.area == FocusArea::SidebarMenu {
            // The overlay replaces the side menu
            self.set_area(self.pre_menu_area);
        }
        changed
    }

    pub fn hide_overlay(&mut self) -> bool {
        let closing = self.overlays.current_overlay();
        let changed = self.overlays.hide_overlay();
        if let Some(id) = closing {
            self.callbacks.overlay_closed(id);
        }
        if changed {
            self.settle_focus();
        }
        changed
    }

    pub fn toggle_overlay(&mut self, id: OverlayId) -> bool {
        if self.overlays.current_overlay() == Some(id) {
            self.hide_overlay()
        } else {
            self.show_overlay(id)
        }
    }

    /// Step back one overlay level
    pub fn go_back_overlay(&mut self) -> bool {
        let closing = self.overlays.current_overlay();
        let changed = self.overlays.go_back();
        if let Some(id) = closing {
            self.callbacks.overlay_closed(id);
        }
        if changed {
            self.settle_focus();
        }
        changed
    }

    /// Open the in-game menu and focus it
    pub fn open_left_sidebar(&mut self) -> bool {
        self.begin_layer();
        let changed = self.overlays.open_left_sidebar();
        if changed {
            self.indices.game_menu_index = 0;
        }
        self.set_area(FocusArea::OverlayLeft);
        changed
    }

    pub fn close_left_sidebar(&mut self) -> bool {
        let changed = self.overlays.close_left_sidebar();
        if changed {
            self.settle_focus();
        }
        changed
    }

    pub fn toggle_left_sidebar(&mut self) -> bool {
        if self.overlays.left_sidebar_open() {
            self.close_left_sidebar()
        } else {
            self.open_left_sidebar()
        }
    }

    /// Open quick settings and focus it
    pub fn open_right_sidebar(&mut self) -> bool {
        self.begin_layer();
        let changed = self.overlays.open_right_sidebar();
        self.set_area(FocusArea::OverlayRight);
        changed
    }

    pub fn close_right_sidebar(&mut self) -> bool {
        let changed = self.overlays.close_right_sidebar();
        if changed {
            self.settle_focus();
        }
        changed
    }

    pub fn toggle_right_sidebar(&mut self) -> bool {
        if self.overlays.right_sidebar_open() {
            self.close_right_sidebar()
        } else {
            self.open_right_sidebar()
        }
    }

    pub fn close_all_sidebars(&mut self) -> bool {
        let changed = self.overlays.close_all_sidebars();
        if changed {
            self.settle_focus();
        }
        changed
    }

    /// A collaborator's modal opened
    pub fn open_modal(&mut self, modal: BlockingModal) -> bool {
        self.begin_layer();
        let changed = self.overlays.set_blocking_modal(modal, true);
        if let Some(area) = FocusArea::for_modal(modal) {
            self.set_area(area);
        }
        changed
    }

    /// A collaborator's modal closed
    pub fn close_modal(&mut self, modal: BlockingModal) -> bool {
        let changed = self.overlays.set_blocking_modal(modal, false);
        if changed {
            self.settle_focus();
        }
        changed
    }

    /// Remember where to land before the first layer opens
    fn begin_layer(&mut self) {
        if !self.overlays.is_navigation_suspended() {
            self.pre_overlay_area = Some(self.top_level_area());
        }
    }

    /// Pick the area after a layer closed: the topmost remaining layer, or
    /// the dismiss landing once nothing is left
    fn settle_focus(&mut self) {
        let next = if self.overlays.right_sidebar_open() {
            FocusArea::OverlayRight
        } else if self.overlays.left_sidebar_open() {
            FocusArea::OverlayLeft
        } else if let Some(area) = self.overlays.open_modal().and_then(FocusArea::for_modal) {
            area
        } else if self.overlays.is_navigation_suspended() {
            // A full-screen overlay or the file browser is still up
            if self.area.is_top_level() {
                self.area
            } else {
                self.pre_overlay_area.unwrap_or_default()
            }
        } else {
            let restored = self.pre_overlay_area.take().unwrap_or_default();
            match self.dismiss_focus {
                OverlayDismissFocus::Hero => FocusArea::Hero,
                OverlayDismissFocus::Restore => restored,
            }
        };
        self.set_area(next);
    }

    fn top_level_area(&self) -> FocusArea {
        match self.area {
            FocusArea::SidebarMenu => self.pre_menu_area,
            area if area.is_top_level() => area,
            _ => FocusArea::Library,
        }
    }

    fn set_area(&mut self, area: FocusArea) {
        if self.area != area {
            log::debug!("focus: {:?} -> {:?}", self.area, area);
            self.area = area;
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.indices.active_index < self.partition.len().max(1),
            "active index {} outside library of {}",
            self.indices.active_index,
            self.partition.len()
        );
        debug_assert!(self.indices.sidebar_index < self.sidebar_len.max(1));
        debug_assert!(self.indices.game_menu_index < GameMenuItem::ALL.len());
        debug_assert!(self.indices.slider_index < self.slider_len.max(1));
        debug_assert!(self.area != FocusArea::OverlayLeft || self.overlays.left_sidebar_open());
        debug_assert!(self.area != FocusArea::OverlayRight || self.overlays.right_sidebar_open());
        debug_assert!(self.pre_menu_area != FocusArea::SidebarMenu);
    }
}

/// Clamp into [0, len-1]; an empty region pins the index at 0
fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
