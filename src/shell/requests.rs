//! Deferred shell requests
//!
//! Engine callbacks only queue a `ShellRequest`; the shell applies the queue
//! after each dispatch, when the engine is free to be mutated again.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ShellConfig;
use crate::focus::{FocusArea, FocusEngine, ShellCallbacks};
use crate::overlay::{BlockingModal, OverlayId};

/// Step applied to a slider per full-magnitude nudge
const SLIDER_STEP: f32 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellRequest {
    Launch(usize),
    SidebarSelect(usize),
    Resume,
    Quit,
    AdjustSlider { direction: f32, slider: usize },
    CloseModal(BlockingModal),
    OverlayClosed(OverlayId),
}

pub type RequestQueue = Rc<RefCell<VecDeque<ShellRequest>>>;

/// `ShellCallbacks` that only records what was asked for
pub struct QueuedCallbacks {
    queue: RequestQueue,
}

impl QueuedCallbacks {
    pub fn new(queue: RequestQueue) -> Self {
        Self { queue }
    }

    fn push(&self, request: ShellRequest) {
        self.queue.borrow_mut().push_back(request);
    }
}

impl ShellCallbacks for QueuedCallbacks {
    fn launch(&mut self, index: usize) {
        self.push(ShellRequest::Launch(index));
    }

    fn sidebar_select(&mut self, index: usize) {
        self.push(ShellRequest::SidebarSelect(index));
    }

    fn quit(&mut self) {
        self.push(ShellRequest::Quit);
    }

    fn resume(&mut self) {
        self.push(ShellRequest::Resume);
    }

    fn slider_adjust(&mut self, direction: f32, slider: usize) {
        self.push(ShellRequest::AdjustSlider { direction, slider });
    }

    fn overlay_closed(&mut self, id: OverlayId) {
        self.push(ShellRequest::OverlayClosed(id));
    }

    fn modal_close_requested(&mut self, modal: BlockingModal) {
        self.push(ShellRequest::CloseModal(modal));
    }
}

/// Host-side state that the engine doesn't track
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    /// Flat index of the game "running" behind the in-game menu
    pub running: Option<usize>,
    /// Quick-settings values in 0..=1, one per configured slider
    pub sliders: Vec<f32>,
    pub search_text: String,
}

impl ShellState {
    pub fn new(cfg: &ShellConfig) -> Self {
        Self {
            running: None,
            sliders: vec![0.5; cfg.quick_settings_sliders.len()],
            search_text: String::new(),
        }
    }

    pub fn apply(&mut self, engine: &mut FocusEngine, cfg: &ShellConfig, request: ShellRequest) {
        match request {
            ShellRequest::Launch(index) => {
                let title = engine
                    .partition()
                    .game(index)
                    .map(|g| g.title.clone())
                    .unwrap_or_default();
                log::info!("shell: Launching {:?} (index {})", title, index);
                self.running = Some(index);
                // The in-game menu stands in for the running game
                engine.open_left_sidebar();
            }
            ShellRequest::SidebarSelect(index) => {
                let Some(item) = cfg.sidebar_items.get(index) else {
                    return;
                };
                self.select_sidebar_item(engine, item);
            }
            ShellRequest::Resume => {
                log::debug!("shell: Resume");
            }
            ShellRequest::Quit => {
                log::info!("shell: Quit game {:?}", self.running);
                self.running = None;
            }
            ShellRequest::AdjustSlider { direction, slider } => {
                if let Some(value) = self.sliders.get_mut(slider) {
                    *value = (*value + direction * SLIDER_STEP).clamp(0.0, 1.0);
                }
            }
            ShellRequest::CloseModal(modal) => {
                engine.close_modal(modal);
            }
            ShellRequest::OverlayClosed(id) => {
                log::debug!("shell: {:?} closed", id);
            }
        }
    }

    fn select_sidebar_item(&mut self, engine: &mut FocusEngine, item: &str) {
        match item.to_lowercase().as_str() {
            "home" => {
                engine.set_focus_area(FocusArea::Hero);
            }
            "library" => {
                engine.set_focus_area(FocusArea::Library);
            }
            "search" => {
                engine.open_modal(BlockingModal::Search);
            }
            "settings" => {
                engine.show_overlay(OverlayId::Settings);
            }
            "achievements" => {
                engine.show_overlay(OverlayId::Achievements);
            }
            "power" => {
                engine.show_overlay(OverlayId::Power);
            }
            other => log::warn!("shell: No action bound to side menu item {:?}", other),
        }
    }

    /// Apply every queued request, including ones queued while applying
    pub fn drain(&mut self, queue: &RequestQueue, engine: &mut FocusEngine, cfg: &ShellConfig) {
        loop {
            let next = queue.borrow_mut().pop_front();
            match next {
                Some(request) => self.apply(engine, cfg, request),
                None => break,
            }
        }
    }
}
