//! eframe host
//!
//! `raw_input_hook` feeds keyboard, pointer and evdev signals to the arbiter
//! and the bridge and dispatches the resulting navigation events; `update`
//! draws the logical state and forwards pointer hover/click to the engine.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Key, RichText};

use crate::config::ShellConfig;
use crate::focus::{FocusArea, FocusEngine, GameMenuItem};
use crate::input::{DeviceArbiter, GamepadHub, HubEvent, InputDevice};
use crate::library::{Game, LibraryFilter};
use crate::listeners::Subscription;
use crate::nav::{NavigationBridge, NavigationEvent};
use crate::overlay::BlockingModal;
use crate::shell::requests::{QueuedCallbacks, RequestQueue, ShellRequest, ShellState};
use crate::shell::theme::{self, colors};

/// Keys the bridge consumes; egui must not also act on them
const NAV_KEYS: [Key; 6] = [
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Enter,
    Key::Escape,
];

pub struct TenfootApp {
    cfg: ShellConfig,
    engine: FocusEngine,
    arbiter: DeviceArbiter,
    bridge: NavigationBridge,
    hub: GamepadHub,
    gamepad_active: Arc<AtomicBool>,
    pending: Rc<RefCell<Vec<NavigationEvent>>>,
    requests: RequestQueue,
    state: ShellState,
    subscriptions: Vec<Subscription>,
}

impl TenfootApp {
    pub fn new(cfg: ShellConfig, games: Vec<Game>) -> Self {
        let requests: RequestQueue = Rc::new(RefCell::new(VecDeque::new()));
        let mut engine = FocusEngine::new(&cfg, Box::new(QueuedCallbacks::new(requests.clone())));
        engine.set_games(games);

        let arbiter = DeviceArbiter::new(Duration::from_millis(cfg.device_poll_ms));
        let bridge = NavigationBridge::new(Duration::from_millis(cfg.debounce_ms), cfg.menu_key.clone());

        let pending: Rc<RefCell<Vec<NavigationEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = pending.clone();
        let subscriptions = vec![
            bridge.subscribe(move |event| sink.borrow_mut().push(*event)),
            arbiter.on_device_change(|change| {
                log::info!("shell: Active device {:?} ({:?})", change.device, change.brand);
            }),
        ];

        let gamepad_active = arbiter.gamepad_active_flag();
        let hub = GamepadHub::new(cfg.pad_filter_type);
        let state = ShellState::new(&cfg);

        Self {
            cfg,
            engine,
            arbiter,
            bridge,
            hub,
            gamepad_active,
            pending,
            requests,
            state,
            subscriptions,
        }
    }

    /// Drain every pad; button presses only count while `focused`
    fn poll_gamepads(&mut self, now: Instant, focused: bool) {
        for event in hub_events_for_focus(self.hub.poll(), focused) {
            match event {
                HubEvent::Connected(name) => self.arbiter.on_gamepad_connected(&name),
                HubEvent::Disconnected(name) => {
                    log::info!("shell: Gamepad {} went away", name);
                }
                HubEvent::Button { pad, button, magnitude } => {
                    if let Some(source) = self.hub.pads().get(pad) {
                        self.arbiter.on_gamepad_activity(source);
                    }
                    self.bridge.push_pad_button(button, magnitude, now);
                }
            }
        }
        if focused {
            self.arbiter.poll_gamepads(self.hub.pads(), now);
        }
    }

    /// Dispatch bridged events, applying queued requests after each one
    fn dispatch_pending(&mut self) {
        let events: Vec<NavigationEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in events {
            self.engine.dispatch(&event);
            self.drain_requests();
        }
    }

    fn drain_requests(&mut self) {
        self.state.drain(&self.requests, &mut self.engine, &self.cfg);
    }

    fn set_search_filter(&mut self) {
        let text = self.state.search_text.trim();
        let filter = if text.is_empty() {
            LibraryFilter::All
        } else {
            LibraryFilter::Title(text.to_string())
        };
        self.engine.set_filter(filter);
    }

    fn display_top_bar(&self, ui: &mut egui::Ui) {
        let device = self.arbiter.current_device();
        let brand = self.arbiter.controller_brand();
        ui.horizontal(|ui| {
            ui.label(RichText::new(device.icon()).size(20.0));
            if device == InputDevice::Gamepad {
                ui.label(brand.label());
                ui.separator();
                ui.label(format!("{} Select", brand.confirm_label()));
                ui.label(format!("{} Back", brand.back_label()));
            }
            ui.separator();
            ui.label(format!("{:?}", self.engine.focus_area()));
            if let Some(title) = self
                .state
                .running
                .and_then(|idx| self.engine.partition().game(idx))
                .map(|g| g.title.as_str())
            {
                ui.separator();
                ui.label(format!("Running: {}", title));
            }
        });
    }

    fn display_side_menu(&mut self, ui: &mut egui::Ui) {
        ui.heading("Menu");
        let mut clicked = None;
        for (idx, item) in self.cfg.sidebar_items.iter().enumerate() {
            let selected = idx == self.engine.sidebar_index();
            if ui.selectable_label(selected, item).clicked() {
                clicked = Some(idx);
            }
        }
        if let Some(idx) = clicked {
            self.engine.close_side_menu();
            self.requests.borrow_mut().push_back(ShellRequest::SidebarSelect(idx));
        }
    }

    fn display_game_menu(&self, ui: &mut egui::Ui) {
        ui.heading("Game");
        let focused = self.engine.focus_area() == FocusArea::OverlayLeft;
        for (idx, item) in GameMenuItem::ALL.iter().enumerate() {
            let selected = focused && idx == self.engine.game_menu_index();
            ui.selectable_label(selected, item.label());
        }
    }

    fn display_quick_settings(&self, ui: &mut egui::Ui) {
        ui.heading("Quick Settings");
        let focused = self.engine.focus_area() == FocusArea::OverlayRight;
        for (idx, name) in self.cfg.quick_settings_sliders.iter().enumerate() {
            let value = self.state.sliders.get(idx).copied().unwrap_or_default();
            let text = if focused && idx == self.engine.slider_index() {
                RichText::new(name).color(colors::ACCENT)
            } else {
                RichText::new(name)
            };
            ui.label(text);
            ui.add(egui::ProgressBar::new(value).show_percentage());
        }
    }

    fn display_library(&mut self, ui: &mut egui::Ui) {
        let device = self.arbiter.current_device();
        let area = self.engine.focus_area();
        let active = self.engine.active_index();

        let mut tile_hovered = None;
        let mut tile_clicked = None;

        let hero = theme::region_frame(area == FocusArea::Hero).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let title = self
                .engine
                .active_game()
                .map(|g| g.title.as_str())
                .unwrap_or("No games");
            ui.label(RichText::new(title).size(32.0));
        });
        let hero_response = ui.interact(hero.response.rect, ui.id().with("hero"), egui::Sense::click());
        let hero_hovered = hero_response.hovered();
        let hero_clicked = hero_response.clicked();

        ui.add_space(12.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in self.engine.partition().rows() {
                ui.label(RichText::new(&row.label).color(colors::TEXT_MUTED));
                ui.horizontal(|ui| {
                    for (col, game) in row.games.iter().enumerate() {
                        let index = row.offset + col;
                        let selected = area == FocusArea::Library && index == active;
                        let response = ui.selectable_label(selected, &game.title);
                        if response.hovered() {
                            tile_hovered = Some(index);
                        }
                        if response.clicked() {
                            tile_clicked = Some(index);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

        if let Some(index) = tile_clicked {
            self.engine.click_library(index);
        } else if hero_clicked {
            self.engine.click_hero();
        } else if let Some(index) = tile_hovered {
            self.engine.hover_library(index, device);
        } else if hero_hovered {
            self.engine.hover_hero(device);
        }
    }

    fn display_overlay(&mut self, ctx: &egui::Context) {
        let Some(id) = self.engine.overlays().current_overlay() else {
            return;
        };
        let mut close = false;
        egui::Window::new(format!("{:?}", id))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Press Back to close");
                close = ui.button("Close").clicked();
            });
        if close {
            self.engine.go_back_overlay();
        }
    }

    fn display_search(&mut self, ctx: &egui::Context) {
        if !self.engine.overlays().is_modal_open(BlockingModal::Search) {
            return;
        }
        let mut changed = false;
        let mut close = false;
        egui::Window::new("Search")
            .collapsible(false)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .show(ctx, |ui| {
                changed = ui.text_edit_singleline(&mut self.state.search_text).changed();
                close = ui.button("Done").clicked();
            });
        if changed {
            self.set_search_filter();
        }
        if close {
            self.engine.close_modal(BlockingModal::Search);
        }
    }
}

impl eframe::App for TenfootApp {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        let now = Instant::now();
        if !raw_input.focused {
            // Key-ups are lost while unfocused
            self.bridge.release_all_keys();
            // evdev queues keep filling behind a running game; a backlog
            // would trip the flood guard on refocus
            self.poll_gamepads(now, false);
            return;
        }

        for event in &raw_input.events {
            match event {
                egui::Event::Key { key, pressed: true, repeat, .. } => {
                    self.arbiter.on_key_down();
                    self.bridge.push_key_down(key.name(), *repeat);
                }
                egui::Event::Key { key, pressed: false, .. } => {
                    self.bridge.push_key_up(key.name());
                }
                egui::Event::PointerMoved(_) => self.arbiter.on_pointer_move(),
                _ => {}
            }
        }

        // Text entry keeps its keys while search is open
        if !self.engine.overlays().is_modal_open(BlockingModal::Search) {
            raw_input.events.retain(|event| {
                !matches!(event, egui::Event::Key { key, .. } if NAV_KEYS.contains(key))
            });
        }

        self.poll_gamepads(now, true);
        self.dispatch_pending();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.gamepad_active.load(Ordering::Relaxed) {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::NONE
                .fill(colors::BG_DARK)
                .inner_margin(egui::Margin::symmetric(8, 4)))
            .show(ctx, |ui| self.display_top_bar(ui));

        if self.engine.is_sidebar_open() {
            egui::SidePanel::left("side_menu").show(ctx, |ui| self.display_side_menu(ui));
        }
        if self.engine.overlays().left_sidebar_open() {
            egui::SidePanel::left("game_menu").show(ctx, |ui| self.display_game_menu(ui));
        }
        if self.engine.overlays().right_sidebar_open() {
            egui::SidePanel::right("quick_settings").show(ctx, |ui| self.display_quick_settings(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| self.display_library(ui));

        self.display_overlay(ctx);
        self.display_search(ctx);
        self.drain_requests();

        // Pads are polled from raw_input_hook, so keep frames coming
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Hotplug events always pass; button presses are dropped while unfocused
fn hub_events_for_focus(events: Vec<HubEvent>, focused: bool) -> Vec<HubEvent> {
    if focused {
        return events;
    }
    events
        .into_iter()
        .filter(|event| !matches!(event, HubEvent::Button { .. }))
        .collect()
}

impl Drop for TenfootApp {
    fn drop(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PadButton;

    fn frame() -> Vec<HubEvent> {
        vec![
            HubEvent::Connected("Xbox Wireless Controller".to_string()),
            HubEvent::Button { pad: 0, button: PadButton::South, magnitude: None },
            HubEvent::Disconnected("8BitDo Pro 2".to_string()),
        ]
    }

    #[test]
    fn unfocused_frame_keeps_hotplug_only() {
        assert_eq!(
            hub_events_for_focus(frame(), false),
            vec![
                HubEvent::Connected("Xbox Wireless Controller".to_string()),
                HubEvent::Disconnected("8BitDo Pro 2".to_string()),
            ]
        );
    }

    #[test]
    fn focused_frame_passes_everything() {
        assert_eq!(hub_events_for_focus(frame(), true), frame());
    }
}
