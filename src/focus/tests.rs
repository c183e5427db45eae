// End-to-end scenarios through the focus engine

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{OverlayDismissFocus, ShellConfig};
use crate::focus::{FocusArea, FocusEngine, ShellCallbacks};
use crate::input::InputDevice;
use crate::library::{Game, LibraryFilter};
use crate::nav::{NavKind, NavigationEvent};
use crate::overlay::{BlockingModal, OverlayId};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Launch(usize),
    SidebarSelect(usize),
    Quit,
    Resume,
    Slider(f32, usize),
    MenuOpened,
    OverlayClosed(OverlayId),
    ModalClose(BlockingModal),
}

struct Recorder(Rc<RefCell<Vec<Call>>>);

impl ShellCallbacks for Recorder {
    fn launch(&mut self, index: usize) {
        self.0.borrow_mut().push(Call::Launch(index));
    }
    fn sidebar_select(&mut self, index: usize) {
        self.0.borrow_mut().push(Call::SidebarSelect(index));
    }
    fn quit(&mut self) {
        self.0.borrow_mut().push(Call::Quit);
    }
    fn resume(&mut self) {
        self.0.borrow_mut().push(Call::Resume);
    }
    fn slider_adjust(&mut self, direction: f32, slider: usize) {
        self.0.borrow_mut().push(Call::Slider(direction, slider));
    }
    fn menu_opened(&mut self) {
        self.0.borrow_mut().push(Call::MenuOpened);
    }
    fn overlay_closed(&mut self, id: OverlayId) {
        self.0.borrow_mut().push(Call::OverlayClosed(id));
    }
    fn modal_close_requested(&mut self, modal: BlockingModal) {
        self.0.borrow_mut().push(Call::ModalClose(modal));
    }
}

fn games(n: usize) -> Vec<Game> {
    (0..n)
        .map(|i| Game::new(format!("g{}", i), format!("Game {}", i), "x"))
        .collect()
}

/// Seven games in rows of four and three
fn engine_with(cfg: ShellConfig) -> (FocusEngine, Rc<RefCell<Vec<Call>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let cfg = ShellConfig { carousel_row_len: 4, ..cfg };
    let mut engine = FocusEngine::new(&cfg, Box::new(Recorder(calls.clone())));
    engine.set_games(games(7));
    (engine, calls)
}

fn engine() -> (FocusEngine, Rc<RefCell<Vec<Call>>>) {
    engine_with(ShellConfig::default())
}

fn press(engine: &mut FocusEngine, kind: NavKind) {
    engine.dispatch(&NavigationEvent::keyboard(kind));
}

#[test]
fn starts_in_library_at_zero() {
    let (engine, _) = engine();
    assert_eq!(engine.focus_area(), FocusArea::Library);
    assert_eq!(engine.active_index(), 0);
    assert!(!engine.is_sidebar_open());
    assert!(!engine.is_navigation_suspended());
}

#[test]
fn up_then_down_restores_active_index() {
    let (mut engine, calls) = engine();
    engine.set_active_index(2);

    press(&mut engine, NavKind::Up);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(engine.active_index(), 2);

    press(&mut engine, NavKind::Down);
    assert_eq!(engine.focus_area(), FocusArea::Library);
    assert_eq!(engine.active_index(), 2);
    assert!(calls.borrow().is_empty());
}

#[test]
fn right_five_times_stops_at_row_end() {
    let (mut engine, _) = engine();
    for _ in 0..5 {
        press(&mut engine, NavKind::Right);
    }
    assert_eq!(engine.active_index(), 3);
}

#[test]
fn down_from_last_column_clamps_into_shorter_row() {
    let (mut engine, _) = engine();
    engine.set_active_index(3);
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.active_index(), 6);
}

#[test]
fn down_from_first_game_lands_on_second_row() {
    let (mut engine, _) = engine();
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.active_index(), 4);
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.active_index(), 4);
}

#[test]
fn row_edges_leave_index_unchanged() {
    let (mut engine, _) = engine();
    for (start, kind) in [
        (0, NavKind::Left),
        (4, NavKind::Left),
        (3, NavKind::Right),
        (6, NavKind::Right),
    ] {
        engine.set_active_index(start);
        press(&mut engine, kind);
        assert_eq!(engine.active_index(), start, "{:?} from {}", kind, start);
    }
}

#[test]
fn confirm_launches_from_library_and_hero() {
    let (mut engine, calls) = engine();
    engine.set_active_index(5);
    press(&mut engine, NavKind::Confirm);
    press(&mut engine, NavKind::Up);
    press(&mut engine, NavKind::Confirm);
    assert_eq!(*calls.borrow(), vec![Call::Launch(5), Call::Launch(5)]);
}

#[test]
fn side_menu_select_returns_to_previous_area() {
    let (mut engine, calls) = engine();
    press(&mut engine, NavKind::Up);
    press(&mut engine, NavKind::Menu);
    assert!(engine.is_sidebar_open());
    assert_eq!(engine.sidebar_index(), 0);

    press(&mut engine, NavKind::Down);
    press(&mut engine, NavKind::Down);
    press(&mut engine, NavKind::Confirm);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(*calls.borrow(), vec![Call::MenuOpened, Call::SidebarSelect(2)]);
}

#[test]
fn side_menu_back_returns_without_callback() {
    let (mut engine, calls) = engine();
    press(&mut engine, NavKind::Menu);
    for _ in 0..10 {
        press(&mut engine, NavKind::Down);
    }
    assert_eq!(engine.sidebar_index(), 4);
    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::Library);
    assert_eq!(*calls.borrow(), vec![Call::MenuOpened]);
}

#[test]
fn side_menu_focus_request_remembers_origin() {
    let (mut engine, calls) = engine();
    press(&mut engine, NavKind::Up);
    assert_eq!(engine.focus_area(), FocusArea::Hero);

    assert!(engine.set_focus_area(FocusArea::SidebarMenu));
    assert_eq!(engine.focus_area(), FocusArea::SidebarMenu);
    // Already open: no second menu_opened
    assert!(engine.set_focus_area(FocusArea::SidebarMenu));

    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(*calls.borrow(), vec![Call::MenuOpened]);
}

#[test]
fn overlay_swallows_navigation_until_back() {
    let (mut engine, calls) = engine();
    engine.show_overlay(OverlayId::Settings);
    for kind in [NavKind::Down, NavKind::Right, NavKind::Confirm, NavKind::Menu] {
        press(&mut engine, kind);
    }
    assert_eq!(engine.focus_area(), FocusArea::Library);
    assert_eq!(engine.active_index(), 0);
    assert!(calls.borrow().is_empty());

    press(&mut engine, NavKind::Back);
    assert_eq!(engine.overlays().current_overlay(), None);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(*calls.borrow(), vec![Call::OverlayClosed(OverlayId::Settings)]);
}

#[test]
fn back_steps_through_overlay_history() {
    let (mut engine, calls) = engine();
    engine.show_overlay(OverlayId::Settings);
    engine.show_overlay(OverlayId::Power);

    press(&mut engine, NavKind::Back);
    assert_eq!(engine.overlays().current_overlay(), Some(OverlayId::Settings));
    assert!(engine.is_navigation_suspended());

    press(&mut engine, NavKind::Back);
    assert!(!engine.is_navigation_suspended());
    assert_eq!(
        *calls.borrow(),
        vec![
            Call::OverlayClosed(OverlayId::Power),
            Call::OverlayClosed(OverlayId::Settings)
        ]
    );
}

#[test]
fn restore_landing_returns_to_pre_overlay_area() {
    let cfg = ShellConfig {
        overlay_dismiss_focus: OverlayDismissFocus::Restore,
        ..ShellConfig::default()
    };
    let (mut engine, _) = engine_with(cfg);
    engine.set_active_index(5);
    engine.show_overlay(OverlayId::GameDetails);
    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::Library);
    assert_eq!(engine.active_index(), 5);
}

#[test]
fn restore_landing_skips_the_side_menu() {
    let cfg = ShellConfig {
        overlay_dismiss_focus: OverlayDismissFocus::Restore,
        ..ShellConfig::default()
    };
    let (mut engine, _) = engine_with(cfg);
    press(&mut engine, NavKind::Menu);
    engine.open_left_sidebar();
    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::Library);
}

#[test]
fn game_menu_resume_closes_panel() {
    let (mut engine, calls) = engine();
    engine.open_left_sidebar();
    assert_eq!(engine.focus_area(), FocusArea::OverlayLeft);
    assert!(engine.is_navigation_suspended());

    press(&mut engine, NavKind::Confirm);
    assert!(!engine.overlays().left_sidebar_open());
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(*calls.borrow(), vec![Call::Resume]);
}

#[test]
fn quick_settings_from_game_menu() {
    let (mut engine, calls) = engine();
    engine.open_left_sidebar();
    press(&mut engine, NavKind::Down);
    press(&mut engine, NavKind::Confirm);
    assert!(engine.overlays().right_sidebar_open());
    assert_eq!(engine.focus_area(), FocusArea::OverlayRight);

    engine.dispatch(&NavigationEvent::gamepad(NavKind::Right, Some(0.5)));
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.slider_index(), 1);
    press(&mut engine, NavKind::Left);
    assert_eq!(*calls.borrow(), vec![Call::Slider(0.5, 0), Call::Slider(-1.0, 1)]);

    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::OverlayLeft);
    press(&mut engine, NavKind::Back);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert!(!engine.is_navigation_suspended());
}

#[test]
fn game_menu_quit_closes_both_panels() {
    let (mut engine, calls) = engine();
    engine.open_left_sidebar();
    engine.open_right_sidebar();
    assert!(engine.set_focus_area(FocusArea::OverlayLeft));
    press(&mut engine, NavKind::Down);
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.game_menu_index(), 2);

    press(&mut engine, NavKind::Confirm);
    assert!(!engine.overlays().left_sidebar_open());
    assert!(!engine.overlays().right_sidebar_open());
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert_eq!(*calls.borrow(), vec![Call::Quit]);
}

#[test]
fn back_from_top_level_closes_right_panel_first() {
    let (mut engine, _) = engine();
    engine.open_left_sidebar();
    engine.open_right_sidebar();
    engine.set_focus_area(FocusArea::Hero);

    press(&mut engine, NavKind::Back);
    assert!(!engine.overlays().right_sidebar_open());
    assert!(engine.overlays().left_sidebar_open());
    assert_eq!(engine.focus_area(), FocusArea::OverlayLeft);
}

#[test]
fn side_panel_focus_refused_while_closed() {
    let (mut engine, _) = engine();
    assert!(!engine.set_focus_area(FocusArea::OverlayLeft));
    assert!(!engine.set_focus_area(FocusArea::OverlayRight));
    assert_eq!(engine.focus_area(), FocusArea::Library);
}

#[test]
fn search_modal_requests_close_on_back() {
    let (mut engine, calls) = engine();
    engine.open_modal(BlockingModal::Search);
    assert_eq!(engine.focus_area(), FocusArea::Search);

    press(&mut engine, NavKind::Down);
    press(&mut engine, NavKind::Back);
    assert_eq!(*calls.borrow(), vec![Call::ModalClose(BlockingModal::Search)]);
    assert!(engine.is_navigation_suspended());

    engine.close_modal(BlockingModal::Search);
    assert_eq!(engine.focus_area(), FocusArea::Hero);
    assert!(!engine.is_navigation_suspended());
}

#[test]
fn keyboard_over_search_returns_to_search() {
    let (mut engine, _) = engine();
    engine.open_modal(BlockingModal::Search);
    engine.open_modal(BlockingModal::VirtualKeyboard);
    assert_eq!(engine.focus_area(), FocusArea::VirtualKeyboard);
    engine.close_modal(BlockingModal::VirtualKeyboard);
    assert_eq!(engine.focus_area(), FocusArea::Search);
}

#[test]
fn hover_only_follows_an_active_mouse() {
    let (mut engine, _) = engine();
    assert!(!engine.hover_library(5, InputDevice::Keyboard));
    assert!(!engine.hover_hero(InputDevice::Gamepad));
    assert_eq!(engine.active_index(), 0);

    assert!(engine.hover_library(5, InputDevice::Mouse));
    assert_eq!(engine.active_index(), 5);
    assert!(engine.hover_hero(InputDevice::Mouse));
    assert_eq!(engine.focus_area(), FocusArea::Hero);

    engine.show_overlay(OverlayId::Achievements);
    assert!(!engine.hover_library(1, InputDevice::Mouse));
    assert_eq!(engine.active_index(), 5);
}

#[test]
fn click_launches_tile() {
    let (mut engine, calls) = engine();
    assert!(engine.click_library(6));
    assert!(!engine.click_library(9));
    assert_eq!(engine.active_index(), 6);
    assert_eq!(*calls.borrow(), vec![Call::Launch(6)]);
}

#[test]
fn game_list_replacement_clamps_index() {
    let (mut engine, _) = engine();
    engine.set_active_index(6);
    engine.set_games(games(3));
    assert_eq!(engine.active_index(), 2);
    assert_eq!(engine.partition().row_count(), 1);

    engine.set_filter(LibraryFilter::Title("game 1".into()));
    assert_eq!(engine.active_index(), 0);
    assert_eq!(engine.active_game().map(|g| g.id.as_str()), Some("g1"));

    engine.set_games(Vec::new());
    assert_eq!(engine.active_index(), 0);
    press(&mut engine, NavKind::Confirm);
    press(&mut engine, NavKind::Down);
    assert_eq!(engine.focus_area(), FocusArea::Library);
}
