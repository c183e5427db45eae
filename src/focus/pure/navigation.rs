// Focus transition logic (pure functions)
//
// `navigate` maps one event in one context to the actions the engine should
// apply. Nothing here touches engine state.

use crate::focus::types::{FocusArea, GameMenuItem, NavAction, NavContext};
use crate::library::{apply_index_delta, flat_to_row_col, move_across_rows, move_within_row, row_col_to_flat};
use crate::nav::{NavKind, NavigationEvent};

/// Actions for one navigation event
pub fn navigate(ctx: &NavContext, event: &NavigationEvent) -> Vec<NavAction> {
    match ctx.area {
        // Side panels are the overlays' own sub-areas and keep their input
        FocusArea::OverlayLeft => navigate_game_menu(ctx, event),
        FocusArea::OverlayRight => navigate_quick_settings(ctx, event),
        _ if ctx.suspended => match event.kind {
            NavKind::Back => back_to_overlay(ctx),
            _ => Vec::new(),
        },
        FocusArea::SidebarMenu => navigate_sidebar(ctx, event.kind),
        FocusArea::Hero => navigate_hero(ctx, event.kind),
        FocusArea::Library => navigate_library(ctx, event.kind),
        // Delegated to the search and keyboard widgets
        FocusArea::Search | FocusArea::VirtualKeyboard => Vec::new(),
    }
}

/// Back while suspended closes the topmost layer
fn back_to_overlay(ctx: &NavContext) -> Vec<NavAction> {
    if ctx.right_sidebar_open {
        vec![NavAction::CloseRightSidebar]
    } else if ctx.left_sidebar_open {
        vec![NavAction::CloseLeftSidebar]
    } else if ctx.overlay_open {
        vec![NavAction::CloseOverlay]
    } else if let Some(modal) = ctx.open_modal {
        vec![NavAction::CloseModal(modal)]
    } else {
        Vec::new()
    }
}

fn navigate_library(ctx: &NavContext, kind: NavKind) -> Vec<NavAction> {
    let partition = ctx.partition;
    let (row, col) = flat_to_row_col(partition, ctx.indices.active_index);

    match kind {
        NavKind::Up if row == 0 => vec![NavAction::SetFocusArea(FocusArea::Hero)],
        NavKind::Up | NavKind::Down => {
            let (new_row, new_col) = move_across_rows(partition, row, col, kind.delta());
            if new_row == row {
                return Vec::new();
            }
            vec![NavAction::SetActiveIndex(row_col_to_flat(partition, new_row, new_col))]
        }
        NavKind::Left | NavKind::Right => {
            let new_col = move_within_row(partition, row, col, kind.delta());
            if new_col == col {
                return Vec::new();
            }
            vec![NavAction::SetActiveIndex(row_col_to_flat(partition, row, new_col))]
        }
        NavKind::Confirm => launch_active(ctx),
        NavKind::Menu => vec![NavAction::OpenSideMenu],
        NavKind::Back => Vec::new(),
    }
}

fn navigate_hero(ctx: &NavContext, kind: NavKind) -> Vec<NavAction> {
    match kind {
        // Active index is untouched, so the previous column comes back
        NavKind::Down => vec![NavAction::SetFocusArea(FocusArea::Library)],
        NavKind::Confirm => launch_active(ctx),
        NavKind::Menu => vec![NavAction::OpenSideMenu],
        _ => Vec::new(),
    }
}

fn launch_active(ctx: &NavContext) -> Vec<NavAction> {
    if ctx.partition.is_empty() {
        return Vec::new();
    }
    vec![NavAction::Launch(ctx.indices.active_index)]
}

fn navigate_sidebar(ctx: &NavContext, kind: NavKind) -> Vec<NavAction> {
    let index = ctx.indices.sidebar_index;
    match kind {
        NavKind::Up | NavKind::Down => {
            vec![NavAction::SetSidebarIndex(apply_index_delta(index, kind.delta(), ctx.sidebar_len))]
        }
        NavKind::Confirm => vec![NavAction::SidebarSelect(index), NavAction::CloseSideMenu],
        // The menu slides in from the left, so Right leaves it like Back does
        NavKind::Back | NavKind::Right => vec![NavAction::CloseSideMenu],
        NavKind::Menu => vec![NavAction::OpenSideMenu],
        NavKind::Left => Vec::new(),
    }
}

fn navigate_game_menu(ctx: &NavContext, event: &NavigationEvent) -> Vec<NavAction> {
    let index = ctx.indices.game_menu_index;
    match event.kind {
        NavKind::Up | NavKind::Down => vec![NavAction::SetGameMenuIndex(apply_index_delta(
            index,
            event.kind.delta(),
            GameMenuItem::ALL.len(),
        ))],
        NavKind::Confirm => match GameMenuItem::from_index(index) {
            Some(item) => vec![NavAction::GameMenuSelect(item)],
            None => Vec::new(),
        },
        NavKind::Back => vec![NavAction::CloseLeftSidebar],
        _ => Vec::new(),
    }
}

fn navigate_quick_settings(ctx: &NavContext, event: &NavigationEvent) -> Vec<NavAction> {
    let slider = ctx.indices.slider_index;
    match event.kind {
        NavKind::Up | NavKind::Down => vec![NavAction::SetSliderIndex(apply_index_delta(
            slider,
            event.kind.delta(),
            ctx.slider_len,
        ))],
        NavKind::Left | NavKind::Right => {
            let scale = event.magnitude.unwrap_or(1.0);
            vec![NavAction::AdjustSlider {
                direction: event.kind.delta() as f32 * scale,
                slider,
            }]
        }
        NavKind::Back => vec![NavAction::CloseRightSidebar],
        _ => Vec::new(),
    }
}
