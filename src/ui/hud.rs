use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4::prelude::*;

use super::state::AppState;
use crate::game::StarRating;

fn set_header(state: &Rc<RefCell<AppState>>, subtitle: &str, restart_visible: bool) {
    let st = state.borrow();
    if let Some(title) = &st.title {
        title.set_subtitle(subtitle);
    }
    if let Some(restart) = &st.restart_button {
        restart.set_visible(restart_visible);
    }
}

pub(super) fn set_header_menu(state: &Rc<RefCell<AppState>>) {
    set_header(state, "", false);
}

pub(super) fn set_header_game(state: &Rc<RefCell<AppState>>) {
    let subtitle = state.borrow().settings.difficulty.name().to_string();
    set_header(state, &gettext(subtitle), true);
}

pub(super) fn set_header_victory(state: &Rc<RefCell<AppState>>) {
    set_header(state, &gettext("Victory"), false);
}

pub(super) fn update_move_labels(st: &AppState, moves: u32, stars: StarRating) {
    if let Some(label) = &st.moves_label {
        label.set_text(&format!("{}: {moves}", gettext("Moves")));
    }
    if let Some(label) = &st.stars_label {
        label.set_text(&stars.to_string());
    }
}

pub(super) fn update_timer_label(st: &AppState, elapsed: u32) {
    if let Some(label) = &st.timer_label {
        label.set_text(&format!("{}: {elapsed}s", gettext("Time")));
    }
}

/// Puts the HUD back to what a fresh board shows.
pub(super) fn reset_hud(st: &AppState) {
    update_move_labels(st, st.session.moves(), st.session.stars());
    update_timer_label(st, st.session.elapsed_seconds());
}
