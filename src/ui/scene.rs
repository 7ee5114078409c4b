use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use super::board::build_board_grid;
use super::hud::{reset_hud, set_header_game, set_header_menu, set_header_victory};
use super::sound::Sound;
use super::state::AppState;

pub(super) fn rebuild_board(state: &Rc<RefCell<AppState>>) {
    let Some(board_container) = state.borrow().board_container.clone() else {
        return;
    };

    while let Some(child) = board_container.first_child() {
        board_container.remove(&child);
    }
    let grid = build_board_grid(state);
    let grid_frame = gtk::AspectFrame::new(0.5, 0.5, 1.0, false);
    grid_frame.set_halign(gtk::Align::Fill);
    grid_frame.set_valign(gtk::Align::Fill);
    grid_frame.set_hexpand(true);
    grid_frame.set_vexpand(true);
    grid_frame.set_child(Some(&grid));
    board_container.append(&grid_frame);

    reset_hud(&state.borrow());
}

fn show_page(state: &Rc<RefCell<AppState>>, name: &str, transition: gtk::StackTransitionType) {
    let st = state.borrow();
    if let Some(stack) = &st.view_stack {
        stack.set_transition_type(transition);
        stack.set_visible_child_name(name);
    }
}

pub(super) fn show_menu(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        st.cancel_pending();
        st.session.stop_timer();
        if let Some(confetti) = st.confetti.as_mut() {
            confetti.stop();
        }
    }
    set_header_menu(state);
    show_page(state, "menu", gtk::StackTransitionType::SlideRight);
}

pub(super) fn show_game(state: &Rc<RefCell<AppState>>) {
    set_header_game(state);
    show_page(state, "game", gtk::StackTransitionType::SlideLeft);
}

pub(super) fn show_victory(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        st.sounds.play(Sound::Win);
        if let Some(confetti) = st.confetti.as_mut() {
            confetti.launch();
        }
    }
    set_header_victory(state);
    show_page(state, "victory", gtk::StackTransitionType::SlideLeft);
}
