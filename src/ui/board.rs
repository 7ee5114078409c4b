use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::pango;
use gtk4::prelude::*;

use super::app::handle_tile_click;
use super::state::AppState;
use crate::game::{Card, CardState};

pub const CONTENT_MARGIN: i32 = 12;
pub const TILE_GAP: i32 = 8;

const HIDDEN_FACE: &str = "?";

pub(super) fn redraw_button_child(button: &gtk::Button) {
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

pub(super) fn apply_card_state(button: &gtk::Button, state: CardState) {
    button.remove_css_class("active");
    button.remove_css_class("matched");
    match state {
        CardState::Hidden => (),
        CardState::Flipped => button.add_css_class("active"),
        CardState::Matched => button.add_css_class("matched"),
    }
    redraw_button_child(button);
}

pub(super) fn refresh_card(st: &AppState, card: &Card) {
    if let Some(button) = st.grid_buttons.get(card.position) {
        apply_card_state(button, card.state);
    }
}

fn card_face(state: &Rc<RefCell<AppState>>, index: usize) -> Option<(String, bool)> {
    let st = state.borrow();
    let card = st.session.game()?.board().card(index)?;
    if card.is_face_up() {
        Some((card.symbol.clone(), true))
    } else {
        Some((HIDDEN_FACE.to_string(), false))
    }
}

pub fn build_board_grid(state: &Rc<RefCell<AppState>>) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("pairs-board");
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_row_homogeneous(true);
    grid.set_column_homogeneous(true);
    grid.set_halign(gtk::Align::Fill);
    grid.set_valign(gtk::Align::Fill);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let (side, states): (i32, Vec<CardState>) = {
        let st = state.borrow();
        match st.session.game() {
            Some(game) => (
                i32::from(game.board().grid().side()),
                game.board().cards().iter().map(|card| card.state).collect(),
            ),
            None => (0, Vec::new()),
        }
    };

    let mut buttons = Vec::with_capacity(states.len());

    for (index, card_state) in states.into_iter().enumerate() {
        let button = gtk::Button::builder()
            .css_classes(vec!["pairs-card"])
            .hexpand(true)
            .vexpand(true)
            .build();

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.add_css_class("pairs-card-label");

        let state_draw = Rc::downgrade(state);
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let Some(state) = state_draw.upgrade() else {
                return;
            };
            let Some((text, face_up)) = card_face(&state, index) else {
                return;
            };

            let min_dim = f64::from(width.min(height));
            let font_size = if face_up { min_dim * 0.45 } else { min_dim * 0.36 };

            let layout = pangocairo::functions::create_layout(cr);
            let mut font_desc = pango::FontDescription::new();
            if face_up {
                font_desc.set_family("Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans");
            } else {
                font_desc.set_family("Cantarell, Noto Sans, sans");
                font_desc.set_weight(pango::Weight::Bold);
            }
            font_desc.set_size((font_size * f64::from(pango::SCALE)) as i32);
            layout.set_font_description(Some(&font_desc));
            layout.set_text(&text);

            #[allow(deprecated)]
            let fg = area.style_context().color();
            cr.set_source_rgba(
                f64::from(fg.red()),
                f64::from(fg.green()),
                f64::from(fg.blue()),
                f64::from(fg.alpha()),
            );

            let (text_width, text_height) = layout.pixel_size();
            cr.move_to(
                f64::from(width - text_width) / 2.0,
                f64::from(height - text_height) / 2.0,
            );
            pangocairo::functions::show_layout(cr, &layout);
        });
        button.set_child(Some(&drawing_area));
        apply_card_state(&button, card_state);

        let state_click = state.clone();
        button.connect_clicked(move |_| {
            handle_tile_click(&state_click, index);
        });

        let aspect_frame = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(true)
            .vexpand(true)
            .child(&button)
            .build();

        let column = index as i32 % side;
        let row = index as i32 / side;
        grid.attach(&aspect_frame, column, row, 1, 1);
        buttons.push(button);
    }

    grid.connect_closure(
        "notify::width",
        false,
        glib::closure_local!(move |grid: gtk::Grid, _: glib::ParamSpec| {
            if grid.width() < 360 {
                grid.add_css_class("compact");
            } else {
                grid.remove_css_class("compact");
            }
        }),
    );

    state.borrow_mut().grid_buttons = buttons;
    grid
}
