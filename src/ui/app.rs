use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::{LocaleCategory, gettext};
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use log::{debug, info, warn};

use super::board::{CONTENT_MARGIN, refresh_card};
use super::confetti::ConfettiLayer;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{update_move_labels, update_timer_label};
use super::records::fill_victory;
use super::scene::{rebuild_board, show_game, show_menu, show_victory};
use super::sound::Sound;
use super::state::AppState;
use crate::game::{Difficulty, FlipOutcome, SETTLE_DELAY, ThemeKind};
use crate::session::{SessionEvent, WIN_DELAY};

pub const APP_ID: &str = "io.github.pairs.Pairs";
const GETTEXT_DOMAIN: &str = "pairs";

static GLIB_LOGGER: glib::GlibLogger = glib::GlibLogger::new(
    glib::GlibLoggerFormat::Plain,
    glib::GlibLoggerDomain::CrateTarget,
);

fn init_logging() {
    if log::set_logger(&GLIB_LOGGER).is_ok() {
        log::set_max_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }
}

fn init_gettext() {
    gettextrs::setlocale(LocaleCategory::LcAll, "");
    let locale_dir = option_env!("LOCALEDIR").unwrap_or("/usr/share/locale");
    if let Err(err) = gettextrs::bindtextdomain(GETTEXT_DOMAIN, locale_dir) {
        warn!("could not bind text domain: {err}");
    }
    if let Err(err) = gettextrs::textdomain(GETTEXT_DOMAIN) {
        warn!("could not select text domain: {err}");
    }
}

pub fn run() -> glib::ExitCode {
    init_logging();
    init_gettext();

    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        load_css();

        let state = Rc::new_cyclic(|this| RefCell::new(AppState::new(this.clone())));

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            move |_, _| app.quit()
        });
        app.add_action(&quit_action);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        let title = adw::WindowTitle::new("Pairs", "");
        let header = adw::HeaderBar::builder().title_widget(&title).build();
        header.add_css_class("flat");

        let menu_model = gio::Menu::new();
        menu_model.append(Some(&gettext("How to Play")), Some("app.instructions"));
        menu_model.append(Some(&gettext("About Pairs")), Some("app.about"));
        menu_model.append(Some(&gettext("Quit")), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();

        let restart_button = gtk::Button::builder()
            .icon_name("view-refresh-symbolic")
            .build();
        restart_button.set_tooltip_text(Some(&gettext("Restart")));
        restart_button.connect_clicked({
            let state = state.clone();
            move |_| {
                restart_game(&state);
            }
        });
        let end_box = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        end_box.append(&restart_button);
        end_box.append(&menu_button);
        header.pack_end(&end_box);

        let view_stack = gtk::Stack::new();
        view_stack.set_hexpand(true);
        view_stack.set_vexpand(true);
        view_stack.set_hhomogeneous(false);
        view_stack.set_vhomogeneous(false);
        view_stack.set_transition_duration(300);

        let menu_view = build_menu_view(&state);
        view_stack.add_named(&menu_view, Some("menu"));

        let game_view = build_game_view(&state);
        view_stack.add_named(&game_view, Some("game"));

        let victory_view = build_victory_view(&state);
        view_stack.add_named(&victory_view, Some("victory"));

        view_stack.set_visible_child_name("menu");

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&view_stack));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Pairs")
            .icon_name(APP_ID)
            .default_width(640)
            .default_height(720)
            .content(&toolbar)
            .build();
        win.set_size_request(360, 560);

        {
            let mut st = state.borrow_mut();
            st.view_stack = Some(view_stack);
            st.header = Some(header);
            st.title = Some(title);
            st.restart_button = Some(restart_button);
            apply_color_scheme(st.settings.dark_mode);
            st.sounds.set_music(st.settings.music);
        }

        win.connect_close_request({
            let state = state.clone();
            move |_| {
                let mut st = state.borrow_mut();
                st.cancel_pending();
                st.session.stop_timer();
                glib::Propagation::Proceed
            }
        });

        show_menu(&state);
        win.present();
    });

    app.run()
}

fn load_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(include_str!("../../data/style.css"));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn apply_color_scheme(dark: bool) {
    adw::StyleManager::default().set_color_scheme(if dark {
        adw::ColorScheme::ForceDark
    } else {
        adw::ColorScheme::Default
    });
}

fn section_label(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class("heading");
    label.set_margin_top(12);
    label
}

fn build_menu_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("main-menu-root");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 8);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.set_vexpand(true);

    let title = gtk::Label::new(Some(&gettext("Memory Game")));
    title.add_css_class("title-1");
    content.append(&title);

    let (current_theme, dark_mode, music) = {
        let st = state.borrow();
        (st.settings.theme, st.settings.dark_mode, st.settings.music)
    };

    content.append(&section_label(&gettext("Difficulty")));
    for difficulty in Difficulty::ALL {
        let side = difficulty.grid_size().side();
        let button = gtk::Button::with_label(&format!(
            "{} ({side}×{side})",
            gettext(difficulty.name())
        ));
        button.add_css_class("main-menu-button");
        button.add_css_class("pill");
        button.set_size_request(180, 40);
        button.connect_clicked({
            let state = state.clone();
            move |_| {
                {
                    let mut st = state.borrow_mut();
                    st.settings.difficulty = difficulty;
                    st.save_settings();
                }
                start_game(&state);
            }
        });
        content.append(&button);
    }

    content.append(&section_label(&gettext("Theme")));
    let theme_row = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    theme_row.add_css_class("linked");
    theme_row.set_halign(gtk::Align::Center);
    let mut group: Option<gtk::ToggleButton> = None;
    for kind in ThemeKind::ALL {
        let toggle = gtk::ToggleButton::with_label(&gettext(kind.label()));
        toggle.set_group(group.as_ref());
        toggle.set_active(kind == current_theme);
        toggle.connect_toggled({
            let state = state.clone();
            move |toggle| {
                if !toggle.is_active() {
                    return;
                }
                let mut st = state.borrow_mut();
                st.settings.theme = kind;
                st.save_settings();
            }
        });
        theme_row.append(&toggle);
        group.get_or_insert(toggle);
    }
    content.append(&theme_row);

    let toggles = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    toggles.set_halign(gtk::Align::Center);
    toggles.set_margin_top(12);

    let dark_toggle = gtk::ToggleButton::with_label(&gettext("Dark Mode"));
    dark_toggle.set_active(dark_mode);
    dark_toggle.connect_toggled({
        let state = state.clone();
        move |toggle| {
            let dark = toggle.is_active();
            apply_color_scheme(dark);
            let mut st = state.borrow_mut();
            st.settings.dark_mode = dark;
            st.save_settings();
        }
    });

    let music_toggle = gtk::ToggleButton::with_label(&gettext("Music"));
    music_toggle.set_active(music);
    music_toggle.connect_toggled({
        let state = state.clone();
        move |toggle| {
            let on = toggle.is_active();
            let mut st = state.borrow_mut();
            st.sounds.set_music(on);
            st.settings.music = on;
            st.save_settings();
        }
    });

    toggles.append(&dark_toggle);
    toggles.append(&music_toggle);
    content.append(&toggles);

    root.append(&content);
    root
}

fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("game-root");
    root.set_margin_top(CONTENT_MARGIN);
    root.set_margin_bottom(CONTENT_MARGIN);
    root.set_margin_start(CONTENT_MARGIN);
    root.set_margin_end(CONTENT_MARGIN);

    let hud = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    hud.set_halign(gtk::Align::Center);
    hud.add_css_class("hud");
    let moves_label = gtk::Label::new(None);
    let timer_label = gtk::Label::new(None);
    let stars_label = gtk::Label::new(None);
    for label in [&moves_label, &timer_label, &stars_label] {
        label.add_css_class("hud-label");
        label.add_css_class("numeric");
        hud.append(label);
    }
    root.append(&hud);

    let board_container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_container.set_halign(gtk::Align::Fill);
    board_container.set_valign(gtk::Align::Fill);
    board_container.set_hexpand(true);
    board_container.set_vexpand(true);
    board_container.add_css_class("pairs-card-container");
    root.append(&board_container);

    let mut st = state.borrow_mut();
    st.moves_label = Some(moves_label);
    st.timer_label = Some(timer_label);
    st.stars_label = Some(stars_label);
    st.board_container = Some(board_container);

    root
}

fn build_victory_view(state: &Rc<RefCell<AppState>>) -> gtk::Overlay {
    let overlay = gtk::Overlay::new();
    overlay.set_hexpand(true);
    overlay.set_vexpand(true);
    overlay.add_css_class("victory-root");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.set_margin_top(28);
    content.set_margin_bottom(28);
    content.set_margin_start(28);
    content.set_margin_end(28);
    content.add_css_class("victory-card");

    let title = gtk::Label::new(Some(&gettext("You Win!")));
    title.add_css_class("title-1");
    content.append(&title);

    let final_moves = gtk::Label::new(None);
    let final_time = gtk::Label::new(None);
    let final_stars = gtk::Label::new(None);
    for label in [&final_moves, &final_time, &final_stars] {
        label.add_css_class("victory-stat");
        content.append(label);
    }

    content.append(&section_label(&gettext("Best Times")));
    let leaderboard = gtk::ListBox::new();
    leaderboard.set_selection_mode(gtk::SelectionMode::None);
    leaderboard.add_css_class("boxed-list");
    content.append(&leaderboard);

    let again = gtk::Button::with_label(&gettext("Play Again"));
    again.add_css_class("suggested-action");
    again.add_css_class("pill");
    again.set_halign(gtk::Align::Center);
    again.set_margin_top(6);
    again.connect_clicked({
        let state = state.clone();
        move |_| {
            show_menu(&state);
        }
    });
    content.append(&again);

    overlay.set_child(Some(&content));

    let confetti = ConfettiLayer::new();
    overlay.add_overlay(confetti.widget());

    let mut st = state.borrow_mut();
    st.final_moves_label = Some(final_moves);
    st.final_time_label = Some(final_time);
    st.final_stars_label = Some(final_stars);
    st.leaderboard_list = Some(leaderboard);
    st.confetti = Some(confetti);

    overlay
}

/// Applies queued session events to the widgets. Must run with no borrow of
/// `state` held.
pub(super) fn flush_events(state: &Rc<RefCell<AppState>>) {
    let events = state.borrow().events.drain();
    for event in events {
        match event {
            SessionEvent::BoardChanged(_) => rebuild_board(state),
            SessionEvent::CardChanged(card) => refresh_card(&state.borrow(), &card),
            SessionEvent::MoveMade { moves, stars } => {
                update_move_labels(&state.borrow(), moves, stars)
            }
            SessionEvent::Tick(elapsed) => update_timer_label(&state.borrow(), elapsed),
            SessionEvent::GameWon(summary) => fill_victory(&state.borrow(), &summary),
        }
    }
}

pub fn handle_tile_click(state: &Rc<RefCell<AppState>>, index: usize) {
    let outcome = state.borrow_mut().session.click(index);
    match outcome {
        Ok(FlipOutcome::Revealed { .. }) => {
            state.borrow().sounds.play(Sound::Flip);
        }
        Ok(FlipOutcome::Matched { won, .. }) => {
            {
                let st = state.borrow();
                st.sounds.play(Sound::Flip);
                st.sounds.play(Sound::Match);
            }
            if won {
                schedule_victory(state);
            }
        }
        Ok(FlipOutcome::Mismatched { .. }) => {
            state.borrow().sounds.play(Sound::Flip);
            schedule_settle(state);
        }
        Err(_) => return,
    }
    flush_events(state);
}

fn schedule_settle(state: &Rc<RefCell<AppState>>) {
    let generation = state.borrow().session.generation();
    let state_settle = state.clone();
    let handle = glib::timeout_add_local_once(SETTLE_DELAY, move || {
        {
            let mut st = state_settle.borrow_mut();
            st.settle_handle = None;
            if st.session.generation() != generation {
                return;
            }
            st.session.settle();
        }
        flush_events(&state_settle);
    });

    let mut st = state.borrow_mut();
    if let Some(previous) = st.settle_handle.replace(handle) {
        previous.remove();
    }
}

fn schedule_victory(state: &Rc<RefCell<AppState>>) {
    let generation = state.borrow().session.generation();
    let state_victory = state.clone();
    let handle = glib::timeout_add_local_once(WIN_DELAY, move || {
        {
            let mut st = state_victory.borrow_mut();
            st.victory_handle = None;
            if st.session.generation() != generation || !st.session.is_won() {
                debug!("dropping stale victory callback");
                return;
            }
        }
        show_victory(&state_victory);
    });

    let mut st = state.borrow_mut();
    if let Some(previous) = st.victory_handle.replace(handle) {
        previous.remove();
    }
}

fn start_game(state: &Rc<RefCell<AppState>>) {
    let result = {
        let mut st = state.borrow_mut();
        st.cancel_pending();
        let grid = st.settings.difficulty.grid_size();
        let theme = st.settings.theme.theme();
        info!("starting {} game with {} theme", st.settings.difficulty.name(), theme.name());
        st.session.start(grid, &theme)
    };
    match result {
        Ok(()) => {
            flush_events(state);
            show_game(state);
        }
        Err(err) => warn!("could not start a game: {err}"),
    }
}

fn restart_game(state: &Rc<RefCell<AppState>>) {
    let result = {
        let mut st = state.borrow_mut();
        st.cancel_pending();
        st.session.restart()
    };
    match result {
        Ok(()) => flush_events(state),
        Err(err) => warn!("could not restart: {err}"),
    }
}
