use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Weak;

use gtk4 as gtk;
use gtk4::glib;
use libadwaita as adw;

use super::confetti::ConfettiLayer;
use super::sound::Sounds;
use super::ticker::GlibTicker;
use crate::records::FileStore;
use crate::session::{EventLog, Session};
use crate::settings::Settings;

const CONFIG_DIR_NAME: &str = "pairs";

pub fn config_dir() -> PathBuf {
    glib::user_config_dir().join(CONFIG_DIR_NAME)
}

pub struct AppState {
    pub session: Session<GlibTicker, FileStore>,
    pub events: EventLog,
    pub settings: Settings,
    pub settings_store: FileStore,
    pub sounds: Sounds,

    pub view_stack: Option<gtk::Stack>,
    pub header: Option<adw::HeaderBar>,
    pub title: Option<adw::WindowTitle>,
    pub restart_button: Option<gtk::Button>,
    pub board_container: Option<gtk::Box>,
    pub grid_buttons: Vec<gtk::Button>,
    pub moves_label: Option<gtk::Label>,
    pub timer_label: Option<gtk::Label>,
    pub stars_label: Option<gtk::Label>,
    pub final_moves_label: Option<gtk::Label>,
    pub final_time_label: Option<gtk::Label>,
    pub final_stars_label: Option<gtk::Label>,
    pub leaderboard_list: Option<gtk::ListBox>,
    pub confetti: Option<ConfettiLayer>,

    pub settle_handle: Option<glib::SourceId>,
    pub victory_handle: Option<glib::SourceId>,
}

impl AppState {
    /// `this` is the weak handle the state will live behind; the ticker uses it
    /// to reach the session from its glib callback.
    pub fn new(this: Weak<RefCell<AppState>>) -> Self {
        let dir = config_dir();
        let settings_store = FileStore::new(&dir);
        let settings = Settings::load(&settings_store);

        let events = EventLog::new();
        let mut session = Session::new(GlibTicker::new(this), FileStore::new(&dir));
        session.subscribe(events.clone());

        AppState {
            session,
            events,
            settings,
            settings_store,
            sounds: Sounds::load(),
            view_stack: None,
            header: None,
            title: None,
            restart_button: None,
            board_container: None,
            grid_buttons: Vec::new(),
            moves_label: None,
            timer_label: None,
            stars_label: None,
            final_moves_label: None,
            final_time_label: None,
            final_stars_label: None,
            leaderboard_list: None,
            confetti: None,
            settle_handle: None,
            victory_handle: None,
        }
    }

    pub fn save_settings(&mut self) {
        if let Err(err) = self.settings.save(&mut self.settings_store) {
            log::warn!("could not save settings: {err}");
        }
    }

    /// Drops any settle or victory callback still waiting on the old board.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.settle_handle.take() {
            handle.remove();
        }
        if let Some(handle) = self.victory_handle.take() {
            handle.remove();
        }
    }
}
