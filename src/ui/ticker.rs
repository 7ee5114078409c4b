use std::cell::RefCell;
use std::rc::Weak;

use gtk4::glib;

use super::app::flush_events;
use super::state::AppState;
use crate::session::Ticker;

/// Drives `Session::tick` from a one-second glib source on the main loop.
pub struct GlibTicker {
    state: Weak<RefCell<AppState>>,
    handle: Option<glib::SourceId>,
}

impl GlibTicker {
    pub fn new(state: Weak<RefCell<AppState>>) -> Self {
        GlibTicker {
            state,
            handle: None,
        }
    }
}

impl Ticker for GlibTicker {
    fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let state = self.state.clone();
        let handle = glib::timeout_add_seconds_local(1, move || {
            let Some(state) = state.upgrade() else {
                return glib::ControlFlow::Break;
            };
            state.borrow_mut().session.tick();
            flush_events(&state);
            glib::ControlFlow::Continue
        });
        self.handle = Some(handle);
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}
