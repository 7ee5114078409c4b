use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;

use crate::confetti::Confetti;

fn paint(cr: &cairo::Context, confetti: &Confetti) {
    for particle in confetti.particles() {
        let (r, g, b) = particle.rgb();
        cr.set_source_rgb(r, g, b);
        cr.rectangle(particle.x, particle.y, particle.size, particle.size);
        if let Err(err) = cr.fill() {
            log::debug!("confetti paint failed: {err}");
            return;
        }
    }
}

/// Drawing area that rains confetti over the victory card while launched.
pub struct ConfettiLayer {
    area: gtk::DrawingArea,
    model: Rc<RefCell<Option<Confetti>>>,
    tick: Option<gtk::TickCallbackId>,
}

impl ConfettiLayer {
    pub fn new() -> Self {
        let area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .can_target(false)
            .build();
        area.add_css_class("confetti-layer");

        let model: Rc<RefCell<Option<Confetti>>> = Rc::new(RefCell::new(None));
        area.set_draw_func({
            let model = model.clone();
            move |_, cr, _, _| {
                if let Some(confetti) = model.borrow().as_ref() {
                    paint(cr, confetti);
                }
            }
        });

        ConfettiLayer {
            area,
            model,
            tick: None,
        }
    }

    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn launch(&mut self) {
        self.stop();
        let model = self.model.clone();
        let tick = self.area.add_tick_callback(move |area, _| {
            let width = f64::from(area.width());
            let height = f64::from(area.height());
            let mut model = model.borrow_mut();
            match model.as_mut() {
                Some(confetti) => {
                    confetti.resize(width, height);
                    confetti.step();
                }
                // The victory page may not be allocated yet on the first frame.
                None if width > 0.0 && height > 0.0 => {
                    *model = Some(Confetti::new(width, height, &mut rand::rng()));
                }
                None => {}
            }
            area.queue_draw();
            glib::ControlFlow::Continue
        });
        self.tick = Some(tick);
    }

    pub fn stop(&mut self) {
        if let Some(tick) = self.tick.take() {
            tick.remove();
        }
        self.model.borrow_mut().take();
        self.area.queue_draw();
    }
}
