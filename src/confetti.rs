//! Falling-square confetti for the win screen.
//!
//! Pure state; the front-end calls [`Confetti::step`] once per frame and draws
//! each particle as a filled square.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hue: f64,
    pub speed: f64,
}

impl Particle {
    /// `hsl(hue, 100%, 50%)` as RGB components in `0.0..=1.0`.
    pub fn rgb(&self) -> (f64, f64, f64) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();
        match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Confetti {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl Confetti {
    /// Scatters particles across the width, starting up to one screen
    /// height above the top edge.
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(-height..0.0),
                size: rng.random_range(2.0..10.0),
                hue: rng.random_range(0.0..360.0),
                speed: rng.random_range(2.0..5.0),
            })
            .collect();
        Confetti {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Moves every particle down by its speed; anything past the bottom edge
    /// re-enters just above the top.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.y += particle.speed;
            if particle.y > self.height {
                particle.y = -10.0;
            }
        }
    }
}
