// particles.rs - Particle storage
//
// Structure-of-Arrays, capacity fixed at MAX_PARTICLES.

use crate::config::{MAX_PARTICLES, RADIUS_MAX, RADIUS_MIN};
use crate::rng::Rng;

pub struct Particles {
    // Position
    pub x: [f64; MAX_PARTICLES],
    pub y: [f64; MAX_PARTICLES],

    // Velocity
    pub vx: [f64; MAX_PARTICLES],
    pub vy: [f64; MAX_PARTICLES],

    pub r: [f64; MAX_PARTICLES],

    // Count
    pub n: usize,
}

impl Particles {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_PARTICLES],
            y: [0.0; MAX_PARTICLES],
            vx: [0.0; MAX_PARTICLES],
            vy: [0.0; MAX_PARTICLES],
            r: [0.0; MAX_PARTICLES],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    /// Replace the whole set with `count` fresh particles inside w x h.
    /// Velocity components are in [-speed/2, speed/2).
    pub fn populate(&mut self, count: usize, w: f64, h: f64, speed: f64, rng: &mut Rng) {
        self.clear();
        for i in 0..count.min(MAX_PARTICLES) {
            self.x[i] = rng.unit() * w;
            self.y[i] = rng.unit() * h;
            self.vx[i] = (rng.unit() - 0.5) * speed;
            self.vy[i] = (rng.unit() - 0.5) * speed;
            self.r[i] = rng.range(RADIUS_MIN, RADIUS_MAX);
            self.n += 1;
        }
    }

    #[inline]
    pub fn pos(&self, i: usize) -> (f64, f64) {
        (self.x[i], self.y[i])
    }

    #[inline]
    pub fn speed(&self, i: usize) -> f64 {
        self.vx[i].hypot(self.vy[i])
    }

    /// Place one particle directly. Used to set up scenes.
    pub fn push(&mut self, x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Option<usize> {
        if self.n >= MAX_PARTICLES { return None; }
        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.vx[i] = vx;
        self.vy[i] = vy;
        self.r[i] = r;
        self.n += 1;
        Some(i)
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}
