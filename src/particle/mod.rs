// particle/ - Particle network with pointer interaction
//
// Particles drift, get pushed away from the pointer and are linked to
// nearby neighbours and to the pointer by fading lines.

mod motion;
mod particles;

pub use motion::{damp, integrate, nudge, reflect, repel};
pub use particles::Particles;

use crate::config::{
    ParticleConfig, AREA_PER_PARTICLE, LINK_ALPHA, LINK_WIDTH, MAX_PARTICLES, PARTICLE_HEIGHT_CAP,
    POINTER_LINK_ALPHA,
};
use crate::rng::Rng;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Target population for a w x h surface
pub fn particle_count(w: f64, h: f64) -> usize {
    ((w * h / AREA_PER_PARTICLE).floor().max(0.0) as usize).min(MAX_PARTICLES)
}

/// Linear fade: 1 at distance 0, 0 at `max`.
#[inline]
pub fn fade(distance: f64, max: f64) -> f64 {
    1.0 - distance / max
}

/// Line opacity, or None when the pair is too far apart to link.
#[inline]
pub fn link_alpha(distance: f64, max: f64, scale: f64) -> Option<f64> {
    (distance < max).then(|| fade(distance, max) * scale)
}

#[inline]
fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

pub struct ParticleField {
    config: ParticleConfig,
    particles: Particles,
    pointer: Option<(f64, f64)>,
    w: f64,
    h: f64,
    rng: Rng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, rng: Rng) -> Self {
        Self {
            config,
            particles: Particles::new(),
            pointer: None,
            w: 0.0,
            h: 0.0,
            rng,
        }
    }

    /// Size, populate. What mounting does before the first frame.
    pub fn initialize(&mut self, viewport: Viewport) {
        self.resize(viewport);
        if self.particles.n == 0 {
            self.create_particles();
        }
    }

    /// Fit to the viewport, capped to a hero-height band.
    /// An existing population is thrown away and rebuilt.
    pub fn resize(&mut self, viewport: Viewport) {
        self.w = viewport.width;
        self.h = viewport.height.min(PARTICLE_HEIGHT_CAP);
        self.config.count = particle_count(self.w, self.h);

        if self.particles.n > 0 {
            self.create_particles();
        }
        log::debug!("particle field resized to {}x{} ({} particles)", self.w, self.h, self.config.count);
    }

    pub fn create_particles(&mut self) {
        let (count, w, h, speed) = (self.config.count, self.w, self.h, self.config.speed);
        self.particles.populate(count, w, h, speed, &mut self.rng);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Move particle `i` through one frame of physics.
    pub fn step(&mut self, i: usize) {
        let p = &mut self.particles;
        if let Some(pointer) = self.pointer {
            repel(p, i, pointer);
        }
        integrate(p, i);
        damp(p, i);
        nudge(p, i, self.config.speed, &mut self.rng);
        reflect(p, i, self.w, self.h);
    }

    /// Step and draw every particle in index order. A particle links to
    /// later ones at their positions from before their own step this frame.
    pub fn render_frame(&mut self, surface: &mut impl Surface) {
        surface.clear_rect(0.0, 0.0, self.w, self.h);

        let colors = self.config.colors;
        for i in 0..self.particles.n {
            self.step(i);

            let p = &self.particles;
            let here = p.pos(i);
            surface.fill_circle(here.0, here.1, p.r[i], colors.particle);

            for j in i + 1..p.n {
                let there = p.pos(j);
                if let Some(a) = link_alpha(dist(here, there), self.config.connection_distance, LINK_ALPHA) {
                    surface.stroke_line(here, there, colors.line.with_alpha(a), LINK_WIDTH);
                }
            }

            if let Some(pointer) = self.pointer {
                if let Some(a) = link_alpha(dist(here, pointer), self.config.pointer_distance, POINTER_LINK_ALPHA) {
                    surface.stroke_line(here, pointer, colors.accent.with_alpha(a), LINK_WIDTH);
                }
            }
        }
    }

    pub fn config(&self) -> &ParticleConfig { &self.config }
    pub fn particles(&self) -> &Particles { &self.particles }
    pub fn particles_mut(&mut self) -> &mut Particles { &mut self.particles }
    pub fn pointer(&self) -> Option<(f64, f64)> { self.pointer }
    pub fn width(&self) -> f64 { self.w }
    pub fn height(&self) -> f64 { self.h }
}
