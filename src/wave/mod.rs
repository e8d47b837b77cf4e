// wave/ - "Market Trends" layered sine backdrop
//
// Each layer is a sine silhouette filled down to the bottom edge.
// Layers share one clock; the per-layer phase and amplitude offsets keep
// overlapping layers visually apart.

mod breakpoint;

pub use breakpoint::select as select_breakpoint;

use crate::config::{
    WaveConfig, WAVE_FALLBACK_HEIGHT_CAP, WAVE_LAYER_AMP_SCALE, WAVE_LAYER_PHASE, WAVE_MIN_WIDTH,
    WAVE_SAMPLE_STEP,
};
use crate::surface::Surface;
use crate::viewport::{HeroRegion, Viewport};

pub struct WaveField {
    config: WaveConfig,
    time: f64,
    w: f64,
    h: f64,
}

impl WaveField {
    pub fn new(config: WaveConfig) -> Self {
        Self { config, time: 0.0, w: 0.0, h: 0.0 }
    }

    /// Narrow viewports get no waves at all.
    pub fn is_enabled_for(viewport_width: f64) -> bool {
        viewport_width > WAVE_MIN_WIDTH
    }

    /// Fit the surface to the viewport and hero section.
    ///
    /// With a hero the surface ends at the hero's bottom and the waves sit on
    /// its vertical center. Without one, the viewport height is capped and the
    /// waves are centered in that.
    pub fn resize(&mut self, viewport: Viewport, hero: Option<HeroRegion>) {
        self.w = viewport.width;
        match hero {
            Some(hero) => {
                self.h = hero.top + hero.height;
                self.config.y_offset = hero.top + hero.height / 2.0;
            }
            None => {
                self.h = viewport.height.min(WAVE_FALLBACK_HEIGHT_CAP);
                self.config.y_offset = self.h / 2.0;
            }
        }

        let (amplitude, wavelength) = select_breakpoint(self.w);
        self.config.amplitude = amplitude;
        self.config.wavelength = wavelength;

        log::debug!(
            "wave field resized to {}x{} (amplitude {}, wavelength {})",
            self.w, self.h, amplitude, wavelength
        );
    }

    /// Closed silhouette for layer `i` at clock value `time`:
    /// bottom-left corner, the sampled curve, bottom-right corner.
    pub fn layer_points(&self, i: usize, time: f64) -> Vec<(f64, f64)> {
        let c = &self.config;
        let layer = i as f64;
        let amp = c.amplitude * (1.0 + layer * WAVE_LAYER_AMP_SCALE);

        let mut points = Vec::with_capacity((self.w / WAVE_SAMPLE_STEP) as usize + 3);
        points.push((0.0, self.h));
        let mut x = 0.0;
        while x <= self.w {
            let y = c.y_offset + (x * c.wavelength + time + layer * WAVE_LAYER_PHASE).sin() * amp;
            points.push((x, y));
            x += WAVE_SAMPLE_STEP;
        }
        points.push((self.w, self.h));
        points
    }

    /// Clear, then advance the clock and fill each layer in turn.
    pub fn render_frame(&mut self, surface: &mut impl Surface) {
        surface.clear_rect(0.0, 0.0, self.w, self.h);

        for i in 0..self.config.wave_count {
            self.time += self.config.speed;

            let points = self.layer_points(i, self.time);
            surface.begin_path();
            let mut iter = points.iter();
            if let Some(&(x, y)) = iter.next() {
                surface.move_to(x, y);
            }
            for &(x, y) in iter {
                surface.line_to(x, y);
            }
            surface.close_path();

            if let Some(&color) = self.config.colors.get(i) {
                surface.set_fill_style(color);
            }
            surface.fill();
        }
    }

    pub fn config(&self) -> &WaveConfig { &self.config }
    pub fn time(&self) -> f64 { self.time }
    pub fn width(&self) -> f64 { self.w }
    pub fn height(&self) -> f64 { self.h }
}
