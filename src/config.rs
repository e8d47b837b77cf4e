// config.rs - Tunables and embedding config
//
// Numeric constants are the look of the page. Changing one changes the
// visuals, so they stay named here rather than inlined at use sites.
//
// Configs deserialize from the page's JSON (camelCase, every key optional).

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::BackdropError;

// Wave field
pub const WAVE_SAMPLE_STEP: f64 = 10.0;
pub const WAVE_LAYER_PHASE: f64 = 2.0;
pub const WAVE_LAYER_AMP_SCALE: f64 = 0.2;
pub const WAVE_MIN_WIDTH: f64 = 1024.0;
pub const WAVE_FALLBACK_HEIGHT_CAP: f64 = 850.0;

/// (min width, amplitude, wavelength), widest first
pub const WAVE_BREAKPOINTS: [(f64, f64, f64); 3] = [
    (1600.0, 90.0, 0.001),
    (1200.0, 60.0, 0.0015),
    (0.0, 30.0, 0.0025),
];

// Particle field
pub const PARTICLE_HEIGHT_CAP: f64 = 850.0;
pub const AREA_PER_PARTICLE: f64 = 12000.0;
pub const MAX_PARTICLES: usize = 80;
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 3.0;
pub const REPEL_RADIUS: f64 = 150.0;
pub const REPEL_STRENGTH: f64 = 0.6;
pub const DAMPING: f64 = 0.98;
pub const NUDGE_THRESHOLD: f64 = 0.1;
pub const NUDGE_SPAN: f64 = 0.05;
pub const LINK_ALPHA: f64 = 0.15;
pub const POINTER_LINK_ALPHA: f64 = 0.2;
pub const LINK_WIDTH: f64 = 1.0;

// Host
pub const RESIZE_DEBOUNCE_MS: i32 = 100;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveConfig {
    pub wave_count: usize,
    /// Added to the shared clock once per layer per frame
    pub speed: f64,
    pub amplitude: f64,
    pub wavelength: f64,
    pub y_offset: f64,
    /// One per layer. Layers past the end reuse whatever fill was last set.
    pub colors: Vec<Rgba>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_count: 3,
            speed: 0.01,
            amplitude: 60.0,
            wavelength: 0.0015,
            y_offset: 0.0,
            colors: vec![
                Rgba::new(37, 99, 235, 0.06),
                Rgba::new(59, 130, 246, 0.05),
                Rgba::new(96, 165, 250, 0.04),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Derived from area on resize; a configured value is overwritten.
    #[serde(skip)]
    pub count: usize,
    pub connection_distance: f64,
    pub pointer_distance: f64,
    pub speed: f64,
    pub colors: ParticleColors,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleColors {
    pub particle: Rgba,
    /// Alpha is replaced per line by distance fade
    pub line: Rgba,
    pub accent: Rgba,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 0,
            connection_distance: 120.0,
            pointer_distance: 200.0,
            speed: 0.3,
            colors: ParticleColors::default(),
        }
    }
}

impl Default for ParticleColors {
    fn default() -> Self {
        Self {
            particle: Rgba::new(37, 99, 235, 0.5),
            line: Rgba::rgb(37, 99, 235),
            accent: Rgba::rgb(99, 102, 241),
        }
    }
}

/// Everything `start` needs from the page.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropConfig {
    pub wave_canvas_id: String,
    pub particle_canvas_id: String,
    pub hero_selector: String,
    pub waves: WaveConfig,
    pub particles: ParticleConfig,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            wave_canvas_id: "market-trends-canvas".into(),
            particle_canvas_id: "particle-network-canvas".into(),
            hero_selector: ".hero".into(),
            waves: WaveConfig::default(),
            particles: ParticleConfig::default(),
        }
    }
}

impl BackdropConfig {
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        let config: Self = serde_json::from_str(json)?;
        if config.waves.colors.len() < config.waves.wave_count {
            log::warn!(
                "{} wave layers but only {} colors; extra layers reuse the previous fill",
                config.waves.wave_count,
                config.waves.colors.len()
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_widest_first() {
        assert!(WAVE_BREAKPOINTS.windows(2).all(|w| w[0].0 > w[1].0));
        assert_eq!(WAVE_BREAKPOINTS.last().map(|b| b.0), Some(0.0));
    }

    #[test]
    fn particle_colors_copy_out_of_config() {
        let config = ParticleConfig::default();
        let colors = config.colors;
        assert_eq!(colors.line, config.colors.line);
        assert_eq!(colors.accent, Rgba::rgb(99, 102, 241));
    }

    #[test]
    fn default_wave_colors_cover_layers() {
        let c = WaveConfig::default();
        assert!(c.colors.len() >= c.wave_count);
    }

    #[test]
    fn empty_json_is_default() {
        let c = BackdropConfig::from_json("{}").unwrap();
        assert_eq!(c.wave_canvas_id, "market-trends-canvas");
        assert_eq!(c.waves.wave_count, 3);
        assert_eq!(c.particles.pointer_distance, 200.0);
    }

    #[test]
    fn partial_json_overrides_only_given_keys() {
        let c = BackdropConfig::from_json(
            r#"{
                "heroSelector": "main > section:first-child",
                "waves": { "waveCount": 2, "colors": ["rgba(1,2,3,0.1)", "rgb(4,5,6)"] },
                "particles": { "connectionDistance": 90, "colors": { "accent": "rgb(9,9,9)" } }
            }"#,
        )
        .unwrap();
        assert_eq!(c.hero_selector, "main > section:first-child");
        assert_eq!(c.waves.wave_count, 2);
        assert_eq!(c.waves.colors[1], Rgba::rgb(4, 5, 6));
        assert_eq!(c.waves.speed, 0.01);
        assert_eq!(c.particles.connection_distance, 90.0);
        assert_eq!(c.particles.colors.accent, Rgba::rgb(9, 9, 9));
        assert_eq!(c.particles.colors.line, Rgba::rgb(37, 99, 235));
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let err = BackdropConfig::from_json(r#"{ "waves": { "colors": ["blue"] } }"#).unwrap_err();
        assert!(matches!(err, BackdropError::Config(_)));
    }
}
