// breakpoint.rs - Width -> (amplitude, wavelength)

use crate::config::WAVE_BREAKPOINTS;

/// Wider screens get taller, longer waves.
pub fn select(width: f64) -> (f64, f64) {
    WAVE_BREAKPOINTS
        .iter()
        .find(|&&(min, _, _)| width >= min)
        .map(|&(_, amplitude, wavelength)| (amplitude, wavelength))
        .unwrap_or((WAVE_BREAKPOINTS[2].1, WAVE_BREAKPOINTS[2].2))
}
