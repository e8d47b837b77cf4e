// startup.rs - Which animators to build, and building them
//
// Decided once from host signals read at startup. A missing canvas or a
// failed mount leaves that animator absent; the other still starts.

use crate::error::BackdropError;
use crate::wave::WaveField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub wave_field: bool,
    pub particle_field: bool,
}

impl Plan {
    pub fn new(prefers_reduced_motion: bool, viewport_width: f64) -> Self {
        if prefers_reduced_motion {
            return Self::default();
        }
        Self {
            wave_field: WaveField::is_enabled_for(viewport_width),
            particle_field: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.wave_field && !self.particle_field
    }
}

/// What `launch` needs from the page.
pub trait StartupHost {
    /// Whatever keeps a running animator alive
    type Mounted;

    fn prefers_reduced_motion(&self) -> bool;
    fn viewport_width(&self) -> Option<f64>;
    /// Ok(None) when the canvas is not on the page
    fn mount_wave_field(&self) -> Result<Option<Self::Mounted>, BackdropError>;
    fn mount_particle_field(&self) -> Result<Option<Self::Mounted>, BackdropError>;
}

pub struct Launched<M> {
    pub wave: Option<M>,
    pub particles: Option<M>,
}

impl<M> Launched<M> {
    pub fn idle() -> Self {
        Self { wave: None, particles: None }
    }

    pub fn is_empty(&self) -> bool {
        self.wave.is_none() && self.particles.is_none()
    }
}

impl<M> Default for Launched<M> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Mount every animator the host allows. Never fails.
pub fn launch<H: StartupHost>(host: &H) -> Launched<H::Mounted> {
    if host.prefers_reduced_motion() {
        log::info!("reduced motion requested, backdrops disabled");
        return Launched::idle();
    }

    let width = host.viewport_width().unwrap_or_else(|| {
        log::warn!("viewport width unavailable, wave field off");
        0.0
    });
    let plan = Plan::new(false, width);

    Launched {
        wave: if plan.wave_field { settle("wave field", host.mount_wave_field()) } else { None },
        particles: if plan.particle_field {
            settle("particle field", host.mount_particle_field())
        } else {
            None
        },
    }
}

fn settle<M>(name: &str, mounted: Result<Option<M>, BackdropError>) -> Option<M> {
    mounted.unwrap_or_else(|e| {
        log::warn!("{name} disabled: {e}");
        None
    })
}
