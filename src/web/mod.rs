// web/ - Browser bindings
//
// The only part of the crate that touches the DOM. JS calls `start` once
// the page is ready and keeps the returned Backdrop; `stop()` or `free()`
// tears both animators down.

mod canvas;
mod debounce;
mod frame_loop;
mod host;
mod listener;
mod mount;

use std::sync::Once;

use wasm_bindgen::prelude::*;

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::startup::{launch, Launched, StartupHost};
use host::Host;
use mount::{mount_particle_field, mount_wave_field, Mounted};

impl From<JsValue> for BackdropError {
    fn from(e: JsValue) -> Self {
        BackdropError::Js(format!("{e:?}"))
    }
}

#[wasm_bindgen]
pub struct Backdrop {
    wave: Option<Mounted>,
    particles: Option<Mounted>,
}

impl Backdrop {
    fn idle() -> Self {
        Self { wave: None, particles: None }
    }
}

#[wasm_bindgen]
impl Backdrop {
    pub fn stop(&mut self) {
        self.wave = None;
        self.particles = None;
    }

    pub fn is_running(&self) -> bool {
        self.wave.iter().chain(self.particles.iter()).any(Mounted::is_running)
    }

    pub fn has_wave_field(&self) -> bool { self.wave.is_some() }
    pub fn has_particle_field(&self) -> bool { self.particles.is_some() }
}

/// Start both backdrops. `config` is optional JSON, see BackdropConfig.
/// Only malformed config throws; anything missing on the page just means
/// that animator is absent.
#[wasm_bindgen]
pub fn start(config: Option<String>) -> Result<Backdrop, JsError> {
    init_logging();
    let config = match config.as_deref() {
        Some(json) => BackdropConfig::from_json(json)?,
        None => BackdropConfig::default(),
    };
    Ok(run(&config))
}

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        console_log::init_with_level(level).ok();
    });
}

/// The live page as seen by `startup::launch`
struct Page<'a> {
    host: Host,
    config: &'a BackdropConfig,
}

impl StartupHost for Page<'_> {
    type Mounted = Mounted;

    fn prefers_reduced_motion(&self) -> bool {
        self.host.prefers_reduced_motion()
    }

    fn viewport_width(&self) -> Option<f64> {
        self.host.viewport().map(|v| v.width).ok()
    }

    fn mount_wave_field(&self) -> Result<Option<Mounted>, BackdropError> {
        mount_wave_field(&self.host, self.config)
    }

    fn mount_particle_field(&self) -> Result<Option<Mounted>, BackdropError> {
        mount_particle_field(&self.host, self.config)
    }
}

fn run(config: &BackdropConfig) -> Backdrop {
    let host = match Host::current() {
        Ok(host) => host,
        Err(e) => {
            log::warn!("backdrops disabled: {e}");
            return Backdrop::idle();
        }
    };

    let Launched { wave, particles } = launch(&Page { host, config });
    Backdrop { wave, particles }
}
