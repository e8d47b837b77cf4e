// backdrop-engine - Ambient page backgrounds
//
// Two independent canvas animators:
//   wave/      layered sine "market trends" backdrop
//   particle/  drifting particle network that shies away from the pointer
//
// Everything outside web/ is browser-free and drives a `Surface`.
// web/ binds it to real canvases, timers and listeners (wasm32 only).

pub mod color;
pub mod config;
pub mod error;
pub mod particle;
pub mod rng;
pub mod schedule;
pub mod startup;
pub mod surface;
pub mod viewport;
pub mod wave;

#[cfg(target_arch = "wasm32")]
mod web;

pub use color::Rgba;
pub use config::{BackdropConfig, ParticleConfig, WaveConfig};
pub use error::BackdropError;
pub use particle::ParticleField;
pub use startup::{launch, Launched, Plan, StartupHost};
pub use surface::{Recorder, Surface};
pub use viewport::{HeroRegion, Viewport};
pub use wave::WaveField;

#[cfg(target_arch = "wasm32")]
pub use web::{Backdrop, start};
