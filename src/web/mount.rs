// mount.rs - Bind an animator to its canvas, listeners and frame loop
//
// A Mounted owns everything that keeps an animator alive. Dropping it
// removes listeners, cancels the resize timer and stops the loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

use super::canvas::{context_2d, find_canvas, fit};
use super::debounce::{resize_debounce, ResizeDebounce};
use super::frame_loop::FrameLoop;
use super::host::{seed, Host};
use super::listener::Listener;
use crate::config::{BackdropConfig, RESIZE_DEBOUNCE_MS};
use crate::error::BackdropError;
use crate::particle::ParticleField;
use crate::rng::Rng;
use crate::wave::WaveField;

pub struct Mounted {
    // Drop order: listeners, then timer, then loop
    _listeners: Vec<Listener>,
    _debounce: Rc<ResizeDebounce>,
    frames: FrameLoop,
}

impl Mounted {
    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }
}

fn debounced_resize(host: &Host, debounce: &Rc<ResizeDebounce>) -> Result<Listener, BackdropError> {
    let debounce = debounce.clone();
    Listener::attach(&host.window, "resize", move |_| debounce.signal())
}

pub fn mount_wave_field(host: &Host, config: &BackdropConfig) -> Result<Option<Mounted>, BackdropError> {
    let id = &config.wave_canvas_id;
    let Some(canvas) = find_canvas(&host.document, id)? else {
        log::debug!("#{id} not on this page");
        return Ok(None);
    };

    let viewport = host.viewport()?;
    if !WaveField::is_enabled_for(viewport.width) {
        log::debug!("wave field off at width {}", viewport.width);
        return Ok(None);
    }

    let mut surface = context_2d(&canvas, id)?;
    let field = Rc::new(RefCell::new(WaveField::new(config.waves.clone())));

    let refit = {
        let (host, field, canvas) = (host.clone(), field.clone(), canvas.clone());
        let selector = config.hero_selector.clone();
        move || {
            let viewport = match host.viewport() {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("wave resize skipped: {e}");
                    return;
                }
            };
            let mut field = field.borrow_mut();
            field.resize(viewport, host.hero(&selector));
            fit(&canvas, field.width(), field.height());
        }
    };
    refit();

    let debounce = resize_debounce(&host.window, RESIZE_DEBOUNCE_MS, refit);
    let listeners = vec![debounced_resize(host, &debounce)?];

    let frames = {
        let field = field.clone();
        FrameLoop::start(&host.window, move || field.borrow_mut().render_frame(&mut surface))?
    };

    log::info!("wave field running on #{id}");
    Ok(Some(Mounted { _listeners: listeners, _debounce: debounce, frames }))
}

pub fn mount_particle_field(host: &Host, config: &BackdropConfig) -> Result<Option<Mounted>, BackdropError> {
    let id = &config.particle_canvas_id;
    let Some(canvas) = find_canvas(&host.document, id)? else {
        log::debug!("#{id} not on this page");
        return Ok(None);
    };

    let mut surface = context_2d(&canvas, id)?;
    let field = Rc::new(RefCell::new(ParticleField::new(config.particles.clone(), Rng::new(seed()))));
    {
        let mut field = field.borrow_mut();
        field.initialize(host.viewport()?);
        fit(&canvas, field.width(), field.height());
    }

    let refit = {
        let (host, field, canvas) = (host.clone(), field.clone(), canvas.clone());
        move || {
            let viewport = match host.viewport() {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("particle resize skipped: {e}");
                    return;
                }
            };
            let mut field = field.borrow_mut();
            field.resize(viewport);
            fit(&canvas, field.width(), field.height());
        }
    };
    let debounce = resize_debounce(&host.window, RESIZE_DEBOUNCE_MS, refit);

    let on_move = {
        let field = field.clone();
        Listener::attach(&host.window, "mousemove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
                field.borrow_mut().set_pointer(ev.client_x() as f64, ev.client_y() as f64);
            }
        })?
    };
    let on_leave = {
        let field = field.clone();
        let root: EventTarget = match host.document.document_element() {
            Some(el) => el.into(),
            None => host.document.clone().into(),
        };
        Listener::attach(&root, "mouseleave", move |_| field.borrow_mut().clear_pointer())?
    };
    let listeners = vec![debounced_resize(host, &debounce)?, on_move, on_leave];

    let frames = {
        let field = field.clone();
        FrameLoop::start(&host.window, move || field.borrow_mut().render_frame(&mut surface))?
    };

    log::info!("particle field running on #{id} ({} particles)", field.borrow().particles().n);
    Ok(Some(Mounted { _listeners: listeners, _debounce: debounce, frames }))
}
