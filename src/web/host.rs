// host.rs - Reads from the browser: viewport, hero layout, preferences

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::REDUCED_MOTION_QUERY;
use crate::error::BackdropError;
use crate::viewport::{HeroRegion, Viewport};

#[derive(Clone)]
pub struct Host {
    pub window: Window,
    pub document: Document,
}

impl Host {
    pub fn current() -> Result<Self, BackdropError> {
        let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
        let document = window.document().ok_or(BackdropError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn viewport(&self) -> Result<Viewport, BackdropError> {
        let dim = |v: wasm_bindgen::JsValue, name: &str| {
            v.as_f64().ok_or_else(|| BackdropError::Js(format!("{name} is not a number")))
        };
        Ok(Viewport::new(
            dim(self.window.inner_width()?, "innerWidth")?,
            dim(self.window.inner_height()?, "innerHeight")?,
        ))
    }

    /// None when the selector matches nothing (or is not valid CSS).
    pub fn hero(&self, selector: &str) -> Option<HeroRegion> {
        let el = match self.document.query_selector(selector) {
            Ok(el) => el?,
            Err(e) => {
                log::warn!("hero selector {selector:?} rejected: {e:?}");
                return None;
            }
        };
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(HeroRegion {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        matches!(self.window.match_media(REDUCED_MOTION_QUERY), Ok(Some(mql)) if mql.matches())
    }
}

/// RNG seed from Math.random
pub fn seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}
