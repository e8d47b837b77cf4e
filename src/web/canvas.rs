// canvas.rs - Surface backed by a real <canvas>

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::color::Rgba;
use crate::error::BackdropError;
use crate::surface::Surface;

pub struct Canvas2d(CanvasRenderingContext2d);

/// Ok(None) when the page simply has no such element.
pub fn find_canvas(document: &Document, id: &str) -> Result<Option<HtmlCanvasElement>, BackdropError> {
    let Some(el) = document.get_element_by_id(id) else { return Ok(None) };
    el.dyn_into::<HtmlCanvasElement>()
        .map(Some)
        .map_err(|_| BackdropError::NotACanvas(id.to_string()))
}

pub fn context_2d(canvas: &HtmlCanvasElement, id: &str) -> Result<Canvas2d, BackdropError> {
    let unavailable = || BackdropError::ContextUnavailable(id.to_string());
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(unavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| unavailable())?;
    Ok(Canvas2d(ctx))
}

/// Backing store size in CSS pixels
pub fn fit(canvas: &HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}

impl Surface for Canvas2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.0.clear_rect(x, y, w, h); }
    fn begin_path(&mut self) { self.0.begin_path(); }
    fn move_to(&mut self, x: f64, y: f64) { self.0.move_to(x, y); }
    fn line_to(&mut self, x: f64, y: f64) { self.0.line_to(x, y); }
    fn close_path(&mut self) { self.0.close_path(); }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // Only throws on a negative radius
        if let Err(e) = self.0.arc(x, y, radius, start, end) {
            log::trace!("arc rejected: {e:?}");
        }
    }

    fn fill(&mut self) { self.0.fill(); }
    fn stroke(&mut self) { self.0.stroke(); }
    fn set_fill_style(&mut self, color: Rgba) { self.0.set_fill_style_str(&color.to_string()); }
    fn set_stroke_style(&mut self, color: Rgba) { self.0.set_stroke_style_str(&color.to_string()); }
    fn set_line_width(&mut self, width: f64) { self.0.set_line_width(width); }
}
