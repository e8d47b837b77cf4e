// viewport.rs - Layout inputs read from the page

/// CSS pixel size of the browser viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Vertical extent of the hero section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroRegion {
    pub top: f64,
    pub height: f64,
}
