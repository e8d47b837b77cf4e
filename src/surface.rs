// surface.rs - Immediate-mode 2D drawing target
//
// The subset of CanvasRenderingContext2d the animators use. The browser
// implementation lives in web/canvas.rs; Recorder captures commands as
// data so frames can be inspected without a browser.

use crate::color::Rgba;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);

    /// Filled circle
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.set_fill_style(color);
        self.fill();
    }

    /// Single stroked segment
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64) {
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.set_stroke_style(color);
        self.set_line_width(width);
        self.stroke();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Fill,
    Stroke,
    FillStyle(Rgba),
    StrokeStyle(Rgba),
    LineWidth(f64),
}

/// Records every call instead of drawing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

/// A stroked segment as seen by the recorder.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgba,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn clear_rect_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, Command::ClearRect { .. })).count()
    }

    /// Filled paths as (points, fill color at fill time).
    /// Color is None when nothing set a fill style yet.
    pub fn filled_paths(&self) -> Vec<(Vec<(f64, f64)>, Option<Rgba>)> {
        let mut out = Vec::new();
        let mut points = Vec::new();
        let mut style = None;
        for c in &self.commands {
            match *c {
                Command::BeginPath => points.clear(),
                Command::MoveTo(x, y) | Command::LineTo(x, y) => points.push((x, y)),
                Command::FillStyle(color) => style = Some(color),
                Command::Fill if !points.is_empty() => out.push((points.clone(), style)),
                _ => {}
            }
        }
        out
    }

    /// Circles as (x, y, radius)
    pub fn circles(&self) -> Vec<(f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                Command::Arc { x, y, radius, .. } => Some((x, y, radius)),
                _ => None,
            })
            .collect()
    }

    /// Two-point stroked paths
    pub fn strokes(&self) -> Vec<Stroke> {
        let mut out = Vec::new();
        let mut points: Vec<(f64, f64)> = Vec::new();
        let mut style = Rgba::rgb(0, 0, 0);
        for c in &self.commands {
            match *c {
                Command::BeginPath => points.clear(),
                Command::MoveTo(x, y) | Command::LineTo(x, y) => points.push((x, y)),
                Command::StrokeStyle(color) => style = color,
                Command::Stroke if points.len() == 2 => out.push(Stroke {
                    from: points[0],
                    to: points[1],
                    color: style,
                }),
                _ => {}
            }
        }
        out
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::ClearRect { x, y, w, h });
    }
    fn begin_path(&mut self) { self.commands.push(Command::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.commands.push(Command::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.commands.push(Command::LineTo(x, y)); }
    fn close_path(&mut self) { self.commands.push(Command::ClosePath); }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(Command::Arc { x, y, radius, start, end });
    }
    fn fill(&mut self) { self.commands.push(Command::Fill); }
    fn stroke(&mut self) { self.commands.push(Command::Stroke); }
    fn set_fill_style(&mut self, color: Rgba) { self.commands.push(Command::FillStyle(color)); }
    fn set_stroke_style(&mut self, color: Rgba) { self.commands.push(Command::StrokeStyle(color)); }
    fn set_line_width(&mut self, width: f64) { self.commands.push(Command::LineWidth(width)); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_circle_is_a_full_arc() {
        let mut rec = Recorder::new();
        rec.fill_circle(5.0, 6.0, 2.0, Rgba::rgb(1, 2, 3));
        assert_eq!(rec.circles(), vec![(5.0, 6.0, 2.0)]);
        assert!(rec.commands.contains(&Command::Arc {
            x: 5.0, y: 6.0, radius: 2.0, start: 0.0, end: std::f64::consts::TAU,
        }));
        assert_eq!(rec.commands.last(), Some(&Command::Fill));
    }

    #[test]
    fn strokes_pick_up_their_style() {
        let mut rec = Recorder::new();
        let red = Rgba::new(255, 0, 0, 0.5);
        rec.stroke_line((0.0, 0.0), (3.0, 4.0), red, 1.0);
        assert_eq!(rec.strokes(), vec![Stroke { from: (0.0, 0.0), to: (3.0, 4.0), color: red }]);
    }
}
