//! Surface - the 2D drawing target the engine renders into
//!
//! Only the two calls a cell renderer needs: pick a fill colour, fill a rect.
//! The browser canvas context implements it directly; `RecordingSurface`
//! keeps the calls for inspection.

use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

impl Surface for CanvasRenderingContext2d {
    #[inline]
    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    #[inline]
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    FillColor(String),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
}

/// Surface that records every call (offscreen hosts, tests)
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Rects drawn after the most recent colour change to `color`
    pub fn rects_in(&self, color: &str) -> Vec<(f64, f64, f64, f64)> {
        let mut current: Option<&str> = None;
        let mut rects = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::FillColor(c) => current = Some(c.as_str()),
                SurfaceOp::FillRect { x, y, w, h } => {
                    if current == Some(color) {
                        rects.push((*x, *y, *w, *h));
                    }
                }
            }
        }
        rects
    }

    pub fn fill_rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::FillRect { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(SurfaceOp::FillColor(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::FillRect { x, y, w, h });
    }
}
