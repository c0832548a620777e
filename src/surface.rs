// Drawing surface abstraction. The simulation core draws through the
// `Surface` trait so it can run headless in tests; `CanvasSurface` is the
// real implementation on top of a 2d canvas context.

use crate::color::Color;
use vecmath::Vector2;
use web_sys::{console, CanvasRenderingContext2d};

/// Pixel dimensions of the drawing surface, mirroring the hero container's
/// client size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> SurfaceSize {
        SurfaceSize { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

pub trait Surface {
    /// Wipe the whole surface in preparation for the next frame.
    fn clear(&mut self, size: SurfaceSize);

    /// Filled disc at `center` with the given radius.
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);

    /// One-pixel-wide line segment with the given stroke opacity.
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color, opacity: f64);
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> CanvasSurface {
        CanvasSurface { context }
    }
}


impl Surface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.context
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.begin_path();
        if let Err(err) = self
            .context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)
        {
            // Bad arc geometry spoils this draw only; the frame goes on.
            console::error_1(&err);
            return;
        }
        self.context.set_fill_style_str(&color.css());
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color, opacity: f64) {
        self.context
            .set_stroke_style_str(&color.css_with_alpha(opacity));
        self.context.set_line_width(1.0);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
