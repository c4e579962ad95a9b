use std::f64::consts::TAU;

use portfolio_core::radar::{DrawSurface, Point, Stroke};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::log;

/// The radar chart's canvas and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the browser cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }

    fn apply_stroke(&self, stroke: Stroke) {
        self.context.set_stroke_style_str(stroke.color);
        self.context.set_line_width(stroke.width);
    }

    fn circle_path(&self, center: Point, radius: f64) -> bool {
        self.context.begin_path();
        self.context
            .arc(center.x, center.y, radius, 0.0, TAU)
            .is_ok()
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.apply_stroke(stroke);
        self.context.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.context.set_fill_style_str(color);
        self.context.fill();
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.apply_stroke(stroke);
        self.context.stroke();
    }

    fn polygon(&mut self, points: &[Point], fill: &str, stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.context.begin_path();
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.context.close_path();

        self.context.set_fill_style_str(fill);
        self.context.fill();
        self.apply_stroke(stroke);
        self.context.stroke();
    }

    fn text(&mut self, text: &str, at: Point, font: &str, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.set_font(font);
        self.context.set_text_align("center");
        log::report(
            "Failed to draw radar label",
            self.context.fill_text(text, at.x, at.y),
        );
    }
}
