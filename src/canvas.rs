use crate::core::{Rgba, Surface, SurfaceSize};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` if the canvas cannot hand out a 2D context.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        crate::dom::set_style(&self.canvas, "width", &format!("{}px", size.css_width));
        crate::dom::set_style(&self.canvas, "height", &format!("{}px", size.css_height));
        if let Err(e) = self
            .ctx
            .set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0)
        {
            log::warn!("[starfield] setTransform failed: {:?}", e);
        }
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Rgba, bottom: Rgba) {
        let g = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        _ = g.add_color_stop(0.0, &top.to_string());
        _ = g.add_color_stop(1.0, &bottom.to_string());
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
