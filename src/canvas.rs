// Surface backed by a <canvas> element's 2D context. Holds the window too
// so it can size itself to the viewport.

use crate::color::Color;
use crate::error::Error;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Canvas2d {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Canvas2d {
    // Fails when the element is missing, isn't a canvas, or has no 2D context
    pub fn acquire(window: &Window, id: &str) -> Result<Self, Error> {
        let document = window.document().ok_or(Error::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::NotACanvas(id.to_owned()))?;
        let context = canvas
            .get_context("2d")?
            .ok_or(Error::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::NoContext)?;

        Ok(Canvas2d {
            window: window.clone(),
            canvas,
            context,
        })
    }
}

fn viewport_extent(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map_or(0, |v| v as u32)
}

impl Surface for Canvas2d {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn viewport_size(&self) -> (u32, u32) {
        (
            viewport_extent(self.window.inner_width()),
            viewport_extent(self.window.inner_height()),
        )
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) {
        self.context.begin_path();
        if let Err(err) = self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
        {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.context.set_fill_style(&JsValue::from_str(&color.css()));
        self.context.set_global_alpha(alpha);
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(&color.css()));
        self.context.set_global_alpha(alpha);
        self.context.stroke();
    }

    fn reset_alpha(&mut self) {
        self.context.set_global_alpha(1.0);
    }
}
