//! Browser host backed by `web-sys`
//!
//! Elements are found with `document.querySelector`, the overlay is a
//! `<canvas>` appended to `document.body`.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::error::{AnnotateError, Result};
use crate::geometry::{Point, Rect, Region, Viewport};
use crate::host::{Host, Surface};

/// Keeps the overlay above positioned page content
const OVERLAY_Z_INDEX: &str = "2147483647";

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Host for the global `window` of the current page
    pub fn from_global() -> Result<Self> {
        let window = web_sys::window().ok_or(AnnotateError::NoWindow)?;
        let document = window.document().ok_or(AnnotateError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Host for WebHost {
    type Surface = WebSurface;

    fn locate(&self, locator: &str) -> Option<Region> {
        // querySelector throws on malformed selectors; treat that as no match
        let element = self.document.query_selector(locator).ok().flatten()?;
        let rect = element.get_bounding_client_rect();
        Some(Region::new(rect.top(), rect.left(), rect.width(), rect.height()))
    }

    fn viewport(&self) -> Viewport {
        let dimension = |value: std::result::Result<wasm_bindgen::JsValue, _>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
        }
    }

    fn create_surface(&self) -> Result<WebSurface> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AnnotateError::Dom("Created element is not a canvas".to_string()))?;

        let context = canvas
            .get_context("2d")?
            .ok_or(AnnotateError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AnnotateError::ContextUnavailable)?;

        Ok(WebSurface {
            document: self.document.clone(),
            canvas,
            context,
        })
    }
}

/// Full-viewport canvas overlay
pub struct WebSurface {
    document: Document,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl WebSurface {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for WebSurface {
    fn fit_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);

        let style = self.canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("z-index", OVERLAY_Z_INDEX)?;
        style.set_property("pointer-events", "none")?;
        Ok(())
    }

    fn clear(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<()> {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.set_fill_style_str(color);
        ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        ctx.close_path();
        ctx.fill();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, center: Point, font: &str, color: &str) -> Result<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(color);
        ctx.set_font(font);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(text, center.x, center.y)?;
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: &str) {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.set_line_width(line_width);
        ctx.set_stroke_style_str(color);
        ctx.rect(rect.x, rect.y, rect.width, rect.height);
        ctx.stroke();
    }

    fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }

    fn attach(&mut self) -> Result<()> {
        let body = self.document.body().ok_or(AnnotateError::NoBody)?;
        body.append_child(&self.canvas)?;
        Ok(())
    }

    fn detach(&mut self) {
        self.canvas.remove();
    }
}
