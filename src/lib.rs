//! Rect Annotator
//!
//! Draws numbered rectangles around HTML elements on a transparent,
//! full-viewport canvas:
//! - element bounds are captured once, when the annotator is built
//! - `render` draws a numbered badge and an outline per element
//! - `dispose` removes the canvas again
//!
//! The drawing core in [`annotator`] is host-agnostic; [`web`] provides the
//! browser host used by the exported `Annotator` class.

use wasm_bindgen::prelude::*;

pub mod annotator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod web;

// Re-export common types
pub use annotator::{Annotator, Lifecycle};
pub use config::{MarkerConfig, PartialMarkerConfig};
pub use error::{AnnotateError, Result};
pub use geometry::{Point, Rect, Region, Viewport};
pub use host::{Host, Surface};
pub use web::{WebHost, WebSurface};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in debug mode
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-log")]
    init_console_logging();
}

/// Send `info` and above to the browser console.
///
/// Leaves an already installed subscriber in place.
#[cfg(feature = "console-log")]
fn init_console_logging() {
    use tracing_subscriber::layer::SubscriberExt;

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .set_report_logs_in_timings(false)
        .build();
    let subscriber =
        tracing_subscriber::Registry::default().with(tracing_wasm::WASMLayer::new(config));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// JS-facing annotator bound to the global document.
///
/// Never throws: missing elements, a missing document and drawing failures
/// all degrade to drawing less.
#[wasm_bindgen(js_name = "Annotator")]
pub struct WebAnnotator {
    inner: Option<Annotator<WebHost>>,
    config: MarkerConfig,
}

#[wasm_bindgen(js_class = "Annotator")]
impl WebAnnotator {
    /// Create an annotator for an array of CSS selectors and an optional
    /// partial config object
    #[wasm_bindgen(constructor)]
    pub fn new(locators: JsValue, config: JsValue) -> Self {
        let config = MarkerConfig::from_js(&config);
        let locators = locators_from_js(&locators);

        let inner = match WebHost::from_global() {
            Ok(host) => Some(Annotator::new(host, locators, config.clone())),
            Err(e) => {
                tracing::warn!(error = %e, "No browser document, annotator is inert");
                None
            }
        };

        Self { inner, config }
    }

    /// Draw the markers and attach the overlay canvas
    pub fn render(&mut self) {
        if let Some(annotator) = self.inner.as_mut() {
            if let Err(e) = annotator.render() {
                tracing::warn!(error = %e, "Render failed");
            }
        }
    }

    /// Alias of `render`
    pub fn draw(&mut self) {
        self.render();
    }

    /// Remove the overlay canvas; later calls do nothing
    pub fn dispose(&mut self) {
        if let Some(annotator) = self.inner.as_mut() {
            annotator.dispose();
        }
    }

    #[wasm_bindgen(js_name = "isDisposed")]
    pub fn is_disposed(&self) -> bool {
        self.inner.as_ref().map_or(true, |a| a.is_disposed())
    }

    /// The resolved config as a plain object
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.config).unwrap_or(JsValue::UNDEFINED)
    }
}

impl WebAnnotator {
    /// The underlying annotator, absent when there was no browser document
    pub fn annotator(&self) -> Option<&Annotator<WebHost>> {
        self.inner.as_ref()
    }
}

/// Array entries that are not strings become locators that match nothing.
/// Anything other than an array is an empty list.
fn locators_from_js(value: &JsValue) -> Vec<Option<String>> {
    if !js_sys::Array::is_array(value) {
        return Vec::new();
    }
    js_sys::Array::from(value).iter().map(|v| v.as_string()).collect()
}
