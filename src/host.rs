//! Host capabilities consumed by the annotator
//!
//! The annotator never touches global browser state. Element lookup, the
//! viewport size and the drawable surface all come from a [`Host`], which
//! lets the core run against an in-memory host in tests.

use crate::error::Result;
use crate::geometry::{Point, Rect, Region, Viewport};

/// Document and window access
pub trait Host {
    type Surface: Surface;

    /// Bounding box of the element matching `locator`, if any
    fn locate(&self, locator: &str) -> Option<Region>;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Create a new, unattached overlay surface
    fn create_surface(&self) -> Result<Self::Surface>;
}

/// A transparent drawable layer placed over the page
pub trait Surface {
    /// Size the surface to `viewport` and pin it to its top-left corner,
    /// above page content
    fn fit_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Erase everything drawn so far
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<()>;

    /// Draw `text` centred horizontally and vertically on `center`
    fn fill_text(&mut self, text: &str, center: Point, font: &str, color: &str) -> Result<()>;

    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: &str);

    fn is_attached(&self) -> bool;

    fn attach(&mut self) -> Result<()>;

    fn detach(&mut self);
}
