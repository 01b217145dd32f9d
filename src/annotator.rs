//! Numbered rectangle overlay
//!
//! An [`Annotator`] snapshots the bounds of its target elements once, at
//! construction, and draws a numbered badge plus an outline for each of them
//! on its own overlay surface.

use crate::config::MarkerConfig;
use crate::error::Result;
use crate::geometry::{badge_center, outline_rect, Region};
use crate::host::{Host, Surface};

/// Lifecycle of the overlay surface. `Disposed` is terminal.
#[derive(Debug)]
pub enum Lifecycle<S> {
    Active(S),
    Disposed,
}

pub struct Annotator<H: Host> {
    host: H,
    /// One slot per locator; `None` when nothing matched at construction
    regions: Vec<Option<Region>>,
    config: MarkerConfig,
    surface: Lifecycle<H::Surface>,
}

impl<H: Host> Annotator<H> {
    /// Resolve every locator against `host` and prepare an unattached surface.
    ///
    /// A host that cannot provide a surface leaves the annotator disposed.
    pub fn new<I, L>(host: H, locators: I, config: MarkerConfig) -> Self
    where
        I: IntoIterator<Item = Option<L>>,
        L: AsRef<str>,
    {
        let regions: Vec<Option<Region>> = locators
            .into_iter()
            .map(|locator| locator.and_then(|l| host.locate(l.as_ref())))
            .collect();

        let surface = match host.create_surface() {
            Ok(surface) => Lifecycle::Active(surface),
            Err(e) => {
                tracing::warn!(error = %e, "Could not create overlay surface");
                Lifecycle::Disposed
            }
        };

        tracing::debug!(
            locators = regions.len(),
            resolved = regions.iter().filter(|r| r.is_some()).count(),
            "Annotator created"
        );

        Self {
            host,
            regions,
            config,
            surface,
        }
    }

    /// Draw every present region and attach the surface.
    ///
    /// No-op once disposed. The surface is cleared first, so repeated calls
    /// leave a single set of markers.
    pub fn render(&mut self) -> Result<()> {
        let surface = match &mut self.surface {
            Lifecycle::Active(surface) => surface,
            Lifecycle::Disposed => return Ok(()),
        };

        surface.fit_viewport(self.host.viewport())?;
        surface.clear();

        let mut drawn = 0;
        for (index, region) in self.regions.iter().enumerate() {
            let Some(region) = region else { continue };

            match draw_marker(surface, index, region, &self.config) {
                Ok(()) => drawn += 1,
                Err(e) => tracing::warn!(index, error = %e, "Failed to draw marker"),
            }
        }

        if !surface.is_attached() {
            surface.attach()?;
        }

        tracing::debug!(drawn, "Markers rendered");
        Ok(())
    }

    /// Detach and release the surface. Idempotent.
    pub fn dispose(&mut self) {
        if let Lifecycle::Active(mut surface) =
            std::mem::replace(&mut self.surface, Lifecycle::Disposed)
        {
            surface.detach();
            tracing::debug!("Annotator disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.surface, Lifecycle::Disposed)
    }

    pub fn regions(&self) -> &[Option<Region>] {
        &self.regions
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }
}

/// Badge, label, then outline for the region at `index`
fn draw_marker<S: Surface>(
    surface: &mut S,
    index: usize,
    region: &Region,
    config: &MarkerConfig,
) -> Result<()> {
    let center = badge_center(region, config);
    surface.fill_circle(center, config.font_size, &config.color)?;

    let label = (index + 1).to_string();
    surface.fill_text(&label, center, &config.font(), &config.font_color)?;

    surface.stroke_rect(outline_rect(region, config), config.width, &config.color);
    Ok(())
}
