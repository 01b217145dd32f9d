//! Viewport geometry and marker layout

use serde::{Deserialize, Serialize};

use crate::config::MarkerConfig;

/// Bounding box of an element in viewport coordinates, captured once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Inner size of the browser viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Centre of the numbered badge: above-left of the element's top-left corner.
pub fn badge_center(region: &Region, config: &MarkerConfig) -> Point {
    Point {
        x: region.left - config.margin + config.font_size,
        y: region.top - config.margin * 2.0 - config.font_size,
    }
}

/// The element's bounds grown by `margin` on every side.
pub fn outline_rect(region: &Region, config: &MarkerConfig) -> Rect {
    Rect {
        x: region.left - config.margin,
        y: region.top - config.margin,
        width: region.width + config.margin * 2.0,
        height: region.height + config.margin * 2.0,
    }
}
