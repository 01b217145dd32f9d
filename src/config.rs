//! Marker style configuration
//!
//! Supplied fields win over defaults; the merge is flat. Values are not
//! validated and reach the drawing layer untouched.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_COLOR: &str = "orange";
pub const DEFAULT_WIDTH: f64 = 4.0;
pub const DEFAULT_MARGIN: f64 = 4.0;
pub const DEFAULT_FONT_COLOR: &str = "white";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Resolved style used for every marker of an annotator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    /// Badge fill and outline stroke colour
    pub color: String,
    /// Outline stroke thickness in pixels
    pub width: f64,
    /// Gap between the element bounds and the outline / badge
    pub margin: f64,
    /// Badge label colour
    pub font_color: String,
    /// Badge radius and label font size in pixels
    pub font_size: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: DEFAULT_WIDTH,
            margin: DEFAULT_MARGIN,
            font_color: DEFAULT_FONT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Any subset of [`MarkerConfig`] as supplied by the caller.
///
/// Each field is resolved on its own: a value of an unusable type leaves
/// only that field unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialMarkerConfig {
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub margin: Option<f64>,
    #[serde(default, alias = "fontcolor", deserialize_with = "lenient_string")]
    pub font_color: Option<String>,
    #[serde(default, alias = "fontsize", deserialize_with = "lenient_number")]
    pub font_size: Option<f64>,
}

/// Any JS value a config field may hold
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Numbers pass through; numeric strings such as `"5"` are converted.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FieldValue::deserialize(deserializer)? {
        FieldValue::Number(n) => Some(n),
        FieldValue::Text(s) => s.trim().parse().ok(),
        FieldValue::Other(_) => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FieldValue::deserialize(deserializer)? {
        FieldValue::Text(s) => Some(s),
        FieldValue::Number(_) | FieldValue::Other(_) => None,
    })
}

impl PartialMarkerConfig {
    /// Overlay the supplied fields on `base`
    pub fn merge_over(self, base: MarkerConfig) -> MarkerConfig {
        MarkerConfig {
            color: self.color.unwrap_or(base.color),
            width: self.width.unwrap_or(base.width),
            margin: self.margin.unwrap_or(base.margin),
            font_color: self.font_color.unwrap_or(base.font_color),
            font_size: self.font_size.unwrap_or(base.font_size),
        }
    }
}

impl From<PartialMarkerConfig> for MarkerConfig {
    fn from(partial: PartialMarkerConfig) -> Self {
        partial.merge_over(MarkerConfig::default())
    }
}

impl MarkerConfig {
    /// Build a config from a JS value.
    ///
    /// `undefined` and `null` give the defaults, as does anything that is not
    /// an object (with a warning).
    pub fn from_js(value: &JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }

        match serde_wasm_bindgen::from_value::<PartialMarkerConfig>(value.clone()) {
            Ok(partial) => partial.into(),
            Err(e) => {
                tracing::warn!(error = %e, "Marker config is not an object, using defaults");
                Self::default()
            }
        }
    }

    /// Canvas font shorthand for badge labels
    pub fn font(&self) -> String {
        format!("{}px arial", self.font_size)
    }
}
