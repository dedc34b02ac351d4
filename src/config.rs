//! Application-level configuration: embedded carousel content and UI
//! constants.

use log::warn;
use serde::Deserialize;
use swipe_carousel::GestureThresholds;

// UI Behavior
/// Horizontal drag distance after which the surface switches to a
/// grabbing cursor.
pub const GRAB_FEEDBACK_THRESHOLD_PX: f64 = 10.0;

/// One slide of the marketing carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideDef {
    pub title: String,
    pub body: String,
    pub image: String,
}

/// Page-level carousel configuration, embedded at compile time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    /// Gesture thresholds, overridable per page.
    #[serde(default)]
    pub thresholds: GestureThresholds,
    pub slides: Vec<SlideDef>,
}

/// Parse the carousel configuration embedded at compile time.
///
/// A malformed document degrades to an empty carousel rather than a panic;
/// the page then renders without the widget.
pub fn load_page_config() -> PageConfig {
    match serde_json::from_str(include_str!("carousel.json")) {
        Ok(config) => config,
        Err(e) => {
            warn!("embedded carousel configuration is malformed: {e}");
            PageConfig {
                thresholds: GestureThresholds::default(),
                slides: Vec::new(),
            }
        }
    }
}
