//! Rendering configuration

use serde::{Deserialize, Serialize};

/// Image size and styling shared by every chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Font family for all text
    pub font: String,
    /// Caption font size
    pub caption_size: f64,
    /// Axis description font size
    pub label_size: f64,
    /// Radius of the point markers
    pub marker_size: u32,
    /// Margin around each panel
    pub margin: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            font: "sans-serif".to_string(),
            caption_size: 32.0,
            label_size: 20.0,
            marker_size: 3,
            margin: 15,
        }
    }
}

impl RenderConfig {
    /// Replace the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
