use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::svg::Color;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Color palette must not be empty")]
    EmptyPalette,
    #[error("Canvas size {0}x{1} is not positive")]
    BadCanvas(f64, f64),
    #[error("Padding {padding} does not fit a {width}x{height} canvas")]
    BadPadding {
        padding: f64,
        width: f64,
        height: f64,
    },
}

/// Canvas and styling options of the map renderer.
///
/// Every recognized option is a concrete field; unknown input keys are a
/// deserialization error and missing keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    /// Distance from the drawing to the document borders.
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    /// `dx`/`dy` of a route label relative to its stop.
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    /// Route colors, assigned round-robin in route insertion order.
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: [7.0, 15.0],
            stop_label_font_size: 20,
            stop_label_offset: [7.0, -3.0],
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::from("green"),
                Color::Rgb(255, 160, 0),
                Color::from("red"),
            ],
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.color_palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SettingsError::BadCanvas(self.width, self.height));
        }
        if self.padding < 0.0 || self.padding >= self.width.min(self.height) / 2.0 {
            return Err(SettingsError::BadPadding {
                padding: self.padding,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
