//! Checkbox styling and declarative descriptions
//!
//! `CheckBoxStyle` holds the visual parameters a checkbox is configured with.
//! `CheckBoxDesc` is the serialized form of a checkbox (frame plus style) so
//! hosts can instantiate widgets from JSON the way interface documents do;
//! colors are encoded as `0xRRGGBB` integers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickbox_core::{Color, Rect};

/// Error produced when a declarative description cannot be decoded
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("malformed checkbox description: {0}")]
    Description(#[from] serde_json::Error),
}

/// Visual parameters of a checkbox
#[derive(Clone, Debug, PartialEq)]
pub struct CheckBoxStyle {
    /// Stroke width of the ring and tick outlines
    pub stroke_width: f32,
    /// Ring outline color while unchecked
    pub stroke_color: Color,
    /// Ring fill color while unchecked
    pub background: Color,
    /// Tick stroke color while checked (the tick is clear while unchecked)
    pub tick: Color,
    /// Ambient tint: ring fill and outline color while checked
    pub tint: Color,
    /// Initial checked state
    pub checked: bool,
}

impl Default for CheckBoxStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke_color: Color::LIGHT_GRAY,
            background: Color::WHITE,
            tick: Color::WHITE,
            tint: Color::from_hex(0x007AFF),
            checked: false,
        }
    }
}

impl CheckBoxStyle {
    /// Create the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the unchecked ring outline color
    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the unchecked ring fill color
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the tick color
    pub fn tick(mut self, color: Color) -> Self {
        self.tick = color;
        self
    }

    /// Set the ambient tint used while checked
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    /// Set the initial checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Serialized checkbox description: frame plus style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckBoxDesc {
    /// Frame as `[x, y, width, height]`
    pub frame: [f32; 4],
    pub stroke_width: f32,
    /// `0xRRGGBB`
    pub stroke_color: u32,
    /// `0xRRGGBB`
    pub background: u32,
    /// `0xRRGGBB`
    pub tick: u32,
    /// `0xRRGGBB`
    pub tint: u32,
    pub checked: bool,
}

impl Default for CheckBoxDesc {
    fn default() -> Self {
        Self {
            frame: [0.0, 0.0, 0.0, 0.0],
            stroke_width: 1.0,
            stroke_color: 0xBFBFBF,
            background: 0xFFFFFF,
            tick: 0xFFFFFF,
            tint: 0x007AFF,
            checked: false,
        }
    }
}

impl CheckBoxDesc {
    /// Decode a description from JSON
    pub fn parse(json: &str) -> Result<Self, StyleError> {
        serde_json::from_str(json).map_err(|err| {
            tracing::warn!(%err, "failed to decode checkbox description");
            StyleError::Description(err)
        })
    }

    /// The described frame
    pub fn frame(&self) -> Rect {
        Rect::new(self.frame[0], self.frame[1], self.frame[2], self.frame[3])
    }

    /// The described style
    pub fn style(&self) -> CheckBoxStyle {
        CheckBoxStyle {
            stroke_width: self.stroke_width,
            stroke_color: Color::from_hex(self.stroke_color),
            background: Color::from_hex(self.background),
            tick: Color::from_hex(self.tick),
            tint: Color::from_hex(self.tint),
            checked: self.checked,
        }
    }
}
