use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color for canvas drawing operations.
/// Channels are 8-bit like CSS, alpha is a float in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB channels and an alpha value.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The jade green every herb-field element is tinted with.
    pub const JADE: Self = Self::rgb(42, 143, 122);
    /// Bubble blue.
    pub const SKY: Self = Self::rgb(100, 170, 220);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const MINT: Self = Self::rgb(234, 250, 246);

    /// CSS `rgba(...)` string for the browser canvas.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
