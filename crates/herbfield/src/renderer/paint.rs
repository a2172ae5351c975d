//! Fill and stroke styles: solid colors and the two gradient kinds the
//! herb field uses.

use glam::Vec2;

use super::color::Color;

/// A single gradient stop. `offset` runs from 0.0 (start) to 1.0 (end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

/// Radial gradient between two concentric-or-not circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Gradient sharing one center, fading from `inner` at `r0` to `outer` at `r1`.
    pub fn concentric(center: Vec2, r0: f32, r1: f32, inner: Color, outer: Color) -> Self {
        Self {
            inner_center: center,
            inner_radius: r0,
            outer_center: center,
            outer_radius: r1,
            stops: vec![ColorStop::new(0.0, inner), ColorStop::new(1.0, outer)],
        }
    }
}

/// What a fill or stroke is painted with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear(gradient)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Paint::Radial(gradient)
    }
}
