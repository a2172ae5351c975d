//! Expanding radial pulse.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::renderer::color::Color;
use crate::renderer::paint::{Paint, RadialGradient};
use crate::renderer::traits::Canvas2D;

/// A short-lived radial glow that grows until it reaches `max_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    /// Radius growth per frame.
    pub growth: f32,
}

impl Pulse {
    pub const CENTER_COLOR: Color = Color::JADE.with_alpha(0.4);
    pub const EDGE_COLOR: Color = Color::JADE.with_alpha(0.0);

    pub fn new(origin: Vec2, max_radius: f32, growth: f32) -> Self {
        Pulse {
            origin,
            radius: 0.0,
            max_radius,
            growth,
        }
    }

    /// Draw at the current radius.
    pub fn render(&self, canvas: &mut dyn Canvas2D) {
        let gradient = RadialGradient::concentric(
            self.origin,
            0.0,
            self.radius,
            Self::CENTER_COLOR,
            Self::EDGE_COLOR,
        );
        canvas.begin_path();
        canvas.arc(self.origin.x, self.origin.y, self.radius, 0.0, TAU);
        canvas.fill(&Paint::Radial(gradient));
    }

    /// Grow one step. Returns false once the pulse has expired.
    pub fn grow(&mut self) -> bool {
        self.radius += self.growth;
        self.radius <= self.max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_radius() {
        let p = Pulse::new(Vec2::new(1.0, 2.0), 50.0, 1.5);
        assert_eq!(p.radius, 0.0);
    }

    #[test]
    fn expires_after_passing_max() {
        let mut p = Pulse::new(Vec2::ZERO, 3.0, 1.5);
        assert!(p.grow()); // 1.5
        assert!(p.grow()); // 3.0, not past max yet
        assert!(!p.grow()); // 4.5
    }
}
