//! Rotating two-tone emblem drawn at the center of the herb field.
//!
//! The glow and outer ring stay still; only the inner halves and the two
//! eyes turn, at a constant rate tied to the frame counter.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::core::surface::Surface;
use crate::renderer::color::Color;
use crate::renderer::paint::{Paint, RadialGradient};
use crate::renderer::traits::Canvas2D;

/// Geometry and palette of the emblem.
#[derive(Debug, Clone, PartialEq)]
pub struct Emblem {
    /// Rotation per frame, in radians.
    pub spin: f32,
    pub glow_inner: f32,
    pub glow_outer: f32,
    pub ring_radius: f32,
    pub disc_radius: f32,
    /// Distance of each eye from the center along the local x axis.
    pub eye_offset: f32,
    pub eye_radius: f32,
}

impl Default for Emblem {
    fn default() -> Self {
        Self {
            spin: 0.005,
            glow_inner: 45.0,
            glow_outer: 60.0,
            ring_radius: 45.0,
            disc_radius: 40.0,
            eye_offset: 20.0,
            eye_radius: 8.0,
        }
    }
}

const GLOW: Color = Color::JADE.with_alpha(0.3);
const RING: Color = Color::JADE.with_alpha(0.4);
const RING_WIDTH: f32 = 3.0;
const DARK_HALF: Color = Color::JADE.with_alpha(0.25);
const LIGHT_HALF: Color = Color::WHITE.with_alpha(0.35);
const LIGHT_EYE: Color = Color::WHITE.with_alpha(0.6);
const DARK_EYE: Color = Color::JADE.with_alpha(0.6);

impl Emblem {
    pub fn with_spin(spin: f32) -> Self {
        Self { spin, ..Self::default() }
    }

    /// Rotation of the inner disc at a given frame, in [0, 2π).
    pub fn angle(&self, tick: u64) -> f32 {
        ((tick as f64 * self.spin as f64) % std::f64::consts::TAU) as f32
    }

    pub fn render(&self, canvas: &mut dyn Canvas2D, surface: Surface, tick: u64) {
        let center = surface.center();
        canvas.save();
        canvas.translate(center.x, center.y);

        let glow = RadialGradient::concentric(
            Vec2::ZERO,
            self.glow_inner,
            self.glow_outer,
            GLOW,
            GLOW.with_alpha(0.0),
        );
        canvas.begin_path();
        canvas.arc(0.0, 0.0, self.glow_outer, 0.0, TAU);
        canvas.fill(&Paint::Radial(glow));

        canvas.begin_path();
        canvas.arc(0.0, 0.0, self.ring_radius, 0.0, TAU);
        canvas.stroke(&Paint::Solid(RING), RING_WIDTH);

        canvas.rotate(self.angle(tick));

        canvas.begin_path();
        canvas.arc(0.0, 0.0, self.disc_radius, 0.0, PI);
        canvas.fill(&Paint::Solid(DARK_HALF));

        canvas.begin_path();
        canvas.arc(0.0, 0.0, self.disc_radius, PI, TAU);
        canvas.fill(&Paint::Solid(LIGHT_HALF));

        // Each eye takes the tone of the opposite half.
        canvas.begin_path();
        canvas.arc(-self.eye_offset, 0.0, self.eye_radius, 0.0, TAU);
        canvas.fill(&Paint::Solid(LIGHT_EYE));

        canvas.begin_path();
        canvas.arc(self.eye_offset, 0.0, self.eye_radius, 0.0, TAU);
        canvas.fill(&Paint::Solid(DARK_EYE));

        canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, RecordingCanvas};

    #[test]
    fn angle_at_tick_1000() {
        let e = Emblem::default();
        assert!((e.angle(1000) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn angle_wraps_past_full_turn() {
        let e = Emblem::default();
        let expected = (2000.0_f64 * 0.005) % std::f64::consts::TAU;
        assert!((e.angle(2000) as f64 - expected).abs() < 1e-4);
        assert!(e.angle(2000) < TAU);
    }

    #[test]
    fn glow_and_ring_are_drawn_before_rotation() {
        let mut canvas = RecordingCanvas::new(400, 300);
        Emblem::default().render(&mut canvas, Surface::new(400, 300), 1000);

        let cmds = canvas.commands();
        assert_eq!(cmds[1], DrawCommand::Translate { x: 200.0, y: 150.0 });
        let rotate_at = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Rotate { .. }))
            .unwrap();
        let stroke_at = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Stroke { .. }))
            .unwrap();
        assert!(stroke_at < rotate_at);
        // Two halves and two eyes come after the rotation.
        let fills_after = cmds[rotate_at..]
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count();
        assert_eq!(fills_after, 4);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn eyes_sit_on_local_x_axis() {
        let mut canvas = RecordingCanvas::new(100, 100);
        Emblem::default().render(&mut canvas, Surface::new(100, 100), 0);
        let eyes: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { x, y, radius, .. } if *radius == 8.0 => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(eyes, vec![(-20.0, 0.0), (20.0, 0.0)]);
    }
}
