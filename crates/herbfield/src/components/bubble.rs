use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::BubbleFieldConfig;
use crate::core::rng::Rng;
use crate::core::surface::Surface;
use crate::renderer::color::Color;
use crate::renderer::paint::Paint;
use crate::renderer::traits::Canvas2D;

/// A rising bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub pos: Vec2,
    pub radius: f32,
    /// Upward speed in pixels per tick.
    pub speed: f32,
}

impl Bubble {
    pub const COLOR: Color = Color::SKY.with_alpha(0.35);

    /// Sample a bubble somewhere below the bottom edge.
    pub fn random(surface: Surface, config: &BubbleFieldConfig, rng: &mut Rng) -> Self {
        let x = rng.next_f32() * surface.w();
        let y = surface.h() + rng.next_f32() * config.initial_spread;
        Bubble {
            pos: Vec2::new(x, y),
            radius: rng.range(config.radius_range.0, config.radius_range.1),
            speed: rng.range(config.speed_range.0, config.speed_range.1),
        }
    }

    /// Rise by `speed`. Once above `-margin`, restart `offset` below the
    /// bottom edge at a fresh random `x`. Returns true on respawn.
    pub fn tick(&mut self, surface: Surface, margin: f32, offset: f32, rng: &mut Rng) -> bool {
        self.pos.y -= self.speed;
        if self.pos.y < -margin {
            self.pos.y = surface.h() + offset;
            self.pos.x = rng.next_f32() * surface.w();
            return true;
        }
        false
    }

    pub fn render(&self, canvas: &mut dyn Canvas2D) {
        canvas.begin_path();
        canvas.arc(self.pos.x, self.pos.y, self.radius, 0.0, TAU);
        canvas.fill(&Paint::Solid(Self::COLOR));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, RecordingCanvas};

    #[test]
    fn rises_by_speed() {
        let mut b = Bubble { pos: Vec2::new(50.0, 100.0), radius: 4.0, speed: 0.75 };
        let mut rng = Rng::new(1);
        assert!(!b.tick(Surface::new(400, 300), 20.0, 10.0, &mut rng));
        assert_eq!(b.pos, Vec2::new(50.0, 99.25));
    }

    #[test]
    fn respawns_below_bottom_edge() {
        let mut b = Bubble { pos: Vec2::new(50.0, -25.0), radius: 4.0, speed: 0.5 };
        let mut rng = Rng::new(1);
        assert!(b.tick(Surface::new(400, 300), 20.0, 10.0, &mut rng));
        assert_eq!(b.pos.y, 310.0);
        assert!(b.pos.x >= 0.0 && b.pos.x < 400.0);
    }

    #[test]
    fn random_bubbles_start_below_surface() {
        let config = BubbleFieldConfig::default();
        let mut rng = Rng::new(9);
        for _ in 0..100 {
            let b = Bubble::random(Surface::new(400, 300), &config, &mut rng);
            assert!(b.pos.y >= 300.0 && b.pos.y <= 500.0);
            assert!(b.radius >= 3.0 && b.radius <= 9.0);
            assert!(b.speed >= 0.5 && b.speed <= 1.0);
        }
    }

    #[test]
    fn renders_a_circle() {
        let b = Bubble { pos: Vec2::new(5.0, 6.0), radius: 3.0, speed: 1.0 };
        let mut canvas = RecordingCanvas::new(10, 10);
        b.render(&mut canvas);
        assert_eq!(
            canvas.commands()[1],
            DrawCommand::Arc { x: 5.0, y: 6.0, radius: 3.0, start: 0.0, end: TAU }
        );
    }
}
