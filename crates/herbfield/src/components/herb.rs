//! Floating herb particle.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::api::config::HerbFieldConfig;
use crate::core::rng::Rng;
use crate::core::surface::Surface;
use crate::renderer::color::Color;
use crate::renderer::paint::Paint;
use crate::renderer::traits::Canvas2D;

/// A single herb with kinetic and rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Herb {
    pub pos: Vec2,
    /// Base size before oscillation.
    pub size: f32,
    pub speed: f32,
    /// Direction of travel in radians.
    pub angle: f32,
    pub color: Color,
    /// Visual rotation, independent of `angle`.
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Drives the size oscillation.
    pub pulse_phase: f32,
}

impl Herb {
    /// Peak size oscillation around the base size.
    pub const OSCILLATION: f32 = 2.0;
    /// Minor/major axis ratio of the leaf body.
    pub const ASPECT: f32 = 0.7;
    pub const SPOKES: usize = 4;
    /// Spoke length as a multiple of the current size.
    pub const SPOKE_LENGTH: f32 = 1.8;
    pub const SPOKE_WIDTH: f32 = 1.5;
    pub const SPOKE_COLOR: Color = Color::JADE.with_alpha(0.9);

    /// Sample a herb anywhere on the surface.
    pub fn random(surface: Surface, config: &HerbFieldConfig, rng: &mut Rng) -> Self {
        let x = rng.next_f32() * surface.w();
        let y = rng.next_f32() * surface.h();
        let size = rng.range(config.size_range.0, config.size_range.1);
        let speed = rng.range(config.speed_range.0, config.speed_range.1);
        let angle = rng.angle();
        let alpha = rng.range(config.alpha_range.0, config.alpha_range.1);
        let rotation = rng.angle();
        let rotation_speed = rng.range(-config.max_rotation_speed, config.max_rotation_speed);
        let pulse_phase = rng.angle();
        Herb {
            pos: Vec2::new(x, y),
            size,
            speed,
            angle,
            color: Color::JADE.with_alpha(alpha),
            rotation,
            rotation_speed,
            pulse_phase,
        }
    }

    /// Move along `angle`, spin, advance the oscillation and wrap around
    /// the surface once more than `margin` past an edge.
    pub fn tick(&mut self, surface: Surface, phase_step: f32, margin: f32) {
        self.pos += Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;
        self.rotation += self.rotation_speed;
        self.pulse_phase += phase_step;

        self.pos.x = wrap(self.pos.x, surface.w(), margin);
        self.pos.y = wrap(self.pos.y, surface.h(), margin);
    }

    /// Size after oscillation, always within `size ± OSCILLATION`.
    pub fn current_size(&self) -> f32 {
        self.size + self.pulse_phase.sin() * Self::OSCILLATION
    }

    /// Draw the leaf body and its four spokes.
    pub fn render(&self, canvas: &mut dyn Canvas2D) {
        let size = self.current_size();

        canvas.save();
        canvas.translate(self.pos.x, self.pos.y);
        canvas.rotate(self.rotation);

        canvas.begin_path();
        canvas.ellipse(0.0, 0.0, size, size * Self::ASPECT, 0.0, 0.0, TAU);
        canvas.fill(&Paint::Solid(self.color));

        let spoke = Paint::Solid(Self::SPOKE_COLOR);
        let length = size * Self::SPOKE_LENGTH;
        for i in 0..Self::SPOKES {
            let a = i as f32 * FRAC_PI_2;
            canvas.begin_path();
            canvas.move_to(0.0, 0.0);
            canvas.line_to(a.cos() * length, a.sin() * length);
            canvas.stroke(&spoke, Self::SPOKE_WIDTH);
        }

        canvas.restore();
    }
}

/// Wrap one coordinate: past `-margin` reappears at `extent + margin` and
/// vice versa.
fn wrap(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
