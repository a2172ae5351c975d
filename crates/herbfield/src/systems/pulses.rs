//! Pulse overlay: spawned on a wall-clock timer, grown and culled per frame.

use crate::components::herb::Herb;
use crate::components::pulse::Pulse;
use crate::core::rng::Rng;
use crate::renderer::traits::Canvas2D;

/// Active pulses plus the parameters new ones are created with.
#[derive(Debug, Clone)]
pub struct PulseOverlay {
    pub pulses: Vec<Pulse>,
    pub spawn_probability: f32,
    pub max_radius: f32,
    pub growth: f32,
}

impl PulseOverlay {
    pub fn new(spawn_probability: f32, max_radius: f32, growth: f32) -> Self {
        Self {
            pulses: Vec::new(),
            spawn_probability,
            max_radius,
            growth,
        }
    }

    /// One spawn period. With `spawn_probability`, start a pulse at the
    /// current position of a uniformly chosen herb. Returns true if a pulse
    /// was spawned.
    pub fn spawn_tick(&mut self, herbs: &[Herb], rng: &mut Rng) -> bool {
        if herbs.is_empty() || !rng.chance(self.spawn_probability) {
            return false;
        }
        let Some(idx) = rng.index(herbs.len()) else {
            return false;
        };
        self.pulses
            .push(Pulse::new(herbs[idx].pos, self.max_radius, self.growth));
        true
    }

    /// Draw every pulse at its current radius, grow it, and drop the ones
    /// that grew past their maximum.
    pub fn render_tick(&mut self, canvas: &mut dyn Canvas2D) {
        self.pulses.retain_mut(|p| {
            p.render(canvas);
            p.grow()
        });
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }
}
