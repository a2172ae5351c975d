//! Herb field: floating herbs, pulses and the emblem over a soft wash.

use crate::api::animation::Animation;
use crate::api::config::HerbFieldConfig;
use crate::components::herb::Herb;
use crate::core::rng::Rng;
use crate::core::surface::Surface;
use crate::renderer::traits::Canvas2D;
use crate::systems::background::clear_surface;
use crate::systems::emblem::Emblem;
use crate::systems::pulses::PulseOverlay;

pub struct HerbField {
    config: HerbFieldConfig,
    surface: Surface,
    rng: Rng,
    pub herbs: Vec<Herb>,
    pub pulses: PulseOverlay,
    pub emblem: Emblem,
    /// Frames drawn so far; drives the emblem rotation.
    tick: u64,
}

impl HerbField {
    /// Build the fixed herb population for `surface`.
    pub fn new(config: HerbFieldConfig, surface: Surface, mut rng: Rng) -> Self {
        let herbs = (0..config.count)
            .map(|_| Herb::random(surface, &config, &mut rng))
            .collect();
        let pulses = PulseOverlay::new(
            config.spawn_probability,
            config.pulse_max_radius,
            config.pulse_growth,
        );
        let emblem = Emblem::with_spin(config.emblem_spin);
        log::debug!(
            "herb field: {} herbs on {}x{}",
            config.count,
            surface.width,
            surface.height
        );
        Self {
            config,
            surface,
            rng,
            herbs,
            pulses,
            emblem,
            tick: 0,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Run one spawn period of the pulse overlay.
    pub fn spawn_pulse(&mut self) -> bool {
        self.pulses.spawn_tick(&self.herbs, &mut self.rng)
    }
}

impl Animation for HerbField {
    fn name(&self) -> &'static str {
        "herb field"
    }

    fn frame(&mut self, canvas: &mut dyn Canvas2D) {
        clear_surface(canvas, self.surface, true);
        self.pulses.render_tick(canvas);
        self.emblem.render(canvas, self.surface, self.tick);

        let surface = self.surface;
        let step = self.config.pulse_phase_step;
        let margin = self.config.wrap_margin;
        for herb in &mut self.herbs {
            herb.tick(surface, step, margin);
            herb.render(canvas);
        }

        self.tick += 1;
    }

    fn interval_ms(&self) -> Option<u32> {
        Some(self.config.spawn_interval_ms)
    }

    fn interval(&mut self) {
        self.spawn_pulse();
    }

    fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, RecordingCanvas};
    use glam::Vec2;

    fn field(seed: u64) -> HerbField {
        HerbField::new(HerbFieldConfig::default(), Surface::new(400, 300), Rng::new(seed))
    }

    #[test]
    fn creates_fixed_population() {
        let f = field(1);
        assert_eq!(f.herbs.len(), 12);
        assert!(f.pulses.is_empty());
        assert_eq!(f.tick_count(), 0);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(field(42).herbs, field(42).herbs);
        assert_ne!(field(42).herbs, field(43).herbs);
    }

    #[test]
    fn first_herb_steps_along_its_angle() {
        let mut f = field(42);
        f.herbs[0].pos = Vec2::new(10.0, 10.0);
        f.herbs[0].angle = 0.0;
        f.herbs[0].speed = 0.5;
        let mut canvas = RecordingCanvas::new(400, 300);
        f.frame(&mut canvas);
        assert_eq!(f.herbs[0].pos, Vec2::new(10.5, 10.0));
    }

    #[test]
    fn herbs_never_escape_the_margin() {
        let mut f = field(7);
        let mut canvas = RecordingCanvas::new(400, 300);
        for _ in 0..5000 {
            f.frame(&mut canvas);
            for h in &f.herbs {
                assert!(h.pos.x >= -20.0 && h.pos.x <= 420.0, "x escaped: {}", h.pos.x);
                assert!(h.pos.y >= -20.0 && h.pos.y <= 320.0, "y escaped: {}", h.pos.y);
            }
        }
        assert_eq!(f.tick_count(), 5000);
    }

    #[test]
    fn frame_draws_in_layer_order() {
        let mut f = field(3);
        // Force one pulse so every layer is present.
        f.pulses.spawn_probability = 1.0;
        assert!(f.spawn_pulse());

        let mut canvas = RecordingCanvas::new(400, 300);
        f.frame(&mut canvas);
        let cmds = canvas.commands();

        assert!(matches!(cmds[0], DrawCommand::ClearRect { .. }));
        assert!(matches!(cmds[1], DrawCommand::FillRect { .. }));
        // Pulse disc comes right after the background, before the emblem.
        assert!(matches!(cmds[3], DrawCommand::Arc { radius, .. } if radius == 0.0));
        assert!(matches!(cmds[5], DrawCommand::Save));
        assert_eq!(cmds[6], DrawCommand::Translate { x: 200.0, y: 150.0 });
        // Every herb body is drawn after the emblem.
        let first_ellipse = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Ellipse { .. }))
            .unwrap();
        let rotate_at = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Rotate { .. }))
            .unwrap();
        assert!(first_ellipse > rotate_at);
        assert_eq!(canvas.count(|c| matches!(c, DrawCommand::Ellipse { .. })), 12);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn interval_spawns_at_configured_rate() {
        let mut f = field(11);
        assert_eq!(f.interval_ms(), Some(1200));
        let mut canvas = RecordingCanvas::new(400, 300);
        // Render between spawns so expired pulses drain.
        let mut spawned = 0;
        for _ in 0..1000 {
            let before = f.pulses.len();
            f.interval();
            spawned += f.pulses.len() - before;
            f.frame(&mut canvas);
        }
        assert!((600..=800).contains(&spawned), "spawned {}", spawned);
    }

    #[test]
    fn pulse_set_stays_bounded_across_periods() {
        let config = crate::api::config::DecorConfig::from_json(r#"{ "herb": { "seed": 9 } }"#)
            .unwrap()
            .herb;
        let mut f = HerbField::new(config, Surface::new(400, 300), Rng::new(9));
        f.pulses.spawn_probability = 1.0;
        let mut canvas = RecordingCanvas::new(400, 300);
        // ~72 frames per 1200 ms period at 60 fps.
        for _ in 0..500 {
            f.interval();
            for _ in 0..72 {
                f.frame(&mut canvas);
            }
            assert!(f.pulses.len() <= 1, "pulses alive: {}", f.pulses.len());
        }
        assert!(f.pulses.pulses.iter().all(|p| p.radius >= 0.0));
    }

    #[test]
    fn resize_keeps_positions() {
        let mut f = field(5);
        let before: Vec<_> = f.herbs.iter().map(|h| h.pos).collect();
        f.resize(Surface::new(100, 80));
        let after: Vec<_> = f.herbs.iter().map(|h| h.pos).collect();
        assert_eq!(before, after);
        assert_eq!(f.surface(), Surface::new(100, 80));

        // Out-of-bounds herbs are wrapped against the new bounds on the next frame.
        let mut canvas = RecordingCanvas::new(100, 80);
        f.frame(&mut canvas);
        for h in &f.herbs {
            assert!(h.pos.x >= -20.0 && h.pos.x <= 120.0);
            assert!(h.pos.y >= -20.0 && h.pos.y <= 100.0);
        }
    }
}
