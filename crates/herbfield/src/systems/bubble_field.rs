use crate::api::animation::Animation;
use crate::api::config::BubbleFieldConfig;
use crate::components::bubble::Bubble;
use crate::core::rng::Rng;
use crate::core::surface::Surface;
use crate::renderer::traits::Canvas2D;
use crate::systems::background::clear_surface;

/// Rising bubbles that restart below the surface once they leave the top.
pub struct BubbleField {
    config: BubbleFieldConfig,
    surface: Surface,
    rng: Rng,
    pub bubbles: Vec<Bubble>,
    /// Total respawns since creation.
    respawns: u64,
}

impl BubbleField {
    pub fn new(config: BubbleFieldConfig, surface: Surface, mut rng: Rng) -> Self {
        let bubbles = (0..config.count)
            .map(|_| Bubble::random(surface, &config, &mut rng))
            .collect();
        log::debug!(
            "bubble field: {} bubbles on {}x{}",
            config.count,
            surface.width,
            surface.height
        );
        Self {
            config,
            surface,
            rng,
            bubbles,
            respawns: 0,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn respawns(&self) -> u64 {
        self.respawns
    }
}

impl Animation for BubbleField {
    fn name(&self) -> &'static str {
        "bubble field"
    }

    fn frame(&mut self, canvas: &mut dyn Canvas2D) {
        clear_surface(canvas, self.surface, self.config.background);
        for bubble in &mut self.bubbles {
            if bubble.tick(
                self.surface,
                self.config.respawn_margin,
                self.config.respawn_offset,
                &mut self.rng,
            ) {
                self.respawns += 1;
            }
            bubble.render(canvas);
        }
    }

    fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, RecordingCanvas};

    fn field(seed: u64) -> BubbleField {
        BubbleField::new(BubbleFieldConfig::default(), Surface::new(400, 300), Rng::new(seed))
    }

    #[test]
    fn creates_fixed_population() {
        let f = field(1);
        assert_eq!(f.bubbles.len(), 25);
        assert_eq!(f.interval_ms(), None);
    }

    #[test]
    fn bubble_at_top_resets_to_below_bottom() {
        let mut f = field(1);
        f.bubbles[0].pos.y = -25.0;
        let mut canvas = RecordingCanvas::new(400, 300);
        f.frame(&mut canvas);
        assert_eq!(f.bubbles[0].pos.y, 310.0);
        assert!(f.bubbles[0].pos.x >= 0.0 && f.bubbles[0].pos.x < 400.0);
        assert_eq!(f.respawns(), 1);
    }

    #[test]
    fn y_only_decreases_between_respawns() {
        let mut f = field(8);
        let mut canvas = RecordingCanvas::new(400, 300);
        for _ in 0..3000 {
            let before: Vec<f32> = f.bubbles.iter().map(|b| b.pos.y).collect();
            f.frame(&mut canvas);
            for (b, y0) in f.bubbles.iter().zip(before) {
                if b.pos.y > y0 {
                    assert_eq!(b.pos.y, 310.0, "only a respawn may move a bubble down");
                } else {
                    assert!(b.pos.y < y0);
                }
            }
        }
        assert!(f.respawns() > 0);
    }

    #[test]
    fn frame_has_no_background_by_default() {
        let mut f = field(2);
        let mut canvas = RecordingCanvas::new(400, 300);
        f.frame(&mut canvas);
        assert_eq!(canvas.count(|c| matches!(c, DrawCommand::FillRect { .. })), 0);
        assert_eq!(canvas.count(|c| matches!(c, DrawCommand::Fill { .. })), 25);
    }

    #[test]
    fn background_can_be_enabled() {
        let config = BubbleFieldConfig {
            background: true,
            ..BubbleFieldConfig::default()
        };
        let mut f = BubbleField::new(config, Surface::new(400, 300), Rng::new(2));
        let mut canvas = RecordingCanvas::new(400, 300);
        f.frame(&mut canvas);
        assert!(matches!(canvas.commands()[1], DrawCommand::FillRect { .. }));
    }

    #[test]
    fn respawn_uses_new_height() {
        let mut f = field(4);
        f.resize(Surface::new(200, 100));
        f.bubbles[0].pos.y = -30.0;
        let mut canvas = RecordingCanvas::new(200, 100);
        f.frame(&mut canvas);
        assert_eq!(f.bubbles[0].pos.y, 110.0);
        assert!(f.bubbles[0].pos.x < 200.0);
    }
}
