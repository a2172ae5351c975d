use glam::Vec2;

use crate::core::surface::Surface;
use crate::renderer::color::Color;
use crate::renderer::paint::{ColorStop, LinearGradient, Paint};
use crate::renderer::traits::Canvas2D;

const TOP_LEFT: Color = Color::MINT.with_alpha(0.9);
const BOTTOM_RIGHT: Color = Color::WHITE.with_alpha(0.6);

/// Diagonal mint-to-white wash across the whole surface.
pub fn background_gradient(surface: Surface) -> LinearGradient {
    LinearGradient {
        start: Vec2::ZERO,
        end: Vec2::new(surface.w(), surface.h()),
        stops: vec![ColorStop::new(0.0, TOP_LEFT), ColorStop::new(1.0, BOTTOM_RIGHT)],
    }
}

/// Clear the surface, optionally painting the background wash.
pub fn clear_surface(canvas: &mut dyn Canvas2D, surface: Surface, with_background: bool) {
    canvas.clear_rect(0.0, 0.0, surface.w(), surface.h());
    if with_background {
        let paint = Paint::Linear(background_gradient(surface));
        canvas.fill_rect(0.0, 0.0, surface.w(), surface.h(), &paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, RecordingCanvas};

    #[test]
    fn gradient_spans_the_diagonal() {
        let g = background_gradient(Surface::new(400, 300));
        assert_eq!(g.end, Vec2::new(400.0, 300.0));
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn clear_without_background() {
        let mut canvas = RecordingCanvas::new(40, 30);
        clear_surface(&mut canvas, Surface::new(40, 30), false);
        assert_eq!(canvas.commands().len(), 1);
    }

    #[test]
    fn clear_with_background() {
        let mut canvas = RecordingCanvas::new(40, 30);
        clear_surface(&mut canvas, Surface::new(40, 30), true);
        assert!(matches!(canvas.commands()[1], DrawCommand::FillRect { .. }));
    }
}
