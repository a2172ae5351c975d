use glam::Vec2;

use crate::renderer::traits::Canvas2D;

/// Backing-buffer dimensions of a drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface for a measured CSS box. Fractional pixels truncate, negative
    /// or NaN measurements collapse to zero.
    pub fn from_measured(width: f64, height: f64) -> Self {
        Self {
            width: to_pixels(width),
            height: to_pixels(height),
        }
    }

    pub fn w(&self) -> f32 {
        self.width as f32
    }

    pub fn h(&self) -> f32 {
        self.height as f32
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.w() / 2.0, self.h() / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Size the canvas backing buffer to a measured host box.
///
/// Reassigning the size clears the buffer, so content never survives this
/// call; the next frame redraws everything from engine state. Safe to call
/// redundantly.
pub fn fit_surface<C: Canvas2D + ?Sized>(canvas: &mut C, width: f64, height: f64) -> Surface {
    let surface = Surface::from_measured(width, height);
    canvas.set_size(surface.width, surface.height);
    log::debug!(
        "{}: surface resized to {}x{}",
        canvas.backend(),
        surface.width,
        surface.height
    );
    surface
}
