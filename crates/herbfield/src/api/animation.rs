use crate::core::surface::Surface;
use crate::renderer::traits::Canvas2D;

/// The contract every animation engine fulfills.
///
/// Engines never schedule themselves. A host loop (the browser's
/// `requestAnimationFrame` chain, or a test stepping by hand) calls `frame`
/// once per display frame and `interval` once per `interval_ms`.
pub trait Animation {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Advance one tick and redraw the whole surface.
    fn frame(&mut self, canvas: &mut dyn Canvas2D);

    /// Period of the wall-clock callback, if the animation wants one.
    fn interval_ms(&self) -> Option<u32> {
        None
    }

    /// Wall-clock callback, independent of the frame rate.
    fn interval(&mut self) {}

    /// The drawing surface was resized. Positions are kept as they are.
    fn resize(&mut self, surface: Surface);
}
