//! Drawing surface trait.
//!
//! The engines never touch the browser directly. They draw through
//! `Canvas2D`, a subset of the HTML canvas 2D context, which the web crate
//! implements over `CanvasRenderingContext2d` and which `RecordingCanvas`
//! implements headlessly for tests.

use super::paint::Paint;

/// Immediate-mode 2D drawing surface.
///
/// Coordinates are in surface pixels with the origin at the top left and
/// `y` growing downward. Path state, transforms and the backing buffer follow
/// canvas semantics: `set_size` wipes all three.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgCanvas { out: String, /* ... */ }
///
/// impl Canvas2D for SvgCanvas {
///     fn backend(&self) -> &'static str { "svg" }
///     fn size(&self) -> (u32, u32) { (self.width, self.height) }
///     fn set_size(&mut self, width: u32, height: u32) { /* reset document */ }
///     // ...
/// }
/// ```
pub trait Canvas2D {
    /// Backend identifier (e.g., "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Current backing-buffer size.
    fn size(&self) -> (u32, u32);

    /// Resize the backing buffer. Clears pixels, path and transform state.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint);

    /// Push the current transform onto the state stack.
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    fn rotate(&mut self, angle: f32);

    fn begin_path(&mut self);

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);

    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
    );

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Fill the current path.
    fn fill(&mut self, paint: &Paint);

    /// Stroke the current path.
    fn stroke(&mut self, paint: &Paint, line_width: f32);
}
