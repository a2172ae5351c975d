//! Headless `Canvas2D` that records every call.
//!
//! Used by the engine tests and by anything that wants to inspect a frame
//! without a browser. A full-surface `clear_rect` and `set_size` both drop
//! the recorded commands, matching what the pixels would show.

use super::paint::Paint;
use super::traits::Canvas2D;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32, paint: Paint },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate { angle: f32 },
    BeginPath,
    Arc { x: f32, y: f32, radius: f32, start: f32, end: f32 },
    Ellipse { x: f32, y: f32, radius_x: f32, radius_y: f32 },
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Fill { paint: Paint },
    Stroke { paint: Paint, line_width: f32 },
}

/// Canvas that keeps a command log instead of pixels.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    depth: usize,
    /// Number of times the backing buffer was reset.
    pub resets: u32,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current save/restore nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    fn covers_surface(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x <= 0.0 && y <= 0.0 && width >= self.width as f32 && height >= self.height as f32
    }
}

impl Canvas2D for RecordingCanvas {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
        self.depth = 0;
        self.resets += 1;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.covers_surface(x, y, width, height) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            paint: paint.clone(),
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start: start_angle,
            end: end_angle,
        });
    }

    fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        _rotation: f32,
        _start_angle: f32,
        _end_angle: f32,
    ) {
        self.commands.push(DrawCommand::Ellipse { x, y, radius_x, radius_y });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn fill(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::Fill { paint: paint.clone() });
    }

    fn stroke(&mut self, paint: &Paint, line_width: f32) {
        self.commands.push(DrawCommand::Stroke {
            paint: paint.clone(),
            line_width,
        });
    }
}
