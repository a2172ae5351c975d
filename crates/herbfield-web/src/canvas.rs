//! `Canvas2D` over the browser's `CanvasRenderingContext2d`.

use herbfield::{Canvas2D, ColorStop, Paint};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// A resolved fill or stroke style.
enum Style {
    Css(String),
    Gradient(CanvasGradient),
}

/// Browser canvas element plus its 2D context.
pub struct WebCanvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// Acquire the 2D context of `element`.
    pub fn new(element: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = element
            .get_context("2d")?
            .ok_or("2d context not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { element, ctx })
    }

    fn resolve(&self, paint: &Paint) -> Option<Style> {
        match paint {
            Paint::Solid(color) => Some(Style::Css(color.to_css())),
            Paint::Linear(g) => {
                let gradient = self.ctx.create_linear_gradient(
                    g.start.x as f64,
                    g.start.y as f64,
                    g.end.x as f64,
                    g.end.y as f64,
                );
                add_stops(&gradient, &g.stops);
                Some(Style::Gradient(gradient))
            }
            Paint::Radial(g) => {
                let created = self.ctx.create_radial_gradient(
                    g.inner_center.x as f64,
                    g.inner_center.y as f64,
                    g.inner_radius as f64,
                    g.outer_center.x as f64,
                    g.outer_center.y as f64,
                    g.outer_radius as f64,
                );
                match created {
                    Ok(gradient) => {
                        add_stops(&gradient, &g.stops);
                        Some(Style::Gradient(gradient))
                    }
                    Err(e) => {
                        log::trace!("radial gradient rejected: {:?}", e);
                        None
                    }
                }
            }
        }
    }

    fn set_fill(&self, paint: &Paint) -> bool {
        match self.resolve(paint) {
            Some(Style::Css(css)) => self.ctx.set_fill_style_str(&css),
            Some(Style::Gradient(g)) => self.ctx.set_fill_style_canvas_gradient(&g),
            None => return false,
        }
        true
    }

    fn set_stroke(&self, paint: &Paint) -> bool {
        match self.resolve(paint) {
            Some(Style::Css(css)) => self.ctx.set_stroke_style_str(&css),
            Some(Style::Gradient(g)) => self.ctx.set_stroke_style_canvas_gradient(&g),
            None => return false,
        }
        true
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        if let Err(e) = gradient.add_color_stop(stop.offset, &stop.color.to_css()) {
            log::trace!("color stop rejected: {:?}", e);
        }
    }
}

/// Canvas calls fail only on invalid geometry (e.g. a negative radius);
/// such a shape is simply not drawn.
fn check(result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::trace!("canvas call rejected: {:?}", e);
    }
}

impl Canvas2D for WebCanvas {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn size(&self) -> (u32, u32) {
        (self.element.width(), self.element.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        if self.set_fill(paint) {
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        check(self.ctx.translate(x as f64, y as f64));
    }

    fn rotate(&mut self, angle: f32) {
        check(self.ctx.rotate(angle as f64));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        check(self.ctx.arc(
            x as f64,
            y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        ));
    }

    fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
    ) {
        check(self.ctx.ellipse(
            x as f64,
            y as f64,
            radius_x as f64,
            radius_y as f64,
            rotation as f64,
            start_angle as f64,
            end_angle as f64,
        ));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn fill(&mut self, paint: &Paint) {
        if self.set_fill(paint) {
            self.ctx.fill();
        }
    }

    fn stroke(&mut self, paint: &Paint, line_width: f32) {
        if self.set_stroke(paint) {
            self.ctx.set_line_width(line_width as f64);
            self.ctx.stroke();
        }
    }
}
