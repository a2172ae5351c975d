use herbfield::{fit_surface, Animation, Canvas2D, Surface};

/// Generic runner that owns one animation, its canvas and the running flag.
///
/// The runner never schedules anything itself. The browser bridge calls
/// `frame` from a `requestAnimationFrame` chain and `interval` from
/// `setInterval`; tests call them by hand.
pub struct AnimationRunner<A: Animation, C: Canvas2D> {
    animation: A,
    canvas: C,
    running: bool,
    /// Frames drawn since construction.
    frames: u64,
}

impl<A: Animation, C: Canvas2D> AnimationRunner<A, C> {
    pub fn new(animation: A, canvas: C) -> Self {
        Self {
            animation,
            canvas,
            running: false,
            frames: 0,
        }
    }

    /// Begin accepting frames. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::info!("{}: started on {}", self.animation.name(), self.canvas.backend());
        true
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("{}: stopped after {} frames", self.animation.name(), self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw one frame. Returns whether the host should schedule another.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.animation.frame(&mut self.canvas);
        self.frames += 1;
        true
    }

    /// Fire the animation's wall-clock callback.
    pub fn interval(&mut self) {
        if self.running {
            self.animation.interval();
        }
    }

    /// Fit the canvas to a freshly measured host box and tell the animation.
    /// Applied even while stopped so a restart draws at the right size.
    pub fn resize(&mut self, width: f64, height: f64) -> Surface {
        let surface = fit_surface(&mut self.canvas, width, height);
        self.animation.resize(surface);
        surface
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.animation.interval_ms()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}

/// Object-safe handle used by the registry to stop runners of any type.
pub trait Control {
    fn start(&mut self) -> bool;
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

impl<A: Animation, C: Canvas2D> Control for AnimationRunner<A, C> {
    fn start(&mut self) -> bool {
        AnimationRunner::start(self)
    }

    fn stop(&mut self) {
        AnimationRunner::stop(self);
    }

    fn is_running(&self) -> bool {
        AnimationRunner::is_running(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herbfield::{
        BubbleField, BubbleFieldConfig, DrawCommand, HerbField, HerbFieldConfig, RecordingCanvas,
        Rng,
    };

    fn herb_runner() -> AnimationRunner<HerbField, RecordingCanvas> {
        let surface = Surface::new(400, 300);
        let field = HerbField::new(HerbFieldConfig::default(), surface, Rng::new(42));
        AnimationRunner::new(field, RecordingCanvas::new(400, 300))
    }

    #[test]
    fn frames_ignored_until_started() {
        let mut r = herb_runner();
        assert!(!r.frame());
        assert_eq!(r.frames(), 0);
        assert_eq!(r.animation().tick_count(), 0);

        assert!(r.start());
        assert!(r.frame());
        assert_eq!(r.frames(), 1);
        assert_eq!(r.animation().tick_count(), 1);
    }

    #[test]
    fn start_is_idempotent() {
        let mut r = herb_runner();
        assert!(r.start());
        assert!(!r.start());
        assert!(r.is_running());
    }

    #[test]
    fn stop_halts_frames_and_intervals() {
        let mut r = herb_runner();
        r.start();
        r.frame();
        r.stop();
        assert!(!r.frame());
        r.animation_mut().pulses.spawn_probability = 1.0;
        r.interval();
        assert!(r.animation().pulses.is_empty());
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn interval_spawns_while_running() {
        let mut r = herb_runner();
        r.start();
        r.animation_mut().pulses.spawn_probability = 1.0;
        r.interval();
        assert_eq!(r.animation().pulses.len(), 1);
        assert_eq!(r.interval_ms(), Some(1200));
    }

    #[test]
    fn resize_clears_and_redraws_at_new_bounds() {
        let mut r = herb_runner();
        r.start();
        r.frame();
        assert!(!r.canvas().commands().is_empty());

        let surface = r.resize(640.7, 480.2);
        assert_eq!(surface, Surface::new(640, 480));
        assert!(r.canvas().commands().is_empty());
        assert_eq!(r.animation().surface(), surface);

        r.frame();
        assert_eq!(
            r.canvas().commands()[0],
            DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 640.0, height: 480.0 }
        );
    }

    #[test]
    fn bubble_runner_has_no_interval() {
        let surface = Surface::new(400, 300);
        let field = BubbleField::new(BubbleFieldConfig::default(), surface, Rng::new(1));
        let mut r = AnimationRunner::new(field, RecordingCanvas::new(400, 300));
        assert_eq!(r.interval_ms(), None);
        r.start();
        for _ in 0..10 {
            assert!(r.frame());
        }
        assert_eq!(r.frames(), 10);
    }

    #[test]
    fn control_trait_object_stops_runner() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let runner = Rc::new(RefCell::new(herb_runner()));
        runner.borrow_mut().start();
        let control: Rc<RefCell<dyn Control>> = runner.clone();
        control.borrow_mut().stop();
        assert!(!runner.borrow().is_running());
    }
}
