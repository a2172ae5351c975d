//! Browser host loop: `requestAnimationFrame` chain, spawn interval, resize
//! listener, and the per-role registry that keeps setup idempotent.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use herbfield::Animation;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::canvas::WebCanvas;
use crate::runner::{AnimationRunner, Control};

/// Everything a live animation holds on to in the browser.
struct ActiveAnimation {
    role: &'static str,
    runner: Rc<RefCell<dyn Control>>,
    frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    interval: Option<(u32, Closure<dyn FnMut()>)>,
    interval_id: Option<i32>,
    resize: Closure<dyn FnMut()>,
}

impl ActiveAnimation {
    /// Start the interval, the frame chain and the resize listener. The
    /// listener goes last so a failure leaves nothing that outlives `self`.
    fn register(&mut self, window: &Window) -> Result<(), JsValue> {
        if let Some((ms, closure)) = &self.interval {
            self.interval_id = Some(window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                (*ms).min(i32::MAX as u32) as i32,
            )?);
        }

        self.runner.borrow_mut().start();
        if let Some(cb) = self.frame_closure.borrow().as_ref() {
            self.frame_id
                .set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }

        window.add_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
    }

    fn teardown(self, window: &Window) {
        self.runner.borrow_mut().stop();
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("{}: cancel_animation_frame failed: {:?}", self.role, e);
            }
        }
        if let Some(id) = self.interval_id {
            window.clear_interval_with_handle(id);
        }
        if let Err(e) = window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
        {
            log::warn!("{}: failed to remove resize listener: {:?}", self.role, e);
        }
        // Breaks the closure's reference to itself.
        self.frame_closure.borrow_mut().take();
    }
}

thread_local! {
    static ACTIVE: RefCell<HashMap<&'static str, ActiveAnimation>> = RefCell::new(HashMap::new());
}

/// Whether an animation is already registered for `role`.
pub fn is_active(role: &str) -> bool {
    ACTIVE.with(|cell| cell.borrow().contains_key(role))
}

pub fn active_count() -> usize {
    ACTIVE.with(|cell| cell.borrow().len())
}

/// Fit the canvas, build the animation for the measured surface, and start
/// its frame chain, interval and resize listener under `role`.
///
/// A role that is already running is left alone.
pub fn launch<A, F, M>(
    window: &Window,
    role: &'static str,
    canvas: WebCanvas,
    build: F,
    measure: M,
) -> Result<(), JsValue>
where
    A: Animation + 'static,
    F: FnOnce(herbfield::Surface) -> A,
    M: Fn() -> (f64, f64) + 'static,
{
    if is_active(role) {
        log::debug!("{}: already running, setup skipped", role);
        return Ok(());
    }

    let mut canvas = canvas;
    let (w, h) = measure();
    let surface = herbfield::fit_surface(&mut canvas, w, h);
    let runner = Rc::new(RefCell::new(AnimationRunner::new(build(surface), canvas)));

    let resize = {
        let runner = runner.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = measure();
            runner.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };

    let interval_ms = runner.borrow().interval_ms();
    let interval = interval_ms.map(|ms| {
        let runner = runner.clone();
        let closure = Closure::wrap(Box::new(move || {
            runner.borrow_mut().interval();
        }) as Box<dyn FnMut()>);
        (ms, closure)
    });

    // The frame closure re-requests itself, so it has to be reachable from
    // inside; the Option lets it be created before it is stored.
    let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    {
        let runner = runner.clone();
        let this = frame_closure.clone();
        let frame_id = frame_id.clone();
        let window = window.clone();
        *frame_closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_id.set(None);
            if !runner.borrow_mut().frame() {
                return;
            }
            if let Some(cb) = this.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(e) => log::warn!("{}: request_animation_frame failed: {:?}", role, e),
                }
            }
        }) as Box<dyn FnMut()>));
    }

    let control: Rc<RefCell<dyn Control>> = runner;
    let mut active = ActiveAnimation {
        role,
        runner: control,
        frame_closure,
        frame_id,
        interval,
        interval_id: None,
        resize,
    };
    if let Err(e) = active.register(window) {
        active.teardown(window);
        return Err(e);
    }

    ACTIVE.with(|cell| {
        cell.borrow_mut().insert(role, active);
    });
    Ok(())
}

/// Stop and unregister every animation. Returns how many were stopped.
pub fn stop_all(window: &Window) -> usize {
    let active: Vec<(&'static str, ActiveAnimation)> =
        ACTIVE.with(|cell| cell.borrow_mut().drain().collect());
    let count = active.len();
    for (role, animation) in active {
        animation.teardown(window);
        log::debug!("{}: torn down", role);
    }
    count
}
