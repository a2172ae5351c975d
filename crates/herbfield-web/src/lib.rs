//! WASM bridge: runs the herbfield animations on real canvases and wires the
//! surrounding page behavior.
//!
//! # Usage
//!
//! ```js
//! import init, { decorate_page } from "./pkg/herbfield_web.js";
//!
//! document.addEventListener("DOMContentLoaded", async () => {
//!   await init();
//!   decorate_page(JSON.stringify({ herb: { count: 16 } }));
//! });
//! ```

pub mod canvas;
pub mod launch;
pub mod page;
pub mod runner;

use std::cell::{Cell, RefCell};
use std::thread::LocalKey;

use herbfield::{BubbleField, DecorConfig, HerbField, Rng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub use canvas::WebCanvas;
pub use runner::AnimationRunner;

const HERO_ROLE: &str = "hero";
const BUBBLE_ROLE: &str = "bubbles";

thread_local! {
    static CONFIG: RefCell<DecorConfig> = RefCell::new(DecorConfig::default());
    static DECORATED: Cell<bool> = const { Cell::new(false) };
    static LOGGING: Cell<bool> = const { Cell::new(false) };
}

fn config() -> DecorConfig {
    CONFIG.with(|cell| cell.borrow().clone())
}

fn browser() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    Ok((window, document))
}

/// Seed from the config, or from `Math.random` when none is pinned.
fn rng_for(seed: Option<u64>) -> Rng {
    let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64) as u64);
    Rng::new(seed)
}

/// Run `f` the first time `flag` is seen unset.
fn run_once(flag: &'static LocalKey<Cell<bool>>, f: impl FnOnce()) {
    if !flag.with(|done| done.replace(true)) {
        f();
    }
}

/// Install the panic hook and console logger. Every export calls this, since
/// any of them may be the first call into the module.
fn init_logging() {
    run_once(&LOGGING, || {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Log a failed setup step instead of throwing into the page.
fn report(step: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{}: {:?}", step, e);
    }
}

fn start_hero(window: &Window, document: &Document, config: &DecorConfig) -> Result<(), JsValue> {
    if launch::is_active(HERO_ROLE) {
        log::debug!("{}: already running", HERO_ROLE);
        return Ok(());
    }
    let Some(container) = document.query_selector(".hero-right")? else {
        log::debug!("no .hero-right, herb field not started");
        return Ok(());
    };
    container.set_inner_html(r#"<div class="hero-visual"><canvas></canvas></div>"#);
    let element = container
        .query_selector("canvas")?
        .ok_or("hero canvas missing after insert")?
        .dyn_into::<HtmlCanvasElement>()?;

    let herb = config.herb.clone();
    let rng = rng_for(herb.seed);
    launch::launch(
        window,
        HERO_ROLE,
        WebCanvas::new(element)?,
        move |surface| HerbField::new(herb, surface, rng),
        move || {
            let rect = container.get_bounding_client_rect();
            (rect.width(), rect.height())
        },
    )
}

fn start_bubbles(window: &Window, document: &Document, config: &DecorConfig) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("bubbleCanvas") else {
        log::debug!("no #bubbleCanvas, bubble field not started");
        return Ok(());
    };
    let element = element.dyn_into::<HtmlCanvasElement>()?;
    let measured = element.clone();

    let bubble = config.bubble.clone();
    let rng = rng_for(bubble.seed);
    launch::launch(
        window,
        BUBBLE_ROLE,
        WebCanvas::new(element)?,
        move |surface| BubbleField::new(bubble, surface, rng),
        move || (measured.offset_width() as f64, measured.offset_height() as f64),
    )
}

/// Set up everything: background video, navigation, cards, both canvases, loader, scroll and
/// the speech button. `config_json` may override any default; an invalid
/// document is logged and the defaults are used.
///
/// Runs once per page; later calls are ignored. Use `start_hero_visualization`
/// and `start_bubble_canvas` to restart canvases after `stop_animations`.
#[wasm_bindgen]
pub fn decorate_page(config_json: Option<String>) {
    init_logging();

    if DECORATED.with(|d| d.replace(true)) {
        log::debug!("decorate_page: already decorated");
        return;
    }

    let config = match config_json.as_deref().map(DecorConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("invalid decoration config, using defaults: {}", e);
            DecorConfig::default()
        }
        None => DecorConfig::default(),
    };
    CONFIG.with(|cell| *cell.borrow_mut() = config.clone());

    let (window, document) = match browser() {
        Ok(handles) => handles,
        Err(e) => {
            log::warn!("decorate_page: {:?}", e);
            return;
        }
    };

    report("video", page::add_video_background(&document, &config.page));
    report("nav", page::set_active_nav(&window, &document, &config.page));
    report("cards", page::reveal_cards(&document, &config.page));
    report("hero", start_hero(&window, &document, &config));
    report("bubbles", start_bubbles(&window, &document, &config));
    report("loader", page::fade_loader(&window, &document, &config.page));
    report("scroll", page::watch_scroll(&window, &document, &config.page));
    report("speech", page::bind_speech_button(&window, &document));
    log::info!("herbfield: page decorated");
}

/// Start only the herb field. No-op if it is already running or the page has
/// no `.hero-right` container.
#[wasm_bindgen]
pub fn start_hero_visualization() {
    init_logging();
    let result = browser().and_then(|(w, d)| start_hero(&w, &d, &config()));
    report("hero", result);
}

/// Start only the bubble field. No-op if it is already running or the page
/// has no `#bubbleCanvas`.
#[wasm_bindgen]
pub fn start_bubble_canvas() {
    init_logging();
    let result = browser().and_then(|(w, d)| start_bubbles(&w, &d, &config()));
    report("bubbles", result);
}

/// Stop every running animation and release its timers and listeners.
/// Returns how many were stopped.
#[wasm_bindgen]
pub fn stop_animations() -> u32 {
    init_logging();
    match web_sys::window() {
        Some(window) => launch::stop_all(&window) as u32,
        None => 0,
    }
}

/// Press the speech-toggle button programmatically.
#[wasm_bindgen]
pub fn toggle_speech() {
    init_logging();
    let result = browser().and_then(|(w, d)| page::toggle_speech(&w, &d));
    report("speech", result);
}

/// Whether the header counts as scrolled at this offset.
#[wasm_bindgen]
pub fn is_scrolled(scroll_y: f64) -> bool {
    init_logging();
    herbfield::header_scrolled(scroll_y, config().page.scroll_threshold)
}

/// Number of animations currently registered.
#[wasm_bindgen]
pub fn running_animations() -> u32 {
    init_logging();
    launch::active_count() as u32
}
