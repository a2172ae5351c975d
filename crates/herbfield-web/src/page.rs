//! DOM wiring for the page behavior around the canvases.
//!
//! Each function looks up its element and returns `Ok(())` without doing
//! anything when the element is absent from this page.

use herbfield::page::cards::CardStyle;
use herbfield::page::video::{CONTENT_WRAPPER_CLASS, VIDEO_BACKGROUND_CLASS};
use herbfield::{
    active_links, header_scrolled, hidden_style, revealed_style, should_reveal, video_markup,
    LoaderFade, Notice, PageConfig, SpeechHelper, SpeechToggle,
};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Read a global property of `window` as a string.
fn global_string(window: &Window, name: &str) -> Option<String> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_string())
}

fn apply_style(element: &HtmlElement, style: &CardStyle) -> Result<(), JsValue> {
    let css = element.style();
    css.set_property("opacity", &style.opacity)?;
    css.set_property("transform", &style.transform)?;
    if let Some(transition) = &style.transition {
        css.set_property("transition", transition)?;
    }
    Ok(())
}

/// Put the looping background video behind the page and move the header,
/// main and footer into a content wrapper above it. Does nothing if the page
/// already has a video background or no video source is configured.
pub fn add_video_background(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(src) = config.video_src.as_deref() else {
        return Ok(());
    };
    if document
        .query_selector(&format!(".{}", VIDEO_BACKGROUND_CLASS))?
        .is_some()
    {
        log::debug!("video background already present");
        return Ok(());
    }
    let Some(body) = document.body() else {
        return Ok(());
    };

    let background = document.create_element("div")?;
    background.set_class_name(VIDEO_BACKGROUND_CLASS);
    background.set_inner_html(&video_markup(src));
    body.insert_before(&background, body.first_child().as_ref())?;

    let wrapper = document.create_element("div")?;
    wrapper.set_class_name(CONTENT_WRAPPER_CLASS);
    for selector in [".site-header", "main", ".site-footer"] {
        if let Some(el) = document.query_selector(selector)? {
            wrapper.append_child(&el)?;
        }
    }
    body.append_child(&wrapper)?;
    Ok(())
}

/// Add the `active` class to the navigation links for the current page.
pub fn set_active_nav(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let page = global_string(window, "pageName").unwrap_or_default();
    let links = document.query_selector_all(".nav a")?;
    let elements: Vec<Element> = (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    let hrefs: Vec<String> = elements
        .iter()
        .map(|el| el.get_attribute("href").unwrap_or_default())
        .collect();
    for i in active_links(&page, &config.default_page, &hrefs) {
        elements[i].class_list().add_1("active")?;
    }
    Ok(())
}

/// Toggle the header's `scrolled` class as the page scrolls.
pub fn watch_scroll(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(header) = document.query_selector(".site-header")? else {
        log::debug!("no .site-header, scroll styling skipped");
        return Ok(());
    };
    let threshold = config.scroll_threshold;
    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        if let Err(e) = header
            .class_list()
            .toggle_with_force("scrolled", header_scrolled(y, threshold))
        {
            log::warn!("failed to toggle header class: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // Lives for the page.
    on_scroll.forget();
    Ok(())
}

/// Hide content cards and fade each one in the first time it scrolls into view.
pub fn reveal_cards(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let cards = document.query_selector_all(&config.card_selector)?;
    if cards.length() == 0 {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !should_reveal(entry.is_intersecting()) {
                continue;
            }
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                if let Err(e) = apply_style(&target, &revealed_style()) {
                    log::warn!("failed to reveal card: {:?}", e);
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.card_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let hidden = hidden_style(config);
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        apply_style(&card, &hidden)?;
        observer.observe(&card);
    }
    log::debug!("observing {} cards", cards.length());
    Ok(())
}

fn set_timeout(window: &Window, ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let cb = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    )
}

/// Fade the page loader out, then remove it from the layout.
pub fn fade_loader(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(loader) = document
        .get_element_by_id("loader")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let fade = LoaderFade::from_config(config);
    let win = window.clone();
    set_timeout(window, fade.delay_ms, move || {
        if let Err(e) = loader.style().set_property("opacity", "0") {
            log::warn!("failed to fade loader: {:?}", e);
        }
        let hide = move || {
            if let Err(e) = loader.style().set_property("display", "none") {
                log::warn!("failed to hide loader: {:?}", e);
            }
        };
        if let Err(e) = set_timeout(&win, fade.fade_ms, hide) {
            log::warn!("failed to schedule loader removal: {:?}", e);
        }
    })?;
    Ok(())
}

/// `window.speechHelper`, when the page has loaded one.
struct WindowSpeechHelper {
    helper: JsValue,
}

impl WindowSpeechHelper {
    fn lookup(window: &Window) -> Option<Self> {
        let helper = Reflect::get(window, &JsValue::from_str("speechHelper")).ok()?;
        if helper.is_undefined() || helper.is_null() {
            return None;
        }
        Some(Self { helper })
    }
}

impl SpeechHelper for WindowSpeechHelper {
    fn toggle_speech(&mut self) {
        let method = Reflect::get(&self.helper, &JsValue::from_str("toggleSpeech"))
            .ok()
            .and_then(|m| m.dyn_into::<Function>().ok());
        match method {
            Some(f) => {
                if let Err(e) = f.call0(&self.helper) {
                    log::warn!("speechHelper.toggleSpeech threw: {:?}", e);
                }
            }
            None => log::warn!("speechHelper has no toggleSpeech()"),
        }
    }
}

/// Show a notice through the page's `showMessage`, or log it.
fn show_notice(window: &Window, notice: &Notice) {
    let show = Reflect::get(window, &JsValue::from_str("showMessage"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    match show {
        Some(f) => {
            let msg = JsValue::from_str(notice.message);
            let level = JsValue::from_str(notice.level.as_str());
            if let Err(e) = f.call2(&JsValue::NULL, &msg, &level) {
                log::warn!("showMessage threw: {:?}", e);
            }
        }
        None => log::info!("[{}] {}", notice.level.as_str(), notice.message),
    }
}

/// Handle one press of the speech-toggle button.
pub fn toggle_speech(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("speechToggle") else {
        return Ok(());
    };
    let classes = button.class_list();
    let mut toggle = SpeechToggle::new(classes.contains("active"));
    let mut helper = WindowSpeechHelper::lookup(window);
    let notice = toggle.toggle(helper.as_mut().map(|h| h as &mut dyn SpeechHelper));
    classes.toggle_with_force("active", toggle.is_active())?;
    show_notice(window, &notice);
    Ok(())
}

/// Forward clicks on the speech-toggle button.
pub fn bind_speech_button(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("speechToggle") else {
        return Ok(());
    };
    let win = window.clone();
    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move || {
        if let Err(e) = toggle_speech(&win, &doc) {
            log::warn!("speech toggle failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
