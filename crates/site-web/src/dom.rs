//! Small DOM helpers shared by the wiring modules. Lookups return
//! `Option` so a page without a given element simply skips the
//! feature.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a leaked listener for `kind`, downcasting the event to `E`.
/// Events that fail the downcast are ignored.
pub fn on_event<E: JsCast>(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

/// Replace the whole inline style, mirroring `cssText` assignment.
#[inline]
pub fn set_css_text(el: &web::Element, css: &str) {
    let _ = el.set_attribute("style", css);
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Fire-and-forget one-shot timer for effect teardown. The closure is
/// leaked, as event closures are throughout this crate.
pub fn schedule(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }
}

/// Repeating timer; used for the floating-emoji ticker.
pub fn repeat(interval_ms: i32, mut f: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        );
        closure.forget();
    }
}

/// Cancellable scheduled transition. Dropping the handle cancels the
/// pending callback, so storing a new handle in the same slot
/// supersedes the old one instead of racing it.
pub struct Scheduled {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Scheduled {
    pub fn once(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Scheduled> {
        let window = web::window()?;
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Scheduled {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Scheduled {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Inject the keyframe rules the transient effects animate with. Safe
/// to call once at startup; markup keeps its own stylesheet.
pub fn inject_effect_keyframes(document: &web::Document) {
    const KEYFRAMES: &str = r#"
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
@keyframes ripple-expand { to { transform: scale(8); opacity: 0; } }
@keyframes sparkle-float { to { transform: translate(var(--tx), var(--ty)); opacity: 0; } }
@keyframes heart-float { to { transform: translateY(-100px); opacity: 0; } }
@keyframes float-up-slow { to { bottom: 100%; opacity: 0; } }
@keyframes burst-out { to { transform: translate(var(--tx), var(--ty)); opacity: 0; } }
@keyframes mini-confetti { to { transform: translateY(200px) rotate(360deg); opacity: 0; } }
@keyframes confetti-fall { to { top: 100%; opacity: 0; } }
@keyframes firework { to { transform: translate(var(--tx), var(--ty)); opacity: 0; } }
@keyframes rainbow-bg { 0%, 100% { filter: hue-rotate(0deg); } 50% { filter: hue-rotate(180deg); } }
@keyframes notification-slide { from { top: -100px; opacity: 0; } to { top: 100px; opacity: 1; } }
@keyframes notification-slide-out { from { top: 100px; opacity: 1; } to { top: -100px; opacity: 0; } }
@keyframes slide-in-left { from { opacity: 0; transform: translateX(-100px); } to { opacity: 1; transform: translateX(0); } }
@keyframes fade-in-up { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }
.animate-fade-in-up { animation: fade-in-up 0.6s ease-out both; }
"#;
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(KEYFRAMES));
        if let Some(head) = document.head() {
            let _ = head.append_child(&style);
        }
    }
}
