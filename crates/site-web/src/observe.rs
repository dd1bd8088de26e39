//! Visibility-driven one-shot animations: scroll reveals, skill bar
//! fills and per-section celebrations. Each group gets its own
//! `IntersectionObserver`; an element fires at most once and is then
//! unobserved.

use crate::constants::{REVEAL_SELECTOR, SECTION_SELECTOR, SKILL_BAR_SELECTOR};
use crate::{dom, effects};
use site_core::{
    RevealSet, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_CELEBRATE_THRESHOLD,
    SKILL_FILL_DELAY_MS, SKILL_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `elements`, invoking `on_fire` exactly once per element the
/// first time it crosses `threshold`. Elements are tagged with `key`
/// so re-entries map back to a stable id.
fn observe_once(
    elements: &[web::Element],
    key: &'static str,
    threshold: f64,
    root_margin: Option<&str>,
    on_fire: impl Fn(&web::Element) + 'static,
) {
    if elements.is_empty() {
        return;
    }
    let fired = Rc::new(RefCell::new(RevealSet::default()));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(key)
                    .and_then(|v| v.parse::<u32>().ok())
                else {
                    continue;
                };
                if fired.borrow_mut().fire(id) {
                    on_fire(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();
    for (i, el) in elements.iter().enumerate() {
        let _ = el.set_attribute(key, &i.to_string());
        observer.observe(el);
    }
}

/// Fade-in-up reveal for sections, cards and gallery items.
pub fn install_reveals(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    for el in &elements {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "opacity", "0");
        }
    }
    observe_once(
        &elements,
        "data-reveal-id",
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |el| {
            // small random stagger so grouped cards don't pop in unison
            let delay = (js_sys::Math::random() * 200.0) as i32;
            let el = el.clone();
            dom::schedule(delay, move || {
                if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                    dom::clear_style(html, "opacity");
                }
                let _ = el.class_list().add_1("animate-fade-in-up");
            });
        },
    );
}

/// Skill bars fill to their `data-skill` percentage shortly after
/// entering view; bars start collapsed so the fill reads as an
/// animation.
pub fn install_skill_bars(document: &web::Document) {
    let bars = dom::query_all(document, SKILL_BAR_SELECTOR);
    for bar in &bars {
        if let Some(html) = bar.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "width", "0");
            dom::set_style(html, "transition", "width 1s ease-out");
        }
    }
    observe_once(&bars, "data-skill-id", SKILL_THRESHOLD, None, |el| {
        let Some(target) = el.get_attribute("data-skill") else {
            return;
        };
        let width = if target.ends_with('%') {
            target
        } else {
            format!("{target}%")
        };
        let el = el.clone();
        dom::schedule(SKILL_FILL_DELAY_MS, move || {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "width", &width);
            }
        });
    });
}

/// Small confetti cheer the first time each section scrolls into view.
pub fn install_section_celebrations(document: &web::Document) {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let document = document.clone();
    observe_once(
        &sections,
        "data-cheer-id",
        SECTION_CELEBRATE_THRESHOLD,
        None,
        move |el| {
            effects::mini_celebration(&document, &el.get_bounding_client_rect());
        },
    );
}
