//! Transient DOM effect primitives. Every primitive spawns one or more
//! absolutely-positioned elements, hands motion to a CSS keyframe (see
//! `dom::inject_effect_keyframes`) and removes the element on a timer,
//! so each particle is torn down exactly once.

use crate::constants::{CONFETTI_GLYPHS, FLOATING_EMOJIS, HEART_GLYPHS, SPARKLE_GLYPHS};
use crate::dom;
use site_core::{
    radial_burst, BURST_LIFETIME_MS, BURST_PARTICLES, CONFETTI_LIFETIME_MS, CONFETTI_PIECES,
    CONFETTI_STAGGER_MS, EMOJI_LIFETIME_MS, FIREWORK_BURSTS, FIREWORK_LIFETIME_MS,
    FIREWORK_SPARKS, FIREWORK_STAGGER_MS, HEART_LIFETIME_MS, NOTIFICATION_MS,
    NOTIFICATION_SLIDE_MS, RAINBOW_MS, RIPPLE_LIFETIME_MS, SPARKLES_PER_BURST,
    SPARKLE_LIFETIME_MS,
};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn random() -> f64 {
    js_sys::Math::random()
}

#[inline]
fn pick<'a>(choices: &[&'a str]) -> &'a str {
    choices[(random() * choices.len() as f64) as usize % choices.len()]
}

fn viewport() -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Spawn one styled element on the body and remove it after
/// `lifetime_ms`.
fn spawn_transient(document: &web::Document, text: Option<&str>, css: &str, lifetime_ms: i32) {
    let Some(body) = document.body() else { return };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    dom::set_css_text(&el, css);
    let _ = body.append_child(&el);
    dom::schedule(lifetime_ms, move || {
        el.remove();
    });
}

/// Click ripple inside an element, centered on the pointer.
pub fn ripple(document: &web::Document, element: &web::Element, ev: &web::MouseEvent) {
    let rect = element.get_bounding_client_rect();
    let diameter = rect.width().max(rect.height());
    let radius = diameter / 2.0;
    let x = ev.client_x() as f64 - rect.left() - radius;
    let y = ev.client_y() as f64 - rect.top() - radius;

    let Ok(circle) = document.create_element("span") else {
        return;
    };
    dom::set_css_text(
        &circle,
        &format!(
            "position:absolute; width:{diameter}px; height:{diameter}px; left:{x}px; top:{y}px; \
             border-radius:50%; background:rgba(255,255,255,0.3); transform:scale(0); \
             animation:ripple 0.6s linear; pointer-events:none;"
        ),
    );
    if let Some(host) = element.dyn_ref::<web::HtmlElement>() {
        dom::set_style(host, "position", "relative");
        dom::set_style(host, "overflow", "hidden");
    }
    let _ = element.append_child(&circle);
    dom::schedule(RIPPLE_LIFETIME_MS, move || {
        circle.remove();
    });
}

/// Soft hover ripple used on cards, nodes, buttons and links.
pub fn hover_ripple(document: &web::Document, element: &web::Element) {
    let Ok(r) = document.create_element("div") else {
        return;
    };
    dom::set_css_text(
        &r,
        "position:absolute; width:20px; height:20px; border-radius:50%; \
         background:rgba(139,92,246,0.3); pointer-events:none; \
         animation:ripple-expand 0.6s ease-out;",
    );
    if let Some(host) = element.dyn_ref::<web::HtmlElement>() {
        dom::set_style(host, "position", "relative");
    }
    let _ = element.append_child(&r);
    dom::schedule(RIPPLE_LIFETIME_MS, move || {
        r.remove();
    });
}

/// Five sparkle glyphs fanning out from the center of `rect`.
pub fn sparkle_burst(document: &web::Document, rect: &web::DomRect) {
    let cx = rect.left() + rect.width() / 2.0;
    let cy = rect.top() + rect.height() / 2.0;
    for (i, v) in radial_burst(SPARKLES_PER_BURST, 50.0).into_iter().enumerate() {
        let document = document.clone();
        dom::schedule((i as i32) * 50, move || {
            spawn_transient(
                &document,
                Some(pick(&SPARKLE_GLYPHS)),
                &format!(
                    "position:fixed; left:{cx}px; top:{cy}px; font-size:20px; \
                     pointer-events:none; z-index:9999; --tx:{:.1}px; --ty:{:.1}px; \
                     animation:sparkle-float 1s ease-out forwards;",
                    v.x, v.y
                ),
                SPARKLE_LIFETIME_MS,
            );
        });
    }
}

/// Small heart drifting up from the click point.
pub fn mini_heart(document: &web::Document, x: f64, y: f64) {
    spawn_transient(
        document,
        Some(pick(&HEART_GLYPHS)),
        &format!(
            "position:fixed; left:{x}px; top:{y}px; font-size:16px; pointer-events:none; \
             z-index:9999; animation:heart-float 1.5s ease-out forwards;"
        ),
        HEART_LIFETIME_MS,
    );
}

/// Random emoji floating slowly up from below the fold.
pub fn floating_emoji(document: &web::Document) {
    let (width, _) = viewport();
    let x = random() * width;
    spawn_transient(
        document,
        Some(pick(&FLOATING_EMOJIS)),
        &format!(
            "position:fixed; left:{x:.0}px; bottom:-50px; font-size:30px; pointer-events:none; \
             z-index:1; opacity:0.6; animation:float-up-slow 8s linear forwards;"
        ),
        EMOJI_LIFETIME_MS,
    );
}

/// Twelve-particle radial burst at a point (double-click celebration).
pub fn burst(document: &web::Document, cx: f64, cy: f64) {
    for v in radial_burst(BURST_PARTICLES, 100.0) {
        spawn_transient(
            document,
            None,
            &format!(
                "position:fixed; left:{cx}px; top:{cy}px; width:8px; height:8px; \
                 background:linear-gradient(135deg, #8B5CF6, #EC4899); border-radius:50%; \
                 pointer-events:none; z-index:9999; --tx:{:.1}px; --ty:{:.1}px; \
                 animation:burst-out 0.8s ease-out forwards;",
                v.x, v.y
            ),
            BURST_LIFETIME_MS,
        );
    }
}

/// Three staggered confetti glyphs falling from the top of `rect`; the
/// one-shot section celebration.
pub fn mini_celebration(document: &web::Document, rect: &web::DomRect) {
    for i in 0..3 {
        let document = document.clone();
        let x = rect.left() + random() * rect.width();
        let y = rect.top();
        dom::schedule(i * 200, move || {
            spawn_transient(
                &document,
                Some("🎊"),
                &format!(
                    "position:fixed; left:{x:.0}px; top:{y:.0}px; font-size:24px; \
                     pointer-events:none; z-index:9999; \
                     animation:mini-confetti 1.5s ease-out forwards;"
                ),
                1500,
            );
        });
    }
}

/// Full-width confetti rain (10-click milestone, konami, shake).
pub fn confetti_rain(document: &web::Document) {
    let (width, _) = viewport();
    for i in 0..CONFETTI_PIECES {
        let document = document.clone();
        dom::schedule(i as i32 * CONFETTI_STAGGER_MS, move || {
            let x = random() * width;
            let rot = random() * 360.0;
            spawn_transient(
                &document,
                Some(pick(&CONFETTI_GLYPHS)),
                &format!(
                    "position:fixed; left:{x:.0}px; top:-50px; font-size:24px; \
                     pointer-events:none; z-index:9999; transform:rotate({rot:.0}deg); \
                     animation:confetti-fall 3s linear forwards;"
                ),
                CONFETTI_LIFETIME_MS,
            );
        });
    }
}

/// Five staggered firework bursts in the upper half of the viewport
/// (50-click milestone).
pub fn fireworks(document: &web::Document) {
    let (width, height) = viewport();
    for i in 0..FIREWORK_BURSTS {
        let document = document.clone();
        dom::schedule(i as i32 * FIREWORK_STAGGER_MS, move || {
            let x = random() * width;
            let y = random() * height / 2.0;
            for v in radial_burst(FIREWORK_SPARKS, 1.0) {
                let distance = 50.0 + random() as f32 * 50.0;
                let hue = random() * 360.0;
                spawn_transient(
                    &document,
                    None,
                    &format!(
                        "position:fixed; left:{x:.0}px; top:{y:.0}px; width:4px; height:4px; \
                         background:hsl({hue:.0}, 100%, 50%); border-radius:50%; \
                         pointer-events:none; z-index:9999; --tx:{:.1}px; --ty:{:.1}px; \
                         animation:firework 1s ease-out forwards;",
                        v.x * distance,
                        v.y * distance
                    ),
                    FIREWORK_LIFETIME_MS,
                );
            }
        });
    }
}

/// Hue-rotate sweep over the whole page (100-click milestone).
pub fn rainbow_mode(document: &web::Document) {
    let Some(body) = document.body() else { return };
    dom::set_style(&body, "animation", "rainbow-bg 3s linear");
    dom::schedule(RAINBOW_MS, move || {
        dom::clear_style(&body, "animation");
    });
}

/// Sliding toast notification, auto-dismissed.
pub fn notification(document: &web::Document, message: &str) {
    let Some(body) = document.body() else { return };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_text_content(Some(message));
    dom::set_css_text(
        &el,
        "position:fixed; top:100px; left:50%; transform:translateX(-50%); \
         background:linear-gradient(135deg, #8B5CF6, #EC4899); color:white; \
         padding:1rem 2rem; border-radius:50px; font-weight:600; z-index:10000; \
         animation:notification-slide 0.5s ease-out; \
         box-shadow:0 10px 30px rgba(0,0,0,0.3); text-align:center; max-width:90%;",
    );
    let _ = body.append_child(&el);
    dom::schedule(NOTIFICATION_MS, move || {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "animation", "notification-slide-out 0.5s ease-out");
        }
        let el = el.clone();
        dom::schedule(NOTIFICATION_SLIDE_MS, move || {
            el.remove();
        });
    });
}
