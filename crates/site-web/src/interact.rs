//! Event wiring for the decorative layer: loading screen, theme
//! toggle, mobile menu, mascot, click counter with milestones, the
//! konami sequence, double-click bursts, hover effects and the
//! shake-to-reveal easter egg. Each installer tolerates a page that
//! lacks its elements.

use crate::constants::{
    CLICK_COUNT_ID, FUN_COUNTER_ID, HOVER_RIPPLE_SELECTOR, INTERACTIVE_SELECTOR, KONAMI_MESSAGE,
    LOADING_SCREEN_ID, MASCOT_BUBBLE_ID, MASCOT_ID, MASCOT_MESSAGES, MOBILE_MENU_BUTTON_ID,
    MOBILE_MENU_ID, RIPPLE_SELECTOR, SHAKE_SECRET_MESSAGE, SKILL_BAR_SELECTOR,
    SKILL_ITEM_SELECTOR, TECH_ICON_SELECTOR, THEME_TOGGLE_ID,
};
use crate::dom::{self, Scheduled};
use crate::effects;
use crate::theme::ThemeController;
use site_core::{
    ClickMilestones, KonamiTracker, Milestone, BUBBLE_HIDE_MS, BUBBLE_HOVER_HIDE_MS,
    DOUBLE_CLICK_WINDOW_MS, EMOJI_CHANCE, EMOJI_TICK_MS, HEART_EVERY_N_CLICKS,
    LOADING_FADE_DELAY_MS, LOADING_HIDE_MS, MASCOT_REVEAL_MS, MENU_CLOSE_MS, SHAKES_TO_REVEAL,
    SHAKE_DEBOUNCE_MS, SHAKE_THRESHOLD, THEME_BOUNCE_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire every interaction installer in this module.
pub fn install(document: &web::Document, themes: &Rc<ThemeController>) {
    install_loading_screen(document);
    install_theme_toggle(document, themes.clone());
    install_mobile_menu(document);
    install_click_tracking(document);
    install_click_effects(document);
    install_double_click(document);
    install_konami(document);
    install_mascot(document);
    install_emoji_ticker(document);
    install_shake_detector(document);
}

/// Fade the loading screen out one second after the window load event
/// (immediately if the document already finished loading).
pub fn install_loading_screen(document: &web::Document) {
    let Some(screen) = dom::html_by_id(document, LOADING_SCREEN_ID) else {
        return;
    };
    let run = move || {
        dom::schedule(LOADING_FADE_DELAY_MS, move || {
            dom::set_style(&screen, "transition", "opacity 0.5s ease");
            dom::set_style(&screen, "opacity", "0");
            dom::schedule(LOADING_HIDE_MS, move || {
                dom::set_style(&screen, "display", "none");
            });
        });
    };
    if document.ready_state() == "complete" {
        run();
    } else if let Some(window) = web::window() {
        let cb = Closure::once_into_js(run);
        let _ = window.add_event_listener_with_callback("load", cb.unchecked_ref());
    }
}

/// Theme toggle button: flips the theme and bounces the button. A
/// rapid second click supersedes the pending un-bounce.
pub fn install_theme_toggle(document: &web::Document, themes: Rc<ThemeController>) {
    let Some(button) = dom::html_by_id(document, THEME_TOGGLE_ID) else {
        return;
    };
    let doc = document.clone();
    let bounce: Rc<RefCell<Option<Scheduled>>> = Rc::new(RefCell::new(None));
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        themes.toggle(&doc);
        dom::set_style(&button, "transform", "scale(1.2) rotate(15deg)");
        let b = button.clone();
        *bounce.borrow_mut() = Scheduled::once(THEME_BOUNCE_MS, move || {
            dom::clear_style(&b, "transform");
        });
    });
}

/// Mobile menu toggle with a delayed hide on close so the collapse
/// transition can finish. Re-opening cancels a pending hide.
pub fn install_mobile_menu(document: &web::Document) {
    let Some(menu) = dom::by_id(document, MOBILE_MENU_ID) else {
        return;
    };
    let open = Rc::new(Cell::new(false));
    let pending: Rc<RefCell<Option<Scheduled>>> = Rc::new(RefCell::new(None));

    let close = {
        let open = open.clone();
        let pending = pending.clone();
        let menu = menu.clone();
        Rc::new(move || {
            if !open.get() {
                return;
            }
            open.set(false);
            let _ = menu.class_list().remove_1("open");
            let m = menu.clone();
            *pending.borrow_mut() = Scheduled::once(MENU_CLOSE_MS, move || {
                let _ = m.class_list().add_1("hidden");
            });
        })
    };

    {
        let close = close.clone();
        let menu = menu.clone();
        dom::add_click_listener(document, MOBILE_MENU_BUTTON_ID, move || {
            if open.get() {
                close();
            } else {
                open.set(true);
                *pending.borrow_mut() = None;
                let _ = menu.class_list().remove_1("hidden");
                let _ = menu.class_list().add_1("open");
            }
        });
    }

    // tapping a nav link closes the menu too
    for link in dom::query_all(document, "#mobile-menu a") {
        let close = close.clone();
        dom::on_event::<web::MouseEvent>(link.as_ref(), "click", move |_| close());
    }
}

/// The single page-wide click counter. Owns the milestone state, keeps
/// the visible counter in sync and spawns a heart every fifth click.
pub fn install_click_tracking(document: &web::Document) {
    let clicks = RefCell::new(ClickMilestones::new());
    let doc = document.clone();
    let counter = dom::html_by_id(document, CLICK_COUNT_ID);
    let counter_box = dom::html_by_id(document, FUN_COUNTER_ID);
    dom::on_event::<web::MouseEvent>(document.as_ref(), "click", move |ev| {
        let milestone = clicks.borrow_mut().record_click();
        let count = clicks.borrow().count();
        if let Some(counter) = &counter {
            counter.set_text_content(Some(&count.to_string()));
        }
        if count == 1 {
            if let Some(counter_box) = &counter_box {
                let _ = counter_box.class_list().remove_1("hidden");
            }
        }
        if count % HEART_EVERY_N_CLICKS == 0 {
            effects::mini_heart(&doc, ev.client_x() as f64, ev.client_y() as f64);
        }
        if let Some(milestone) = milestone {
            effects::notification(&doc, milestone.notification());
            match milestone {
                Milestone::Confetti => effects::confetti_rain(&doc),
                Milestone::Fireworks => effects::fireworks(&doc),
                Milestone::Rainbow => effects::rainbow_mode(&doc),
            }
        }
    });
}

/// Per-element flourishes: click ripples on cards and buttons, sparkle
/// bursts on interactive buttons, hover ripples and tech icon sparkles.
pub fn install_click_effects(document: &web::Document) {
    for el in dom::query_all(document, RIPPLE_SELECTOR) {
        let doc = document.clone();
        let target = el.clone();
        dom::on_event::<web::MouseEvent>(el.as_ref(), "click", move |ev| {
            effects::ripple(&doc, &target, &ev);
        });
    }
    for el in dom::query_all(document, INTERACTIVE_SELECTOR) {
        let doc = document.clone();
        let target = el.clone();
        dom::on_event::<web::MouseEvent>(el.as_ref(), "click", move |_| {
            effects::sparkle_burst(&doc, &target.get_bounding_client_rect());
        });
        // hover lift, reverted on leave
        if let Ok(html) = el.clone().dyn_into::<web::HtmlElement>() {
            {
                let html = html.clone();
                dom::on_event::<web::MouseEvent>(el.as_ref(), "mouseenter", move |_| {
                    dom::set_style(&html, "transform", "translateY(-2px) scale(1.02)");
                });
            }
            dom::on_event::<web::MouseEvent>(el.as_ref(), "mouseleave", move |_| {
                dom::clear_style(&html, "transform");
            });
        }
    }
    for el in dom::query_all(document, HOVER_RIPPLE_SELECTOR) {
        let doc = document.clone();
        let target = el.clone();
        dom::on_event::<web::MouseEvent>(el.as_ref(), "mouseenter", move |_| {
            effects::hover_ripple(&doc, &target);
        });
    }
    for el in dom::query_all(document, TECH_ICON_SELECTOR) {
        let doc = document.clone();
        let target = el.clone();
        dom::on_event::<web::MouseEvent>(el.as_ref(), "mouseenter", move |_| {
            if let Some(html) = target.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "transform", "scale(1.2) rotate(10deg)");
            }
            effects::sparkle_burst(&doc, &target.get_bounding_client_rect());
        });
        let target = el.clone();
        dom::on_event::<web::MouseEvent>(el.as_ref(), "mouseleave", move |_| {
            if let Some(html) = target.dyn_ref::<web::HtmlElement>() {
                dom::clear_style(html, "transform");
            }
        });
    }
    // glow on the bar while its skill row is hovered
    for item in dom::query_all(document, SKILL_ITEM_SELECTOR) {
        let Some(bar) = item.query_selector(SKILL_BAR_SELECTOR).ok().flatten() else {
            continue;
        };
        let Ok(bar) = bar.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        {
            let bar = bar.clone();
            dom::on_event::<web::MouseEvent>(item.as_ref(), "mouseenter", move |_| {
                dom::set_style(&bar, "box-shadow", "0 0 12px rgba(139,92,246,0.6)");
            });
        }
        dom::on_event::<web::MouseEvent>(item.as_ref(), "mouseleave", move |_| {
            dom::clear_style(&bar, "box-shadow");
        });
    }
}

/// Two clicks inside the window fire a radial burst at the pointer.
pub fn install_double_click(document: &web::Document) {
    let doc = document.clone();
    let mut last = 0.0f64;
    dom::on_event::<web::MouseEvent>(document.as_ref(), "click", move |ev| {
        let now = js_sys::Date::now();
        if now - last < DOUBLE_CLICK_WINDOW_MS as f64 {
            effects::burst(&doc, ev.client_x() as f64, ev.client_y() as f64);
            last = 0.0;
        } else {
            last = now;
        }
    });
}

/// Konami sequence listener; completion triggers the full celebration.
pub fn install_konami(document: &web::Document) {
    let doc = document.clone();
    let mut tracker = KonamiTracker::new();
    dom::on_event::<web::KeyboardEvent>(document.as_ref(), "keydown", move |ev| {
        if tracker.feed(&ev.key()) {
            effects::notification(&doc, KONAMI_MESSAGE);
            effects::confetti_rain(&doc);
            effects::fireworks(&doc);
        }
    });
}

/// Corner mascot: appears after a delay, chats on click, whispers on
/// hover. A newer bubble message supersedes the older hide timer.
pub fn install_mascot(document: &web::Document) {
    let Some(mascot) = dom::by_id(document, MASCOT_ID) else {
        return;
    };
    let bubble = dom::by_id(document, MASCOT_BUBBLE_ID);

    {
        let mascot = mascot.clone();
        dom::schedule(MASCOT_REVEAL_MS, move || {
            let _ = mascot.class_list().remove_1("hidden");
        });
    }

    let hide: Rc<RefCell<Option<Scheduled>>> = Rc::new(RefCell::new(None));
    let say = {
        let bubble = bubble.clone();
        let hide = hide.clone();
        Rc::new(move |hide_after_ms: i32| {
            let Some(bubble) = bubble.clone() else { return };
            let idx = (js_sys::Math::random() * MASCOT_MESSAGES.len() as f64) as usize
                % MASCOT_MESSAGES.len();
            bubble.set_text_content(Some(MASCOT_MESSAGES[idx]));
            let _ = bubble.class_list().remove_1("hidden");
            *hide.borrow_mut() = Scheduled::once(hide_after_ms, move || {
                let _ = bubble.class_list().add_1("hidden");
            });
        })
    };

    {
        let say = say.clone();
        let doc = document.clone();
        let target = mascot.clone();
        dom::on_event::<web::MouseEvent>(mascot.as_ref(), "click", move |_| {
            say(BUBBLE_HIDE_MS);
            effects::sparkle_burst(&doc, &target.get_bounding_client_rect());
        });
    }
    dom::on_event::<web::MouseEvent>(mascot.as_ref(), "mouseenter", move |_| {
        say(BUBBLE_HOVER_HIDE_MS);
    });
}

/// Occasionally drift a themed emoji up the page.
pub fn install_emoji_ticker(document: &web::Document) {
    let doc = document.clone();
    dom::repeat(EMOJI_TICK_MS, move || {
        if js_sys::Math::random() < EMOJI_CHANCE {
            effects::floating_emoji(&doc);
        }
    });
}

/// Device-motion shake counter; three debounced shakes reveal the
/// mobile easter egg.
pub fn install_shake_detector(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    let mut last = (0.0f64, 0.0f64, 0.0f64);
    let mut last_shake_at = 0.0f64;
    let mut shakes = 0u32;
    dom::on_event::<web::DeviceMotionEvent>(window.as_ref(), "devicemotion", move |ev| {
        let Some(accel) = ev.acceleration_including_gravity() else {
            return;
        };
        let x = accel.x().unwrap_or(0.0);
        let y = accel.y().unwrap_or(0.0);
        let z = accel.z().unwrap_or(0.0);
        let delta = (x - last.0).abs() + (y - last.1).abs() + (z - last.2).abs();
        last = (x, y, z);
        let now = js_sys::Date::now();
        if delta > SHAKE_THRESHOLD && now - last_shake_at > SHAKE_DEBOUNCE_MS {
            last_shake_at = now;
            shakes += 1;
            if shakes >= SHAKES_TO_REVEAL {
                shakes = 0;
                effects::notification(&doc, SHAKE_SECRET_MESSAGE);
                effects::confetti_rain(&doc);
            }
        }
    });
}
