//! Background scene bring-up. Setup is all-or-nothing: if the canvas
//! is missing or WebGPU is unavailable the canvas is hidden and the
//! page runs without a scene.

use crate::constants::CANVAS_ID;
use crate::frame::{self, FrameContext};
use crate::theme::ThemeController;
use crate::{dom, input};
use site_core::build_scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub async fn setup(document: &web::Document, themes: &Rc<ThemeController>) {
    let Some(canvas) = dom::by_id(document, CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return;
    };
    dom::sync_canvas_backing_size(&canvas);

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        log::warn!("background scene disabled: WebGPU unavailable");
        if let Some(html) = canvas.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "display", "none");
        }
        return;
    };

    let Some(window) = web::window() else { return };

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    {
        let mouse = mouse.clone();
        dom::on_event::<web::MouseEvent>(window.as_ref(), "mousemove", move |ev| {
            let mut m = mouse.borrow_mut();
            m.x = ev.client_x() as f32;
            m.y = ev.client_y() as f32;
        });
    }
    {
        let mouse = mouse.clone();
        dom::on_event::<web::MouseEvent>(window.as_ref(), "mousedown", move |_| {
            mouse.borrow_mut().down = true;
        });
    }
    {
        let mouse = mouse.clone();
        dom::on_event::<web::MouseEvent>(window.as_ref(), "mouseup", move |_| {
            mouse.borrow_mut().down = false;
        });
    }
    {
        let canvas = canvas.clone();
        dom::on_event::<web::Event>(window.as_ref(), "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }

    // Theme flips land here and are consumed by the next frame.
    let pending_theme = Rc::new(Cell::new(None));
    {
        let pending_theme = pending_theme.clone();
        themes.on_change(move |theme| pending_theme.set(Some(theme)));
    }

    let objects = build_scene(js_sys::Date::now() as u64, themes.get());
    let ctx = Rc::new(RefCell::new(FrameContext::new(
        canvas,
        mouse,
        pending_theme,
        objects,
        gpu,
    )));
    frame::start_loop(ctx);
}
