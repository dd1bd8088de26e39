//! Per-frame driver: advance the scene catalog, damp the camera toward
//! the pointer and hand the flattened instances to the renderer.

use crate::input;
use crate::render::{self, Instance};
use glam::Vec3;
use instant::Instant;
use site_core::{
    advance, camera_target, damp_toward, recolor, SceneObject, SceneObjectKind, Theme, CAMERA_SMOOTHING,
    CAMERA_Z,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const WAVE_OPACITY: f32 = 0.3;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    /// Set by the theme controller; consumed at the top of the next
    /// frame so recoloring happens on the render thread's schedule.
    pub pending_theme: Rc<Cell<Option<Theme>>>,

    pub objects: Vec<SceneObject>,
    pub camera: Vec3,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    instances: Vec<Instance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        mouse: Rc<RefCell<input::MouseState>>,
        pending_theme: Rc<Cell<Option<Theme>>>,
        objects: Vec<SceneObject>,
        gpu: render::GpuState<'a>,
    ) -> Self {
        Self {
            canvas,
            mouse,
            pending_theme,
            objects,
            camera: Vec3::new(0.0, 0.0, CAMERA_Z),
            gpu: Some(gpu),
            started: Instant::now(),
            instances: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        if let Some(theme) = self.pending_theme.take() {
            recolor(&mut self.objects, theme);
        }

        // pointer coords are CSS pixels; normalize against the CSS box,
        // not the backing store
        let pointer = input::mouse_normalized(
            &self.mouse.borrow(),
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        );

        advance(&mut self.objects, elapsed, pointer);
        self.camera = damp_toward(self.camera, camera_target(pointer), CAMERA_SMOOTHING);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            render::build_instances(&self.objects, &mut self.instances);
            let wave_tint = self
                .objects
                .iter()
                .find(|o| matches!(o.kind, SceneObjectKind::WaveGrid))
                .map(|o| o.color)
                .unwrap_or([1.0, 1.0, 1.0]);
            if let Err(e) = gpu.render(
                self.camera,
                &self.instances,
                elapsed,
                wave_tint,
                WAVE_OPACITY,
            ) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
