#![cfg(target_arch = "wasm32")]

//! Browser entry point. Everything here is wiring: the testable logic
//! (scene model, form rules, easter-egg state) lives in `site-core`.

mod constants;
mod dom;
mod effects;
mod form;
mod frame;
mod input;
mod interact;
mod observe;
mod relay;
mod render;
mod scene;
mod theme;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {e:#}");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::inject_effect_keyframes(&document);

    let themes = theme::ThemeController::load(&document);
    interact::install(&document, &themes);
    observe::install_reveals(&document);
    observe::install_skill_bars(&document);
    observe::install_section_celebrations(&document);
    form::install(&document);

    // GPU bring-up last; the page is fully interactive even if it fails.
    scene::setup(&document, &themes).await;
    log::info!("presentation layer ready");
    Ok(())
}
