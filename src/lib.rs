#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, SCENE_SEED};
use app_core::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("megaparsec site starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // The WebGPU scene renderer attaches to this canvas separately; here we
    // only keep its backing store sized.
    dom::sync_canvas_backing_size(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let viewport = dom::viewport_size(&window);
    let state = Rc::new(RefCell::new(SceneState::new(viewport, SCENE_SEED)));

    events::wire_pointer_handlers(state.clone());
    events::wire_resize(state.clone(), canvas);
    events::wire_overlay_buttons(&document, &state);
    events::wire_global_keydown(&document, state.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        document,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
