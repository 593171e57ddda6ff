use crate::constants::MAX_FRAME_DT_SEC;
use crate::overlay;
use app_core::{Event, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<SceneState>>,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One render frame: advance the state machine, service the resolver's
    /// bounds request, then push placements into the DOM.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut st = self.state.borrow_mut();
        st.apply(Event::Tick(dt));
        if st.needs_bounds() {
            let bounds = overlay::measure_open_bounds(&self.document, &st);
            st.submit_bounds(&bounds);
        }
        overlay::apply_placements(&self.document, &st);
    }
}

/// Drive the frame loop with requestAnimationFrame. Dropping the context's
/// Rc chain ends the loop; no continuation outlives the owner.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
