use crate::constants::{PANEL_CLOSE_SUFFIX, PANEL_ID_PREFIX, PANEL_TRIGGERS};
use crate::dom;
use crate::input;
use app_core::{Event, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedState = Rc<RefCell<SceneState>>;

fn dispatch_select(state: &SharedState, name: &str) {
    let id = state.borrow().scene().canonical_id(name);
    if let Some(id) = id {
        state.borrow_mut().apply(Event::Select(id));
    }
}

fn dispatch_center(state: &SharedState, name: &str) {
    let id = state.borrow().scene().canonical_id(name);
    if let Some(id) = id {
        state.borrow_mut().apply(Event::Center(id));
    }
}

/// Pointer handlers: hover picking, sway input, click-to-select.
pub fn wire_pointer_handlers(state: SharedState) {
    // pointermove: hover + sway
    {
        let state_m = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let px = input::pointer_viewport_px(&ev);
                let mut st = state_m.borrow_mut();
                let viewport = st.viewport();
                st.apply(Event::Pointer(input::pointer_ndc(px, viewport)));
                let hit = input::pick_entity(st.scene(), &st.camera(), viewport, px);
                st.apply(Event::Hover(hit));
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: select the sphere under the pointer
    {
        let state_u = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let px = input::pointer_viewport_px(&ev);
                let hit = {
                    let st = state_u.borrow();
                    input::pick_entity(st.scene(), &st.camera(), st.viewport(), px)
                };
                if let Some(id) = hit {
                    state_u.borrow_mut().apply(Event::Select(id));
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Resize events feed the viewport into the state machine.
pub fn wire_resize(state: SharedState, canvas: web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        if let Some(wnd) = web::window() {
            let vp = dom::viewport_size(&wnd);
            state.borrow_mut().apply(Event::Resize(vp.x, vp.y));
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Diamond trigger buttons open panels; clicking a panel body centers it;
/// the close button toggles it shut.
pub fn wire_overlay_buttons(document: &web::Document, state: &SharedState) {
    for (button_id, entity) in PANEL_TRIGGERS {
        let state_b = state.clone();
        dom::add_click_listener(document, button_id, move || {
            dispatch_select(&state_b, entity);
        });
    }
    for (_, entity) in PANEL_TRIGGERS {
        let state_c = state.clone();
        dom::add_click_listener(document, &format!("{PANEL_ID_PREFIX}{entity}"), move || {
            dispatch_center(&state_c, entity);
        });
        let state_x = state.clone();
        dom::add_click_listener(
            document,
            &format!("{PANEL_ID_PREFIX}{entity}{PANEL_CLOSE_SUFFIX}"),
            move || {
                dispatch_select(&state_x, entity);
            },
        );
    }
}

/// Keyboard: `h` toggles the controls hint, Escape drops the camera focus.
pub fn wire_global_keydown(document: &web::Document, state: SharedState) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                match ev.key().as_str() {
                    "h" | "H" => {
                        dom::toggle_hint(&doc);
                        ev.prevent_default();
                    }
                    "Escape" => {
                        state.borrow_mut().apply(Event::ClearFocus);
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
