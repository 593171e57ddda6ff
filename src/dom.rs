use crate::constants::{PANEL_ID_PREFIX, HINT_SELECTOR};
use app_core::{PanelBounds, PanelPlacement};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; panels are positioned in this space.
pub fn viewport_size(window: &web::Window) -> Vec2 {
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
    Vec2::new(w as f32, h as f32)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing store in sync with its CSS size * devicePixelRatio
/// for whatever renderer is attached to it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn panel_element(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(&format!("{PANEL_ID_PREFIX}{id}"))
}

/// Place an open panel: centered on its smoothed coordinate, faded to its
/// smoothed opacity.
pub fn apply_panel_placement(document: &web::Document, p: &PanelPlacement) {
    if let Some(el) = panel_element(document, p.id) {
        let style = format!(
            "left:{:.1}px;top:{:.1}px;opacity:{:.3};transform:translate(-50%,-50%)",
            p.x, p.y, p.opacity
        );
        let _ = el.set_attribute("style", &style);
    }
}

pub fn hide_panel(document: &web::Document, id: &str) {
    if let Some(el) = panel_element(document, id) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Measure a panel's rendered bounding box. Returns unmeasured (zero-size)
/// bounds untouched; the resolver skips those until layout settles.
pub fn measure_panel(
    document: &web::Document,
    id: &'static str,
) -> Option<PanelBounds> {
    let el = panel_element(document, id)?;
    let rect = el.get_bounding_client_rect();
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let center = Vec2::new(
        rect.left() as f32 + size.x * 0.5,
        rect.top() as f32 + size.y * 0.5,
    );
    Some(PanelBounds { id, center, size })
}

pub fn toggle_hint(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(HINT_SELECTOR) {
        let hidden = el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
        let _ = el.set_attribute("style", if hidden { "" } else { "display:none" });
    }
}
