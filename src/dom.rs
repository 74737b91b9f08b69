use wasm_bindgen::JsCast;
use web_sys as web;

/// Delegated click listener on `element_id`: `handler` receives the value of
/// `attr` on the nearest clicked ancestor that carries it.
pub fn add_delegated_click(
    document: &web::Document,
    element_id: &str,
    attr: &'static str,
    mut handler: impl FnMut(&str) + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{}", element_id);
        return;
    };
    let selector = format!("[{}]", attr);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let hit = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|t| t.closest(&selector).ok().flatten())
            .and_then(|t| t.get_attribute(attr));
        if let Some(value) = hit {
            handler(&value);
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    _ = el
        .class_list()
        .toggle_with_force(crate::constants::HIDDEN_CLASS, hidden);
}

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
