use super::keymap::{action_for_key, KeyAction};
use crate::AppHandle;
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &AppHandle, canvas: &web::HtmlCanvasElement) {
    let key = ev.key();
    let overlay_open = app.borrow().nav.is_overlay_open();
    let Some(action) = action_for_key(&key, overlay_open) else {
        return;
    };
    let now = Instant::now();
    match action {
        KeyAction::Navigate(section) => app.borrow_mut().activate(section, now),
        KeyAction::ReturnToSystem => app.borrow_mut().return_to_system(),
        KeyAction::CarouselPrev => {
            app.borrow_mut().step_carousel(false, now);
            ev.prevent_default();
        }
        KeyAction::CarouselNext => {
            app.borrow_mut().step_carousel(true, now);
            ev.prevent_default();
        }
        KeyAction::ToggleFullscreen => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    if doc.fullscreen_element().is_some() {
                        _ = doc.exit_fullscreen();
                    } else {
                        _ = canvas.request_fullscreen();
                    }
                }
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(app: AppHandle, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
