use crate::camera::screen_to_world_ray;
use crate::constants::PICK_RADIUS_SCALE;
use crate::input::{self, DragKind};
use crate::{App, AppHandle};
use folio_core::{NavBar, Section};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: AppHandle,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
    wire_click(&w);
}

/// Planet under the pointer, if any. Bodies move every frame, so the frame
/// loop re-picks even when the pointer is still.
pub fn hovered_section(
    app: &App,
    canvas: &web::HtmlCanvasElement,
    mouse: &input::MouseState,
) -> Option<Section> {
    if !mouse.inside || !NavBar::visible(&app.nav) {
        return None;
    }
    let (ro, rd) = screen_to_world_ray(
        &app.camera,
        canvas.width() as f32,
        canvas.height() as f32,
        mouse.x,
        mouse.y,
    );
    let candidates: Vec<_> = app
        .scene
        .bodies
        .iter()
        .filter_map(|b| {
            b.last_world_position()
                .map(|p| (b.config.section, p, b.config.visual_scale * PICK_RADIUS_SCALE))
        })
        .collect();
    input::pick_nearest(ro, rd, candidates.iter().map(|(_, p, r)| (*p, *r))).map(|i| candidates[i].0)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut ms = w.mouse_state.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
        ms.inside = true;
        let Some((kind, delta)) = ms.drag_to(pos) else {
            return;
        };
        drop(ms);
        let mut app = w.app.borrow_mut();
        let app = &mut *app;
        match kind {
            DragKind::Rotate => {
                let frozen = app.nav.freeze_orbits();
                _ = app.controls.rotate(&mut app.camera, delta.x, delta.y, frozen);
            }
            DragKind::Pan => app.controls.pan(&mut app.camera, delta.x, delta.y),
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // left drags orbit, right or shift+left pans
        let kind = if ev.button() == 2 || ev.shift_key() {
            DragKind::Pan
        } else {
            DragKind::Rotate
        };
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.mouse_state.borrow_mut().press(pos, kind);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();

    // right button pans; keep the browser menu out of the way
    let suppress = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", suppress.as_ref().unchecked_ref());
    suppress.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().release();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    for name in ["pointerup", "pointercancel"] {
        _ = w
            .canvas
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let mut app = w.app.borrow_mut();
        let app = &mut *app;
        app.controls.zoom(&mut app.camera, ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().inside = false;
        w.app.borrow_mut().hover = None;
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if w.mouse_state.borrow().dragged {
            return;
        }
        let mut app = w.app.borrow_mut();
        if let Some(section) = app.hover {
            log::info!("[click] planet {}", section.label());
            app.activate(section, Instant::now());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
