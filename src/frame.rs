use crate::events::pointer::hovered_section;
use crate::input;
use crate::navbar::{self, NavKey};
use crate::overlay::OverlayDom;
use crate::render;
use crate::AppHandle;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: AppHandle,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub nav_key: Option<NavKey>,
    pub overlay_dom: OverlayDom,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut guard = self.app.borrow_mut();
        let app = &mut *guard;

        // Bodies publish their positions before anything reads them.
        app.scene.tick(app.nav.freeze_orbits());
        app.nav.poll(now);
        app.overlays.sync(app.nav.open_overlay(), now);

        let w = self.canvas.width();
        let h = self.canvas.height();
        app.camera.aspect = w.max(1) as f32 / h.max(1) as f32;
        let mouse = *self.mouse.borrow();
        // a held drag owns the camera until release
        if !mouse.is_dragging() {
            app.director.update(&mut app.camera, app.nav.target());
        }

        let hover = hovered_section(app, &self.canvas, &mouse);
        if hover != app.hover {
            app.hover = hover;
            let cursor = if hover.is_some() { "pointer" } else { "default" };
            _ = self.canvas.style().set_property("cursor", cursor);
        }

        navbar::sync(&self.document, &app.nav, &mut self.nav_key);
        self.overlay_dom
            .sync(&self.document, &app.overlays, now, &mut app.rng);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(dt.as_secs_f32(), &app.scene, &app.camera, app.hover) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &folio_core::SceneRoot,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
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
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
