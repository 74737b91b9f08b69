#![cfg(target_arch = "wasm32")]
use folio_core::{
    generate_configs, Camera, CameraDirector, ModelCatalog, NavBar, NavOutcome, NavigationState,
    OrbitControls, OverlayViews, SceneRoot, Section,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod navbar;
mod overlay;
mod render;

/// Everything the frame loop and the DOM handlers share.
pub(crate) struct App {
    pub scene: SceneRoot,
    pub nav: NavigationState,
    pub director: CameraDirector,
    pub controls: OrbitControls,
    pub camera: Camera,
    pub overlays: OverlayViews,
    pub rng: StdRng,
    pub hover: Option<Section>,
}

pub(crate) type AppHandle = Rc<RefCell<App>>;

impl App {
    fn build_scene(rng: &mut StdRng) -> SceneRoot {
        let configs = generate_configs(rng);
        SceneRoot::new(configs, &ModelCatalog::builtin(), rng)
    }

    fn new(scene: SceneRoot, rng: StdRng, aspect: f32) -> Self {
        Self {
            scene,
            nav: NavigationState::new(),
            director: CameraDirector::default(),
            controls: OrbitControls::default(),
            camera: Camera::home(aspect),
            overlays: OverlayViews::default(),
            rng,
            hover: None,
        }
    }

    /// Navigation-bar semantics shared by bar clicks, digit keys and planet clicks.
    pub fn activate(&mut self, section: Section, now: Instant) {
        let Some(section) = NavBar::activate(&self.nav, section) else {
            return;
        };
        if self.nav.navigate(section, &self.scene, now) == NavOutcome::NotYetPublished {
            log::warn!("[nav] {} has not rendered yet", section.label());
        }
    }

    pub fn return_to_system(&mut self) {
        self.hover = None;
        self.nav.return_to_system();
    }

    pub fn step_carousel(&mut self, forward: bool, now: Instant) {
        let Some(kind) = self.nav.open_overlay() else {
            return;
        };
        let view = self.overlays.get_mut(kind);
        let moved = if forward { view.next(now) } else { view.prev(now) };
        if moved {
            log::debug!("[overlay] {:?} -> item {}", kind, view.carousel().index());
        }
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store follows CSS size times devicePixelRatio
    wire_canvas_resize(&canvas);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let mut rng = StdRng::from_entropy();
    let scene = App::build_scene(&mut rng);

    // Without WebGPU the DOM navigation still works; only the 3D view is missing.
    let gpu = frame::init_gpu(&canvas, &scene).await;
    let app: AppHandle = Rc::new(RefCell::new(App::new(scene, rng, aspect)));

    navbar::wire(&document, app.clone());
    overlay::wire(&document, app.clone());
    events::wire_global_keydown(app.clone(), canvas.clone());
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        mouse_state: mouse_state.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        document,
        canvas,
        mouse: mouse_state,
        gpu,
        last_instant: Instant::now(),
        nav_key: None,
        overlay_dom: overlay::OverlayDom::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
