use crate::constants::{OVERLAY_ROOT_ID, REVEALED_CLASS};
use crate::{dom, markup, AppHandle};
use folio_core::{OverlayKind, OverlayViews};
use instant::Instant;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM-side memory of the mounted overlay so per-frame updates only touch
/// what changed.
#[derive(Default)]
pub struct OverlayDom {
    mounted: Option<(OverlayKind, usize)>,
    headline: String,
    revealed: usize,
}

impl OverlayDom {
    pub fn sync<R: Rng + ?Sized>(
        &mut self,
        document: &web::Document,
        views: &OverlayViews,
        now: Instant,
        rng: &mut R,
    ) {
        let Some(root) = document.get_element_by_id(OVERLAY_ROOT_ID) else {
            return;
        };
        let Some(view) = views.open_view() else {
            if self.mounted.take().is_some() {
                root.set_inner_html("");
                dom::set_hidden(&root, true);
                log::debug!("[overlay] unmounted");
            }
            return;
        };
        let key = (view.kind(), view.carousel().index());
        if self.mounted != Some(key) {
            root.set_inner_html(&markup::overlay_html(key.0, key.1));
            dom::set_hidden(&root, false);
            self.mounted = Some(key);
            self.headline.clear();
            self.revealed = 0;
            log::debug!("[overlay] mounted {:?} item {}", key.0, key.1);
        }
        let Some(frame) = view.frame(now, rng) else {
            return;
        };
        if frame.headline != self.headline {
            if let Some(h) = document.get_element_by_id(markup::HEADLINE_ID) {
                h.set_text_content(Some(&frame.headline));
            }
            self.headline = frame.headline;
        }
        if frame.revealed != self.revealed {
            self.revealed = frame.revealed;
            reveal(&root, frame.revealed);
        }
    }
}

fn reveal(root: &web::Element, count: usize) {
    let selector = format!("[{}]", markup::REVEAL_ATTR);
    let Ok(nodes) = root.query_selector_all(&selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let idx = el
            .get_attribute(markup::REVEAL_ATTR)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(usize::MAX);
        _ = el.class_list().toggle_with_force(REVEALED_CLASS, idx < count);
    }
}

/// Every close affordance (button, backdrop, return) leads back to the system view.
pub fn wire(document: &web::Document, app: AppHandle) {
    dom::add_delegated_click(document, OVERLAY_ROOT_ID, markup::ACTION_ATTR, move |action| {
        let now = Instant::now();
        let mut app = app.borrow_mut();
        match action {
            "return" | "close" => app.return_to_system(),
            "prev" => app.step_carousel(false, now),
            "next" => app.step_carousel(true, now),
            _ => {}
        }
    });
}
