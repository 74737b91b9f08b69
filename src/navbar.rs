use crate::constants::NAV_ID;
use crate::{dom, markup, AppHandle};
use folio_core::{NavBar, NavigationState, Section};
use instant::Instant;
use web_sys as web;

/// What the bar last rendered; markup is rebuilt only when it changes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NavKey {
    active: Section,
    visible: bool,
}

pub fn sync(document: &web::Document, nav: &NavigationState, last: &mut Option<NavKey>) {
    let key = NavKey {
        active: nav.active(),
        visible: NavBar::visible(nav),
    };
    if *last == Some(key) {
        return;
    }
    *last = Some(key);
    let Some(el) = document.get_element_by_id(NAV_ID) else {
        return;
    };
    if key.visible {
        el.set_inner_html(&markup::nav_html(&NavBar::items(nav)));
    } else {
        el.set_inner_html("");
    }
    dom::set_hidden(&el, !key.visible);
}

pub fn wire(document: &web::Document, app: AppHandle) {
    dom::add_delegated_click(document, NAV_ID, markup::SECTION_ATTR, move |value| {
        let Some(section) = value.parse::<usize>().ok().and_then(Section::from_index) else {
            return;
        };
        app.borrow_mut().activate(section, Instant::now());
    });
}
