// Host-side tests for the HTML builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use folio_core::content;
use folio_core::{NavBar, NavigationState, OverlayKind};
use markup::*;

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn rgb_css_rounds_and_clamps() {
    assert_eq!(rgb_css([1.0, 0.0, 0.5]), "rgb(255,0,128)");
    assert_eq!(rgb_css([2.0, -1.0, 0.0]), "rgb(255,0,0)");
}

#[test]
fn nav_html_marks_only_the_active_item() {
    let nav = NavigationState::new();
    let html = nav_html(&NavBar::items(&nav));
    assert_eq!(html.matches("<button").count(), 5);
    assert_eq!(html.matches(&format!("nav-item {}", ACTIVE_CLASS)).count(), 1);
    assert!(html.contains("data-section=\"0\" style="));
    assert!(html.contains(">Contact</button>"));
}

#[test]
fn about_overlay_has_one_reveal_block_per_section() {
    let html = overlay_html(OverlayKind::About, 0);
    assert_eq!(
        html.matches(REVEAL_ATTR).count(),
        content::about_sections().len()
    );
    assert!(html.contains("ABOUT_MODULE.EXE"));
    assert!(html.contains("RETURN_TO_SYSTEM"));
    assert!(html.contains("data-action=\"close\""));
    assert!(!html.contains("data-action=\"next\""));
}

#[test]
fn experience_overlay_disables_prev_on_first_item() {
    let html = overlay_html(OverlayKind::Experience, 0);
    assert!(html.contains("data-action=\"prev\" disabled"));
    assert!(html.contains("data-action=\"next\">"));
    let e = &content::experiences()[0];
    assert_eq!(html.matches(REVEAL_ATTR).count(), e.description.len());
    assert!(html.contains(&escape_html(e.role)));
}

#[test]
fn projects_overlay_disables_next_on_last_item() {
    let last = content::projects().len() - 1;
    let html = overlay_html(OverlayKind::Projects, last);
    assert!(html.contains("data-action=\"next\" disabled"));
    assert!(html.contains("data-action=\"prev\">"));
    assert!(html.contains(&format!("{:02} / {:02}", last + 1, last + 1)));
}

#[test]
fn contact_overlay_renders_links() {
    let html = overlay_html(OverlayKind::Contact, 0);
    assert!(html.contains("CONTACT_MODULE.EXE"));
    assert!(html.matches("<a href=").count() >= 3);
}

#[test]
fn headline_placeholder_starts_empty() {
    for kind in OverlayKind::ALL {
        let html = overlay_html(kind, 0);
        assert!(html.contains(&format!("<h2 id=\"{}\"></h2>", HEADLINE_ID)));
    }
}
