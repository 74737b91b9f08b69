// Overlay entrance animations and carousel stepping.

use folio_core::content;
use folio_core::*;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn typewriter_reveals_one_char_per_step() {
    let t0 = Instant::now();
    let tw = Typewriter::new("DATA", t0);
    assert_eq!(tw.visible(t0), "");
    assert_eq!(tw.visible(t0 + ms(50)), "D");
    assert_eq!(tw.visible(t0 + ms(149)), "DA");
    assert!(!tw.done(t0 + ms(199)));
    assert_eq!(tw.visible(t0 + ms(200)), "DATA");
    assert!(tw.done(t0 + ms(200)));
    assert_eq!(tw.visible(t0 + ms(10_000)), "DATA");
}

#[test]
fn scramble_waits_then_resolves_left_to_right() {
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(1);
    let s = Scramble::new("CONTACT_MODULE", t0, CONTACT_HEADLINE_DELAY);

    let early = s.frame(t0 + ms(100), &mut rng);
    assert_eq!(early.text, "");
    assert!(!early.done);

    // 12 iterations in: two characters resolved, four more scrambling
    let mid = s.frame(t0 + CONTACT_HEADLINE_DELAY + ms(12 * 35), &mut rng);
    assert!(!mid.done);
    assert_eq!(mid.text.chars().count(), 2 + SCRAMBLE_LOOKAHEAD);
    assert!(mid.text.starts_with("CO"));
    assert!(mid.text.bytes().all(|b| SCRAMBLE_GLYPHS.contains(&b) || b == b'_'));

    let end = s.frame(t0 + CONTACT_HEADLINE_DELAY + ms(85 * 35), &mut rng);
    assert!(end.done);
    assert_eq!(end.text, "CONTACT_MODULE");
}

#[test]
fn staggered_reveal_shows_first_item_immediately() {
    assert_eq!(revealed_count(Duration::ZERO, 5, REVEAL_STAGGER), 1);
    assert_eq!(revealed_count(ms(80), 5, REVEAL_STAGGER), 2);
    assert_eq!(revealed_count(ms(250), 5, REVEAL_STAGGER), 4);
    assert_eq!(revealed_count(ms(5_000), 5, REVEAL_STAGGER), 5);
    assert_eq!(revealed_count(ms(5_000), 0, REVEAL_STAGGER), 0);
}

#[test]
fn carousel_clamps_at_both_ends() {
    let mut c = Carousel::new(3);
    assert!(!c.has_prev());
    assert!(!c.prev());
    assert!(c.next());
    assert!(c.next());
    assert_eq!(c.index(), 2);
    assert!(!c.has_next());
    assert!(!c.next());
    assert_eq!(c.index(), 2);
    c.reset();
    assert_eq!(c.index(), 0);

    let mut empty = Carousel::new(0);
    assert!(empty.is_empty());
    assert!(!empty.next());
}

#[test]
fn closed_view_has_no_frame() {
    let mut rng = StdRng::seed_from_u64(3);
    let view = OverlayView::new(OverlayKind::About);
    assert!(!view.is_open());
    assert_eq!(view.frame(Instant::now(), &mut rng), None);
}

#[test]
fn experience_view_types_company_and_restarts_on_step() {
    let mut rng = StdRng::seed_from_u64(3);
    let t0 = Instant::now();
    let mut view = OverlayView::new(OverlayKind::Experience);
    assert_eq!(view.carousel().len(), content::experiences().len());

    view.set_open(true, t0);
    let first = content::experiences()[0].company.to_uppercase();
    let settled = t0 + ms(50 * first.chars().count() as u64);
    let frame = view.frame(settled, &mut rng).unwrap();
    assert_eq!(frame.headline, first);
    assert!(frame.headline_done);
    assert_eq!(frame.index, 0);

    let t1 = settled + ms(10);
    assert!(view.next(t1));
    let frame = view.frame(t1, &mut rng).unwrap();
    assert_eq!(frame.index, 1);
    assert_eq!(frame.headline, "");
    assert_eq!(frame.revealed, 1);
}

#[test]
fn reopening_resets_carousel_and_animations() {
    let mut rng = StdRng::seed_from_u64(3);
    let t0 = Instant::now();
    let mut view = OverlayView::new(OverlayKind::Projects);
    view.set_open(true, t0);
    view.next(t0);
    view.next(t0);
    assert_eq!(view.carousel().index(), 2);

    view.set_open(false, t0 + ms(500));
    assert!(!view.is_open());
    assert!(!view.next(t0 + ms(600)));

    let t1 = t0 + ms(1_000);
    view.set_open(true, t1);
    let frame = view.frame(t1, &mut rng).unwrap();
    assert_eq!(frame.index, 0);
    assert_eq!(frame.headline, "");
}

#[test]
fn about_headline_is_static_module_name() {
    let mut rng = StdRng::seed_from_u64(3);
    let t0 = Instant::now();
    let mut view = OverlayView::new(OverlayKind::About);
    view.set_open(true, t0);
    let frame = view.frame(t0, &mut rng).unwrap();
    assert_eq!(frame.headline, "ABOUT_MODULE.EXE");
    assert!(frame.headline_done);
    assert_eq!(view.reveal_total(), content::about_sections().len());
}

#[test]
fn views_follow_single_open_signal() {
    let t0 = Instant::now();
    let mut views = OverlayViews::default();
    assert!(views.open_view().is_none());

    views.sync(Some(OverlayKind::Contact), t0);
    assert_eq!(views.open_view().map(|v| v.kind()), Some(OverlayKind::Contact));

    views.sync(Some(OverlayKind::About), t0);
    let open: Vec<_> = OverlayKind::ALL
        .into_iter()
        .filter(|k| views.get(*k).is_open())
        .collect();
    assert_eq!(open, vec![OverlayKind::About]);

    views.sync(None, t0);
    assert!(views.open_view().is_none());
}
