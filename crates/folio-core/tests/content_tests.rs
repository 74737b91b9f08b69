// Static content tables used by the overlays.

use folio_core::content::*;

#[test]
fn about_and_contact_sections_are_addressable_by_id() {
    assert_eq!(about_sections().len(), 3);
    assert_eq!(contact_sections().len(), 3);
    assert!(matches!(about_section("who_i_am").map(|s| s.body), Some(SectionBody::Text(_))));
    assert!(matches!(about_section("what_drives_me").map(|s| s.body), Some(SectionBody::List(_))));
    assert!(matches!(about_section("beyond_code").map(|s| s.body), Some(SectionBody::Grid(_))));
    assert!(contact_section("contact_info").is_some());
    assert!(about_section("nope").is_none());
}

#[test]
fn contact_grid_carries_links() {
    let Some(SectionBody::Grid(grid)) = contact_section("contact_info").map(|s| s.body) else {
        panic!("contact_info should be a grid");
    };
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.iter().filter(|e| e.link.is_some()).count(), 3);
}

#[test]
fn experiences_and_projects_have_unique_ids() {
    let mut ids: Vec<_> = experiences().iter().map(|e| e.id).collect();
    ids.extend(projects().iter().map(|p| p.id));
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert_eq!(experiences().len(), 3);
    assert_eq!(projects().len(), 5);
}

#[test]
fn every_carousel_item_has_descriptive_lines() {
    for e in experiences() {
        assert!(!e.description.is_empty(), "{} has no description", e.id);
        assert!(!e.company.is_empty());
    }
    for p in projects() {
        assert!(!p.description.is_empty(), "{} has no description", p.id);
        assert!(!p.technologies.is_empty());
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(experience("quichub").map(|e| e.id), Some("quichub"));
    assert_eq!(project("capsule").map(|p| p.id), Some("capsule"));
    assert!(project("missing").is_none());
}
