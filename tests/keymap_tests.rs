// Host-side tests for the keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/events/keymap.rs");
}

use folio_core::Section;
use keymap::*;

#[test]
fn digits_map_to_sections_in_bar_order() {
    for (i, key) in ["0", "1", "2", "3", "4"].iter().enumerate() {
        assert_eq!(section_for_digit(key), Section::from_index(i));
        assert_eq!(
            action_for_key(key, false),
            Section::from_index(i).map(KeyAction::Navigate)
        );
    }
    assert_eq!(section_for_digit("5"), None);
}

#[test]
fn digits_are_ignored_while_overlay_open() {
    assert_eq!(action_for_key("1", true), None);
    assert_eq!(action_for_key("0", true), None);
}

#[test]
fn escape_always_returns_to_system() {
    assert_eq!(action_for_key("Escape", false), Some(KeyAction::ReturnToSystem));
    assert_eq!(action_for_key("Escape", true), Some(KeyAction::ReturnToSystem));
}

#[test]
fn arrows_only_step_an_open_carousel() {
    assert_eq!(action_for_key("ArrowLeft", true), Some(KeyAction::CarouselPrev));
    assert_eq!(action_for_key("ArrowRight", true), Some(KeyAction::CarouselNext));
    assert_eq!(action_for_key("ArrowLeft", false), None);
    assert_eq!(action_for_key("ArrowRight", false), None);
}

#[test]
fn enter_toggles_fullscreen_and_others_are_ignored() {
    assert_eq!(action_for_key("Enter", false), Some(KeyAction::ToggleFullscreen));
    assert_eq!(action_for_key("h", false), None);
    assert_eq!(action_for_key(" ", true), None);
}
