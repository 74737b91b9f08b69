use folio_core::Section;

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Section),
    ReturnToSystem,
    CarouselPrev,
    CarouselNext,
    ToggleFullscreen,
}

#[inline]
pub fn section_for_digit(key: &str) -> Option<Section> {
    match key {
        "0" => Some(Section::Home),
        "1" => Some(Section::About),
        "2" => Some(Section::Projects),
        "3" => Some(Section::Experience),
        "4" => Some(Section::Contact),
        _ => None,
    }
}

/// Map a `KeyboardEvent.key` to an action given whether an overlay is open.
///
/// Section digits are ignored while an overlay covers the navigation bar;
/// carousel arrows only apply while one is open.
pub fn action_for_key(key: &str, overlay_open: bool) -> Option<KeyAction> {
    if let Some(section) = section_for_digit(key) {
        return (!overlay_open).then_some(KeyAction::Navigate(section));
    }
    match key {
        "Escape" => Some(KeyAction::ReturnToSystem),
        "ArrowLeft" if overlay_open => Some(KeyAction::CarouselPrev),
        "ArrowRight" if overlay_open => Some(KeyAction::CarouselNext),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}
