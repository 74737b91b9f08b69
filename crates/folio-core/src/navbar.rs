use crate::navigation::NavigationState;
use crate::section::Section;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
    pub accent_rgb: [f32; 3],
}

/// Presentational dispatcher for the section bar.
pub struct NavBar;

impl NavBar {
    pub fn items(nav: &NavigationState) -> SmallVec<[NavItem; Section::COUNT]> {
        Section::ALL
            .iter()
            .map(|&section| NavItem {
                section,
                label: section.label(),
                active: nav.active() == section,
                accent_rgb: section.accent_rgb(),
            })
            .collect()
    }

    /// The bar unmounts while any overlay is open.
    #[inline]
    pub fn visible(nav: &NavigationState) -> bool {
        !nav.is_overlay_open()
    }

    /// Section to navigate to when an item is activated; `None` for the
    /// already-active item or while the bar is hidden.
    ///
    /// An active non-Home section with no target (its body had not published
    /// a position yet) can be activated again to retry the zoom.
    pub fn activate(nav: &NavigationState, section: Section) -> Option<Section> {
        if !Self::visible(nav) {
            return None;
        }
        let settled = section.is_home() || nav.target().is_some();
        if nav.active() == section && settled {
            return None;
        }
        Some(section)
    }
}
