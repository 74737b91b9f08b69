//! Navigable sections of the site and the overlay bound to each.

/// One entry of the navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

/// Full-screen content panel bound 1:1 to a non-Home section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Accent used by the navigation bar highlight.
    pub fn accent_rgb(self) -> [f32; 3] {
        match self {
            Section::Home => [0.98, 0.80, 0.08],       // yellow
            Section::About => [0.13, 0.83, 0.93],      // cyan
            Section::Projects => [0.29, 0.87, 0.50],   // green
            Section::Experience => [0.98, 0.57, 0.24], // orange
            Section::Contact => [0.75, 0.52, 0.99],    // purple
        }
    }

    pub fn overlay(self) -> Option<OverlayKind> {
        match self {
            Section::Home => None,
            Section::About => Some(OverlayKind::About),
            Section::Projects => Some(OverlayKind::Projects),
            Section::Experience => Some(OverlayKind::Experience),
            Section::Contact => Some(OverlayKind::Contact),
        }
    }

    #[inline]
    pub fn is_home(self) -> bool {
        self == Section::Home
    }
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::About,
        OverlayKind::Projects,
        OverlayKind::Experience,
        OverlayKind::Contact,
    ];

    pub fn section(self) -> Section {
        match self {
            OverlayKind::About => Section::About,
            OverlayKind::Projects => Section::Projects,
            OverlayKind::Experience => Section::Experience,
            OverlayKind::Contact => Section::Contact,
        }
    }

    /// Terminal-style module name shown in the overlay header bar.
    pub fn module_name(self) -> &'static str {
        match self {
            OverlayKind::About => "ABOUT_MODULE.EXE",
            OverlayKind::Projects => "PROJECTS_MODULE.EXE",
            OverlayKind::Experience => "EXPERIENCE_MODULE.EXE",
            OverlayKind::Contact => "CONTACT_MODULE.EXE",
        }
    }
}
