//! Static content tables rendered by the overlays. Read-only, loaded at
//! module initialization, indexed by position or id.

pub mod about;
pub mod contact;
pub mod experience;
pub mod projects;

pub use about::{about_section, about_sections};
pub use contact::{contact_section, contact_sections};
pub use experience::{experience, experiences, ExperienceItem};
pub use projects::{project, projects, ProjectItem, ProjectLinks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

/// Shape of one section record: prose, bullet list or label/value grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Text(&'static str),
    List(&'static [&'static str]),
    Grid(&'static [GridEntry]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentSection {
    pub id: &'static str,
    pub title: &'static str,
    pub body: SectionBody,
}

pub(crate) const fn entry(label: &'static str, value: &'static str) -> GridEntry {
    GridEntry {
        label,
        value,
        link: None,
    }
}

pub(crate) const fn linked(label: &'static str, value: &'static str, link: &'static str) -> GridEntry {
    GridEntry {
        label,
        value,
        link: Some(link),
    }
}

#[inline]
pub(crate) fn find_section(table: &'static [ContentSection], id: &str) -> Option<&'static ContentSection> {
    table.iter().find(|s| s.id == id)
}
