use super::{entry, find_section, linked, ContentSection, GridEntry, SectionBody};

static CHANNELS: [GridEntry; 6] = [
    linked("EMAIL", "suryasundar2002@gmail.com", "mailto:suryasundar2002@gmail.com"),
    linked("PHONE", "+1 (602) 723-2052", "tel:+16027232052"),
    linked(
        "LINKEDIN",
        "linkedin.com/in/suryasundar19",
        "https://www.linkedin.com/in/suryasundar19/",
    ),
    entry("LOCATION", "Phoenix, Arizona, USA"),
    entry("TIMEZONE", "MST (UTC-7)"),
    entry("STATUS", "Open to opportunities"),
];

static CONTACT: [ContentSection; 3] = [
    ContentSection {
        id: "get_in_touch",
        title: "GET_IN_TOUCH.EXE",
        body: SectionBody::Text(
            "Ready to collaborate, discuss opportunities, or just chat about code? I'm always open to connecting with fellow developers, potential employers, or anyone who shares a passion for building solutions that matter. Drop me a line through any of the channels below.",
        ),
    },
    ContentSection {
        id: "contact_info",
        title: "CONTACT_CHANNELS.DAT",
        body: SectionBody::Grid(&CHANNELS),
    },
    ContentSection {
        id: "lets_build",
        title: "LETS_BUILD_SOMETHING.LOG",
        body: SectionBody::Text(
            "Whether you're looking for a software engineer who can turn ideas into reality, a collaborator for your next hackathon project, or someone to automate those daily annoyances that slow you down—I'm your person. Let's build something that matters together.",
        ),
    },
];

pub fn contact_sections() -> &'static [ContentSection] {
    &CONTACT
}

pub fn contact_section(id: &str) -> Option<&'static ContentSection> {
    find_section(&CONTACT, id)
}
