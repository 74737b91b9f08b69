use super::{entry, find_section, ContentSection, GridEntry, SectionBody};

static DRIVES: [&str; 5] = [
    "MISSION: Become a world-class software engineer who automates the mundane",
    "PHILOSOPHY: Build fast, break things, learn faster",
    "APPROACH: Turn everyday frustrations into automation opportunities",
    "GOAL: Let code handle the noise so humans can focus on what they love",
    "INSPIRATION: Brilliant minds who showed me what's possible when you stop playing it safe",
];

static BEYOND_CODE: [GridEntry; 6] = [
    entry("SPORTS", "Soccer player (school & state level), marathon runner, gym enthusiast"),
    entry("MUSIC", "Guitar learner, indie rock devotee, The Strokes on repeat"),
    entry("ORIGIN", "Chicago-born, India-raised, Arizona-based, world-curious"),
    entry("FUN_FACT", "Built a Raspberry Pi scraper for Postmates promo codes at 3 AM"),
    entry("HACKATHONS", "Too many to count - building solutions to daily annoyances"),
    entry("COFFEE_STATUS", "Critical dependency levels"),
];

static ABOUT: [ContentSection; 3] = [
    ContentSection {
        id: "who_i_am",
        title: "WHO_I_AM.EXE",
        body: SectionBody::Text(
            "I'm Surya Sundar, a Software Engineer from Chicago → India → Phoenix, currently pursuing my MS in Software Engineering at ASU. Started in biology, fell in love with code when I realized a few lines could solve any problem. The transition wasn't easy, but every challenge made me hungrier. I believe in writing code that solves problems so people can focus on what truly matters.",
        ),
    },
    ContentSection {
        id: "what_drives_me",
        title: "WHAT_DRIVES_ME.LOG",
        body: SectionBody::List(&DRIVES),
    },
    ContentSection {
        id: "beyond_code",
        title: "LIFE_BEYOND_TERMINAL",
        body: SectionBody::Grid(&BEYOND_CODE),
    },
];

pub fn about_sections() -> &'static [ContentSection] {
    &ABOUT
}

pub fn about_section(id: &str) -> Option<&'static ContentSection> {
    find_section(&ABOUT, id)
}
