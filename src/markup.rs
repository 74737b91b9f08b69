// HTML string builders for the navigation bar and the content overlays.
//
// Pure functions over the core content tables so they can be tested on the
// host. Every piece of table text goes through [`escape_html`].

use folio_core::content::{self, ContentSection, ExperienceItem, GridEntry, ProjectItem, SectionBody};
use folio_core::{NavItem, OverlayKind};
use std::fmt::Write;

pub const HEADLINE_ID: &str = "overlay-headline";
pub const ACTION_ATTR: &str = "data-action";
pub const SECTION_ATTR: &str = "data-section";
pub const REVEAL_ATTR: &str = "data-reveal";
pub const ACTIVE_CLASS: &str = "active";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[inline]
pub fn rgb_css(rgb: [f32; 3]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({},{},{})", c(rgb[0]), c(rgb[1]), c(rgb[2]))
}

pub fn nav_html(items: &[NavItem]) -> String {
    let mut html = String::new();
    for item in items {
        let class = if item.active {
            format!("nav-item {}", ACTIVE_CLASS)
        } else {
            "nav-item".to_string()
        };
        let style = if item.active {
            format!(" style=\"color:{}\"", rgb_css(item.accent_rgb))
        } else {
            String::new()
        };
        _ = write!(
            html,
            "<button class=\"{}\" {}=\"{}\"{}>{}</button>",
            class,
            SECTION_ATTR,
            item.section.index(),
            style,
            escape_html(item.label)
        );
    }
    html
}

fn action_button(action: &str, label: &str, enabled: bool) -> String {
    format!(
        "<button class=\"overlay-{}\" {}=\"{}\"{}>{}</button>",
        action,
        ACTION_ATTR,
        action,
        if enabled { "" } else { " disabled" },
        label
    )
}

fn reveal_open(html: &mut String, tag: &str, i: usize) {
    _ = write!(html, "<{} class=\"reveal\" {}=\"{}\">", tag, REVEAL_ATTR, i);
}

fn grid_html(html: &mut String, grid: &[GridEntry]) {
    html.push_str("<dl class=\"grid\">");
    for e in grid {
        let value = match e.link {
            Some(href) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape_html(href),
                escape_html(e.value)
            ),
            None => escape_html(e.value),
        };
        _ = write!(html, "<dt>{}</dt><dd>{}</dd>", escape_html(e.label), value);
    }
    html.push_str("</dl>");
}

fn list_html(html: &mut String, class: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    _ = write!(html, "<ul class=\"{}\">", class);
    for item in items {
        _ = write!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul>");
}

fn sections_html(html: &mut String, sections: &[ContentSection]) {
    for (i, s) in sections.iter().enumerate() {
        reveal_open(html, "section", i);
        _ = write!(html, "<h3>{}</h3>", escape_html(s.title));
        match s.body {
            SectionBody::Text(text) => {
                _ = write!(html, "<p>{}</p>", escape_html(text));
            }
            SectionBody::List(items) => list_html(html, "list", items),
            SectionBody::Grid(grid) => grid_html(html, grid),
        }
        html.push_str("</section>");
    }
}

fn description_html(html: &mut String, lines: &[&str]) {
    html.push_str("<ul class=\"description\">");
    for (i, line) in lines.iter().enumerate() {
        reveal_open(html, "li", i);
        html.push_str(&escape_html(line));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
}

fn experience_html(html: &mut String, e: &ExperienceItem) {
    _ = write!(
        html,
        "<p class=\"meta\">{} &middot; {} &middot; {} &middot; {}</p>",
        escape_html(e.role),
        escape_html(e.location),
        escape_html(e.duration),
        escape_html(e.kind)
    );
    description_html(html, e.description);
    list_html(html, "chips", e.technologies);
    list_html(html, "metrics", e.metrics);
}

fn project_html(html: &mut String, p: &ProjectItem) {
    _ = write!(
        html,
        "<p class=\"tagline\">{}</p><p class=\"meta\">{} &middot; {}</p>",
        escape_html(p.tagline),
        escape_html(p.duration),
        escape_html(p.kind)
    );
    description_html(html, p.description);
    list_html(html, "chips", p.technologies);
    list_html(html, "features", p.features);
    list_html(html, "metrics", p.metrics);
    if !p.links.is_empty() {
        html.push_str("<p class=\"links\">");
        for (label, href) in [("GitHub", p.links.github), ("Demo", p.links.demo), ("Visit", p.links.url)] {
            if let Some(href) = href {
                _ = write!(
                    html,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    escape_html(href),
                    label
                );
            }
        }
        html.push_str("</p>");
    }
}

fn carousel_html(html: &mut String, index: usize, len: usize) {
    html.push_str("<div class=\"carousel\">");
    html.push_str(&action_button("prev", "&lt; PREV", index > 0));
    _ = write!(html, "<span class=\"counter\">{:02} / {:02}</span>", index + 1, len);
    html.push_str(&action_button("next", "NEXT &gt;", index + 1 < len));
    html.push_str("</div>");
}

/// Full overlay markup for `kind` showing carousel item `index`.
///
/// The headline element starts empty; the frame loop fills it in.
pub fn overlay_html(kind: OverlayKind, index: usize) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        "<div class=\"overlay-backdrop\" {}=\"close\"></div><div class=\"overlay-panel overlay-{}\">",
        ACTION_ATTR,
        kind.section().label().to_lowercase()
    );
    _ = write!(
        html,
        "<header><span class=\"module\">{}</span>{}</header>",
        kind.module_name(),
        action_button("close", "&times;", true)
    );
    _ = write!(html, "<h2 id=\"{}\"></h2>", HEADLINE_ID);
    html.push_str("<div class=\"overlay-body\">");
    match kind {
        OverlayKind::About => sections_html(&mut html, content::about_sections()),
        OverlayKind::Contact => sections_html(&mut html, content::contact_sections()),
        OverlayKind::Experience => {
            let items = content::experiences();
            if let Some(e) = items.get(index) {
                experience_html(&mut html, e);
            }
            carousel_html(&mut html, index, items.len());
        }
        OverlayKind::Projects => {
            let items = content::projects();
            if let Some(p) = items.get(index) {
                project_html(&mut html, p);
            }
            carousel_html(&mut html, index, items.len());
        }
    }
    html.push_str("</div>");
    html.push_str(&action_button("return", "RETURN_TO_SYSTEM", true));
    html.push_str("</div>");
    html
}
