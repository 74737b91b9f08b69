//! Entrance animation state for the content overlays.
//!
//! All effects are pure functions of the time since they started, so the
//! front-end only has to feed `now` each frame. Reopening an overlay resets
//! everything and replays from the beginning.

use crate::constants::*;
use crate::content;
use crate::section::OverlayKind;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

#[inline]
fn since(now: Instant, start: Instant) -> Duration {
    if now > start {
        now - start
    } else {
        Duration::ZERO
    }
}

#[inline]
fn steps(elapsed: Duration, step: Duration) -> usize {
    (elapsed.as_millis() / step.as_millis().max(1)) as usize
}

/// Reveals one character per [`TYPEWRITER_STEP`].
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    started: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, started: Instant) -> Self {
        Self {
            text: text.into(),
            started,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn visible(&self, now: Instant) -> &str {
        let n = steps(since(now, self.started), TYPEWRITER_STEP);
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn done(&self, now: Instant) -> bool {
        steps(since(now, self.started), TYPEWRITER_STEP) >= self.text.chars().count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    pub done: bool,
}

/// Decodes text left to right through random glyphs.
#[derive(Clone, Debug)]
pub struct Scramble {
    text: String,
    started: Instant,
    delay: Duration,
}

impl Scramble {
    pub fn new(text: impl Into<String>, started: Instant, delay: Duration) -> Self {
        Self {
            text: text.into(),
            started,
            delay,
        }
    }

    pub fn frame<R: Rng + ?Sized>(&self, now: Instant, rng: &mut R) -> ScrambleFrame {
        let elapsed = since(now, self.started);
        if elapsed < self.delay {
            return ScrambleFrame {
                text: String::new(),
                done: false,
            };
        }
        let iteration = steps(elapsed - self.delay, SCRAMBLE_STEP);
        let len = self.text.chars().count();
        if iteration > len * SCRAMBLE_FRAMES_PER_CHAR {
            return ScrambleFrame {
                text: self.text.clone(),
                done: true,
            };
        }
        let resolved = iteration / SCRAMBLE_FRAMES_PER_CHAR;
        let shown = (resolved + SCRAMBLE_LOOKAHEAD).min(len);
        let text = self
            .text
            .chars()
            .take(shown)
            .enumerate()
            .map(|(i, c)| {
                if c == ' ' || i < resolved {
                    c
                } else {
                    SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())] as char
                }
            })
            .collect();
        ScrambleFrame { text, done: false }
    }
}

/// Number of items visible `elapsed` after a staggered reveal began; the
/// first item shows immediately.
pub fn revealed_count(elapsed: Duration, total: usize, stagger: Duration) -> usize {
    (steps(elapsed, stagger) + 1).min(total)
}

/// Previous/next stepping through a fixed list; stops at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            return true;
        }
        false
    }

    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[derive(Clone, Debug)]
enum Headline {
    Static(&'static str),
    Typed(Typewriter),
    Scrambled(Scramble),
}

/// What the front-end should show for an overlay on a given frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayFrame {
    pub headline: String,
    pub headline_done: bool,
    pub revealed: usize,
    pub index: usize,
}

#[derive(Clone, Debug)]
pub struct OverlayView {
    kind: OverlayKind,
    opened_at: Option<Instant>,
    reveal_started: Option<Instant>,
    carousel: Carousel,
    headline: Option<Headline>,
}

impl OverlayView {
    pub fn new(kind: OverlayKind) -> Self {
        let len = match kind {
            OverlayKind::Experience => content::experiences().len(),
            OverlayKind::Projects => content::projects().len(),
            OverlayKind::About | OverlayKind::Contact => 1,
        };
        Self {
            kind,
            opened_at: None,
            reveal_started: None,
            carousel: Carousel::new(len),
            headline: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    #[inline]
    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    /// Drive the `isOpen` signal. Opening replays every entrance animation;
    /// closing drops all animation state.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        match (self.is_open(), open) {
            (false, true) => {
                self.opened_at = Some(now);
                self.carousel.reset();
                self.restart(now);
            }
            (true, false) => {
                self.opened_at = None;
                self.reveal_started = None;
                self.carousel.reset();
                self.headline = None;
            }
            _ => {}
        }
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if !self.is_open() || !self.carousel.next() {
            return false;
        }
        self.restart(now);
        true
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if !self.is_open() || !self.carousel.prev() {
            return false;
        }
        self.restart(now);
        true
    }

    fn restart(&mut self, now: Instant) {
        let i = self.carousel.index();
        self.reveal_started = Some(now);
        self.headline = Some(match self.kind {
            OverlayKind::About => Headline::Static(self.kind.module_name()),
            OverlayKind::Experience => Headline::Typed(Typewriter::new(
                content::experiences()[i].company.to_uppercase(),
                now,
            )),
            OverlayKind::Projects => Headline::Typed(Typewriter::new(
                content::projects()[i].title.to_uppercase(),
                now,
            )),
            OverlayKind::Contact => Headline::Scrambled(Scramble::new(
                "CONTACT_MODULE",
                now,
                CONTACT_HEADLINE_DELAY,
            )),
        });
    }

    /// Number of staggered items this overlay reveals.
    pub fn reveal_total(&self) -> usize {
        let i = self.carousel.index();
        match self.kind {
            OverlayKind::About => content::about_sections().len(),
            OverlayKind::Contact => content::contact_sections().len(),
            OverlayKind::Experience => content::experiences()[i].description.len(),
            OverlayKind::Projects => content::projects()[i].description.len(),
        }
    }

    /// `None` while closed.
    pub fn frame<R: Rng + ?Sized>(&self, now: Instant, rng: &mut R) -> Option<OverlayFrame> {
        let headline = self.headline.as_ref()?;
        let reveal_started = self.reveal_started?;
        let (text, done) = match headline {
            Headline::Static(s) => (s.to_string(), true),
            Headline::Typed(t) => (t.visible(now).to_string(), t.done(now)),
            Headline::Scrambled(s) => {
                let f = s.frame(now, rng);
                (f.text, f.done)
            }
        };
        Some(OverlayFrame {
            headline: text,
            headline_done: done,
            revealed: revealed_count(since(now, reveal_started), self.reveal_total(), REVEAL_STAGGER),
            index: self.carousel.index(),
        })
    }
}

/// One view per overlay kind, kept in sync with the navigation state.
#[derive(Clone, Debug)]
pub struct OverlayViews {
    views: [OverlayView; 4],
}

impl Default for OverlayViews {
    fn default() -> Self {
        Self {
            views: OverlayKind::ALL.map(OverlayView::new),
        }
    }
}

impl OverlayViews {
    fn slot(kind: OverlayKind) -> usize {
        match kind {
            OverlayKind::About => 0,
            OverlayKind::Projects => 1,
            OverlayKind::Experience => 2,
            OverlayKind::Contact => 3,
        }
    }

    pub fn get(&self, kind: OverlayKind) -> &OverlayView {
        &self.views[Self::slot(kind)]
    }

    pub fn get_mut(&mut self, kind: OverlayKind) -> &mut OverlayView {
        &mut self.views[Self::slot(kind)]
    }

    /// Feed every view its `isOpen` signal; at most one is open.
    pub fn sync(&mut self, open: Option<OverlayKind>, now: Instant) {
        for view in &mut self.views {
            let is_open = open == Some(view.kind());
            view.set_open(is_open, now);
        }
    }

    pub fn open_view(&self) -> Option<&OverlayView> {
        self.views.iter().find(|v| v.is_open())
    }
}
