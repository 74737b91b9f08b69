//! Navigation state machine tying section clicks to camera targets, orbit
//! freezing and overlay mounting.
//!
//! The delayed overlay open is modelled as a pending task stamped with the
//! generation of the transition that scheduled it. Every transition bumps the
//! generation, so a task scheduled by a superseded transition can never apply.

use crate::constants::OVERLAY_OPEN_DELAY;
use crate::section::{OverlayKind, Section};
use glam::Vec3;
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

/// The body the camera is easing toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPlanet {
    pub position: Vec3,
    pub radius: f32,
}

/// Read side of the scene used by navigation: last published body location.
pub trait BodyLocator {
    /// `None` when the section has no body or its body has not published a
    /// position yet.
    fn locate(&self, section: Section) -> Option<TargetPlanet>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no section at index {0}")]
    UnknownSection(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavOutcome {
    Home,
    Targeted {
        target: TargetPlanet,
        overlay: Option<OverlayKind>,
    },
    /// The section's body has not rendered a frame yet; no zoom, no overlay.
    NotYetPublished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingOpen {
    pub generation: u64,
    pub overlay: OverlayKind,
    pub due: Instant,
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    active: Section,
    target: Option<TargetPlanet>,
    open_overlay: Option<OverlayKind>,
    pending: Option<PendingOpen>,
    generation: u64,
    open_delay: Duration,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::with_open_delay(OVERLAY_OPEN_DELAY)
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open_delay(open_delay: Duration) -> Self {
        Self {
            active: Section::Home,
            target: None,
            open_overlay: None,
            pending: None,
            generation: 0,
            open_delay,
        }
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    #[inline]
    pub fn target(&self) -> Option<TargetPlanet> {
        self.target
    }

    #[inline]
    pub fn open_overlay(&self) -> Option<OverlayKind> {
        self.open_overlay
    }

    #[inline]
    pub fn is_overlay_open(&self) -> bool {
        self.open_overlay.is_some()
    }

    /// Orbits are frozen exactly while an overlay is open.
    #[inline]
    pub fn freeze_orbits(&self) -> bool {
        self.open_overlay.is_some()
    }

    #[inline]
    pub fn pending(&self) -> Option<PendingOpen> {
        self.pending
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn begin_transition(&mut self, section: Section) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.active = section;
        self.open_overlay = None;
    }

    pub fn navigate_index<L: BodyLocator + ?Sized>(
        &mut self,
        index: usize,
        locator: &L,
        now: Instant,
    ) -> Result<NavOutcome, NavigationError> {
        let section = Section::from_index(index).ok_or(NavigationError::UnknownSection(index))?;
        Ok(self.navigate(section, locator, now))
    }

    pub fn navigate<L: BodyLocator + ?Sized>(
        &mut self,
        section: Section,
        locator: &L,
        now: Instant,
    ) -> NavOutcome {
        self.begin_transition(section);
        if section.is_home() {
            self.target = None;
            log::info!("[nav] -> Home");
            return NavOutcome::Home;
        }
        let Some(target) = locator.locate(section) else {
            self.target = None;
            log::debug!("[nav] -> {}: body not published yet, zoom skipped", section.label());
            return NavOutcome::NotYetPublished;
        };
        self.target = Some(target);
        let overlay = section.overlay();
        if let Some(overlay) = overlay {
            self.pending = Some(PendingOpen {
                generation: self.generation,
                overlay,
                due: now + self.open_delay,
            });
        }
        log::info!(
            "[nav] -> {} target=({:.2},{:.2},{:.2}) r={:.2}",
            section.label(),
            target.position.x,
            target.position.y,
            target.position.z,
            target.radius
        );
        NavOutcome::Targeted { target, overlay }
    }

    /// Leave any overlay and return to the default solar-system view.
    pub fn return_to_system(&mut self) {
        self.begin_transition(Section::Home);
        self.target = None;
        log::info!("[nav] return to system");
    }

    /// Apply the pending overlay open once it is due. Returns the overlay
    /// opened by this call.
    pub fn poll(&mut self, now: Instant) -> Option<OverlayKind> {
        let pending = self.pending?;
        if pending.generation != self.generation {
            self.pending = None;
            return None;
        }
        if now < pending.due {
            return None;
        }
        self.pending = None;
        self.open_overlay = Some(pending.overlay);
        log::info!("[nav] overlay open: {:?}", pending.overlay);
        Some(pending.overlay)
    }
}
