//! Per-article hover-preview state.
//!
//! Tracks the debounce/fetch/display lifecycle independently for every
//! article link, so overlapping hover timelines on different links cannot
//! interfere. Every mouse-in starts a new interaction with a fresh
//! generation number; timer expiries and fetch completions identify
//! themselves with the generation they were started under and are
//! discarded when stale. That makes "the response raced the abort"
//! deterministic: a completion from a cancelled interaction is a no-op.

use std::collections::HashMap;

use folio_core::Slug;
use tokio::task::JoinHandle;

/// Lifecycle phase of one hovered article.
///
/// A slug is in exactly one phase at a time (or untracked entirely), so a
/// pending timer, an in-flight fetch, and a shown popover can never
/// coexist for the same link.
#[derive(Debug)]
pub(crate) enum HoverPhase {
    /// Waiting out the debounce delay.
    Debouncing(JoinHandle<()>),
    /// Popup fetch in flight.
    Fetching(JoinHandle<()>),
    /// Popover displayed with the fetched fragment.
    Shown(String),
}

impl HoverPhase {
    pub(crate) fn kind(&self) -> HoverPhaseKind {
        match self {
            Self::Debouncing(_) => HoverPhaseKind::Debouncing,
            Self::Fetching(_) => HoverPhaseKind::Fetching,
            Self::Shown(_) => HoverPhaseKind::Shown,
        }
    }

    /// Abort whatever task this phase holds.
    fn cancel(self) {
        match self {
            Self::Debouncing(handle) | Self::Fetching(handle) => handle.abort(),
            Self::Shown(_) => {}
        }
    }
}

/// Phase discriminant for dispatch decisions, logging, and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HoverPhaseKind {
    Debouncing,
    Fetching,
    Shown,
}

#[derive(Debug)]
struct HoverSlot {
    generation: u64,
    phase: HoverPhase,
}

/// All per-slug hover state, plus the interaction generation counter.
///
/// The counter is global rather than per-slug so a generation observed in
/// a completion command is unique across the whole session, even after
/// its slot has been cleared and recreated.
#[derive(Debug, Default)]
pub(crate) struct HoverSlots {
    slots: HashMap<Slug, HoverSlot>,
    next_generation: u64,
}

impl HoverSlots {
    /// Begin a new interaction for `slug`: cancel whatever was pending and
    /// hand out a fresh generation. The caller installs the first phase
    /// with [`Self::set_phase`].
    pub(crate) fn begin(&mut self, slug: &Slug) -> u64 {
        if let Some(slot) = self.slots.remove(slug) {
            slot.phase.cancel();
        }
        self.next_generation += 1;
        self.next_generation
    }

    /// Install `phase` for `slug` under `generation`, cancelling any phase
    /// it replaces.
    pub(crate) fn set_phase(&mut self, slug: &Slug, generation: u64, phase: HoverPhase) {
        let previous = self
            .slots
            .insert(slug.clone(), HoverSlot { generation, phase });
        if let Some(slot) = previous {
            slot.phase.cancel();
        }
    }

    /// True if `slug` is tracked at `generation` in phase `kind`.
    pub(crate) fn is_current(&self, slug: &Slug, generation: u64, kind: HoverPhaseKind) -> bool {
        self.slots
            .get(slug)
            .is_some_and(|slot| slot.generation == generation && slot.phase.kind() == kind)
    }

    /// Remove and cancel the state for `slug`, returning the phase kind
    /// that was active.
    pub(crate) fn clear(&mut self, slug: &Slug) -> Option<HoverPhaseKind> {
        self.slots.remove(slug).map(|slot| {
            let kind = slot.phase.kind();
            slot.phase.cancel();
            kind
        })
    }

    /// The displayed fragment for `slug`, if its popover is shown.
    pub(crate) fn shown_html(&self, slug: &Slug) -> Option<&str> {
        match self.slots.get(slug) {
            Some(HoverSlot {
                phase: HoverPhase::Shown(html),
                ..
            }) => Some(html),
            _ => None,
        }
    }

    /// The phase `slug` is currently in, if tracked.
    pub(crate) fn phase_kind(&self, slug: &Slug) -> Option<HoverPhaseKind> {
        self.slots.get(slug).map(|slot| slot.phase.kind())
    }

    /// The generation `slug` is currently tracked under, if any.
    pub(crate) fn generation(&self, slug: &Slug) -> Option<u64> {
        self.slots.get(slug).map(|slot| slot.generation)
    }
}
