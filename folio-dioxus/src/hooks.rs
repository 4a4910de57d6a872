//! Custom Dioxus hooks for folio-dioxus components.

use dioxus::prelude::*;

use crate::state::ReaderSnapshot;

/// Read the current reader snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> ReaderSnapshot {
    use_context::<Signal<ReaderSnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after sending commands).
///
/// Use this in components that need to update the snapshot after sending commands.
#[must_use]
pub fn use_snapshot_signal() -> Signal<ReaderSnapshot> {
    use_context::<Signal<ReaderSnapshot>>()
}
