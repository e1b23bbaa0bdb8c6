//! Seams between the editing core and its host.
//!
//! - [`FieldStore`] abstracts the value store so host code can be tested
//!   against alternative stores.
//! - [`SelectionSurface`] is the minimal capability interface of the host's
//!   text-entry widget. The core only reads and writes the surface through it.

use crate::edit::{EditOutcome, InputKind};
use crate::id::FieldId;
use crate::selection::SelectionRange;

/// Store interface used by the host's password field.
pub trait FieldStore {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Ensure an entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: FieldId, initial: String);

    /// Reconcile a controlled value. Returns `true` if the field was reset.
    fn sync_external(&mut self, id: FieldId, external: Option<&str>) -> bool;

    /// Forget a field.
    fn remove(&mut self, id: FieldId) -> bool;

    // =========================================================================
    // Editing
    // =========================================================================

    /// Cache the pre-edit selection.
    fn capture_selection(&mut self, id: FieldId, range: SelectionRange);

    /// Apply a native input notification against the cached selection.
    fn apply_input(&mut self, id: FieldId, kind: InputKind, data: Option<&str>) -> EditOutcome;

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    /// The true value.
    fn get(&self, id: FieldId) -> Option<&str>;

    /// The masked projection.
    fn masked(&self, id: FieldId) -> Option<&str>;

    /// The cached selection.
    fn selection(&self, id: FieldId) -> Option<SelectionRange>;

    /// Monotonic revision counter for the value.
    fn value_revision(&self, id: FieldId) -> u64;
}

/// The host's text-entry widget, seen as an external device.
///
/// `set_selection` may not take effect until the surface has repainted the
/// text it was last given, so callers defer it to the next frame.
pub trait SelectionSurface {
    /// Current caret or selection.
    fn selection(&self) -> SelectionRange;

    /// Move the caret or selection.
    fn set_selection(&mut self, range: SelectionRange);

    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

// =============================================================================
// Implementation for MaskedValueStore
// =============================================================================

impl FieldStore for crate::store::MaskedValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: FieldId, initial: String) {
        crate::store::MaskedValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn sync_external(&mut self, id: FieldId, external: Option<&str>) -> bool {
        crate::store::MaskedValueStore::sync_external(self, id, external)
    }

    #[inline]
    fn remove(&mut self, id: FieldId) -> bool {
        crate::store::MaskedValueStore::remove(self, id)
    }

    #[inline]
    fn capture_selection(&mut self, id: FieldId, range: SelectionRange) {
        crate::store::MaskedValueStore::capture_selection(self, id, range)
    }

    #[inline]
    fn apply_input(&mut self, id: FieldId, kind: InputKind, data: Option<&str>) -> EditOutcome {
        crate::store::MaskedValueStore::apply_input(self, id, kind, data)
    }

    #[inline]
    fn get(&self, id: FieldId) -> Option<&str> {
        crate::store::MaskedValueStore::get(self, id)
    }

    #[inline]
    fn masked(&self, id: FieldId) -> Option<&str> {
        crate::store::MaskedValueStore::masked(self, id)
    }

    #[inline]
    fn selection(&self, id: FieldId) -> Option<SelectionRange> {
        crate::store::MaskedValueStore::selection(self, id)
    }

    #[inline]
    fn value_revision(&self, id: FieldId) -> u64 {
        crate::store::MaskedValueStore::value_revision(self, id)
    }
}
