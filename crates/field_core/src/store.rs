//! Central store for masked field values and selections.
//!
//! The store is UI-agnostic: it never reads from or writes to a rendering
//! surface. Hosts capture selections from their surface, hand native input
//! notifications to [`MaskedValueStore::apply_input`], and render
//! [`MaskedValueStore::masked`] back.

use crate::edit::{EditOperation, EditOutcome, InputKind};
use crate::id::FieldId;
use crate::mask::DEFAULT_MASK_GLYPH;
use crate::selection::SelectionRange;
use crate::state::FieldState;
use crate::text::{char_len, filter_single_line};
use std::borrow::Cow;
use std::collections::HashMap;

/// Behaviour shared by every field in a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Glyph rendered for every character of a true value.
    pub mask_glyph: char,
    /// Strip CR/LF from inserted data.
    pub single_line: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            mask_glyph: DEFAULT_MASK_GLYPH,
            single_line: false,
        }
    }
}

/// Store of masked field state, keyed by [`FieldId`].
///
/// A page typically holds one store for all of its password fields
/// (e.g. "password" and "confirm password").
///
/// # Example
///
/// ```
/// use field_core::{FieldId, InputKind, MaskedValueStore, SelectionRange};
///
/// let mut store = MaskedValueStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_initial(id, "hello world".to_string());
/// store.capture_selection(id, SelectionRange::new(0, 5));
/// store.apply_input(id, InputKind::Insert, Some("HI"));
///
/// assert_eq!(store.get(id), Some("HI world"));
/// assert_eq!(store.selection(id), Some(SelectionRange::collapsed(2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskedValueStore {
    fields: HashMap<FieldId, FieldState>,
    options: StoreOptions,
}

impl MaskedValueStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            fields: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// The true value of this field, if any.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.value.as_str())
    }

    /// The masked projection of this field's value, if any.
    pub fn masked(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.masked.as_str())
    }

    /// The cached selection of this field, if any.
    pub fn selection(&self, id: FieldId) -> Option<SelectionRange> {
        self.fields.get(&id).map(|s| s.selection)
    }

    /// Monotonic revision counter for this field's value.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Ensure an entry exists; if missing, inserts `initial` with the caret at its end.
    pub fn ensure_initial(&mut self, id: FieldId, initial: String) {
        let glyph = self.options.mask_glyph;
        self.fields
            .entry(id)
            .or_insert_with(|| FieldState::new(initial, glyph));
    }

    /// Overwrite the value, as a host-driven reset.
    ///
    /// The caret moves to the end and the previous selection is dropped.
    pub fn set(&mut self, id: FieldId, value: String) {
        let glyph = self.options.mask_glyph;
        let st = self
            .fields
            .entry(id)
            .or_insert_with(|| FieldState::new(String::new(), glyph));
        let end = SelectionRange::collapsed(char_len(&value));
        st.commit(value, end, glyph);
    }

    /// Reconcile a controlled value pushed by the host.
    ///
    /// Only a value that differs from the last one seen is considered, and it
    /// only resets the field when it also differs from the current true value
    /// (a host echoing back what we reported is not a reset). `None` switches
    /// the field to uncontrolled.
    ///
    /// Returns `true` if the field was reset.
    pub fn sync_external(&mut self, id: FieldId, external: Option<&str>) -> bool {
        let glyph = self.options.mask_glyph;
        let st = self
            .fields
            .entry(id)
            .or_insert_with(|| FieldState::new(String::new(), glyph));

        let Some(external) = external else {
            st.last_external = None;
            return false;
        };
        if st.last_external.as_deref() == Some(external) {
            return false;
        }
        st.last_external = Some(external.to_string());

        if st.value == external {
            return false;
        }

        log::debug!(
            target: "field.sync",
            "{id}: external override, len {} -> {}",
            char_len(&st.value),
            char_len(external)
        );
        let end = SelectionRange::collapsed(char_len(external));
        st.commit(external.to_string(), end, glyph);
        true
    }

    /// Cache the surface's selection ahead of the next edit.
    ///
    /// The range is clamped to the current value.
    pub fn capture_selection(&mut self, id: FieldId, range: SelectionRange) {
        if let Some(st) = self.fields.get_mut(&id) {
            st.selection = range.clamp_to(char_len(&st.value));
        }
    }

    /// Apply a native input notification against the cached selection.
    ///
    /// Commits the new value, its mask and the collapsed caret, and returns
    /// the outcome so the host can forward the true value and restore the caret.
    pub fn apply_input(&mut self, id: FieldId, kind: InputKind, data: Option<&str>) -> EditOutcome {
        let StoreOptions {
            mask_glyph,
            single_line,
        } = self.options;
        let st = self
            .fields
            .entry(id)
            .or_insert_with(|| FieldState::new(String::new(), mask_glyph));

        let data: Option<Cow<'_, str>> = data.map(|d| {
            if single_line {
                filter_single_line(d)
            } else {
                Cow::Borrowed(d)
            }
        });

        let op = EditOperation::reconstruct(kind, data.as_deref(), st.selection, char_len(&st.value));
        let outcome = op.apply(&st.value);

        log::trace!(
            target: "field.edit",
            "{id}: {} at {} -> len {} caret {}",
            op.name(),
            st.selection,
            char_len(&outcome.value),
            outcome.caret
        );

        st.commit(outcome.value.clone(), outcome.selection(), mask_glyph);
        outcome
    }

    /// Forget a field, e.g. when it unmounts.
    pub fn remove(&mut self, id: FieldId) -> bool {
        self.fields.remove(&id).is_some()
    }

    /// Clear all stored field state.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(value: &str) -> (MaskedValueStore, FieldId) {
        let mut store = MaskedValueStore::new();
        let id = FieldId::from_raw(1);
        store.ensure_initial(id, value.to_string());
        (store, id)
    }

    #[test]
    fn initial_value_is_masked_with_caret_at_end() {
        let (store, id) = store_with("abc");
        assert_eq!(store.masked(id), Some("***"));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(3)));
        assert_eq!(store.value_revision(id), 0);
    }

    #[test]
    fn ensure_initial_does_not_overwrite() {
        let (mut store, id) = store_with("abc");
        store.ensure_initial(id, "zzz".to_string());
        assert_eq!(store.get(id), Some("abc"));
    }

    #[test]
    fn typing_then_backspace_round_trips_masked_length() {
        let (mut store, id) = store_with("abc");
        store.apply_input(id, InputKind::Insert, Some("d"));
        assert_eq!(store.get(id), Some("abcd"));
        assert_eq!(store.masked(id), Some("****"));

        store.apply_input(id, InputKind::DeleteBackward, None);
        assert_eq!(store.get(id), Some("abc"));
        assert_eq!(store.masked(id), Some("***"));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(3)));
        assert_eq!(store.value_revision(id), 2);
    }

    #[test]
    fn forward_delete_at_start() {
        let (mut store, id) = store_with("abcd");
        store.capture_selection(id, SelectionRange::collapsed(0));
        store.apply_input(id, InputKind::DeleteForward, None);
        assert_eq!(store.get(id), Some("bcd"));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(0)));
    }

    #[test]
    fn selection_delete() {
        let (mut store, id) = store_with("password");
        store.capture_selection(id, SelectionRange::new(2, 6));
        store.apply_input(id, InputKind::DeleteForward, None);
        assert_eq!(store.get(id), Some("pard"));
        assert_eq!(store.masked(id), Some("****"));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(2)));
    }

    #[test]
    fn capture_clamps_to_value() {
        let (mut store, id) = store_with("ab");
        store.capture_selection(id, SelectionRange::new(1, 40));
        assert_eq!(store.selection(id), Some(SelectionRange::new(1, 2)));
    }

    #[test]
    fn empty_deletion_does_not_bump_revision() {
        let (mut store, id) = store_with("ab");
        store.capture_selection(id, SelectionRange::collapsed(0));
        store.apply_input(id, InputKind::DeleteBackward, None);
        assert_eq!(store.get(id), Some("ab"));
        assert_eq!(store.value_revision(id), 0);
    }

    #[test]
    fn external_override_resets_value_and_caret() {
        let (mut store, id) = store_with("old");
        assert!(store.sync_external(id, Some("reset")));
        assert_eq!(store.get(id), Some("reset"));
        assert_eq!(store.masked(id), Some("*****"));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(5)));
    }

    #[test]
    fn external_echo_of_true_value_is_not_a_reset() {
        let (mut store, id) = store_with("abc");
        store.capture_selection(id, SelectionRange::collapsed(1));
        assert!(!store.sync_external(id, Some("abc")));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(1)));

        store.apply_input(id, InputKind::Insert, Some("x"));
        assert!(!store.sync_external(id, Some("axbc")));
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(2)));
    }

    #[test]
    fn unchanged_external_value_is_only_resolved_once() {
        let (mut store, id) = store_with("");
        assert!(store.sync_external(id, Some("fixed")));
        store.apply_input(id, InputKind::Insert, Some("!"));
        // Host re-renders with the same controlled value it already pushed.
        assert!(!store.sync_external(id, Some("fixed")));
        assert_eq!(store.get(id), Some("fixed!"));
    }

    #[test]
    fn single_line_option_strips_newlines_from_data() {
        let mut store = MaskedValueStore::with_options(StoreOptions {
            single_line: true,
            ..StoreOptions::default()
        });
        let id = FieldId::from_raw(2);
        store.ensure_initial(id, String::new());
        let outcome = store.apply_input(id, InputKind::Insert, Some("ab\r\ncd"));
        assert_eq!(outcome.value, "abcd");
        assert_eq!(outcome.caret, 4);
    }

    #[test]
    fn custom_glyph_is_used_for_the_projection() {
        let mut store = MaskedValueStore::with_options(StoreOptions {
            mask_glyph: '•',
            ..StoreOptions::default()
        });
        let id = FieldId::from_raw(3);
        store.set(id, "pw".to_string());
        assert_eq!(store.masked(id), Some("••"));
    }

    #[test]
    fn fields_are_independent() {
        let mut store = MaskedValueStore::new();
        let a = FieldId::from_raw(1);
        let b = FieldId::from_raw(2);
        store.ensure_initial(a, "one".to_string());
        store.ensure_initial(b, "two".to_string());
        store.apply_input(b, InputKind::Insert, Some("!"));

        assert_eq!(store.get(a), Some("one"));
        assert_eq!(store.get(b), Some("two!"));
        assert!(store.remove(a));
        assert!(!store.has(a));
        store.clear();
        assert!(!store.has(b));
    }
}
