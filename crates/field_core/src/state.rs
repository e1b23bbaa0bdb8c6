//! Per-field state held by the [`MaskedValueStore`](crate::MaskedValueStore).

use crate::mask::mask_with;
use crate::selection::SelectionRange;
use crate::text::char_len;

/// State for a single masked field.
#[derive(Clone, Debug)]
pub(crate) struct FieldState {
    /// The real value. Never rendered.
    pub value: String,

    /// `mask_with(value, glyph)`, rebuilt on every value change.
    pub masked: String,

    /// Selection captured from the surface before the next edit.
    pub selection: SelectionRange,

    /// Monotonic revision counter, incremented on any value change.
    pub value_rev: u64,

    /// Last controlled value seen from the host, if the field is controlled.
    pub last_external: Option<String>,
}

impl FieldState {
    pub fn new(value: String, glyph: char) -> Self {
        let masked = mask_with(&value, glyph);
        let selection = SelectionRange::collapsed(char_len(&value));
        Self {
            value,
            masked,
            selection,
            value_rev: 0,
            last_external: None,
        }
    }

    /// Replace the value and re-derive the mask in the same step.
    pub fn commit(&mut self, value: String, selection: SelectionRange, glyph: char) {
        if value != self.value {
            self.value_rev = self.value_rev.wrapping_add(1);
        }
        self.masked = mask_with(&value, glyph);
        self.value = value;
        self.selection = selection.clamp_to(char_len(&self.value));
    }
}
