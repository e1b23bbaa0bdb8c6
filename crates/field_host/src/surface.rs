//! In-memory text surface for headless hosts and tests.
//!
//! Behaves like a single-line text input. User edits change the displayed
//! text around the current selection once `beforeinput` has been reported.
//! Assigning new text programmatically moves the caret to the end, which is
//! why masked fields restore it afterwards.

use crate::event::NativeEvent;
use field_core::{EditOperation, InputKind, SelectionRange, SelectionSurface, char_len};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    selection: SelectionRange,
    selection_writes: usize,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the surface displays.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the host moved the selection programmatically.
    pub fn selection_writes(&self) -> usize {
        self.selection_writes
    }

    /// A user selection gesture (click, drag, shift+arrow).
    pub fn select(&mut self, range: SelectionRange) {
        self.selection = range.clamp_to(char_len(&self.text));
    }

    /// The `beforeinput` event a user edit fires. The surface is unchanged.
    pub fn before_input(&self, input_type: Option<&str>, data: Option<&str>) -> NativeEvent {
        NativeEvent::BeforeInput {
            input_type: input_type.map(str::to_string),
            data: data.map(str::to_string),
        }
    }

    /// Perform a user edit on the displayed text and report it as `input`.
    pub fn user_edit(&mut self, input_type: Option<&str>, data: Option<&str>) -> NativeEvent {
        let op = EditOperation::reconstruct(
            InputKind::parse(input_type),
            data,
            self.selection,
            char_len(&self.text),
        );
        let outcome = op.apply(&self.text);
        self.selection = outcome.selection();
        self.text = outcome.value;

        NativeEvent::Input {
            input_type: input_type.map(str::to_string),
            data: data.map(str::to_string),
            value: self.text.clone(),
        }
    }
}

impl SelectionSurface for TextSurface {
    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.selection_writes += 1;
        self.selection = range.clamp_to(char_len(&self.text));
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.selection = SelectionRange::collapsed(char_len(&self.text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_edit_applies_at_selection() {
        let mut surface = TextSurface::new();
        surface.set_text("***");
        surface.select(SelectionRange::collapsed(1));
        let before = surface.before_input(Some("insertText"), Some("x"));
        assert!(matches!(before, NativeEvent::BeforeInput { .. }));
        assert_eq!(surface.text(), "***");

        let input = surface.user_edit(Some("insertText"), Some("x"));
        assert_eq!(surface.text(), "*x**");
        assert_eq!(surface.selection(), SelectionRange::collapsed(2));
        assert_eq!(
            input,
            NativeEvent::Input {
                input_type: Some("insertText".to_string()),
                data: Some("x".to_string()),
                value: "*x**".to_string(),
            }
        );
    }

    #[test]
    fn programmatic_text_moves_caret_to_end() {
        let mut surface = TextSurface::new();
        surface.set_text("****");
        surface.select(SelectionRange::collapsed(1));
        // Same text: the caret is left alone.
        surface.set_text("****");
        assert_eq!(surface.selection(), SelectionRange::collapsed(1));
        surface.set_text("*****");
        assert_eq!(surface.selection(), SelectionRange::collapsed(5));
    }
}
