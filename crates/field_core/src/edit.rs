//! Edit reconstruction.
//!
//! A native input notification only tells us *what kind* of edit happened
//! (an `inputType` tag such as `insertText` or `deleteContentBackward`) and,
//! for insertions, the inserted `data`. Which characters were affected is not
//! reported, so the caller hands in the selection it captured before the edit
//! and this module turns the three into one primitive [`EditOperation`].

use crate::selection::SelectionRange;
use crate::text::{char_len, splice_chars};

/// Closed vocabulary of native input-type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Any `insert*` tag: typing, paste, drop, autocorrect replacement, IME commit.
    Insert,
    /// `deleteContentBackward` (backspace).
    DeleteBackward,
    /// `deleteContentForward` (delete key).
    DeleteForward,
    /// `deleteByCut`.
    DeleteByCut,
    /// Any other `delete*` tag (word/line deletes, drag, ...).
    DeleteOther,
    /// Missing tag, or a tag outside the insert/delete families (history, formatting).
    Unrecognized,
}

impl InputKind {
    /// Classify a raw `inputType` tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_core::InputKind;
    ///
    /// assert_eq!(InputKind::parse(Some("insertFromPaste")), InputKind::Insert);
    /// assert_eq!(InputKind::parse(Some("deleteWordBackward")), InputKind::DeleteOther);
    /// assert_eq!(InputKind::parse(None), InputKind::Unrecognized);
    /// ```
    pub fn parse(tag: Option<&str>) -> Self {
        let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return InputKind::Unrecognized;
        };

        match tag {
            "deleteContentBackward" => InputKind::DeleteBackward,
            "deleteContentForward" => InputKind::DeleteForward,
            "deleteByCut" => InputKind::DeleteByCut,
            t if t.starts_with("delete") => InputKind::DeleteOther,
            t if t.starts_with("insert") => InputKind::Insert,
            _ => InputKind::Unrecognized,
        }
    }

    /// Returns `true` for every member of the `delete*` family.
    #[inline]
    pub fn is_delete(self) -> bool {
        matches!(
            self,
            InputKind::DeleteBackward
                | InputKind::DeleteForward
                | InputKind::DeleteByCut
                | InputKind::DeleteOther
        )
    }
}

/// One primitive edit against a true value. Offsets are in characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOperation {
    Insert { at: usize, text: String },
    DeleteBackward { at: usize },
    DeleteForward { at: usize },
    DeleteRange { start: usize, end: usize },
    ReplaceRange { start: usize, end: usize, text: String },
}

/// Result of applying an [`EditOperation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// The new true value.
    pub value: String,
    /// Caret offset after the edit.
    pub caret: usize,
}

impl EditOutcome {
    /// The collapsed selection to commit and restore.
    #[inline]
    pub fn selection(&self) -> SelectionRange {
        SelectionRange::collapsed(self.caret)
    }
}

impl EditOperation {
    /// Rebuild the edit a native notification stands for.
    ///
    /// `selection` is the range captured before the edit; it is clamped to
    /// `value_len` first because the cache may be stale. `data` is the
    /// inserted text (absent for deletions).
    ///
    /// An active selection is always the deleted span for any `delete*` tag.
    /// Unrecognized tags never touch the buffer: they become a zero-length
    /// deletion at the selection start.
    pub fn reconstruct(
        kind: InputKind,
        data: Option<&str>,
        selection: SelectionRange,
        value_len: usize,
    ) -> Self {
        let SelectionRange { start, end } = selection.clamp_to(value_len);

        if kind.is_delete() {
            if start != end {
                return EditOperation::DeleteRange { start, end };
            }
            return match kind {
                InputKind::DeleteBackward | InputKind::DeleteByCut => {
                    EditOperation::DeleteBackward { at: start }
                }
                InputKind::DeleteForward => EditOperation::DeleteForward { at: start },
                _ => EditOperation::DeleteRange { start, end: start },
            };
        }

        if kind == InputKind::Unrecognized {
            return EditOperation::DeleteRange { start, end: start };
        }

        let text = data.unwrap_or_default().to_string();
        if start == end {
            EditOperation::Insert { at: start, text }
        } else {
            EditOperation::ReplaceRange { start, end, text }
        }
    }

    /// Apply the edit to `value`.
    ///
    /// Offsets are clamped, so deleting backward at 0 or forward at the end
    /// is an empty deletion rather than an error.
    pub fn apply(&self, value: &str) -> EditOutcome {
        let len = char_len(value);

        let (start, end, text, caret) = match self {
            EditOperation::Insert { at, text } => {
                let at = (*at).min(len);
                (at, at, text.as_str(), at + char_len(text))
            }
            EditOperation::ReplaceRange { start, end, text } => {
                let range = SelectionRange::new(*start, *end).clamp_to(len);
                (range.start, range.end, text.as_str(), range.start + char_len(text))
            }
            EditOperation::DeleteRange { start, end } => {
                let range = SelectionRange::new(*start, *end).clamp_to(len);
                (range.start, range.end, "", range.start)
            }
            EditOperation::DeleteBackward { at } => {
                let at = (*at).min(len);
                let from = at.saturating_sub(1);
                (from, at, "", from)
            }
            EditOperation::DeleteForward { at } => {
                let at = (*at).min(len);
                (at, (at + 1).min(len), "", at)
            }
        };

        EditOutcome {
            value: splice_chars(value, start, end, text),
            caret,
        }
    }

    /// Short name for logs and traces.
    pub fn name(&self) -> &'static str {
        match self {
            EditOperation::Insert { .. } => "insert",
            EditOperation::DeleteBackward { .. } => "delete-backward",
            EditOperation::DeleteForward { .. } => "delete-forward",
            EditOperation::DeleteRange { .. } => "delete-range",
            EditOperation::ReplaceRange { .. } => "replace-range",
        }
    }
}
