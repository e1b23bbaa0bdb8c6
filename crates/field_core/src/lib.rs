//! # field_core
//!
//! UI-agnostic editing layer for masked (password) text fields.
//!
//! This crate provides the building blocks the host layer composes into a
//! password field:
//! - [`FieldId`]: An opaque identifier for a field
//! - [`MaskedValueStore`]: Central store for true values, masked projections and selections
//! - [`SelectionRange`]: A caret or selection as character offsets
//! - [`EditOperation`]: One primitive edit reconstructed from a native input notification
//! - [`mask`] / [`mask_with`]: The masked projection of a value
//!
//! ## Design Principles
//!
//! The crate does not know about any rendering surface, event loop or
//! framework. It only computes. The one place where it touches the outside
//! world is the [`SelectionSurface`] trait, which hosts implement for their
//! text-entry widget.
//!
//! Offsets are counted in `char`s, not bytes. The masked projection renders
//! exactly one glyph per `char`, so an offset into the true value is also a
//! valid offset into the displayed string.
//!
//! ## Example
//!
//! ```
//! use field_core::{FieldId, InputKind, MaskedValueStore, SelectionRange};
//!
//! let mut store = MaskedValueStore::new();
//! let id = FieldId::from_raw(1);
//!
//! store.ensure_initial(id, "abc".to_string());
//! store.capture_selection(id, SelectionRange::collapsed(3));
//! let outcome = store.apply_input(id, InputKind::parse(Some("insertText")), Some("d"));
//!
//! assert_eq!(store.get(id), Some("abcd"));
//! assert_eq!(store.masked(id), Some("****"));
//! assert_eq!(outcome.caret, 4);
//! ```

mod edit;
mod id;
mod mask;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use edit::{EditOperation, EditOutcome, InputKind};
pub use id::FieldId;
pub use mask::{DEFAULT_MASK_GLYPH, mask, mask_with};
pub use selection::SelectionRange;
pub use store::{MaskedValueStore, StoreOptions};
pub use traits::{FieldStore, SelectionSurface};

// Re-export the char-offset helpers for hosts that edit their own display text.
pub use text::{byte_offset, char_len, filter_single_line, splice_chars};
