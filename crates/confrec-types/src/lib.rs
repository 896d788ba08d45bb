//! Foundation types for configuration line reconciliation.
//!
//! A configuration document is modeled as an ordered list of [`Item`]s, one
//! per logical line: `key = value` pairs, comment lines, and blank lines all
//! get an item so the document can be reconstructed byte-for-byte. The
//! resolver crate compares a persisted item list against edited text (or a
//! released snapshot) and emits a [`ChangeSet`].
//!
//! # Key Types
//!
//! - [`Item`] — one logical line of a document, with persistence identity
//! - [`LineType`] — classification of a line: blank, comment, normal, unknown
//! - [`TextFormat`] — document format; decides whether line numbers renumber
//! - [`ChangeSet`] — create/update/delete lists produced by reconciliation

pub mod change_set;
pub mod error;
pub mod format;
pub mod item;
pub mod line;

pub use change_set::ChangeSet;
pub use error::TypeError;
pub use format::TextFormat;
pub use item::{Audit, Item};
pub use line::{is_blank_line, is_comment_line, LineType};
