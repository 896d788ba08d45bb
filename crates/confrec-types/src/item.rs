//! The [`Item`] type: one logical line of a configuration document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::line::LineType;

/// Audit metadata attached to an item. Opaque pass-through: the resolver
/// never interprets these fields, only carries them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_by: Option<String>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// One logical line of a configuration document.
///
/// Blank and comment lines carry an empty `key`; comment lines store the full
/// raw line (including the leading `#`/`!`) in `comment`. An `id` of 0 marks
/// an item that has not been persisted yet; the store assigns real ids when a
/// change set is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u64,
    pub namespace_id: u64,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub comment: String,
    pub line_num: u32,
    #[serde(default)]
    pub audit: Audit,
}

impl Item {
    /// A blank-line item.
    pub fn blank(namespace_id: u64, line_num: u32) -> Self {
        Self::normal(namespace_id, "", "", "", line_num)
    }

    /// A comment-line item. `comment` is the full raw line text.
    pub fn comment(namespace_id: u64, comment: &str, line_num: u32) -> Self {
        Self::normal(namespace_id, "", "", comment, line_num)
    }

    /// A key-value item.
    pub fn normal(
        namespace_id: u64,
        key: &str,
        value: &str,
        comment: &str,
        line_num: u32,
    ) -> Self {
        Self {
            id: 0,
            namespace_id,
            key: key.to_string(),
            value: value.to_string(),
            comment: comment.to_string(),
            line_num,
            audit: Audit::default(),
        }
    }

    /// Same item with the given persistence id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Classify this item. Never returns [`LineType::Unknown`].
    pub fn line_type(&self) -> LineType {
        LineType::of_item(Some(self))
    }

    /// Returns `true` for a blank-line item (empty key and comment).
    pub fn is_blank_item(&self) -> bool {
        self.line_type() == LineType::Blank
    }

    /// Returns `true` for a comment-line item.
    pub fn is_comment_item(&self) -> bool {
        self.line_type() == LineType::Comment
    }

    /// Serialize this item back to its document line.
    pub fn to_line(&self) -> String {
        match self.line_type() {
            LineType::Blank => String::new(),
            LineType::Comment => self.comment.clone(),
            _ => format!("{} = {}", self.key, self.value),
        }
    }

    /// Compare the document-visible content of two items: key, value, and
    /// line number, plus the comment unless `ignore_comment` is set. Identity
    /// and audit fields never participate.
    pub fn content_eq(&self, other: &Item, ignore_comment: bool) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.line_num == other.line_num
            && (ignore_comment || self.comment == other.comment)
    }

    /// Overwrite this item's content from an update record, keeping the id
    /// and creation audit fields.
    pub fn apply_update(&mut self, update: &Item) {
        self.namespace_id = update.namespace_id;
        self.key = update.key.clone();
        self.value = update.value.clone();
        self.comment = update.comment.clone();
        self.line_num = update.line_num;
        if update.audit.last_modified_by.is_some() {
            self.audit.last_modified_by = update.audit.last_modified_by.clone();
        }
        if update.audit.last_modified_at.is_some() {
            self.audit.last_modified_at = update.audit.last_modified_at;
        }
    }
}
