//! Line classification.
//!
//! Every raw line (and every persisted item) falls into exactly one of the
//! [`LineType`] variants. Classification is total: `Unknown` is reserved for
//! absent input and is never assigned to a line that actually exists.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The classification of one document line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// A blank or whitespace-only line.
    Blank,
    /// A comment line: optional leading whitespace, then `#` or `!`.
    Comment,
    /// A `key = value` line.
    Normal,
    /// Absent input. Never persisted.
    Unknown,
}

impl LineType {
    /// Classify a raw text line. `None` is the only input that yields
    /// [`LineType::Unknown`].
    pub fn of_line(line: Option<&str>) -> Self {
        match line {
            None => LineType::Unknown,
            Some(l) if is_blank_line(l) => LineType::Blank,
            Some(l) if is_comment_line(l) => LineType::Comment,
            Some(_) => LineType::Normal,
        }
    }

    /// Classify a persisted item by its fields. `None` is the only input that
    /// yields [`LineType::Unknown`].
    pub fn of_item(item: Option<&Item>) -> Self {
        match item {
            None => LineType::Unknown,
            Some(i) if i.key.trim().is_empty() && i.comment.trim().is_empty() => LineType::Blank,
            Some(i) if i.key.trim().is_empty() && is_comment_line(&i.comment) => LineType::Comment,
            Some(_) => LineType::Normal,
        }
    }
}

/// Returns `true` for an empty or whitespace-only line.
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns `true` for a comment line: optional leading whitespace followed by
/// `#` or `!`.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(['#', '!'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_lines() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line("\t"));
        assert!(!is_blank_line("a"));
    }

    #[test]
    fn comment_lines() {
        assert!(is_comment_line("# a comment"));
        assert!(is_comment_line("! bang style"));
        assert!(is_comment_line("   # indented"));
        assert!(!is_comment_line("key = value"));
        assert!(!is_comment_line(""));
    }

    #[test]
    fn line_classification() {
        assert_eq!(LineType::of_line(None), LineType::Unknown);
        assert_eq!(LineType::of_line(Some("")), LineType::Blank);
        assert_eq!(LineType::of_line(Some("# c")), LineType::Comment);
        assert_eq!(LineType::of_line(Some("a = 1")), LineType::Normal);
        // No '=' is still Normal at classification time; the classifier
        // rejects it when splitting key from value.
        assert_eq!(LineType::of_line(Some("not a pair")), LineType::Normal);
    }

    #[test]
    fn item_classification() {
        assert_eq!(LineType::of_item(None), LineType::Unknown);

        let blank = Item::blank(1, 1);
        assert_eq!(LineType::of_item(Some(&blank)), LineType::Blank);

        let comment = Item::comment(1, "# hello", 2);
        assert_eq!(LineType::of_item(Some(&comment)), LineType::Comment);

        let normal = Item::normal(1, "k", "v", "", 3);
        assert_eq!(LineType::of_item(Some(&normal)), LineType::Normal);
    }

    proptest! {
        // Classification is total: any present line maps to exactly one of
        // the three non-Unknown variants.
        #[test]
        fn classification_totality(line in ".*") {
            let ty = LineType::of_line(Some(&line));
            prop_assert_ne!(ty, LineType::Unknown);

            let blank = is_blank_line(&line);
            let comment = is_comment_line(&line);
            match ty {
                LineType::Blank => prop_assert!(blank),
                LineType::Comment => prop_assert!(!blank && comment),
                LineType::Normal => prop_assert!(!blank && !comment),
                LineType::Unknown => unreachable!(),
            }
        }
    }
}
