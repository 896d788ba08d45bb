//! Lookup indexes over a persisted item list.

use std::collections::HashMap;

use confrec_types::{Item, LineType};

/// Index items by their 1-based line number. On duplicate line numbers the
/// later item wins, matching the document's top-to-bottom precedence.
pub fn index_by_line(items: &[Item]) -> HashMap<u32, &Item> {
    items.iter().map(|i| (i.line_num, i)).collect()
}

/// Index key-bearing items by key. Blank and comment items do not
/// participate. On duplicate keys the later item wins.
pub fn index_by_key(items: &[Item]) -> HashMap<&str, &Item> {
    items
        .iter()
        .filter(|i| i.line_type() == LineType::Normal)
        .map(|i| (i.key.as_str(), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_index_last_wins() {
        let items = vec![
            Item::normal(1, "a", "1", "", 3).with_id(1),
            Item::normal(1, "b", "2", "", 3).with_id(2),
        ];
        let index = index_by_line(&items);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&3].id, 2);
    }

    #[test]
    fn key_index_skips_non_key_items() {
        let items = vec![
            Item::comment(1, "# note", 1).with_id(1),
            Item::blank(1, 2).with_id(2),
            Item::normal(1, "a", "1", "", 3).with_id(3),
        ];
        let index = index_by_key(&items);
        assert_eq!(index.len(), 1);
        assert_eq!(index["a"].id, 3);
    }

    #[test]
    fn key_index_last_wins() {
        let items = vec![
            Item::normal(1, "a", "old", "", 1).with_id(1),
            Item::normal(1, "a", "new", "", 5).with_id(2),
        ];
        let index = index_by_key(&items);
        assert_eq!(index["a"].value, "new");
    }
}
