//! Redundant-change combining.
//!
//! The comparison walk can emit a create and a delete for the same key when
//! a key-value line survived an edit: the new text proposes a fresh row and
//! the old row falls out of the visited sweep. Those two records describe a
//! single logical edit, so they collapse here into one update, or into
//! nothing when the content is identical.

use std::collections::{HashMap, HashSet};

use confrec_types::{ChangeSet, LineType};

/// Collapse redundant records in a raw change set, then dedupe and order.
///
/// Idempotent: combining an already-combined set changes nothing.
pub fn combine(raw: ChangeSet) -> ChangeSet {
    let ChangeSet {
        creates,
        updates,
        deletes,
    } = raw;

    // Position of the last key-bearing delete per key, matching the index
    // builder's last-wins rule.
    let mut delete_pos_by_key: HashMap<&str, usize> = HashMap::new();
    for (pos, item) in deletes.iter().enumerate() {
        if item.line_type() == LineType::Normal {
            delete_pos_by_key.insert(item.key.as_str(), pos);
        }
    }

    let mut absorbed: HashSet<usize> = HashSet::new();
    let mut out = ChangeSet::new();
    out.updates = updates;

    for create in creates {
        let matched = if create.line_type() == LineType::Normal {
            delete_pos_by_key.get(create.key.as_str()).copied()
        } else {
            None
        };
        match matched {
            Some(pos) if !absorbed.contains(&pos) => {
                let delete = &deletes[pos];
                absorbed.insert(pos);
                let identical = delete.value == create.value
                    && delete.comment == create.comment
                    && delete.line_num == create.line_num;
                if !identical {
                    out.add_update(create.with_id(delete.id));
                }
                // Identical pair: the row is untouched, drop both records.
            }
            _ => out.add_create(create),
        }
    }

    for (pos, delete) in deletes.into_iter().enumerate() {
        if !absorbed.contains(&pos) {
            out.add_delete(delete);
        }
    }

    let mut seen_update_ids = HashSet::new();
    out.updates.retain(|i| seen_update_ids.insert(i.id));
    let mut seen_delete_ids = HashSet::new();
    out.deletes.retain(|i| seen_delete_ids.insert(i.id));

    out.sort_by_line_num();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use confrec_types::Item;

    #[test]
    fn identical_create_delete_pair_vanishes() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "a", "1", "c", 3));
        raw.add_delete(Item::normal(1, "a", "1", "c", 3).with_id(9));

        let combined = combine(raw);
        assert!(combined.is_empty());
    }

    #[test]
    fn differing_create_delete_pair_becomes_update() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "a", "new", "", 3));
        raw.add_delete(Item::normal(1, "a", "old", "", 3).with_id(9));

        let combined = combine(raw);
        assert!(combined.creates.is_empty());
        assert!(combined.deletes.is_empty());
        assert_eq!(combined.updates.len(), 1);
        assert_eq!(combined.updates[0].id, 9);
        assert_eq!(combined.updates[0].value, "new");
    }

    #[test]
    fn line_number_change_alone_still_merges() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "a", "1", "", 7));
        raw.add_delete(Item::normal(1, "a", "1", "", 3).with_id(9));

        let combined = combine(raw);
        assert_eq!(combined.updates.len(), 1);
        assert_eq!(combined.updates[0].line_num, 7);
    }

    #[test]
    fn unrelated_records_pass_through() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "a", "1", "", 1));
        raw.add_create(Item::blank(1, 2));
        raw.add_delete(Item::normal(1, "b", "2", "", 3).with_id(9));
        raw.add_update(Item::normal(1, "c", "3", "", 4).with_id(10));

        let combined = combine(raw);
        assert_eq!(combined.creates.len(), 2);
        assert_eq!(combined.deletes.len(), 1);
        assert_eq!(combined.updates.len(), 1);
    }

    #[test]
    fn blank_creates_never_merge_with_deletes() {
        // A blank create and a blank delete share the empty key, but only
        // key-bearing records participate in merging.
        let mut raw = ChangeSet::new();
        raw.add_create(Item::blank(1, 2));
        raw.add_delete(Item::blank(1, 5).with_id(9));

        let combined = combine(raw);
        assert_eq!(combined.creates.len(), 1);
        assert_eq!(combined.deletes.len(), 1);
        assert!(combined.updates.is_empty());
    }

    #[test]
    fn duplicate_ids_are_deduplicated_keeping_first() {
        let mut raw = ChangeSet::new();
        raw.add_delete(Item::comment(1, "# first", 1).with_id(9));
        raw.add_delete(Item::comment(1, "# second", 2).with_id(9));

        let combined = combine(raw);
        assert_eq!(combined.deletes.len(), 1);
        assert_eq!(combined.deletes[0].comment, "# first");
    }

    #[test]
    fn output_is_ordered_by_line_number() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "b", "2", "", 8));
        raw.add_create(Item::normal(1, "a", "1", "", 2));
        raw.add_delete(Item::comment(1, "# x", 9).with_id(1));
        raw.add_delete(Item::comment(1, "# y", 4).with_id(2));

        let combined = combine(raw);
        assert_eq!(combined.creates[0].line_num, 2);
        assert_eq!(combined.creates[1].line_num, 8);
        assert_eq!(combined.deletes[0].line_num, 4);
        assert_eq!(combined.deletes[1].line_num, 9);
    }

    #[test]
    fn combining_twice_is_a_fixed_point() {
        let mut raw = ChangeSet::new();
        raw.add_create(Item::normal(1, "a", "new", "", 3));
        raw.add_delete(Item::normal(1, "a", "old", "", 3).with_id(9));
        raw.add_delete(Item::normal(1, "b", "2", "", 5).with_id(10));

        let once = combine(raw);
        let twice = combine(once.clone());
        assert_eq!(once, twice);
    }
}
