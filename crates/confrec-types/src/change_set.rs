//! The [`ChangeSet`] produced by reconciliation.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The three-way result of reconciling a document: items to create, update,
/// and delete.
///
/// Create records carry id 0 (the store assigns ids on commit); update and
/// delete records carry the id of the persisted item they refer to. After the
/// combiner pass, no id appears in more than one of `updates`/`deletes` and
/// each list is sorted by ascending line number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub creates: Vec<Item>,
    pub updates: Vec<Item>,
    pub deletes: Vec<Item>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_create(&mut self, item: Item) {
        self.creates.push(item);
    }

    pub fn add_update(&mut self, item: Item) {
        self.updates.push(item);
    }

    pub fn add_delete(&mut self, item: Item) {
        self.deletes.push(item);
    }

    /// Returns `true` if no records were emitted.
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.updates.is_empty() && self.deletes.is_empty()
    }

    /// Total number of records across all three lists.
    pub fn len(&self) -> usize {
        self.creates.len() + self.updates.len() + self.deletes.len()
    }

    /// Sort each list by ascending line number (stable).
    pub fn sort_by_line_num(&mut self) {
        self.creates.sort_by_key(|i| i.line_num);
        self.updates.sort_by_key(|i| i.line_num);
        self.deletes.sort_by_key(|i| i.line_num);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let cs = ChangeSet::new();
        assert!(cs.is_empty());
        assert_eq!(cs.len(), 0);
    }

    #[test]
    fn add_and_count() {
        let mut cs = ChangeSet::new();
        cs.add_create(Item::normal(1, "a", "1", "", 1));
        cs.add_update(Item::normal(1, "b", "2", "", 2).with_id(5));
        cs.add_delete(Item::normal(1, "c", "3", "", 3).with_id(6));
        assert!(!cs.is_empty());
        assert_eq!(cs.len(), 3);
    }

    #[test]
    fn sorting_is_by_line_number() {
        let mut cs = ChangeSet::new();
        cs.add_create(Item::normal(1, "b", "2", "", 9));
        cs.add_create(Item::normal(1, "a", "1", "", 2));
        cs.sort_by_line_num();
        assert_eq!(cs.creates[0].key, "a");
        assert_eq!(cs.creates[1].key, "b");
    }
}
