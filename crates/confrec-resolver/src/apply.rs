//! Applying a change set to an item snapshot, and rendering items back to
//! document text.
//!
//! The real store does this transactionally; this module is the in-memory
//! reference used by callers that want to preview an edit and by the test
//! suite to close the resolve/apply loop.

use std::collections::{HashMap, HashSet};

use confrec_types::{ChangeSet, Item};

use crate::error::{ResolveError, ResolveResult};

/// Apply a change set to a snapshot of persisted items, producing the item
/// list the store would hold after committing it.
///
/// Creates are assigned ids above the current maximum, updates are applied
/// by id (creation audit fields survive), deletes are dropped by id, and the
/// result is sorted by line number. Fails with
/// [`ResolveError::LineMismatch`] if two surviving items claim the same
/// line.
pub fn apply(items: &[Item], changes: &ChangeSet) -> ResolveResult<Vec<Item>> {
    let updates_by_id: HashMap<u64, &Item> =
        changes.updates.iter().map(|i| (i.id, i)).collect();
    let deleted_ids: HashSet<u64> = changes.deletes.iter().map(|i| i.id).collect();

    let mut next_id = items.iter().map(|i| i.id).max().unwrap_or(0);

    let mut result: Vec<Item> = Vec::with_capacity(items.len() + changes.creates.len());
    for item in items {
        if deleted_ids.contains(&item.id) {
            continue;
        }
        let mut item = item.clone();
        if let Some(update) = updates_by_id.get(&item.id) {
            item.apply_update(update);
        }
        result.push(item);
    }
    for create in &changes.creates {
        next_id += 1;
        result.push(create.clone().with_id(next_id));
    }
    result.sort_by_key(|i| i.line_num);

    for pair in result.windows(2) {
        if pair[0].line_num == pair[1].line_num {
            return Err(ResolveError::LineMismatch {
                line_num: pair[0].line_num,
            });
        }
    }
    Ok(result)
}

/// Render an item list back to document text, one line per item.
pub fn render(items: &[Item]) -> String {
    items
        .iter()
        .map(Item::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}
