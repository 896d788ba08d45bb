//! The reconciliation engine.
//!
//! Two modes share one [`Resolver`]:
//!
//! - **Text edit**: align freshly parsed lines against the persisted
//!   baseline. Key-value lines match by key (their position legitimately
//!   shifts when surrounding comments move); comment and blank lines are not
//!   addressable by key, so they match by position.
//! - **Revocation**: align a released key/value snapshot against the current
//!   items and the soft-deleted pool, producing the change set that restores
//!   the release.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use confrec_types::{ChangeSet, Item, LineType, TextFormat};

use crate::classifier::{parse, LineRecord};
use crate::combine::combine;
use crate::error::{ResolveError, ResolveResult};
use crate::index::{index_by_key, index_by_line};
use crate::normalize::normalize;

/// Reconciles a persisted configuration document with edited text or with a
/// released snapshot. Pure and stateless: each call works on the inputs it
/// is given and nothing else.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    format: TextFormat,
}

impl Resolver {
    /// A resolver for documents of the given format.
    pub fn new(format: TextFormat) -> Self {
        Self { format }
    }

    /// The document format this resolver was built for.
    pub fn format(&self) -> TextFormat {
        self.format
    }

    /// Text-edit mode: compute the change set that turns `base_items` into
    /// the document described by `text`.
    ///
    /// Fails fast on malformed lines and repeated keys; no partial change
    /// set is ever returned. Unchanged lines produce no records, so
    /// resolving a document against its own materialized form yields an
    /// empty change set.
    pub fn resolve(
        &self,
        namespace_id: u64,
        text: &str,
        base_items: &[Item],
    ) -> ResolveResult<ChangeSet> {
        let mut records = parse(namespace_id, text)?;

        let repeats = duplicate_keys(&records);
        if !repeats.is_empty() {
            return Err(ResolveError::DuplicateKeys { keys: repeats });
        }

        // Duplicate line numbers in the baseline are deleted outright; the
        // dense remainder is what the new text is aligned against.
        let normalized = normalize(namespace_id, base_items);
        let key_index = index_by_key(&normalized.dense);
        let line_index = index_by_line(&normalized.dense);

        let renumber = self.format.renumbers_lines();
        let mut next_append = normalized
            .dense
            .iter()
            .map(|i| i.line_num)
            .max()
            .unwrap_or(0);

        let mut changes = ChangeSet::new();
        for dup in &normalized.removed_duplicates {
            changes.add_delete(dup.clone());
        }

        let mut visited: HashSet<u64> = HashSet::new();
        let mut pending_comments: Vec<String> = Vec::new();

        for record in &mut records {
            match record.line_type {
                LineType::Normal => {
                    // A key line owns the comment lines gathered since the
                    // last blank or key line.
                    record.item.comment = pending_comments.join("\n");
                    pending_comments.clear();

                    let base = key_index.get(record.item.key.as_str()).copied();
                    let mut proposed = record.item.clone();
                    proposed.line_num = match (renumber, base) {
                        (true, _) => record.item.line_num,
                        (false, Some(b)) => b.line_num,
                        (false, None) => {
                            next_append += 1;
                            next_append
                        }
                    };

                    match base {
                        Some(b) if !b.content_eq(&proposed, false) => {
                            visited.insert(b.id);
                            changes.add_update(proposed.with_id(b.id));
                        }
                        // An exact match still emits a create here; the
                        // combiner collapses it against the delete of the
                        // matching base item, leaving no record.
                        _ => changes.add_create(proposed),
                    }
                }
                LineType::Comment => {
                    pending_comments.push(record.item.comment.clone());
                    align_positional(record, &line_index, &mut changes, &mut visited);
                }
                LineType::Blank => {
                    pending_comments.clear();
                    align_positional(record, &line_index, &mut changes, &mut visited);
                }
                // Never produced for a present line.
                LineType::Unknown => {}
            }
        }

        for item in &normalized.dense {
            if item.id != 0 && !visited.contains(&item.id) {
                changes.add_delete(item.clone());
            }
        }

        let combined = combine(changes);
        debug!(
            namespace_id,
            creates = combined.creates.len(),
            updates = combined.updates.len(),
            deletes = combined.deletes.len(),
            "resolved text edit"
        );
        Ok(combined)
    }

    /// Revocation mode: compute the change set that restores the document to
    /// a released key/value snapshot.
    ///
    /// `released` is walked in its given order. `current_deleted_items` is
    /// the soft-deleted pool, used to recover the original comment and line
    /// number of keys that must be re-created.
    pub fn revert(
        &self,
        namespace_id: u64,
        released: &[(String, String)],
        current_items: &[Item],
        current_deleted_items: &[Item],
    ) -> ChangeSet {
        // Last occurrence wins in both maps, like the index builder.
        let mut base_by_key: HashMap<&str, &Item> =
            current_items.iter().map(|i| (i.key.as_str(), i)).collect();
        let deleted_by_key: HashMap<&str, &Item> = current_deleted_items
            .iter()
            .map(|i| (i.key.as_str(), i))
            .collect();

        let renumber = self.format.renumbers_lines();
        let mut max_line = current_items.iter().map(|i| i.line_num).max().unwrap_or(1);

        let mut changes = ChangeSet::new();
        let mut created: HashSet<&str> = HashSet::new();
        for (seq, (key, value)) in released.iter().enumerate() {
            let seq = (seq + 1) as u32;
            match base_by_key.remove(key.as_str()) {
                None => {
                    // Re-create the key, recovering its comment and position
                    // from the deleted pool. Each key is created at most
                    // once per pass.
                    if !created.insert(key.as_str()) {
                        continue;
                    }
                    let (comment, recovered_line) = deleted_by_key
                        .get(key.as_str())
                        .map(|d| (d.comment.as_str(), d.line_num))
                        .unwrap_or(("", 0));
                    let mut line = if renumber { seq } else { recovered_line };
                    if line == 0 {
                        // Original position lost; append at the end.
                        line = max_line;
                        max_line += 1;
                    }
                    changes.add_create(Item::normal(namespace_id, key, value, comment, line));
                }
                Some(curr) => {
                    if curr.value != *value || (renumber && seq != curr.line_num) {
                        let line = if renumber { seq } else { curr.line_num };
                        changes.add_update(
                            Item::normal(namespace_id, key, value, &curr.comment, line)
                                .with_id(curr.id),
                        );
                    }
                }
            }
        }

        // Everything the release does not know about goes away. Walk the
        // current list in order so the sweep is deterministic.
        for item in current_items {
            if let Some(leftover) = base_by_key.remove(item.key.as_str()) {
                if renumber || !leftover.key.trim().is_empty() {
                    changes.add_delete(leftover.clone());
                }
            }
        }

        let combined = combine(changes);
        debug!(
            namespace_id,
            creates = combined.creates.len(),
            updates = combined.updates.len(),
            deletes = combined.deletes.len(),
            "resolved revocation"
        );
        combined
    }
}

/// Positional alignment for comment and blank lines. A persisted non-key
/// item at the same position is rewritten in place (or left alone when
/// nothing changed); anything else becomes a create.
fn align_positional(
    record: &LineRecord,
    line_index: &HashMap<u32, &Item>,
    changes: &mut ChangeSet,
    visited: &mut HashSet<u64>,
) {
    let base = line_index.get(&record.item.line_num).copied();
    match base {
        Some(b) if b.id != 0 && b.line_type() != LineType::Normal => {
            if record.line_type == LineType::Comment {
                if b.comment == record.item.comment {
                    visited.insert(b.id);
                } else {
                    visited.insert(b.id);
                    changes.add_update(record.item.clone().with_id(b.id));
                }
            } else if b.is_blank_item() {
                // Blank over blank: nothing to do.
                visited.insert(b.id);
            } else {
                // A comment replaced by a blank: create the blank, let the
                // old comment fall out of the visited sweep.
                changes.add_create(record.item.clone());
            }
        }
        _ => changes.add_create(record.item.clone()),
    }
}

/// Keys appearing on more than one key-value line, in first-occurrence
/// order.
fn duplicate_keys(records: &[LineRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut repeats: Vec<String> = Vec::new();
    for record in records {
        if record.line_type != LineType::Normal {
            continue;
        }
        let key = record.item.key.as_str();
        if !seen.insert(key) && !repeats.iter().any(|k| k == key) {
            repeats.push(key.to_string());
        }
    }
    repeats
}
