//! Line-number normalization: dedupe and densify a persisted baseline.
//!
//! Persisted documents can accumulate anomalies over time: two items stored
//! with the same line number, or gaps where items were deleted without
//! renumbering. Normalization produces a dense baseline the engine can align
//! positionally, plus the records needed to repair the anomalies.

use confrec_types::Item;

/// The result of normalizing a baseline item list.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    /// Gap-free baseline: line numbers strictly increasing from 1 through
    /// the original maximum. Synthesized blanks carry id 0.
    pub dense: Vec<Item>,
    /// Blank placeholders synthesized for line-number gaps; creation
    /// candidates.
    pub synthesized_blanks: Vec<Item>,
    /// Items whose line number was already taken by an earlier item;
    /// deletion candidates. Each duplicate appears exactly once.
    pub removed_duplicates: Vec<Item>,
}

/// Normalize a persisted item list into a line-number-dense baseline.
///
/// Items are sorted by line number (stable, so the earlier-stored item wins
/// a collision); every repeated line number goes to `removed_duplicates`,
/// and every gap is filled with a blank placeholder at each missing
/// position.
pub fn normalize(namespace_id: u64, items: &[Item]) -> Normalized {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|i| i.line_num);

    let mut out = Normalized::default();
    let mut next_line = 1u32;
    for item in sorted {
        if item.line_num < next_line {
            out.removed_duplicates.push(item.clone());
            continue;
        }
        while next_line < item.line_num {
            let blank = Item::blank(namespace_id, next_line);
            out.dense.push(blank.clone());
            out.synthesized_blanks.push(blank);
            next_line += 1;
        }
        out.dense.push(item.clone());
        next_line = item.line_num + 1;
    }
    out
}
