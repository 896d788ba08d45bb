//! Line classification: raw multi-line text to typed line records.

use confrec_types::{Item, LineType};

use crate::error::{ResolveError, ResolveResult};

/// The key/value separator within a key-value line. Only the first
/// occurrence splits; later `=` characters belong to the value.
const KV_SEPARATOR: char = '=';

/// An [`Item`] paired with its raw line text and resolved [`LineType`].
///
/// Classification happens once at construction so the engine never has to
/// recompute it while walking the document.
#[derive(Clone, Debug)]
pub struct LineRecord {
    pub item: Item,
    pub raw: String,
    pub line_type: LineType,
}

/// Split raw text into lines, honoring CR, LF, and CRLF terminators.
///
/// A trailing terminator does not produce a final empty line, so an empty
/// document yields zero lines. Leading and interior blank lines are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split_terminator('\n').map(str::to_string).collect()
}

/// Parse edited text into an ordered list of typed line records. Line
/// numbers start at 1. Deterministic: the same text always produces the
/// same records.
///
/// Fails with [`ResolveError::MalformedLine`] when a non-blank, non-comment
/// line has no `=` separator.
pub fn parse(namespace_id: u64, text: &str) -> ResolveResult<Vec<LineRecord>> {
    let mut records = Vec::new();
    for (idx, raw) in split_lines(text).into_iter().enumerate() {
        let line_num = (idx + 1) as u32;
        let record = match LineType::of_line(Some(&raw)) {
            LineType::Blank => LineRecord {
                item: Item::blank(namespace_id, line_num),
                line_type: LineType::Blank,
                raw,
            },
            LineType::Comment => LineRecord {
                item: Item::comment(namespace_id, &raw, line_num),
                line_type: LineType::Comment,
                raw,
            },
            _ => {
                let (key, value) = parse_key_value(&raw, line_num)?;
                LineRecord {
                    item: Item::normal(namespace_id, key, value, "", line_num),
                    line_type: LineType::Normal,
                    raw,
                }
            }
        };
        records.push(record);
    }
    Ok(records)
}

fn parse_key_value(line: &str, line_num: u32) -> ResolveResult<(&str, &str)> {
    let sep = line.find(KV_SEPARATOR).ok_or_else(|| ResolveError::MalformedLine {
        line: line.to_string(),
        line_num,
    })?;
    Ok((line[..sep].trim(), line[sep + 1..].trim()))
}
