//! Numeric block extraction and inline range expansion.
//!
//! Both operations are pure functions over a single name; no stage here
//! looks at directories or configuration beyond its own flags.

use compact_str::CompactString;
use numgap_core::{DataError, NumericBlock};

/// Locate every maximal run of ASCII digits in `name`, left to right.
///
/// Returns an empty vector when the name has no digits. A digit run whose
/// value exceeds the native integer range is an explicit data error, never
/// a silent wrap.
pub fn extract_blocks(name: &str) -> Result<Vec<NumericBlock>, DataError> {
    let bytes = name.as_bytes();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let raw = &name[start..i];
        let value: u64 = raw.parse().map_err(|_| DataError::NumberTooLarge {
            name: name.to_string(),
            digits: raw.to_string(),
        })?;
        blocks.push(NumericBlock {
            raw: CompactString::new(raw),
            value,
            width: raw.len() as u32,
            position: blocks.len(),
            range_end: None,
            start,
            end: i,
        });
    }

    Ok(blocks)
}

/// Collapse adjacent `A-B` digit runs into single range blocks.
///
/// A pair qualifies when the two blocks are separated by exactly one
/// literal hyphen and the second value is >= the first. Descending pairs
/// are never expanded; they stay as two independent blocks. With
/// `all_pairs` false, only the first qualifying pair is collapsed
/// (first/last/largest/index policies); with `all_pairs` true every
/// qualifying pair is collapsed independently.
///
/// Positions are renumbered so the result is a valid block sequence.
pub fn expand_ranges(name: &str, blocks: Vec<NumericBlock>, all_pairs: bool) -> Vec<NumericBlock> {
    let bytes = name.as_bytes();
    let mut out: Vec<NumericBlock> = Vec::with_capacity(blocks.len());
    let mut expanded = false;
    let mut i = 0;

    while i < blocks.len() {
        if (all_pairs || !expanded) && i + 1 < blocks.len() {
            let (a, b) = (&blocks[i], &blocks[i + 1]);
            let hyphen_adjacent = a.end + 1 == b.start && bytes[a.end] == b'-';
            if hyphen_adjacent && b.value >= a.value {
                out.push(NumericBlock {
                    raw: a.raw.clone(),
                    value: a.value,
                    width: a.width,
                    position: out.len(),
                    range_end: Some(b.value),
                    start: a.start,
                    end: b.end,
                });
                expanded = true;
                i += 2;
                continue;
            }
        }
        let mut block = blocks[i].clone();
        block.position = out.len();
        out.push(block);
        i += 1;
    }

    out
}
