//! Scanner for the municipal endpoint's embedded script.
//!
//! The municipal endpoint answers with a fragment of JavaScript rather than
//! JSON. The counts live in assignments shaped like `datos['01001']=5;`, so
//! the scanner walks the text once, picking out every quoted identifier and
//! the expression between the following `=` and `;`.
//!
//! Two identifiers/values are special:
//!
//! * the identifier `body` marks the end of the data; nothing after it is
//!   read;
//! * the expression ` new Array()` is an array initialiser with no count
//!   and is dropped.
//!
//! Any other expression that is not a base-10 count is skipped without
//! stopping the scan, since the feed mixes in unrelated assignments.

use std::collections::BTreeMap;

/// Identifier that terminates the scan.
const END_OF_DATA: &str = "body";

/// Value expression assigned to array declarations in the feed.
const EMPTY_ARRAY: &str = " new Array()";

#[derive(Debug, Clone, Copy)]
enum Phase<'a> {
    /// Looking for the quote that opens an identifier.
    SeekKey,
    /// Inside the identifier that started at byte `start`.
    InKey { start: usize },
    /// Identifier read; looking for `=`.
    SeekValue { key: &'a str },
    /// Inside the value expression that started at byte `start`.
    InValue { key: &'a str, start: usize },
}

/// Extracts every `'<identifier>'=<count>;` assignment from `script`.
///
/// When an identifier is assigned more than once the last count wins.
/// A trailing assignment without its closing `;` is ignored.
#[must_use]
pub fn parse_script(script: &str) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    let mut phase = Phase::SeekKey;

    for (i, c) in script.char_indices() {
        phase = match (phase, c) {
            (Phase::SeekKey, '\'') => Phase::InKey { start: i + 1 },
            (Phase::InKey { start }, '\'') => {
                let key = &script[start..i];
                if key == END_OF_DATA {
                    break;
                }
                Phase::SeekValue { key }
            }
            (Phase::SeekValue { key }, '=') => Phase::InValue { key, start: i + 1 },
            (Phase::InValue { key, start }, ';') => {
                record(&mut counts, key, &script[start..i]);
                Phase::SeekKey
            }
            (phase, _) => phase,
        };
    }

    counts
}

fn record(counts: &mut BTreeMap<String, u64>, key: &str, expr: &str) {
    if expr == EMPTY_ARRAY {
        log::trace!("Skipping array declaration for '{key}'");
        return;
    }
    match expr.parse::<u64>() {
        Ok(value) => {
            counts.insert(key.to_owned(), value);
        }
        Err(e) => log::trace!("Skipping '{key}'={expr:?}: {e}"),
    }
}
