//! Natural ("human") sort order for strings and paths.
//!
//! Strings are split into alternating runs of ASCII digits and other characters.
//! Digit runs compare by numeric value, so `"9"` sorts before `"10"`,
//! and text runs compare as plain strings.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// One run of either digits or non-digit characters.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Text(&'a str),
    Number(&'a str),
}

/// Split a string into alternating text and number chunks.
fn chunks(value: &str) -> Vec<Chunk<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (index, c) in value.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(previous) if previous != is_digit => {
                result.push(make_chunk(&value[start..index], previous));
                start = index;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(previous) = in_digits {
        result.push(make_chunk(&value[start..], previous));
    }

    result
}

const fn make_chunk(value: &str, is_digit: bool) -> Chunk<'_> {
    if is_digit { Chunk::Number(value) } else { Chunk::Text(value) }
}

/// Compare two digit runs numerically without parsing,
/// so arbitrarily long runs cannot overflow.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}

/// Compare two strings in natural order.
///
/// Numbers that are equal by value but differ in zero padding fall back
/// to plain string comparison so the ordering stays total and deterministic.
///
/// ```rust
/// use std::cmp::Ordering;
/// use switch_sort::natsort::compare_natural;
///
/// assert_eq!(compare_natural("file9.jpg", "file10.jpg"), Ordering::Less);
/// assert_eq!(compare_natural("b", "a"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let a_chunks = chunks(a);
    let b_chunks = chunks(b);

    for (left, right) in a_chunks.iter().zip(b_chunks.iter()) {
        let ordering = match (left, right) {
            (Chunk::Number(x), Chunk::Number(y)) => compare_numbers(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
            // Digits sort before text, matching their position in ASCII.
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a_chunks.len().cmp(&b_chunks.len()).then_with(|| a.cmp(b))
}

/// Compare two paths in natural order of their full string representation.
#[must_use]
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    compare_natural(&crate::path_to_string(a), &crate::path_to_string(b))
}

/// Sort paths in place in natural order.
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| compare_paths(a, b));
}
