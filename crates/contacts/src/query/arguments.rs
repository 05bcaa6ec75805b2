//! Marker tokenizer for command arguments.
//!
//! Splits `preamble n/value t/value ...` into the preamble and the text that
//! follows each recognised marker. A marker only counts at the start of the
//! input or right after whitespace, so `a/Blk 30 n/Alice` yields two values
//! while `alice@n/a` yields none.

use crate::error::{ContactsError, Result};

pub const MARKER_NAME: &str = "n/";
pub const MARKER_PHONE: &str = "p/";
pub const MARKER_EMAIL: &str = "e/";
pub const MARKER_ADDRESS: &str = "a/";
pub const MARKER_TAG: &str = "t/";
pub const MARKER_MODULE: &str = "m/";
pub const MARKER_FACULTY: &str = "f/";
pub const MARKER_FAVORITE: &str = "fav/";

/// A marker occurrence with the trimmed text up to the next marker.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkedValue {
    marker: &'static str,
    value: String,
    position: usize,
}

/// Tokenized arguments, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<MarkedValue>,
}

impl ArgumentMap {
    /// Trimmed text before the first marker.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn has_any_marker(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.values.iter().any(|value| value.marker == marker)
    }

    /// Text of the last occurrence of `marker`.
    pub fn value(&self, marker: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|value| value.marker == marker)
            .map(|value| value.value.as_str())
    }

    /// Text of every occurrence of `marker`, in input order.
    pub fn all_values(&self, marker: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|value| value.marker == marker)
            .map(|value| value.value.as_str())
            .collect()
    }

    /// Fails if any of `markers` occurs more than once.
    pub fn verify_no_duplicates(&self, markers: &[&'static str]) -> Result<()> {
        let repeated = markers
            .iter()
            .filter(|marker| {
                self.values
                    .iter()
                    .filter(|value| value.marker == **marker)
                    .count()
                    > 1
            })
            .copied()
            .collect::<Vec<_>>();
        if repeated.is_empty() {
            return Ok(());
        }
        let position = self
            .values
            .iter()
            .filter(|value| repeated.contains(&value.marker))
            .map(|value| value.position)
            .max()
            .unwrap_or_default();
        Err(ContactsError::Format(format!(
            "multiple values specified for single-valued field(s) {} near byte {position}",
            repeated.join(" ")
        )))
    }
}

/// Splits `input` on the given markers.
pub fn tokenize_arguments(input: &str, markers: &[&'static str]) -> ArgumentMap {
    let mut found: Vec<(usize, &'static str)> = Vec::new();
    let mut cursor = 0usize;
    let mut at_boundary = true;

    while cursor < input.len() {
        let rest = &input[cursor..];
        if at_boundary {
            if let Some(marker) = longest_marker_at(rest, markers) {
                found.push((cursor, marker));
                cursor += marker.len();
                at_boundary = false;
                continue;
            }
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        at_boundary = ch.is_whitespace();
        cursor += ch.len_utf8();
    }

    let Some(&(first_position, _)) = found.first() else {
        return ArgumentMap {
            preamble: input.trim().to_string(),
            values: Vec::new(),
        };
    };

    let values = found
        .iter()
        .enumerate()
        .map(|(index, &(position, marker))| {
            let start = position + marker.len();
            let end = found
                .get(index + 1)
                .map(|(next, _)| *next)
                .unwrap_or(input.len());
            MarkedValue {
                marker,
                value: input[start..end].trim().to_string(),
                position,
            }
        })
        .collect();

    ArgumentMap {
        preamble: input[..first_position].trim().to_string(),
        values,
    }
}

fn longest_marker_at(rest: &str, markers: &[&'static str]) -> Option<&'static str> {
    markers
        .iter()
        .filter(|marker| rest.starts_with(**marker))
        .max_by_key(|marker| marker.len())
        .copied()
}
