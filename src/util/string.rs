//! String helpers
//!
//! Splitting and substrings return `&str` views into the input; nothing is
//! copied. Case conversion is ASCII-only (C locale semantics).

use thiserror::Error;

use crate::generator::Generator;

/// Errors from string helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringError {
    /// `split` was given an empty delimiter.
    #[error("split delimiter cannot be empty")]
    EmptyDelimiter,

    /// `substring` start is past the end or not on a char boundary.
    #[error("invalid substring start {begin} for string of length {source_len}")]
    InvalidRange {
        /// Requested start offset in bytes
        begin: usize,
        /// Requested length in bytes
        len: usize,
        /// Length of the source string in bytes
        source_len: usize,
    },
}

/// True if `haystack` contains the character `needle`.
pub fn contains_char(haystack: &str, needle: char) -> bool {
    haystack.contains(needle)
}

/// Byte offset of the first occurrence of `segment`.
///
/// An empty segment matches at offset 0 of a non-empty haystack, and never
/// matches an empty haystack.
pub fn find(haystack: &str, segment: &str) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }
    haystack.find(segment)
}

/// True if `segment` occurs in `haystack` (same empty rules as [`find`]).
pub fn contains(haystack: &str, segment: &str) -> bool {
    find(haystack, segment).is_some()
}

/// Split `input` on `delimiter`, excluding the delimiter from the segments.
///
/// Consecutive delimiters produce empty segments. A trailing delimiter does
/// not produce a trailing empty segment, and an empty input produces no
/// segments at all.
pub fn split<'s>(input: &'s str, delimiter: &str) -> Result<Vec<&'s str>, StringError> {
    if delimiter.is_empty() {
        return Err(StringError::EmptyDelimiter);
    }

    let mut rest = input;
    let mut segments = Vec::new();
    while let Some(segment) = next_segment(&mut rest, delimiter) {
        segments.push(segment);
    }
    Ok(segments)
}

/// Lazy form of [`split`]: segments are located one advance at a time.
pub fn split_lazy<'s>(input: &'s str, delimiter: &str) -> Result<Generator<'s, &'s str>, StringError> {
    if delimiter.is_empty() {
        return Err(StringError::EmptyDelimiter);
    }

    let delimiter = delimiter.to_owned();
    let mut rest = input;
    Ok(Generator::from_fn(move || next_segment(&mut rest, &delimiter)))
}

/// Cut the next segment off the front of `rest`.
fn next_segment<'s>(rest: &mut &'s str, delimiter: &str) -> Option<&'s str> {
    let current: &'s str = *rest;
    if current.is_empty() {
        return None;
    }
    match current.find(delimiter) {
        Some(at) => {
            *rest = &current[at + delimiter.len()..];
            Some(&current[..at])
        }
        None => {
            *rest = "";
            Some(current)
        }
    }
}

/// Up to `len` bytes of `input` starting at byte `begin`.
///
/// The length is clamped to the end of the string. A start past the end is
/// an error, as is a range that splits a UTF-8 character.
pub fn substring(input: &str, begin: usize, len: usize) -> Result<&str, StringError> {
    let invalid = || StringError::InvalidRange {
        begin,
        len,
        source_len: input.len(),
    };
    if begin > input.len() {
        return Err(invalid());
    }
    let end = begin.saturating_add(len).min(input.len());
    input.get(begin..end).ok_or_else(invalid)
}

/// ASCII uppercase copy of `input`.
pub fn uppercase(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// ASCII lowercase copy of `input`.
pub fn lowercase(input: &str) -> String {
    input.to_ascii_lowercase()
}
