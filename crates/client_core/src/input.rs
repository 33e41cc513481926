//! Parsing and validation of pasted coordinate JSON.

use std::borrow::Cow;

use serde_json::Value;
use shared::{domain::Coordinate, error::SubmissionError};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub candidate_count: usize,
    pub coordinates: Vec<Coordinate>,
}

impl ParsedInput {
    pub fn rejected_count(&self) -> usize {
        self.candidate_count - self.coordinates.len()
    }
}

/// Parses raw text into the validated coordinate list to submit.
///
/// Accepts a bare array or an object with a `points` array. Any other JSON
/// shape yields no candidates and is not an error. Only syntax errors are
/// reported as invalid input: numbers outside the `f64` range and unpaired
/// surrogate escapes still parse, and the affected candidates are filtered.
pub fn parse_coordinates(raw: &str) -> Result<ParsedInput, SubmissionError> {
    let parsed: Value = serde_json::from_str(&replace_lone_surrogates(raw))
        .map_err(|_| SubmissionError::InvalidInput)?;
    let candidates = candidate_points(&parsed);
    let coordinates: Vec<Coordinate> = candidates.iter().filter_map(valid_coordinate).collect();

    if coordinates.is_empty() && !candidates.is_empty() {
        return Err(SubmissionError::NoValidCoordinates);
    }

    Ok(ParsedInput {
        candidate_count: candidates.len(),
        coordinates,
    })
}

pub fn candidate_points(parsed: &Value) -> &[Value] {
    match parsed {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("points") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    }
}

pub fn valid_coordinate(candidate: &Value) -> Option<Coordinate> {
    let object = candidate.as_object()?;
    let lat = number(object.get("lat")?)?;
    let lng = number(object.get("lng")?)?;
    Some(Coordinate::new(lat, lng)).filter(Coordinate::is_finite)
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

/// Rewrites `\uXXXX` escapes naming an unpaired UTF-16 surrogate to
/// `\ufffd`, which serde_json otherwise refuses.
fn replace_lone_surrogates(raw: &str) -> Cow<'_, str> {
    if !raw.contains("\\u") {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) != Some(&b'u') {
            // Skip the escaped character so `\\u` is not read as an escape.
            i += 2;
            continue;
        }
        let Some(unit) = escape_unit(bytes, i) else {
            i += 2;
            continue;
        };
        match unit {
            0xD800..=0xDBFF => match escape_unit(bytes, i + 6) {
                Some(0xDC00..=0xDFFF) => i += 12,
                _ => {
                    out.push_str(&raw[copied..i]);
                    out.push_str("\\ufffd");
                    i += 6;
                    copied = i;
                }
            },
            0xDC00..=0xDFFF => {
                out.push_str(&raw[copied..i]);
                out.push_str("\\ufffd");
                i += 6;
                copied = i;
            }
            _ => i += 6,
        }
    }

    if copied == 0 {
        return Cow::Borrowed(raw);
    }
    out.push_str(&raw[copied..]);
    Cow::Owned(out)
}

/// Code unit of the `\uXXXX` escape starting at `at`, if there is one.
fn escape_unit(bytes: &[u8], at: usize) -> Option<u16> {
    if bytes.get(at) != Some(&b'\\') || bytes.get(at + 1) != Some(&b'u') {
        return None;
    }
    let hex = std::str::from_utf8(bytes.get(at + 2..at + 6)?).ok()?;
    u16::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
