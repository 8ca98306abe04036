//! Duration and time-period parameter scanners.
//!
//! Anchored, hand-rolled equivalents of the parameter patterns:
//!
//! ```text
//! duration     [1-5][0-9]{0,2} (mins?|hours?)
//! time-period  (tomorrow|today) (<hour>[.:]<minute>? ?(am|pm) | morning|evening|night|noon)
//! ```
//!
//! Each scanner returns the matched prefix length so the caller can capture
//! the literal in its input spelling before consuming it. Matching is
//! case-insensitive and never panics on multibyte input.

use crate::matcher::prefix_len;
use crate::vocabulary::{CLOCK_MINUTES, DAY_WORDS, NAMED_PERIODS};

/// Scans a duration clause (`"30 mins"`, `"1 hour"`) at the front of `rest`.
///
/// The count starts with a digit 1-5 and runs to at most three digits.
#[must_use]
pub fn scan_duration(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'1'..=b'5')) {
        return None;
    }
    let mut idx = 1;
    while idx < 3 && bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    if bytes.get(idx) != Some(&b' ') {
        return None;
    }
    idx += 1;
    idx += unit_len(&rest[idx..])?;
    at_boundary(rest, idx).then_some(idx)
}

/// Scans a time-period clause (`"tomorrow 6am"`, `"today evening"`,
/// `"tomorrow 11.30 pm"`) at the front of `rest`.
#[must_use]
pub fn scan_time_period(rest: &str) -> Option<usize> {
    let mut idx = first_listed(DAY_WORDS, rest)?;
    if rest.as_bytes().get(idx) != Some(&b' ') {
        return None;
    }
    idx += 1;
    let tail = &rest[idx..];
    let time_len = first_listed(NAMED_PERIODS, tail).or_else(|| clock_len(tail))?;
    Some(idx + time_len)
}

/// Matches a duration unit: `min`/`mins`/`hour`/`hours`, case-insensitively.
fn unit_len(rest: &str) -> Option<usize> {
    for base in ["min", "hour"] {
        if rest
            .get(..base.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(base))
        {
            let mut len = base.len();
            if rest[len..]
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&'s'))
            {
                len += 1;
            }
            return Some(len);
        }
    }
    None
}

/// Matches a clock time: hour 1-12 (optionally zero-padded), an optional
/// `.`/`:` minute from the quarter-hour set, an optional space, and a
/// mandatory am/pm marker.
fn clock_len(tail: &str) -> Option<usize> {
    let mut idx = hour_len(tail)?;
    let bytes = tail.as_bytes();
    if matches!(bytes.get(idx), Some(b'.' | b':')) {
        let minute = tail.get(idx + 1..idx + 3)?;
        if !CLOCK_MINUTES.contains(&minute) {
            return None;
        }
        idx += 3;
    }
    if bytes.get(idx) == Some(&b' ') {
        idx += 1;
    }
    let marker = tail.get(idx..idx + 2)?;
    if !(marker.eq_ignore_ascii_case("am") || marker.eq_ignore_ascii_case("pm")) {
        return None;
    }
    idx += 2;
    at_boundary(tail, idx).then_some(idx)
}

/// Matches an hour 1-12: `1`-`9`, `01`-`09`, or `10`-`12`.
fn hour_len(tail: &str) -> Option<usize> {
    let bytes = tail.as_bytes();
    let d0 = *bytes.first()?;
    if !d0.is_ascii_digit() {
        return None;
    }
    if bytes.get(1).is_some_and(u8::is_ascii_digit) {
        let value = u32::from(d0 - b'0') * 10 + u32::from(bytes[1] - b'0');
        let valid = (d0 == b'0' && (1..=9).contains(&value)) || (10..=12).contains(&value);
        return valid.then_some(2);
    }
    matches!(d0, b'1'..=b'9').then_some(1)
}

/// First listed alternative matching at position 0, with the matcher's
/// boundary semantics.
fn first_listed(alternatives: &[&str], rest: &str) -> Option<usize> {
    alternatives
        .iter()
        .find_map(|alternative| prefix_len(alternative, rest))
}

/// True if `idx` sits at end of input or before a non-alphanumeric char.
fn at_boundary(rest: &str, idx: usize) -> bool {
    !rest[idx..].chars().next().is_some_and(char::is_alphanumeric)
}
