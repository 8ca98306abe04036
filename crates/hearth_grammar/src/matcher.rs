//! Anchored case-insensitive prefix alternation.
//!
//! The primitive every terminal rule is built on: test whether the
//! unconsumed input starts with one of a list of literal alternatives, and
//! consume the match if so. There is no pattern engine underneath; matching
//! is explicit first-listed-prefix with a word-boundary guard, so the
//! tie-break is exactly source order.

use crate::context::ParseContext;

/// Tests one alternative against the front of `rest`, case-insensitively.
///
/// Returns the matched byte length. Alternatives ending in an alphanumeric
/// character must be followed by a non-alphanumeric character (or end of
/// input), so `on` never matches the front of `onion`; punctuation
/// alternatives are exempt and match flush against whatever follows.
#[must_use]
pub fn prefix_len(alternative: &str, rest: &str) -> Option<usize> {
    let candidate = rest.get(..alternative.len())?;
    if !candidate.eq_ignore_ascii_case(alternative) {
        return None;
    }
    let ends_alphanumeric = alternative.chars().last().is_some_and(char::is_alphanumeric);
    if ends_alphanumeric {
        let next = rest[alternative.len()..].chars().next();
        if next.is_some_and(char::is_alphanumeric) {
            return None;
        }
    }
    Some(alternative.len())
}

/// Matches the first listed alternative at the front of the context's
/// unconsumed input.
///
/// On success consumes the literal plus any following whitespace and returns
/// the literal as it was spelled in the input. On failure the context is
/// untouched. Writing the captured literal to the proper context field is
/// the calling rule's job.
pub fn match_literal(alternatives: &[&str], ctx: &mut ParseContext) -> Option<String> {
    for alternative in alternatives {
        if let Some(len) = prefix_len(alternative, ctx.remaining()) {
            let literal = ctx.remaining()[..len].to_string();
            ctx.consume(len);
            return Some(literal);
        }
    }
    None
}
