//! Fixed word tables of the command dialect.
//!
//! The dialect is a hand-authored pattern grammar, not general natural
//! language: it grows by adding words here (or new rule types), nothing else.
//! Alternatives within one table must be mutually exclusive prefixes; the
//! matcher takes the first listed match.

/// Greeting interjections, tolerated and ignored before the assistant name.
pub const GREETINGS: &[&str] = &["hi", "hey", "hello"];

/// Assistant names a command must be addressed to.
pub const ASSISTANT_NAMES: &[&str] = &["alexa", "google home", "siri", "cortana"];

/// Articles, tolerated and ignored before the device name.
pub const ARTICLES: &[&str] = &["a", "an", "the", "my"];

/// Action verbs. Mapped to `ActionKind` via `ActionKind::from_verb`.
pub const ACTION_VERBS: &[&str] = &["turn-on", "turn-off", "prepare", "close", "feed", "set"];

/// Prepositions introducing a trailing parameter clause.
pub const PREPOSITIONS: &[&str] = &[
    "at", "by", "for", "from", "in", "into", "on", "to", "with",
];

/// Punctuation terminators.
pub const PUNCTUATION: &[&str] = &["!", ",", ";", "."];

/// Day words opening a time-period clause.
pub const DAY_WORDS: &[&str] = &["tomorrow", "today"];

/// Named times of day accepted in a time-period clause.
pub const NAMED_PERIODS: &[&str] = &["morning", "evening", "night", "noon"];

/// Minute values accepted after an hour in a time-period clause.
pub const CLOCK_MINUTES: &[&str] = &["00", "15", "30", "45"];
