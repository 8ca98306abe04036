//! Prefix matcher tests.
//!
//! The matcher is the primitive every terminal rule rests on: anchored,
//! case-insensitive, first-listed-wins, consuming on success only.

use hearth_grammar::matcher::{match_literal, prefix_len};
use hearth_grammar::{DeviceSnapshot, ParseContext};

fn ctx(input: &str) -> ParseContext {
    ParseContext::new(input, DeviceSnapshot::new())
}

#[test]
fn anchored_at_position_zero() {
    assert_eq!(prefix_len("alexa", "alexa! lights"), Some(5));
    assert_eq!(prefix_len("alexa", " alexa! lights"), None);
    assert_eq!(prefix_len("alexa", "say alexa"), None);
}

#[test]
fn case_insensitive_both_ways() {
    assert_eq!(prefix_len("ALEXA", "alexa!"), Some(5));
    assert_eq!(prefix_len("alexa", "ALEXA!"), Some(5));
    assert_eq!(prefix_len("Google Home", "google home,"), Some(11));
}

#[test]
fn word_boundary_blocks_embedded_matches() {
    // "on" must not match the front of "onion"; "a" must not match "alarm".
    assert_eq!(prefix_len("on", "onion"), None);
    assert_eq!(prefix_len("a", "alarm"), None);
    assert_eq!(prefix_len("an", "analysis"), None);
    // Hyphens are not alphanumeric: "turn-on" before "-x" still bounds.
    assert_eq!(prefix_len("turn-on", "turn-only"), None);
    assert_eq!(prefix_len("turn-on", "turn-on-x"), Some(7));
}

#[test]
fn punctuation_alternatives_match_flush() {
    assert_eq!(prefix_len("!", "!Turn-on"), Some(1));
    assert_eq!(prefix_len(",", ",then"), Some(1));
}

#[test]
fn first_listed_alternative_wins() {
    let mut ctx = ctx("hi hey hello");
    assert_eq!(
        match_literal(&["hello", "hey", "hi"], &mut ctx).as_deref(),
        Some("hi")
    );
}

#[test]
fn success_consumes_match_and_whitespace() {
    let mut ctx = ctx("turn-off \t kitchen lights.");
    let matched = match_literal(&["turn-on", "turn-off"], &mut ctx);
    assert_eq!(matched.as_deref(), Some("turn-off"));
    assert_eq!(ctx.remaining(), "kitchen lights.");
}

#[test]
fn failure_leaves_the_cursor_alone() {
    let mut ctx = ctx("turn-off kitchen lights.");
    assert!(match_literal(&["feed", "set"], &mut ctx).is_none());
    assert_eq!(ctx.remaining(), "turn-off kitchen lights.");
}

#[test]
fn returned_literal_keeps_input_spelling() {
    let mut ctx = ctx("Turn-Off kitchen lights.");
    let matched = match_literal(&["turn-off"], &mut ctx);
    assert_eq!(matched.as_deref(), Some("Turn-Off"));
}

#[test]
fn remaining_never_grows() {
    let mut ctx = ctx("hey siri, set the alarm.");
    let mut last_len = ctx.remaining().len();
    for table in [
        &["hi", "hey", "hello"][..],
        &["alexa", "google home", "siri", "cortana"][..],
        &["!", ",", ";", "."][..],
        &["set"][..],
    ] {
        match_literal(table, &mut ctx);
        let len = ctx.remaining().len();
        assert!(len <= last_len);
        last_len = len;
    }
}
