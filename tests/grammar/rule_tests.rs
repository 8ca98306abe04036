//! Rule-tree tests.
//!
//! Gate semantics: hard gates abort the sequence, soft attempts are
//! tolerated, and the missing-terminator fallback re-attempts punctuation
//! unconditionally.

use hearth_foundation::{ActionKind, DeviceKind};
use hearth_grammar::rules::{ActionClauseRule, CommandRule, GreetingRule, Rule};
use hearth_grammar::{DeviceCandidate, DeviceSnapshot, ParseContext};

fn household() -> DeviceSnapshot {
    im::vector![
        DeviceCandidate::new("Kitchen Curtains", DeviceKind::Curtain),
        DeviceCandidate::new("Kitchen Lights", DeviceKind::LightingSystem),
        DeviceCandidate::new("Garden Sprinkler", DeviceKind::Sprinkler),
        DeviceCandidate::new("Alarm", DeviceKind::Alarm),
    ]
}

fn ctx(input: &str) -> ParseContext {
    ParseContext::new(input, household())
}

#[test]
fn greeting_soft_interjection_consumes_when_present() {
    let mut with = ctx("hello siri, close the kitchen curtains.");
    assert!(GreetingRule::new().interpret(&mut with));
    assert_eq!(with.greeting.as_deref(), Some("hello"));

    let mut without = ctx("siri, close the kitchen curtains.");
    assert!(GreetingRule::new().interpret(&mut without));
    assert!(without.greeting.is_none());

    // Both parses end at the same suffix.
    assert_eq!(with.remaining(), without.remaining());
}

#[test]
fn greeting_hard_gates_in_order() {
    // Assistant missing: punctuation is never attempted.
    let mut ctx1 = ctx("hello, close the kitchen curtains.");
    assert!(!GreetingRule::new().interpret(&mut ctx1));
    assert!(!ctx1.trace.iter().any(|e| e.rule == "punctuation"));

    // Assistant present but its punctuation missing.
    let mut ctx2 = ctx("hello siri close the kitchen curtains.");
    assert!(!GreetingRule::new().interpret(&mut ctx2));
    assert!(ctx2.trace.iter().any(|e| e.rule == "punctuation" && !e.matched));
}

#[test]
fn action_verb_gates_everything_after_it() {
    let mut ctx = ctx("please close the kitchen curtains.");
    assert!(!ActionClauseRule::new().interpret(&mut ctx));
    // The device rule never ran.
    assert!(!ctx.trace.iter().any(|e| e.rule == "device"));
}

#[test]
fn device_gate_stops_unknown_devices() {
    let mut ctx = ctx("close the bathroom mirror.");
    assert!(!ActionClauseRule::new().interpret(&mut ctx));
    assert!(ctx.device_nickname.is_none());
    // Unknown device is a soft negative at the parse level, not a fault.
    assert!(ctx.trace.iter().any(|e| e.rule == "device" && !e.matched));
}

#[test]
fn immediate_punctuation_skips_the_fallback() {
    let mut ctx = ctx("close the kitchen curtains.");
    assert!(ActionClauseRule::new().interpret(&mut ctx));
    let punctuation_attempts = ctx
        .trace
        .iter()
        .filter(|e| e.rule == "punctuation")
        .count();
    assert_eq!(punctuation_attempts, 1);
    assert!(ctx.params.is_empty());
}

#[test]
fn fallback_parses_parameter_clause_then_punctuation() {
    let mut ctx = ctx("turn-on the garden sprinkler for 20 mins.");
    assert!(ActionClauseRule::new().interpret(&mut ctx));
    assert_eq!(ctx.params.duration.as_deref(), Some("20 mins"));
    let punctuation_attempts = ctx
        .trace
        .iter()
        .filter(|e| e.rule == "punctuation")
        .count();
    assert_eq!(punctuation_attempts, 2);
}

#[test]
fn fallback_reattempts_punctuation_even_without_clause() {
    // Preposition fails, so the params rules never run, yet punctuation is
    // attempted a second time and decides the clause.
    let mut ctx = ctx("turn-on the garden sprinkler please.");
    assert!(!ActionClauseRule::new().interpret(&mut ctx));
    let punctuation_attempts = ctx
        .trace
        .iter()
        .filter(|e| e.rule == "punctuation")
        .count();
    assert_eq!(punctuation_attempts, 2);
    assert!(!ctx.trace.iter().any(|e| e.rule == "duration"));
}

#[test]
fn fallback_preposition_without_valid_clause_fails() {
    // The preposition matches and both parameter forms fail; the final
    // punctuation attempt runs against the unconsumed tail and fails.
    let mut ctx = ctx("turn-on the garden sprinkler for a while.");
    assert!(!ActionClauseRule::new().interpret(&mut ctx));
    assert!(ctx.trace.iter().any(|e| e.rule == "duration" && !e.matched));
    assert!(ctx.trace.iter().any(|e| e.rule == "time-period" && !e.matched));
}

#[test]
fn duration_is_tried_before_time_period() {
    let mut ctx = ctx("set the alarm for tomorrow 6am.");
    assert!(ActionClauseRule::new().interpret(&mut ctx));
    let rules: Vec<_> = ctx
        .trace
        .iter()
        .filter(|e| e.rule == "duration" || e.rule == "time-period")
        .map(|e| (e.rule, e.matched))
        .collect();
    assert_eq!(rules, vec![("duration", false), ("time-period", true)]);
}

#[test]
fn command_root_is_greeting_then_action() {
    let mut ctx = ctx("Hey Siri! Turn-off the kitchen lights.");
    assert!(CommandRule::new().interpret(&mut ctx));
    assert_eq!(ctx.assistant.as_deref(), Some("Siri"));
    assert_eq!(ctx.action, ActionKind::TurnOff);
    assert_eq!(ctx.device_kind, Some(DeviceKind::LightingSystem));
}

#[test]
fn command_stops_at_failed_greeting() {
    let mut ctx = ctx("Turn-off the kitchen lights.");
    assert!(!CommandRule::new().interpret(&mut ctx));
    assert!(!ctx.trace.iter().any(|e| e.rule == "action-verb"));
}
