//! The demo household, driven end to end.

use hearth_devices::ActionOutcome;
use hearth_foundation::{ActionKind, DeviceKind};
use hearth_runtime::demo::{DEMO_SCRIPT, demo_hub};
use hearth_runtime::{CommandHub, CommandOutcome};

fn dispatched(hub: &mut CommandHub, command: &str) -> hearth_devices::DispatchReport {
    match hub.new_command(command).expect("dispatch cannot fail here") {
        CommandOutcome::Dispatched(report) => report,
        CommandOutcome::NoMatch => panic!("command {command:?} should have matched"),
    }
}

#[test]
fn greeted_command_turns_on_the_ac() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Hi Alexa! Turn-on the central AC.");
    assert_eq!(report.nickname, "Central AC");
    assert_eq!(report.kind, DeviceKind::AirConditioning);
    assert_eq!(report.action, ActionKind::TurnOn);
    assert_eq!(report.outcome, ActionOutcome::Done("turning on".to_string()));
}

#[test]
fn curtains_close_by_nickname() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Hi Alexa! Close the kitchen curtains.");
    assert_eq!(report.nickname, "Kitchen Curtains");
    assert_eq!(report.outcome, ActionOutcome::Done("closing the curtains".to_string()));
}

#[test]
fn dishwasher_turn_on_lands_on_set_with_duration() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Alexa! Turn-on the dish-washer for 1 hour.");
    assert_eq!(report.nickname, "Dish-washer");
    assert_eq!(report.action, ActionKind::TurnOn);
    assert_eq!(
        report.outcome,
        ActionOutcome::Done("washing dishes for 1 hour".to_string())
    );
}

#[test]
fn lights_turn_off_without_article() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Alexa! Turn-off kitchen lights.");
    assert_eq!(report.nickname, "Kitchen Lights");
    assert_eq!(report.outcome, ActionOutcome::Done("lights off".to_string()));
}

#[test]
fn unaddressed_sprinkler_command_is_ignored() {
    let mut hub = demo_hub();
    let outcome = hub
        .new_command("Turn-on the garden sprinkler for 20 mins.")
        .expect("no dispatch attempted");
    assert_eq!(outcome, CommandOutcome::NoMatch);
}

#[test]
fn second_feeder_is_selected_by_nickname() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Alexa! Feed my dog Ana.");
    assert_eq!(report.nickname, "Dog Ana");
    assert_eq!(report.outcome, ActionOutcome::Done("dispensing food".to_string()));
}

#[test]
fn blender_is_scheduled_for_a_named_period() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Alexa! Prepare the smoothie for tomorrow morning.");
    assert_eq!(report.nickname, "Smoothie");
    assert_eq!(
        report.outcome,
        ActionOutcome::Done("scheduled to blend for tomorrow morning".to_string())
    );
}

#[test]
fn alarm_is_set_for_a_clock_time() {
    let mut hub = demo_hub();
    let report = dispatched(&mut hub, "Alexa! Set the alarm for tomorrow 6am.");
    assert_eq!(report.nickname, "Alarm");
    assert_eq!(report.action, ActionKind::Set);
    assert_eq!(
        report.outcome,
        ActionOutcome::Done("alarm set for tomorrow 6am".to_string())
    );
}

#[test]
fn whole_script_has_exactly_one_ignored_command() {
    let mut hub = demo_hub();
    let mut ignored = 0;
    for command in DEMO_SCRIPT {
        match hub.new_command(command).expect("script never errors") {
            CommandOutcome::Dispatched(report) => {
                assert!(
                    report.outcome.is_done(),
                    "command {command:?} dispatched but was inert"
                );
            }
            CommandOutcome::NoMatch => ignored += 1,
        }
    }
    assert_eq!(ignored, 1);
}

#[test]
fn every_supported_verb_device_pair_dispatches() {
    // Addressed commands over supported pairs must invoke that capability.
    let pairs = [
        ("Turn-on", "central ac", "Central AC"),
        ("Turn-off", "backyard lights", "Backyard Lights"),
        ("Close", "john's room curtains", "John's Room Curtains"),
        ("Feed", "dog sonu", "Dog Sonu"),
        ("Prepare", "smoothie", "Smoothie"),
        ("Set", "alarm", "Alarm"),
    ];
    for (verb, spoken, registered) in pairs {
        let mut hub = demo_hub();
        let command = format!("Alexa! {verb} the {spoken}.");
        let report = dispatched(&mut hub, &command);
        assert_eq!(report.nickname, registered, "command {command:?}");
        assert_eq!(report.action, ActionKind::from_verb(verb));
        assert!(report.outcome.is_done(), "command {command:?} was inert");
    }
}
