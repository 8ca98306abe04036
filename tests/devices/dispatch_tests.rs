//! Dispatch tests.

use hearth_devices::{ActionOutcome, Appliance, DeviceRegistry, dispatch};
use hearth_foundation::{ActionKind, ActionParams, DeviceKind, ErrorKind};
use hearth_grammar::Instruction;

fn registry() -> DeviceRegistry {
    let mut registry = DeviceRegistry::new();
    registry.connect(Appliance::dishwasher("Dish-washer"));
    registry.connect(Appliance::alarm("Alarm"));
    registry
}

fn instruction(nickname: &str, kind: DeviceKind, action: ActionKind) -> Instruction {
    Instruction {
        device_nickname: nickname.to_string(),
        device_kind: kind,
        action,
        params: ActionParams::none(),
    }
}

#[test]
fn dispatch_resolves_case_insensitively() {
    let report = dispatch(
        &registry(),
        &instruction("dish-WASHER", DeviceKind::Dishwasher, ActionKind::Set),
    )
    .expect("device is registered");

    // The report carries registry spelling.
    assert_eq!(report.nickname, "Dish-washer");
    assert_eq!(report.kind, DeviceKind::Dishwasher);
    assert_eq!(report.action, ActionKind::Set);
    assert!(report.outcome.is_done());
}

#[test]
fn dispatch_routes_aliased_actions() {
    // Turn-on against a dishwasher lands on its set handler.
    let report = dispatch(
        &registry(),
        &instruction("Dish-washer", DeviceKind::Dishwasher, ActionKind::TurnOn),
    )
    .expect("device is registered");

    assert_eq!(
        report.outcome,
        ActionOutcome::Done("washing dishes for now".to_string())
    );
}

#[test]
fn dispatch_surfaces_unsupported_without_error() {
    let report = dispatch(
        &registry(),
        &instruction("Alarm", DeviceKind::Alarm, ActionKind::Feed),
    )
    .expect("device is registered");

    assert_eq!(report.outcome, ActionOutcome::Unsupported);
}

#[test]
fn dispatch_errors_on_unknown_device() {
    // Only reachable when an instruction from one registry is dispatched
    // against another.
    let err = dispatch(
        &registry(),
        &instruction("Garden Sprinkler", DeviceKind::Sprinkler, ActionKind::TurnOn),
    )
    .expect_err("device is not registered");

    assert!(matches!(err.kind, ErrorKind::DeviceNotFound(name) if name == "Garden Sprinkler"));
}

#[test]
fn report_display_names_device_and_outcome() {
    let report = dispatch(
        &registry(),
        &instruction("Alarm", DeviceKind::Alarm, ActionKind::Set),
    )
    .expect("device is registered");

    assert_eq!(report.to_string(), "Alarm: alarm set for now");
}
