//! Registry tests.

use hearth_devices::{Appliance, DeviceRegistry};
use hearth_foundation::DeviceKind;

fn registry() -> DeviceRegistry {
    let mut registry = DeviceRegistry::new();
    registry.connect(Appliance::curtains("John's Room Curtains"));
    registry.connect(Appliance::curtains("Kitchen Curtains"));
    registry.connect(Appliance::lighting("Kitchen Lights"));
    registry.connect(Appliance::alarm("Alarm"));
    registry
}

#[test]
fn connect_preserves_registration_order() {
    let names: Vec<_> = registry().iter().map(|d| d.nickname().to_string()).collect();
    assert_eq!(
        names,
        vec![
            "John's Room Curtains",
            "Kitchen Curtains",
            "Kitchen Lights",
            "Alarm"
        ]
    );
}

#[test]
fn lookup_is_case_insensitive_exact_match() {
    let registry = registry();
    assert!(registry.lookup("kitchen lights").is_some());
    assert!(registry.lookup("KITCHEN LIGHTS").is_some());
    // Exact match only; no prefix or substring lookup.
    assert!(registry.lookup("kitchen").is_none());
    assert!(registry.lookup("kitchen lights ").is_none());
}

#[test]
fn lookup_takes_first_registered_on_duplicates() {
    let mut registry = DeviceRegistry::new();
    registry.connect(Appliance::alarm("Bedside"));
    registry.connect(Appliance::lighting("bedside"));

    let found = registry.lookup("BEDSIDE").expect("should find");
    assert_eq!(found.kind(), DeviceKind::Alarm);
}

#[test]
fn snapshot_mirrors_the_registry() {
    let registry = registry();
    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), registry.len());
    for (candidate, device) in snapshot.iter().zip(registry.iter()) {
        assert_eq!(candidate.nickname, device.nickname());
        assert_eq!(candidate.kind, device.kind());
    }
}

#[test]
fn snapshots_are_independent_of_later_mutation() {
    let mut registry = registry();
    let before = registry.snapshot();
    registry.connect(Appliance::blender("Smoothie"));
    let after = registry.snapshot();

    assert_eq!(before.len(), 4);
    assert_eq!(after.len(), 5);
}

#[test]
fn empty_registry_behaves() {
    let registry = DeviceRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.lookup("anything").is_none());
    assert!(registry.snapshot().is_empty());
}
