//! The device registry.
//!
//! An ordered collection of connected appliances. The grammar never sees the
//! registry itself; it gets an immutable snapshot of (nickname, kind) pairs,
//! so connecting devices mid-parse cannot disturb an in-flight command.

use hearth_grammar::{DeviceCandidate, DeviceSnapshot};

use crate::appliance::Appliance;

/// Ordered registry of connected appliances.
#[derive(Clone, Debug, Default)]
pub struct DeviceRegistry {
    devices: im::Vector<Appliance>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects an appliance at the end of the registration order.
    ///
    /// Registration order matters: the grammar's device alternation tries
    /// nicknames first-listed-first.
    pub fn connect(&mut self, appliance: Appliance) {
        self.devices.push_back(appliance);
    }

    /// Number of connected appliances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if no appliance is connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterates appliances in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.devices.iter()
    }

    /// Looks up an appliance by nickname, case-insensitively.
    #[must_use]
    pub fn lookup(&self, nickname: &str) -> Option<&Appliance> {
        self.devices
            .iter()
            .find(|d| d.nickname().eq_ignore_ascii_case(nickname))
    }

    /// Takes an ordered snapshot of (nickname, kind) pairs for the grammar.
    ///
    /// Cheap: the snapshot structurally shares with later snapshots of an
    /// unchanged registry.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.devices
            .iter()
            .map(|d| DeviceCandidate::new(d.nickname(), d.kind()))
            .collect()
    }
}
