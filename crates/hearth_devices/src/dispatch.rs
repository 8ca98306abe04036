//! Instruction dispatch.
//!
//! Resolves a parsed instruction against the registry and invokes the
//! device's capability set.

use std::fmt;

use hearth_foundation::{ActionKind, DeviceKind, Error, Result};
use hearth_grammar::Instruction;

use crate::appliance::ActionOutcome;
use crate::registry::DeviceRegistry;

/// What dispatching one instruction did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport {
    /// Nickname of the device that was invoked.
    pub nickname: String,
    /// The device's capability tag.
    pub kind: DeviceKind,
    /// The action that was requested.
    pub action: ActionKind,
    /// What the device did with it.
    pub outcome: ActionOutcome,
}

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.nickname, self.outcome)
    }
}

/// Resolves the instruction's device by nickname (case-insensitive) and
/// performs the action.
///
/// # Errors
///
/// Returns [`hearth_foundation::ErrorKind::DeviceNotFound`] if the nickname
/// is absent from the registry. Unreachable when the instruction was parsed
/// against this registry's own snapshot; callers mixing registries can
/// observe it.
pub fn dispatch(registry: &DeviceRegistry, instruction: &Instruction) -> Result<DispatchReport> {
    let device = registry
        .lookup(&instruction.device_nickname)
        .ok_or_else(|| Error::device_not_found(&instruction.device_nickname))?;

    let outcome = device.perform(instruction.action, &instruction.params);

    Ok(DispatchReport {
        nickname: device.nickname().to_string(),
        kind: device.kind(),
        action: instruction.action,
        outcome,
    })
}
