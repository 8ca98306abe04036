//! The structured result of a successful parse.

use std::fmt;

use hearth_foundation::{ActionKind, ActionParams, DeviceKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed command, ready for dispatch.
///
/// Derived read-only from the parse context at completion; two parses of the
/// same command against the same snapshot yield structurally equal
/// instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    /// The target device's nickname, in registry spelling.
    pub device_nickname: String,
    /// The target device's capability tag.
    pub device_kind: DeviceKind,
    /// The requested action.
    pub action: ActionKind,
    /// The optional duration or schedule qualifying the action.
    pub params: ActionParams,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.action, self.device_nickname, self.params
        )
    }
}
