//! Mutable parse state threaded through the rule tree.
//!
//! A [`ParseContext`] is created fresh per command, lives for one parse, and
//! is discarded afterward. The only state shared with the outside world is
//! the device snapshot it borrows its alternation from, and that snapshot is
//! immutable for the context's whole lifetime.

use hearth_foundation::{ActionKind, ActionParams, DeviceKind};

use crate::instruction::Instruction;
use crate::trace::{ParseTrace, TraceEvent};

/// One connected device as the grammar sees it: a nickname to match and the
/// capability tag to resolve it to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCandidate {
    /// The device's spoken nickname, as registered.
    pub nickname: String,
    /// The capability tag for dispatch.
    pub kind: DeviceKind,
}

impl DeviceCandidate {
    /// Creates a candidate.
    #[must_use]
    pub fn new(nickname: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            nickname: nickname.into(),
            kind,
        }
    }
}

/// An ordered, immutable view of the connected devices, cheap to clone.
///
/// Snapshotted once per command; a parse never observes registry mutation.
pub type DeviceSnapshot = im::Vector<DeviceCandidate>;

/// The mutable cursor and accumulated fields of a single parse.
#[derive(Clone, Debug)]
pub struct ParseContext {
    /// The trimmed original command.
    command: String,
    /// The unconsumed suffix. Always a suffix of `command`; never grows.
    remaining: String,
    /// Devices available for the dynamic device alternation.
    devices: DeviceSnapshot,

    /// Nickname of the matched device, in registry spelling.
    pub device_nickname: Option<String>,
    /// Capability tag of the matched device.
    pub device_kind: Option<DeviceKind>,
    /// The recognized action.
    pub action: ActionKind,
    /// The recognized parameter clause.
    pub params: ActionParams,

    /// Greeting word, recorded for traceability only.
    pub greeting: Option<String>,
    /// Assistant name the command was addressed to, for traceability only.
    pub assistant: Option<String>,

    /// Diagnostic trace of every rule attempt.
    pub trace: ParseTrace,
}

impl ParseContext {
    /// Creates a fresh context for one command against a device snapshot.
    #[must_use]
    pub fn new(command: &str, devices: DeviceSnapshot) -> Self {
        let trimmed = command.trim().to_string();
        Self {
            remaining: trimmed.clone(),
            command: trimmed,
            devices,
            device_nickname: None,
            device_kind: None,
            action: ActionKind::None,
            params: ActionParams::none(),
            greeting: None,
            assistant: None,
            trace: ParseTrace::new(),
        }
    }

    /// The trimmed original command.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The unconsumed suffix the next rule will match against.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// The device snapshot this parse matches nicknames against.
    #[must_use]
    pub fn devices(&self) -> &DeviceSnapshot {
        &self.devices
    }

    /// Strips `len` matched bytes and any following whitespace from the
    /// front of the unconsumed suffix.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a character boundary of the suffix; callers
    /// pass lengths produced by matching against the suffix itself.
    pub(crate) fn consume(&mut self, len: usize) {
        self.remaining = self.remaining[len..].trim_start().to_string();
    }

    /// Records a rule attempt in the trace.
    pub(crate) fn record(&mut self, rule: &'static str, matched: bool, literal: Option<&str>) {
        self.trace.record(TraceEvent {
            rule,
            matched,
            literal: literal.map(ToString::to_string),
            rest: self.remaining.clone(),
        });
    }

    /// Derives the instruction once the mandatory fields are populated.
    ///
    /// Returns `None` if the parse did not reach a device match.
    #[must_use]
    pub fn instruction(&self) -> Option<Instruction> {
        let device_nickname = self.device_nickname.clone()?;
        let device_kind = self.device_kind?;
        Some(Instruction {
            device_nickname,
            device_kind,
            action: self.action,
            params: self.params.clone(),
        })
    }
}
