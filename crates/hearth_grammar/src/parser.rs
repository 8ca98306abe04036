//! The parser entry point.
//!
//! Ties a device snapshot to the rule tree: one call, one fresh context, one
//! result. The parser holds no interior mutability, so independent parses
//! may share it freely.

use crate::context::{DeviceSnapshot, ParseContext};
use crate::instruction::Instruction;
use crate::rules::{CommandRule, Rule};
use crate::trace::ParseTrace;

/// Outcome of parsing one command.
///
/// A failed match is an ordinary outcome, not an error: unaddressed
/// commands and unknown devices land here routinely.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseResult {
    /// The command matched the grammar; an instruction is ready.
    Matched(Instruction),
    /// The command did not match; nothing was produced.
    NoMatch,
}

impl ParseResult {
    /// Returns the instruction, if the parse matched.
    #[must_use]
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Self::Matched(instruction) => Some(instruction),
            Self::NoMatch => None,
        }
    }

    /// Returns true if the parse matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Parses free-form commands against a fixed device snapshot.
#[derive(Clone, Debug)]
pub struct CommandParser {
    devices: DeviceSnapshot,
    root: CommandRule,
}

impl CommandParser {
    /// Creates a parser over the given snapshot.
    #[must_use]
    pub fn new(devices: DeviceSnapshot) -> Self {
        Self {
            devices,
            root: CommandRule::new(),
        }
    }

    /// The snapshot this parser matches device names against.
    #[must_use]
    pub fn devices(&self) -> &DeviceSnapshot {
        &self.devices
    }

    /// Parses one command.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        self.parse_traced(input).0
    }

    /// Parses one command and returns the rule-attempt trace alongside.
    #[must_use]
    pub fn parse_traced(&self, input: &str) -> (ParseResult, ParseTrace) {
        if input.trim().is_empty() {
            return (ParseResult::NoMatch, ParseTrace::new());
        }

        let mut ctx = ParseContext::new(input, self.devices.clone());
        let matched = self.root.interpret(&mut ctx);

        let result = if matched {
            match ctx.instruction() {
                Some(instruction) => ParseResult::Matched(instruction),
                None => ParseResult::NoMatch,
            }
        } else {
            ParseResult::NoMatch
        };

        (result, ctx.trace)
    }
}
