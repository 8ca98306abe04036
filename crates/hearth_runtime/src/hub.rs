//! The command hub.
//!
//! Accepts voice commands one at a time. Each command gets a fresh snapshot
//! of the registry and a fresh parse; the command is parsed and dispatched
//! to completion before the next is accepted.

use hearth_devices::{Appliance, DeviceRegistry, DispatchReport, dispatch};
use hearth_foundation::Result;
use hearth_grammar::{CommandParser, ParseResult, ParseTrace};

/// What the hub did with one command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// The command matched and the device was invoked.
    Dispatched(DispatchReport),
    /// The command did not match the grammar; nothing was actioned.
    NoMatch,
}

impl CommandOutcome {
    /// Returns the dispatch report, if the command was dispatched.
    #[must_use]
    pub fn report(&self) -> Option<&DispatchReport> {
        match self {
            Self::Dispatched(report) => Some(report),
            Self::NoMatch => None,
        }
    }
}

/// Connects appliances to the voice-command grammar.
#[derive(Clone, Debug, Default)]
pub struct CommandHub {
    registry: DeviceRegistry,
    last_trace: Option<ParseTrace>,
}

impl CommandHub {
    /// Creates a hub with no devices connected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hub over an existing registry.
    #[must_use]
    pub fn with_registry(registry: DeviceRegistry) -> Self {
        Self {
            registry,
            last_trace: None,
        }
    }

    /// Connects an appliance.
    pub fn connect(&mut self, appliance: Appliance) {
        self.registry.connect(appliance);
    }

    /// The connected devices.
    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// The parse trace of the most recent command, if any.
    #[must_use]
    pub fn last_trace(&self) -> Option<&ParseTrace> {
        self.last_trace.as_ref()
    }

    /// Accepts one voice command: snapshot, parse, dispatch.
    ///
    /// A non-matching command is an ordinary [`CommandOutcome::NoMatch`],
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only on a registry-consistency failure during
    /// dispatch, which cannot happen through this entry point because the
    /// parse and the dispatch use the same registry.
    pub fn new_command(&mut self, command: &str) -> Result<CommandOutcome> {
        let parser = CommandParser::new(self.registry.snapshot());
        let (result, trace) = parser.parse_traced(command);
        self.last_trace = Some(trace);

        match result {
            ParseResult::Matched(instruction) => {
                let report = dispatch(&self.registry, &instruction)?;
                Ok(CommandOutcome::Dispatched(report))
            }
            ParseResult::NoMatch => Ok(CommandOutcome::NoMatch),
        }
    }
}
