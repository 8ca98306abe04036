//! Bounded per-parse diagnostic trace.
//!
//! Every rule attempt is recorded so a failed command can be inspected after
//! the fact. The buffer is bounded; a runaway grammar cannot grow it without
//! limit.

use std::collections::VecDeque;
use std::fmt;

/// One rule attempt during a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// Name of the rule that ran.
    pub rule: &'static str,
    /// Whether the rule's pattern matched.
    pub matched: bool,
    /// The literal consumed from the input, if the rule matched one.
    pub literal: Option<String>,
    /// The unconsumed suffix after the attempt.
    pub rest: String,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            let literal = self.literal.as_deref().unwrap_or("");
            write!(f, "{:<12} matched {:?}, rest {:?}", self.rule, literal, self.rest)
        } else {
            write!(f, "{:<12} no match, rest {:?}", self.rule, self.rest)
        }
    }
}

/// A bounded buffer of rule attempts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseTrace {
    events: VecDeque<TraceEvent>,
}

impl ParseTrace {
    /// Maximum events retained; the oldest are evicted past this.
    pub const MAX_EVENTS: usize = 256;

    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event, evicting the oldest if the buffer is full.
    pub fn record(&mut self, event: TraceEvent) {
        if self.events.len() == Self::MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over recorded events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceEvent> {
        self.events.iter()
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.back()
    }

    /// Counts the events whose rule matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.events.iter().filter(|e| e.matched).count()
    }

    /// Returns the literals consumed by matching rules, in match order.
    #[must_use]
    pub fn consumed_literals(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.matched)
            .filter_map(|e| e.literal.as_deref())
            .collect()
    }
}

impl fmt::Display for ParseTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
