//! Action kinds and parameters.
//!
//! An [`ActionKind`] is what a command asks a device to do; [`ActionParams`]
//! carries the optional trailing clause ("for 30 mins", "for tomorrow 6am")
//! that qualifies it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of actions the command dialect can express.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionKind {
    /// No action recognized yet.
    #[default]
    None,
    /// Switch a device on.
    TurnOn,
    /// Switch a device off.
    TurnOff,
    /// Dispense food.
    Feed,
    /// Close a device (curtains).
    Close,
    /// Open a device (curtains).
    Open,
    /// Prepare something (blender).
    Prepare,
    /// Arm or program a device (alarm, dishwasher).
    Set,
}

impl ActionKind {
    /// Maps a spoken verb to its action kind, case-insensitively.
    ///
    /// Unrecognized verbs map to [`ActionKind::None`].
    #[must_use]
    pub fn from_verb(verb: &str) -> Self {
        match verb.to_lowercase().as_str() {
            "turn-on" => Self::TurnOn,
            "turn-off" => Self::TurnOff,
            "feed" => Self::Feed,
            "close" => Self::Close,
            "open" => Self::Open,
            "prepare" => Self::Prepare,
            "set" => Self::Set,
            _ => Self::None,
        }
    }

    /// Returns the canonical spoken form of this action.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TurnOn => "turn-on",
            Self::TurnOff => "turn-off",
            Self::Feed => "feed",
            Self::Close => "close",
            Self::Open => "open",
            Self::Prepare => "prepare",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// The optional parameter clause attached to an action.
///
/// At most one of `duration` and `time_period` is populated: the grammar
/// tries the duration form first and only attempts the schedule form when
/// that fails. Absence of both is a valid, unscheduled action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionParams {
    /// A duration literal such as "30 mins" or "1 hour".
    pub duration: Option<String>,
    /// A schedule literal such as "tomorrow 6am" or "today evening".
    pub time_period: Option<String>,
}

impl ActionParams {
    /// Creates empty parameters (an unscheduled action).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates parameters carrying a duration literal.
    #[must_use]
    pub fn duration(literal: impl Into<String>) -> Self {
        Self {
            duration: Some(literal.into()),
            time_period: None,
        }
    }

    /// Creates parameters carrying a schedule literal.
    #[must_use]
    pub fn time_period(literal: impl Into<String>) -> Self {
        Self {
            duration: None,
            time_period: Some(literal.into()),
        }
    }

    /// Returns whichever literal is populated, if any.
    #[must_use]
    pub fn schedule(&self) -> Option<&str> {
        debug_assert!(
            self.duration.is_none() || self.time_period.is_none(),
            "duration and time_period are mutually exclusive"
        );
        self.duration.as_deref().or(self.time_period.as_deref())
    }

    /// Returns true if neither a duration nor a schedule is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duration.is_none() && self.time_period.is_none()
    }
}

impl fmt::Display for ActionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.schedule() {
            Some(literal) => write!(f, "{literal}"),
            None => write!(f, "now"),
        }
    }
}
