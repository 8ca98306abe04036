//! Device capability tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies an appliance by the capability set it supports.
///
/// The grammar resolves a matched nickname to one of these tags; dispatch
/// uses the tag's appliance to decide which actions are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceKind {
    /// Window curtains (open/close).
    Curtain,
    /// Air conditioning unit (on/off).
    AirConditioning,
    /// Automatic pet feeder (feed).
    DogFeeder,
    /// Dishwasher (set a wash cycle).
    Dishwasher,
    /// A lighting zone (on/off).
    LightingSystem,
    /// Garden sprinkler (on/off, usually timed).
    Sprinkler,
    /// Kitchen blender (prepare, usually scheduled).
    Blender,
    /// Alarm clock (set).
    Alarm,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Curtain => "curtain",
            Self::AirConditioning => "air-conditioning",
            Self::DogFeeder => "dog-feeder",
            Self::Dishwasher => "dishwasher",
            Self::LightingSystem => "lighting-system",
            Self::Sprinkler => "sprinkler",
            Self::Blender => "blender",
            Self::Alarm => "alarm",
        };
        write!(f, "{name}")
    }
}
