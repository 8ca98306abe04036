//! Appliance kinds and their capability sets.
//!
//! Each device kind is a variant carrying its own capability implementation.
//! Capabilities a kind does not support return an explicit
//! [`ActionOutcome::Unsupported`] rather than silently doing nothing, so
//! callers (and tests) can tell an inert action from a performed one.

use std::fmt;

use hearth_foundation::{ActionKind, ActionParams, DeviceKind};

/// What a device did with a requested action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was performed; the payload describes what happened.
    Done(String),
    /// The device does not support this action. Not an error.
    Unsupported,
}

impl ActionOutcome {
    /// Returns true if the action was performed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(description) => write!(f, "{description}"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// The capability set a device may implement.
///
/// Every method defaults to [`ActionOutcome::Unsupported`]; a device kind
/// overrides exactly the capabilities it has. [`Capabilities::perform`]
/// routes an [`ActionKind`] to the matching method.
pub trait Capabilities {
    /// Switch on.
    fn turn_on(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Switch off.
    fn turn_off(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Dispense food.
    fn feed(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Close.
    fn close(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Open.
    fn open(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Arm or program.
    fn set(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Prepare something.
    fn prepare(&self, params: &ActionParams) -> ActionOutcome {
        let _ = params;
        ActionOutcome::Unsupported
    }

    /// Routes an action to the matching capability.
    ///
    /// [`ActionKind::None`] cannot come out of a successful parse, but maps
    /// to `Unsupported` rather than panicking.
    fn perform(&self, action: ActionKind, params: &ActionParams) -> ActionOutcome {
        match action {
            ActionKind::TurnOn => self.turn_on(params),
            ActionKind::TurnOff => self.turn_off(params),
            ActionKind::Feed => self.feed(params),
            ActionKind::Close => self.close(params),
            ActionKind::Open => self.open(params),
            ActionKind::Set => self.set(params),
            ActionKind::Prepare => self.prepare(params),
            ActionKind::None => ActionOutcome::Unsupported,
        }
    }
}

/// Window curtains: open and close; turn-on is spoken shorthand for open.
#[derive(Clone, Debug)]
pub struct Curtains;

impl Capabilities for Curtains {
    fn close(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("closing the curtains".to_string())
    }

    fn open(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("opening the curtains".to_string())
    }

    fn turn_on(&self, params: &ActionParams) -> ActionOutcome {
        self.open(params)
    }
}

/// Air conditioning: on and off.
#[derive(Clone, Debug)]
pub struct AirConditioning;

impl Capabilities for AirConditioning {
    fn turn_on(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("turning on".to_string())
    }

    fn turn_off(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("turning off".to_string())
    }
}

/// Automatic pet feeder: feed only.
#[derive(Clone, Debug)]
pub struct DogFeeder;

impl Capabilities for DogFeeder {
    fn feed(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("dispensing food".to_string())
    }
}

/// Dishwasher: a wash cycle is "set"; turn-on is shorthand for set.
#[derive(Clone, Debug)]
pub struct Dishwasher;

impl Capabilities for Dishwasher {
    fn set(&self, params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done(format!("washing dishes for {params}"))
    }

    fn turn_on(&self, params: &ActionParams) -> ActionOutcome {
        self.set(params)
    }
}

/// A lighting zone: on and off.
#[derive(Clone, Debug)]
pub struct LightingSystem;

impl Capabilities for LightingSystem {
    fn turn_on(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("lights on".to_string())
    }

    fn turn_off(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("lights off".to_string())
    }
}

/// Garden sprinkler: on (optionally timed) and off.
#[derive(Clone, Debug)]
pub struct Sprinkler;

impl Capabilities for Sprinkler {
    fn turn_on(&self, params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done(format!("watering for {params}"))
    }

    fn turn_off(&self, _params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done("stopping the water".to_string())
    }
}

/// Kitchen blender: prepare, usually scheduled.
#[derive(Clone, Debug)]
pub struct Blender;

impl Capabilities for Blender {
    fn prepare(&self, params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done(format!("scheduled to blend for {params}"))
    }
}

/// Alarm clock: set.
#[derive(Clone, Debug)]
pub struct AlarmClock;

impl Capabilities for AlarmClock {
    fn set(&self, params: &ActionParams) -> ActionOutcome {
        ActionOutcome::Done(format!("alarm set for {params}"))
    }
}

/// A connected appliance: a nickname plus the capability set of its kind.
#[derive(Clone, Debug)]
pub struct Appliance {
    nickname: String,
    kind: ApplianceKind,
}

/// The per-kind capability implementation behind an [`Appliance`].
#[derive(Clone, Debug)]
enum ApplianceKind {
    Curtains(Curtains),
    AirConditioning(AirConditioning),
    DogFeeder(DogFeeder),
    Dishwasher(Dishwasher),
    Lighting(LightingSystem),
    Sprinkler(Sprinkler),
    Blender(Blender),
    Alarm(AlarmClock),
}

impl Appliance {
    /// Connects window curtains under the given nickname.
    #[must_use]
    pub fn curtains(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Curtains(Curtains),
        }
    }

    /// Connects an air-conditioning unit.
    #[must_use]
    pub fn air_conditioning(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::AirConditioning(AirConditioning),
        }
    }

    /// Connects a pet feeder.
    #[must_use]
    pub fn dog_feeder(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::DogFeeder(DogFeeder),
        }
    }

    /// Connects a dishwasher.
    #[must_use]
    pub fn dishwasher(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Dishwasher(Dishwasher),
        }
    }

    /// Connects a lighting zone.
    #[must_use]
    pub fn lighting(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Lighting(LightingSystem),
        }
    }

    /// Connects a sprinkler.
    #[must_use]
    pub fn sprinkler(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Sprinkler(Sprinkler),
        }
    }

    /// Connects a blender.
    #[must_use]
    pub fn blender(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Blender(Blender),
        }
    }

    /// Connects an alarm clock.
    #[must_use]
    pub fn alarm(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            kind: ApplianceKind::Alarm(AlarmClock),
        }
    }

    /// The nickname this appliance answers to.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The capability tag the grammar resolves this appliance to.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match &self.kind {
            ApplianceKind::Curtains(_) => DeviceKind::Curtain,
            ApplianceKind::AirConditioning(_) => DeviceKind::AirConditioning,
            ApplianceKind::DogFeeder(_) => DeviceKind::DogFeeder,
            ApplianceKind::Dishwasher(_) => DeviceKind::Dishwasher,
            ApplianceKind::Lighting(_) => DeviceKind::LightingSystem,
            ApplianceKind::Sprinkler(_) => DeviceKind::Sprinkler,
            ApplianceKind::Blender(_) => DeviceKind::Blender,
            ApplianceKind::Alarm(_) => DeviceKind::Alarm,
        }
    }

    /// This appliance's capability set.
    #[must_use]
    pub fn capabilities(&self) -> &dyn Capabilities {
        match &self.kind {
            ApplianceKind::Curtains(c) => c,
            ApplianceKind::AirConditioning(c) => c,
            ApplianceKind::DogFeeder(c) => c,
            ApplianceKind::Dishwasher(c) => c,
            ApplianceKind::Lighting(c) => c,
            ApplianceKind::Sprinkler(c) => c,
            ApplianceKind::Blender(c) => c,
            ApplianceKind::Alarm(c) => c,
        }
    }

    /// Performs an action against this appliance's capability set.
    #[must_use]
    pub fn perform(&self, action: ActionKind, params: &ActionParams) -> ActionOutcome {
        self.capabilities().perform(action, params)
    }
}
