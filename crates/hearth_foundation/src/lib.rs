//! Action and device vocabulary types for Hearth.
//!
//! This crate provides:
//! - [`ActionKind`] - The closed set of actions a command can request
//! - [`ActionParams`] - Optional duration or schedule attached to an action
//! - [`DeviceKind`] - The capability tag classifying each appliance
//! - [`Error`] - Error types shared across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod device;
pub mod error;

pub use action::{ActionKind, ActionParams};
pub use device::DeviceKind;
pub use error::{Error, ErrorKind, Result};
