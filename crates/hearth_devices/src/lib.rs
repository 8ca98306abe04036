//! Appliances, registry, and dispatch for Hearth.
//!
//! This crate provides:
//! - [`Appliance`] - One variant per connected device kind, each with its
//!   own capability set and explicit unsupported results
//! - [`DeviceRegistry`] - Ordered registry with case-insensitive lookup and
//!   cheap snapshots for the grammar
//! - [`dispatch`] - Resolves a parsed instruction to a device invocation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod appliance;
pub mod dispatch;
pub mod registry;

pub use appliance::{ActionOutcome, Appliance, Capabilities};
pub use dispatch::{DispatchReport, dispatch};
pub use registry::DeviceRegistry;
