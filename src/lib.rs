//! Hearth - voice command hub
//!
//! This crate re-exports all layers of the Hearth system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: hearth_runtime     — Command hub, REPL, CLI
//! Layer 2: hearth_devices     — Appliances, registry, dispatch
//! Layer 1: hearth_grammar     — Matchers, parse context, instructions
//! Layer 0: hearth_foundation  — Action/device vocabulary types, errors
//! ```

pub use hearth_devices as devices;
pub use hearth_foundation as foundation;
pub use hearth_grammar as grammar;
pub use hearth_runtime as runtime;
