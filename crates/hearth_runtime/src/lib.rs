//! Command hub, REPL, and CLI for Hearth.
//!
//! This crate provides:
//! - [`CommandHub`] - Accepts one voice command at a time, parses it against
//!   the connected devices, and dispatches the result
//! - [`demo`] - The demo household and command script
//! - [`Repl`] - Interactive loop for issuing commands from a terminal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod hub;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use hub::{CommandHub, CommandOutcome};
pub use repl::Repl;
