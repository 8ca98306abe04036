//! End-to-end tests across all Hearth layers.
//!
//! Commands flow through the hub exactly as the runtime drives them:
//! snapshot, parse, dispatch.

mod demo_script_tests;
