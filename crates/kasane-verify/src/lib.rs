//! Kasane Verify
//!
//! Verification harness for composed configuration sequences. This crate
//! implements the layered-application semantics the external rule engine is
//! contracted to follow (effective rules, globals, and parser per file) and
//! a small fixture rule engine so the composition contract can be exercised
//! end to end: compose a sequence, lint a fixture, assert which diagnostics
//! appear.

pub mod engine;
pub mod harness;
pub mod resolve;

pub use engine::{Diagnostic, FixtureEngine};
pub use harness::LintReport;
pub use resolve::{
    applies_to, effective_globals, effective_parser, effective_rules, effective_severity,
    is_ignored,
};
