//! # verdict-types
//!
//! Core vocabulary shared by the Verdict crates.
//!
//! Checked code never talks to a global assertion handler. It receives an
//! [`AssertionContext`] that forwards every assertion to whichever
//! [`AssertionHandler`] the caller installed, usually an
//! [`AssertionRecorder`] owned by a single reconciliation run.
//!
//! ```text
//!   checked closure ──assert()──► AssertionContext ──► AssertionHandler
//!                                                        (AssertionRecorder)
//!                                                              │
//!                                                              ▼
//!                                                     ordered Vec<Outcome>
//! ```

#![deny(unsafe_code)]

pub mod context;
pub mod location;
pub mod outcome;

pub use context::{AssertionContext, AssertionHandler, AssertionRecorder};
pub use location::SourceLocation;
pub use outcome::Outcome;

/// Suffix appended to failure messages when a matcher received a nil actual
/// value it cannot evaluate.
pub const NIL_HINT_SUFFIX: &str = " (use beNil() to match nils)";
