//! # verdict-harness
//!
//! Test-support layer for matcher libraries: checks that a piece of
//! checked code fails with exactly the messages a test expects.
//!
//! ## Flow
//!
//! ```text
//!   checked closure ──► AssertionRecorder ──► reconcile() ──► FailureReporter
//!   (ctx.expect…)       ordered outcomes      one verdict      PanicReporter /
//!                                             per message      CollectingReporter
//! ```
//!
//! Outcomes recorded while the closure runs never fail the surrounding test
//! directly. Only the reconciler's own synthetic failures reach the
//! reporter, at most one per expected message.
//!
//! Alongside reconciliation the crate carries the fixtures such tests lean
//! on: `yyyy-MM-dd HH:mm:ss` timestamps ([`timestamp`]) and delayed actions
//! on a main runtime context ([`defer`]).

#![deny(unsafe_code)]

pub mod config;
pub mod defer;
pub mod error;
pub mod failure;
pub mod harness;
pub mod reconcile;
pub mod telemetry;
pub mod timestamp;

pub use config::HarnessConfig;
pub use defer::{defer_to_main, Deferred, MainContext, DEFAULT_DEFER_DELAY};
pub use error::{HarnessError, HarnessResult};
pub use failure::{
    CollectingReporter, FailureReporter, MismatchKind, PanicReporter, SyntheticFailure,
};
pub use harness::Harness;
pub use reconcile::{
    fails_with_error_message, fails_with_error_message_for_nil, fails_with_error_messages,
    reconcile, reconcile_message, record_assertions, CheckResult, ReconcileOptions,
    Reconciliation,
};
pub use telemetry::init_tracing;
pub use verdict_types::{AssertionContext, Outcome, SourceLocation, NIL_HINT_SUFFIX};
