//! Failure-message reconciliation.
//!
//! A checked procedure runs against a private [`AssertionRecorder`]. Its
//! outcomes never reach a real test failure. Afterwards every expected
//! message is reconciled on its own against the same fixed outcome list,
//! and each mismatch becomes one [`SyntheticFailure`] handed to the
//! reporter.

use crate::failure::{FailureReporter, MismatchKind, SyntheticFailure};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};
use verdict_types::{
    AssertionContext, AssertionHandler, AssertionRecorder, Outcome, SourceLocation,
    NIL_HINT_SUFFIX,
};

/// Where a mismatch is attributed, and whether the last recorded outcome
/// may take over that attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// The reconciler's call site.
    pub location: SourceLocation,
    /// Use the last recorded outcome's location instead, when one exists.
    pub prefer_original_source_location: bool,
}

impl ReconcileOptions {
    /// Options attributed to the caller.
    #[track_caller]
    pub fn here() -> Self {
        Self::at(SourceLocation::caller())
    }

    pub fn at(location: SourceLocation) -> Self {
        Self {
            location,
            prefer_original_source_location: false,
        }
    }

    pub fn prefer_original_source_location(mut self, prefer: bool) -> Self {
        self.prefer_original_source_location = prefer;
        self
    }

    fn resolve_location(&self, last: Option<&Outcome>) -> SourceLocation {
        match last {
            Some(outcome) if self.prefer_original_source_location => outcome.location().clone(),
            _ => self.location.clone(),
        }
    }
}

/// Verdict for one expected message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    Satisfied,
    Mismatch(SyntheticFailure),
}

impl Reconciliation {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    pub fn into_failure(self) -> Option<SyntheticFailure> {
        match self {
            Self::Satisfied => None,
            Self::Mismatch(failure) => Some(failure),
        }
    }
}

/// Reconcile one expected message against recorded outcomes.
///
/// Satisfied when any outcome failed with exactly `expected` as its text.
/// Otherwise the last outcome decides the mismatch kind: a failing last
/// outcome means the text differs, anything else means no failure occurred.
pub fn reconcile_message(
    expected: &str,
    outcomes: &[Outcome],
    options: &ReconcileOptions,
) -> Reconciliation {
    if outcomes
        .iter()
        .any(|outcome| outcome.failed() && outcome.message() == expected)
    {
        return Reconciliation::Satisfied;
    }

    let last = outcomes.last();
    let kind = match last {
        Some(outcome) if outcome.failed() => MismatchKind::WrongMessage {
            actual: outcome.message().to_string(),
            expected: expected.to_string(),
        },
        _ => MismatchKind::MissingFailure {
            expected: expected.to_string(),
        },
    };

    Reconciliation::Mismatch(SyntheticFailure::new(kind, options.resolve_location(last)))
}

/// Reconcile every expected message, in order, and collect the mismatches.
pub fn reconcile<S: AsRef<str>>(
    expected: &[S],
    outcomes: &[Outcome],
    options: &ReconcileOptions,
) -> Vec<SyntheticFailure> {
    expected
        .iter()
        .filter_map(|message| {
            let message = message.as_ref();
            debug!(expected = message, outcomes = outcomes.len(), "reconciling failure message");
            let failure = reconcile_message(message, outcomes, options).into_failure()?;
            warn!(location = %failure.location, "{}", failure.kind);
            Some(failure)
        })
        .collect()
}

/// Value a checked procedure may return.
///
/// `()` never adds an outcome. `Err(e)` is recorded as a failure, the way a
/// thrown error would be.
pub trait CheckResult {
    fn into_error(self) -> Option<String>;
}

impl CheckResult for () {
    fn into_error(self) -> Option<String> {
        None
    }
}

impl<E: fmt::Display> CheckResult for Result<(), E> {
    fn into_error(self) -> Option<String> {
        self.err().map(|e| e.to_string())
    }
}

/// Run `check` against a fresh recorder and return everything it recorded.
///
/// Errors returned by `check` and panics raised inside it become failing
/// outcomes attributed to `location`.
pub fn record_assertions<F, C>(location: &SourceLocation, check: F) -> AssertionRecorder
where
    F: FnOnce(&mut AssertionContext<'_>) -> C,
    C: CheckResult,
{
    let mut recorder = AssertionRecorder::new();
    let result = {
        let mut ctx = AssertionContext::new(&mut recorder);
        panic::catch_unwind(AssertUnwindSafe(|| check(&mut ctx).into_error()))
    };

    match result {
        Ok(None) => {}
        Ok(Some(error)) => {
            let message = format!("unexpected error thrown: <{}>", error);
            recorder.assert(false, &message, location);
        }
        Err(payload) => {
            let message = format!("unexpected panic: <{}>", panic_message(&*payload));
            recorder.assert(false, &message, location);
        }
    }

    recorder
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Run `check` and report one synthetic failure for every expected message
/// it did not fail with.
pub fn fails_with_error_messages<R, S, F, C>(
    reporter: &mut R,
    expected: &[S],
    options: ReconcileOptions,
    check: F,
) where
    R: FailureReporter + ?Sized,
    S: AsRef<str>,
    F: FnOnce(&mut AssertionContext<'_>) -> C,
    C: CheckResult,
{
    let recorder = record_assertions(&options.location, check);
    for failure in reconcile(expected, recorder.outcomes(), &options) {
        reporter.report(failure);
    }
}

/// Single-message form of [`fails_with_error_messages`].
pub fn fails_with_error_message<R, F, C>(
    reporter: &mut R,
    expected: &str,
    options: ReconcileOptions,
    check: F,
) where
    R: FailureReporter + ?Sized,
    F: FnOnce(&mut AssertionContext<'_>) -> C,
    C: CheckResult,
{
    fails_with_error_messages(reporter, &[expected], options, check);
}

/// Like [`fails_with_error_message`], for matchers that received a nil
/// actual value. The nil hint is appended to `expected` first.
pub fn fails_with_error_message_for_nil<R, F, C>(
    reporter: &mut R,
    expected: &str,
    options: ReconcileOptions,
    check: F,
) where
    R: FailureReporter + ?Sized,
    F: FnOnce(&mut AssertionContext<'_>) -> C,
    C: CheckResult,
{
    let expected = format!("{}{}", expected, NIL_HINT_SUFFIX);
    fails_with_error_message(reporter, &expected, options, check);
}
