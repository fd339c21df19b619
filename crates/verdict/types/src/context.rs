//! Assertion handlers and the explicit context passed into checked code.

use crate::location::SourceLocation;
use crate::outcome::Outcome;

/// Sink for assertion results.
pub trait AssertionHandler {
    fn assert(&mut self, succeeded: bool, message: &str, location: &SourceLocation);
}

/// Append-only handler that keeps every outcome in recording order.
#[derive(Debug, Clone, Default)]
pub struct AssertionRecorder {
    outcomes: Vec<Outcome>,
}

impl AssertionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes, oldest first.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Only the failing outcomes, oldest first.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.failed())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }
}

impl AssertionHandler for AssertionRecorder {
    fn assert(&mut self, succeeded: bool, message: &str, location: &SourceLocation) {
        self.outcomes
            .push(Outcome::new(succeeded, message, location.clone()));
    }
}

/// Handle through which checked code reports assertions.
///
/// The context borrows its handler for the duration of one checked
/// procedure, so two runs can never share a recorder by accident.
pub struct AssertionContext<'a> {
    handler: &'a mut dyn AssertionHandler,
}

impl<'a> AssertionContext<'a> {
    pub fn new(handler: &'a mut dyn AssertionHandler) -> Self {
        Self { handler }
    }

    /// Record `succeeded` with `message`, attributed to the caller.
    #[track_caller]
    pub fn assert(&mut self, succeeded: bool, message: impl AsRef<str>) {
        let location = SourceLocation::caller();
        self.assert_at(succeeded, message, &location);
    }

    /// Record a failure attributed to the caller.
    #[track_caller]
    pub fn fail(&mut self, message: impl AsRef<str>) {
        let location = SourceLocation::caller();
        self.assert_at(false, message, &location);
    }

    /// Record a success attributed to the caller.
    #[track_caller]
    pub fn succeed(&mut self) {
        let location = SourceLocation::caller();
        self.assert_at(true, "", &location);
    }

    pub fn assert_at(
        &mut self,
        succeeded: bool,
        message: impl AsRef<str>,
        location: &SourceLocation,
    ) {
        self.handler.assert(succeeded, message.as_ref(), location);
    }
}
