//! Synthetic failures and the reporters that receive them.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;
use verdict_types::SourceLocation;

/// Why an expected failure message was not satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchKind {
    /// A failure was recorded, but with different text.
    WrongMessage { actual: String, expected: String },
    /// No failing outcome was recorded at all.
    MissingFailure { expected: String },
}

impl MismatchKind {
    /// The expected message this mismatch is about.
    pub fn expected(&self) -> &str {
        match self {
            Self::WrongMessage { expected, .. } | Self::MissingFailure { expected } => expected,
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongMessage { actual, expected } => write!(
                f,
                "Got failure message: \"{}\", but expected \"{}\"",
                actual, expected
            ),
            Self::MissingFailure { .. } => write!(f, "expected failure message, but got none"),
        }
    }
}

/// A failure produced by the harness itself rather than by the code under
/// test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticFailure {
    pub kind: MismatchKind,
    pub location: SourceLocation,
}

impl SyntheticFailure {
    pub fn new(kind: MismatchKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for SyntheticFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Sink for synthetic failures, supplied by the surrounding test runner.
pub trait FailureReporter {
    fn report(&mut self, failure: SyntheticFailure);
}

impl<R: FailureReporter + ?Sized> FailureReporter for &mut R {
    fn report(&mut self, failure: SyntheticFailure) {
        (**self).report(failure);
    }
}

/// Fails the current `cargo test` by panicking with the failure text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    fn report(&mut self, failure: SyntheticFailure) {
        error!(location = %failure.location, "{}", failure.kind);
        panic!("{}", failure);
    }
}

/// Keeps every reported failure for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    failures: Vec<SyntheticFailure>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> &[SyntheticFailure] {
        &self.failures
    }

    /// Failure texts in report order.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(SyntheticFailure::message).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn into_failures(self) -> Vec<SyntheticFailure> {
        self.failures
    }

    pub fn clear(&mut self) {
        self.failures.clear();
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&mut self, failure: SyntheticFailure) {
        self.failures.push(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrong_message() -> SyntheticFailure {
        SyntheticFailure::new(
            MismatchKind::WrongMessage {
                actual: "expected 1, got 2".into(),
                expected: "expected 1, got 3".into(),
            },
            SourceLocation::new("tests/equal.rs", 12),
        )
    }

    #[test]
    fn test_wrong_message_text() {
        assert_eq!(
            wrong_message().message(),
            "Got failure message: \"expected 1, got 2\", but expected \"expected 1, got 3\""
        );
    }

    #[test]
    fn test_missing_failure_text() {
        let kind = MismatchKind::MissingFailure {
            expected: "anything".into(),
        };
        assert_eq!(kind.to_string(), "expected failure message, but got none");
        assert_eq!(kind.expected(), "anything");
    }

    #[test]
    fn test_display_includes_location() {
        let s = wrong_message().to_string();
        assert!(s.starts_with("tests/equal.rs:12: Got failure message"));
    }

    #[test]
    fn test_collecting_reporter() {
        let mut reporter = CollectingReporter::new();
        assert!(reporter.is_empty());

        reporter.report(wrong_message());
        assert_eq!(reporter.len(), 1);
        assert_eq!(reporter.failures()[0].kind.expected(), "expected 1, got 3");

        reporter.clear();
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_reporter_through_mut_ref() {
        fn send<R: FailureReporter>(mut reporter: R) {
            reporter.report(wrong_message());
        }

        let mut reporter = CollectingReporter::new();
        send(&mut reporter);
        send(&mut reporter);
        assert_eq!(reporter.len(), 2);
    }

    #[test]
    fn test_failure_serialization() {
        let failure = wrong_message();
        let json = serde_json::to_string(&failure).unwrap();
        assert!(json.contains(r#""WrongMessage""#));
        let restored: SyntheticFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, failure);

        let missing = SyntheticFailure::new(
            MismatchKind::MissingFailure {
                expected: "anything".into(),
            },
            SourceLocation::new("tests/equal.rs", 30),
        );
        let json = serde_json::to_string(&missing).unwrap();
        let restored: SyntheticFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.kind.expected(), "anything");
        assert_eq!(restored.location.line, 30);
    }

    #[test]
    #[should_panic(expected = "but expected \"expected 1, got 3\"")]
    fn test_panic_reporter_panics() {
        PanicReporter.report(wrong_message());
    }
}
