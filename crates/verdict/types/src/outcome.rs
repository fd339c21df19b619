//! Recorded assertion outcomes.

use crate::location::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded assertion result.
///
/// Fields are private so an outcome cannot change after it has been
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    succeeded: bool,
    message: String,
    location: SourceLocation,
}

impl Outcome {
    pub fn new(succeeded: bool, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            succeeded,
            message: message.into(),
            location,
        }
    }

    /// A passing assertion.
    pub fn success(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(true, message, location)
    }

    /// A failing assertion.
    pub fn failure(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(false, message, location)
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn failed(&self) -> bool {
        !self.succeeded
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.succeeded { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}: {}", status, self.location, self.message)
    }
}
