//! Built-in matchers.

use std::fmt;

/// Result of evaluating a matcher against an actual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// The actual value satisfies the matcher.
    Matches,
    /// The actual value does not satisfy the matcher.
    DoesNotMatch,
    /// The matcher cannot judge a nil actual value. Fails for both `to` and
    /// `to_not`.
    NilActual,
}

/// A predicate over an optional actual value.
pub trait Matcher<T> {
    /// Text that follows "expected to" in a message, e.g. `equal <2>`.
    fn description(&self) -> String;

    fn evaluate(&self, actual: Option<&T>) -> MatchStatus;
}

fn status_from(matches: bool) -> MatchStatus {
    if matches {
        MatchStatus::Matches
    } else {
        MatchStatus::DoesNotMatch
    }
}

/// Matches values equal to the expected one.
#[derive(Debug, Clone)]
pub struct Equal<T> {
    expected: T,
}

pub fn equal<T>(expected: T) -> Equal<T> {
    Equal { expected }
}

impl<T: PartialEq + fmt::Debug> Matcher<T> for Equal<T> {
    fn description(&self) -> String {
        format!("equal <{:?}>", self.expected)
    }

    fn evaluate(&self, actual: Option<&T>) -> MatchStatus {
        match actual {
            Some(value) => status_from(*value == self.expected),
            None => MatchStatus::NilActual,
        }
    }
}

/// Matches a missing actual value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeNil;

pub fn be_nil() -> BeNil {
    BeNil
}

impl<T> Matcher<T> for BeNil {
    fn description(&self) -> String {
        "be nil".to_string()
    }

    fn evaluate(&self, actual: Option<&T>) -> MatchStatus {
        status_from(actual.is_none())
    }
}

/// Matches one specific boolean.
#[derive(Debug, Clone, Copy)]
pub struct BeBool {
    expected: bool,
}

pub fn be_true() -> BeBool {
    BeBool { expected: true }
}

pub fn be_false() -> BeBool {
    BeBool { expected: false }
}

impl Matcher<bool> for BeBool {
    fn description(&self) -> String {
        format!("be {}", self.expected)
    }

    fn evaluate(&self, actual: Option<&bool>) -> MatchStatus {
        match actual {
            Some(value) => status_from(*value == self.expected),
            None => MatchStatus::NilActual,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BeGreaterThan<T> {
    bound: T,
}

pub fn be_greater_than<T>(bound: T) -> BeGreaterThan<T> {
    BeGreaterThan { bound }
}

impl<T: PartialOrd + fmt::Debug> Matcher<T> for BeGreaterThan<T> {
    fn description(&self) -> String {
        format!("be greater than <{:?}>", self.bound)
    }

    fn evaluate(&self, actual: Option<&T>) -> MatchStatus {
        match actual {
            Some(value) => status_from(*value > self.bound),
            None => MatchStatus::NilActual,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BeLessThan<T> {
    bound: T,
}

pub fn be_less_than<T>(bound: T) -> BeLessThan<T> {
    BeLessThan { bound }
}

impl<T: PartialOrd + fmt::Debug> Matcher<T> for BeLessThan<T> {
    fn description(&self) -> String {
        format!("be less than <{:?}>", self.bound)
    }

    fn evaluate(&self, actual: Option<&T>) -> MatchStatus {
        match actual {
            Some(value) => status_from(*value < self.bound),
            None => MatchStatus::NilActual,
        }
    }
}
