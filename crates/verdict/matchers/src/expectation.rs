//! Expectations bind an actual value to the context that records results.

use crate::matchers::{MatchStatus, Matcher};
use std::fmt;
use verdict_types::{AssertionContext, SourceLocation, NIL_HINT_SUFFIX};

/// An actual value waiting to be checked against one or more matchers.
pub struct Expectation<'c, 'a, T> {
    ctx: &'c mut AssertionContext<'a>,
    actual: Option<T>,
    location: SourceLocation,
}

impl<'c, 'a, T: fmt::Debug> Expectation<'c, 'a, T> {
    pub fn new(
        ctx: &'c mut AssertionContext<'a>,
        actual: Option<T>,
        location: SourceLocation,
    ) -> Self {
        Self {
            ctx,
            actual,
            location,
        }
    }

    /// Record whether the actual value satisfies `matcher`.
    pub fn to<M: Matcher<T>>(&mut self, matcher: M) -> &mut Self {
        self.verify(true, &matcher);
        self
    }

    /// Record whether the actual value fails to satisfy `matcher`.
    pub fn to_not<M: Matcher<T>>(&mut self, matcher: M) -> &mut Self {
        self.verify(false, &matcher);
        self
    }

    fn verify<M: Matcher<T>>(&mut self, expect_match: bool, matcher: &M) {
        let status = matcher.evaluate(self.actual.as_ref());
        let to = if expect_match { "to" } else { "to not" };
        let mut message = format!(
            "expected {} {}, got {}",
            to,
            matcher.description(),
            render(self.actual.as_ref())
        );

        let passed = match status {
            MatchStatus::Matches => expect_match,
            MatchStatus::DoesNotMatch => !expect_match,
            MatchStatus::NilActual => {
                message.push_str(NIL_HINT_SUFFIX);
                false
            }
        };

        self.ctx.assert_at(passed, &message, &self.location);
    }
}

fn render<T: fmt::Debug>(actual: Option<&T>) -> String {
    match actual {
        Some(value) => format!("<{:?}>", value),
        None => "<nil>".to_string(),
    }
}

/// Entry points for building expectations from a context.
pub trait ExpectExt<'a> {
    fn expect<T: fmt::Debug>(&mut self, actual: T) -> Expectation<'_, 'a, T>;

    fn expect_optional<T: fmt::Debug>(&mut self, actual: Option<T>) -> Expectation<'_, 'a, T>;
}

impl<'a> ExpectExt<'a> for AssertionContext<'a> {
    #[track_caller]
    fn expect<T: fmt::Debug>(&mut self, actual: T) -> Expectation<'_, 'a, T> {
        let location = SourceLocation::caller();
        Expectation::new(self, Some(actual), location)
    }

    #[track_caller]
    fn expect_optional<T: fmt::Debug>(&mut self, actual: Option<T>) -> Expectation<'_, 'a, T> {
        let location = SourceLocation::caller();
        Expectation::new(self, actual, location)
    }
}
