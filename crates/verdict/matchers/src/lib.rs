//! # verdict-matchers
//!
//! Expectations and a small matcher family. Every evaluation records exactly
//! one outcome through the [`AssertionContext`](verdict_types::AssertionContext)
//! it was created from.
//!
//! ```rust,ignore
//! use verdict_matchers::{equal, ExpectExt};
//!
//! ctx.expect(1 + 1).to(equal(2));
//! ctx.expect_optional(None::<i32>).to(equal(2));
//! // records: "expected to equal <2>, got <nil> (use beNil() to match nils)"
//! ```

#![deny(unsafe_code)]

pub mod expectation;
pub mod matchers;

pub use expectation::{ExpectExt, Expectation};
pub use matchers::{
    be_false, be_greater_than, be_less_than, be_nil, be_true, equal, BeBool, BeGreaterThan,
    BeLessThan, BeNil, Equal, MatchStatus, Matcher,
};
