//! The `Harness` bundles configuration with a reporter and attributes every
//! reconciliation to its caller.

use crate::config::HarnessConfig;
use crate::defer::MainContext;
use crate::error::HarnessResult;
use crate::failure::{FailureReporter, PanicReporter};
use crate::reconcile::{self, CheckResult, ReconcileOptions};
use verdict_types::{AssertionContext, SourceLocation};

/// Entry point used by test cases.
///
/// ```rust,ignore
/// let mut harness = Harness::default();
/// harness.fails_with_error_message("expected to equal <2>, got <1>", |ctx| {
///     ctx.expect(1).to(equal(2));
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Harness<R = PanicReporter> {
    config: HarnessConfig,
    reporter: R,
}

impl Harness<PanicReporter> {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_reporter(config, PanicReporter)
    }
}

impl Default for Harness<PanicReporter> {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}

impl<R: FailureReporter> Harness<R> {
    pub fn with_reporter(config: HarnessConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn options_at(&self, location: SourceLocation) -> ReconcileOptions {
        ReconcileOptions::at(location)
            .prefer_original_source_location(self.config.prefer_original_source_location)
    }

    /// Run `check` and require it to fail with each of `expected`, in order.
    #[track_caller]
    pub fn fails_with_error_messages<S, F, C>(&mut self, expected: &[S], check: F)
    where
        S: AsRef<str>,
        F: FnOnce(&mut AssertionContext<'_>) -> C,
        C: CheckResult,
    {
        let options = self.options_at(SourceLocation::caller());
        reconcile::fails_with_error_messages(&mut self.reporter, expected, options, check);
    }

    #[track_caller]
    pub fn fails_with_error_message<F, C>(&mut self, expected: &str, check: F)
    where
        F: FnOnce(&mut AssertionContext<'_>) -> C,
        C: CheckResult,
    {
        self.fails_with_error_messages(&[expected], check);
    }

    #[track_caller]
    pub fn fails_with_error_message_for_nil<F, C>(&mut self, expected: &str, check: F)
    where
        F: FnOnce(&mut AssertionContext<'_>) -> C,
        C: CheckResult,
    {
        let options = self.options_at(SourceLocation::caller());
        reconcile::fails_with_error_message_for_nil(&mut self.reporter, expected, options, check);
    }

    /// The current tokio runtime as a main context, using the configured
    /// delay.
    pub fn main_context(&self) -> HarnessResult<MainContext> {
        Ok(MainContext::current()?.with_delay(self.config.defer_delay()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::CollectingReporter;

    fn collecting(config: HarnessConfig) -> Harness<CollectingReporter> {
        Harness::with_reporter(config, CollectingReporter::new())
    }

    #[test]
    fn test_mismatch_attributed_to_call_site() {
        let mut harness = collecting(HarnessConfig::default());
        let expected_line = line!() + 1;
        harness.fails_with_error_message("anything", |ctx| ctx.succeed());

        let failures = harness.reporter().failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].location.line, expected_line);
        assert!(failures[0].location.file.ends_with("harness.rs"));
    }

    #[test]
    fn test_list_form_reports_each_mismatch() {
        let mut harness = collecting(HarnessConfig::default());
        harness.fails_with_error_messages(&["a", "b", "c"], |ctx| {
            ctx.fail("b");
        });

        assert_eq!(
            harness.into_reporter().messages(),
            vec![
                "Got failure message: \"b\", but expected \"a\"".to_string(),
                "Got failure message: \"b\", but expected \"c\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_config_prefers_original_location() {
        let config = HarnessConfig::default().with_prefer_original_source_location(true);
        let mut harness = collecting(config);
        let outcome_line = line!() + 2;
        harness.fails_with_error_message("wanted", |ctx| {
            ctx.fail("got");
        });

        assert_eq!(harness.reporter().failures()[0].location.line, outcome_line);
    }

    #[test]
    fn test_for_nil_appends_hint() {
        let mut harness = collecting(HarnessConfig::default());
        harness.fails_with_error_message_for_nil("expected to equal <1>, got <nil>", |ctx| {
            ctx.fail("expected to equal <1>, got <nil> (use beNil() to match nils)");
        });
        assert!(harness.reporter().is_empty());
    }

    #[test]
    fn test_default_harness_passes_silently() {
        let mut harness: Harness = Harness::default();
        harness.fails_with_error_message("boom", |ctx| ctx.fail("boom"));
    }

    #[test]
    #[should_panic(expected = "expected failure message, but got none")]
    fn test_default_harness_panics_on_mismatch() {
        let mut harness = Harness::new(HarnessConfig::default());
        harness.fails_with_error_message("boom", |_| {});
    }

    #[tokio::test]
    async fn test_main_context_uses_configured_delay() {
        let config = HarnessConfig::default().with_defer_delay(std::time::Duration::from_millis(3));
        let harness = collecting(config);
        let ctx = harness.main_context().unwrap();
        assert_eq!(ctx.delay(), std::time::Duration::from_millis(3));
    }
}
