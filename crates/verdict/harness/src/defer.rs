//! Deferring actions onto a designated main context.
//!
//! The main context is a tokio runtime handle, usually the current-thread
//! runtime driving an async test. A deferred action runs once the delay has
//! elapsed, on that runtime, and cannot be cancelled.

use crate::error::{HarnessError, HarnessResult};
use std::panic;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_DEFER_DELAY: Duration = Duration::from_millis(10);

/// A runtime that deferred actions are scheduled on.
#[derive(Debug, Clone)]
pub struct MainContext {
    handle: Handle,
    delay: Duration,
}

impl MainContext {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            delay: DEFAULT_DEFER_DELAY,
        }
    }

    /// The runtime the caller is running on.
    pub fn current() -> HarnessResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| HarnessError::NoRuntime(e.to_string()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` on this context after the configured delay.
    pub fn defer<F>(&self, action: F) -> Deferred
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        debug!(delay_ms = delay.as_millis() as u64, "deferring action to main context");
        Deferred(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }))
    }
}

/// [`MainContext::defer`] on the current runtime.
pub fn defer_to_main<F>(action: F) -> HarnessResult<Deferred>
where
    F: FnOnce() + Send + 'static,
{
    Ok(MainContext::current()?.defer(action))
}

/// A scheduled action. Dropping it does not cancel the action.
#[derive(Debug)]
pub struct Deferred(JoinHandle<()>);

impl Deferred {
    /// Wait for the action to have run. A panic inside the action resumes
    /// here.
    pub async fn finished(self) -> HarnessResult<()> {
        match self.0.await {
            Ok(()) => Ok(()),
            Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
            Err(e) => Err(HarnessError::NoRuntime(e.to_string())),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[tokio::test]
    async fn test_action_runs_after_delay() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let started = Instant::now();

        let deferred = defer_to_main(move || flag.store(true, Ordering::SeqCst)).unwrap();
        assert!(!ran.load(Ordering::SeqCst));

        deferred.finished().await.unwrap();
        assert!(ran.load(Ordering::SeqCst));
        assert!(started.elapsed() >= DEFAULT_DEFER_DELAY);
    }

    #[tokio::test]
    async fn test_actions_run_in_delay_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let ctx = MainContext::current().unwrap();

        let slow = {
            let order = order.clone();
            ctx.clone()
                .with_delay(Duration::from_millis(40))
                .defer(move || order.lock().unwrap().push("slow"))
        };
        let fast = {
            let order = order.clone();
            ctx.defer(move || order.lock().unwrap().push("fast"))
        };

        slow.finished().await.unwrap();
        fast.finished().await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["fast", "slow"]);
    }

    #[test]
    fn test_explicit_current_thread_runtime() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let deferred = MainContext::new(rt.handle().clone())
            .with_delay(Duration::from_millis(1))
            .defer(move || flag.store(true, Ordering::SeqCst));

        rt.block_on(deferred.finished()).unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_current_without_runtime() {
        let err = MainContext::current().unwrap_err();
        assert!(matches!(err, HarnessError::NoRuntime(_)));
        assert!(defer_to_main(|| {}).is_err());
    }
}
