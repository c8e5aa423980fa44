//! Call context: deadline and cancellation
//!
//! A [`Context`] bounds one call (or one pager loop). Expiry of its deadline
//! yields [`Error::DeadlineExceeded`]; triggering its [`CancelHandle`] yields
//! [`Error::Cancelled`]. Both abandon the in-flight request and are never retried.

use crate::error::{Error, Result};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Deadline and cancellation scope for a call
#[derive(Default)]
pub struct Context {
    deadline: Option<Instant>,
    registration: Option<AbortRegistration>,
}

/// Cancels the [`Context`] it was created with
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// Abort the call bound to the context
    pub fn cancel(&self) {
        self.0.abort();
    }
}

impl Context {
    /// A context with no deadline that is never cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            registration: None,
        }
    }

    /// Attach a cancel handle to this context
    pub fn cancellable(self) -> (Self, CancelHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        let ctx = Self {
            deadline: self.deadline,
            registration: Some(registration),
        };
        (ctx, CancelHandle(handle))
    }

    /// The deadline, if one is set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Drive `fut` to completion unless the context ends first
    pub(crate) async fn run<T, F>(self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let registration = self.registration;
        let guarded = async move {
            match registration {
                Some(registration) => Abortable::new(fut, registration)
                    .await
                    .unwrap_or(Err(Error::Cancelled)),
                None => fut.await,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .map_err(|_| Error::DeadlineExceeded)?,
            None => guarded.await,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.deadline)
            .field("cancellable", &self.registration.is_some())
            .finish()
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[tokio::test]
    async fn test_background_runs_to_completion() {
        let result = Context::background().run(async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let ctx = Context::with_timeout(Duration::from_millis(20));
        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(Error::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_cancelled_before_run() {
        let (ctx, handle) = Context::background().cancellable();
        handle.cancel();
        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let ctx = Context::with_timeout(Duration::from_secs(5));
        let result: Result<()> = ctx.run(async { Err(Error::NoMoreResults) }).await;
        assert!(matches!(result, Err(Error::NoMoreResults)));
    }

    #[test]
    fn test_remaining() {
        assert!(Context::background().remaining().is_none());
        let ctx = Context::with_timeout(Duration::from_secs(60));
        assert!(ctx.remaining().unwrap() <= Duration::from_secs(60));
        assert!(ctx.deadline().is_some());
    }
}
