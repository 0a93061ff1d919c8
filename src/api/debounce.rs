use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, Aborted};
use serde::de::DeserializeOwned;

use super::client::{ApiClient, CallOptions, Route};
use super::types::ApiError;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Collapses rapid-fire calls into the most recent one. A newer call (or
/// an explicit `cancel`) during the delay window aborts the pending call
/// before its request ever starts.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<AbortHandle>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.abort();
        }
    }

    /// `Ok(None)` means this call lost to a newer one.
    pub async fn run<F, T>(&self, delay: Duration, call: F) -> Result<Option<T>, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        self.cancel();
        *self.pending.borrow_mut() = Some(handle);

        let guarded = Abortable::new(
            async move {
                sleep(delay).await;
                call.await
            },
            registration,
        );

        match guarded.await {
            Ok(result) => {
                self.pending.borrow_mut().take();
                result.map(Some)
            }
            Err(Aborted) => Ok(None),
        }
    }
}

impl ApiClient {
    pub async fn invoke_debounced<R: DeserializeOwned>(
        &self,
        debouncer: &Debouncer,
        delay: Duration,
        route: &Route,
        options: CallOptions,
    ) -> Result<Option<R>, ApiError> {
        debouncer.run(delay, self.invoke::<R>(route, options)).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn newer_call_aborts_pending_one() {
        let debouncer = Debouncer::new();
        let calls = Rc::new(Cell::new(0u32));

        let first_calls = calls.clone();
        let first = debouncer.run(Duration::from_millis(20), async move {
            first_calls.set(first_calls.get() + 1);
            Ok::<_, ApiError>("first")
        });
        let second_calls = calls.clone();
        let second = debouncer.run(Duration::from_millis(20), async move {
            second_calls.set(second_calls.get() + 1);
            Ok::<_, ApiError>("second")
        });

        let (first, second) = futures::join!(first, second);
        assert_eq!(first.unwrap(), None);
        assert_eq!(second.unwrap(), Some("second"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn explicit_cancel_suppresses_the_call() {
        let debouncer = Debouncer::new();
        let calls = Rc::new(Cell::new(0u32));

        let run_calls = calls.clone();
        let pending = debouncer.run(Duration::from_millis(20), async move {
            run_calls.set(run_calls.get() + 1);
            Ok::<_, ApiError>(())
        });
        let canceller = debouncer.clone();
        let cancel = async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            canceller.cancel();
        };

        let (result, _) = futures::join!(pending, cancel);
        assert_eq!(result.unwrap(), None);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn lone_call_survives_the_window() {
        let debouncer = Debouncer::new();
        let result = debouncer
            .run(Duration::from_millis(1), async { Ok::<_, ApiError>(7) })
            .await;
        assert_eq!(result.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn errors_pass_through_when_the_call_wins() {
        let debouncer = Debouncer::new();
        let result: Result<Option<()>, ApiError> = debouncer
            .run(Duration::from_millis(1), async {
                Err(ApiError::request_failed("boom"))
            })
            .await;
        assert_eq!(result.unwrap_err().code, "REQUEST_FAILED");
    }
}
