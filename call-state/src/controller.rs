use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::error::CallError;
use crate::options::{CallOptions, Reentrancy};
use crate::side_effects::SideEffects;
use crate::sink::CallStateSink;
use crate::state::CallEvent;

type CallFn<A, T, E> = Rc<dyn Fn(A) -> LocalBoxFuture<'static, Result<T, E>>>;

/// Count of invocations that have started but not settled.
///
/// Shared between clones, so a hook can keep one alive across renders while
/// rebuilding the controller around it.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<usize>>);

impl InFlight {
    pub fn count(&self) -> usize {
        self.0.get()
    }

    fn enter(&self) -> InFlightGuard {
        self.0.set(self.0.get() + 1);
        InFlightGuard(self.0.clone())
    }
}

/// Decrements the in-flight count when the call settles or its future is
/// dropped.
struct InFlightGuard(Rc<Cell<usize>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

/// Runs a user-supplied async function and reports its progress as
/// [`CallEvent`]s.
///
/// # Example
///
/// ```rust
/// use call_state::{CallController, LocalCallState};
///
/// let state = LocalCallState::<u32, String>::new();
/// let controller = CallController::new(
///     |id: u32| async move { Ok::<_, String>(id * 2) },
///     state.clone(),
/// );
///
/// let result = futures::executor::block_on(controller.call(21));
/// assert_eq!(result, Ok(42));
/// assert_eq!(state.snapshot().data, Some(42));
/// ```
pub struct CallController<A, T, E, S> {
    call_fn: CallFn<A, T, E>,
    side_effects: SideEffects<A, T, E>,
    sink: S,
    options: CallOptions,
    in_flight: InFlight,
}

impl<A, T, E, S: Clone> Clone for CallController<A, T, E, S> {
    fn clone(&self) -> Self {
        Self {
            call_fn: self.call_fn.clone(),
            side_effects: self.side_effects.clone(),
            sink: self.sink.clone(),
            options: self.options.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<A, T, E, S> CallController<A, T, E, S>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
    S: CallStateSink<T, E>,
{
    pub fn new<F, Fut>(call_fn: F, sink: S) -> Self
    where
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        Self {
            call_fn: Rc::new(move |args: A| call_fn(args).boxed_local()),
            side_effects: SideEffects::default(),
            sink,
            options: CallOptions::default(),
            in_flight: InFlight::default(),
        }
    }

    pub fn with_side_effects(
        mut self,
        side_effects: SideEffects<A, T, E>,
    ) -> Self {
        self.side_effects = side_effects;
        self
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Track in-flight calls with an existing counter instead of a fresh one.
    pub fn with_in_flight(mut self, in_flight: InFlight) -> Self {
        self.in_flight = in_flight;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn options(&self) -> &CallOptions {
        &self.options
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Invoke the call function and record its outcome.
    ///
    /// Returns the resolved value on success. On failure the error is stored
    /// in the state and handed to the error callback, and this returns
    /// [`CallError::Failed`].
    pub async fn call(&self, args: A) -> Result<T, CallError> {
        let label = self.options.label.as_str();

        if self.options.reentrancy == Reentrancy::RejectWhileLoading
            && self.in_flight.count() > 0
        {
            tracing::warn!(
                label,
                "Rejecting call, previous call still in flight"
            );
            return Err(CallError::InFlight);
        }

        let _guard = self.in_flight.enter();

        self.sink.dispatch(CallEvent::Fetching);
        self.side_effects.fetching(&args);
        tracing::debug!(label, "Call started");

        match (self.call_fn)(args).await {
            Ok(data) => {
                self.sink.dispatch(CallEvent::Received(data.clone()));
                self.side_effects.response(&data);
                tracing::debug!(label, "Call succeeded");
                Ok(data)
            }
            Err(error) => {
                self.sink.dispatch(CallEvent::Errored(error.clone()));
                self.side_effects.error(&error);
                tracing::warn!(label, "Call failed");
                Err(CallError::Failed)
            }
        }
    }
}
