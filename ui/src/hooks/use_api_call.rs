use call_state::{
    CallController, CallError, CallEvent, CallOptions, CallState,
    CallStateSink, InFlight, SideEffects,
};
use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// [`CallState`] wrapped so it can back a `use_reducer` hook.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducibleCallState<T, E> {
    pub state: CallState<T, E>,
    /// Set once any call on this component has settled.
    pub has_settled: bool,
}

impl<T, E> Default for ReducibleCallState<T, E> {
    fn default() -> Self {
        Self {
            state: CallState::default(),
            has_settled: false,
        }
    }
}

impl<T, E> ReducibleCallState<T, E> {
    pub fn is_initial_loading(&self) -> bool {
        self.state.loading && !self.has_settled
    }
}

impl<T: Clone, E: Clone> Reducible for ReducibleCallState<T, E> {
    type Action = CallEvent<T, E>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let settles = !matches!(action, CallEvent::Fetching);
        let Self { state, has_settled } = Rc::unwrap_or_clone(self);
        Rc::new(Self {
            state: state.reduce(action),
            has_settled: has_settled || settles,
        })
    }
}

/// Forwards controller events to the component's reducer.
struct ReducerSink<T: Clone, E: Clone>(
    UseReducerDispatcher<ReducibleCallState<T, E>>,
);

impl<T: Clone, E: Clone> Clone for ReducerSink<T, E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone, E: Clone> CallStateSink<T, E> for ReducerSink<T, E> {
    fn dispatch(&self, event: CallEvent<T, E>) {
        self.0.dispatch(event);
    }
}

/// Holds the controller built on the most recent render. Clones share the
/// slot, so a callback created once keeps calling the latest closures.
struct LatestCall<A, T, E, S>(Rc<RefCell<CallController<A, T, E, S>>>);

impl<A, T, E, S> Clone for LatestCall<A, T, E, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A, T, E, S> LatestCall<A, T, E, S>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
    S: CallStateSink<T, E> + Clone + 'static,
{
    fn replace(&self, controller: CallController<A, T, E, S>) {
        *self.0.borrow_mut() = controller;
    }

    fn call(
        &self,
        args: A,
    ) -> impl Future<Output = Result<T, CallError>> + use<A, T, E, S> {
        let controller = self.0.borrow().clone();
        async move { controller.call(args).await }
    }
}

/// What [`ApiCallHandle::render`] shows.
#[derive(Debug, PartialEq)]
pub enum CallView<'a, T, E> {
    /// Nothing called yet.
    Idle,
    Loading,
    /// Shown even if overlapping calls also left data behind.
    Failed(&'a E),
    Ready(&'a T),
}

fn call_view<'a, T, E>(
    loading: bool,
    data: &'a Option<T>,
    error: &'a Option<E>,
) -> CallView<'a, T, E> {
    if loading {
        return CallView::Loading;
    }
    match (data, error) {
        (_, Some(error)) => CallView::Failed(error),
        (Some(data), None) => CallView::Ready(data),
        (None, None) => CallView::Idle,
    }
}

/// Return type of the api call hooks.
pub struct ApiCallHandle<A, T: Clone, E: Clone> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<E>,
    /// Fire the call, e.g. from an event handler. The outcome shows up in the
    /// next render. Stays the same callback across renders.
    pub call: Callback<A>,
    initial_loading: bool,
    latest: LatestCall<A, T, E, ReducerSink<T, E>>,
}

impl<A, T, E> ApiCallHandle<A, T, E>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Like `call`, but hands back the resolved value.
    pub fn call_async(
        &self,
        args: A,
    ) -> impl Future<Output = Result<T, CallError>> + use<A, T, E> {
        self.latest.call(args)
    }

    /// Returns true while a call is in flight and no call on this component
    /// has ever settled.
    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn view(&self) -> CallView<'_, T, E> {
        call_view(self.loading, &self.data, &self.error)
    }

    /// Render based on call state with contextual loading/error messages.
    ///
    /// - Loading: "Loading {context}..."
    /// - Failed: "Error loading {context}: {error}"
    /// - Received: `render_fn(data)`
    /// - Not called yet: nothing
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        E: Display,
        F: Fn(&T) -> Html,
    {
        match self.view() {
            CallView::Loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            },
            CallView::Failed(error) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 \
                              dark:text-red-400">
                        {format!("Error loading {}: {}", context, error)}
                    </p>
                </div>
            },
            CallView::Ready(data) => render_fn(data),
            CallView::Idle => html! {},
        }
    }
}

/// Track an async call's loading/data/error state.
///
/// Nothing happens until `call` is emitted; there is no fetch on mount.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_delete_site() -> ApiCallHandle<SiteId, (), String> {
///     use_api_call(|site_id: SiteId| async move {
///         get_api_client()
///             .delete_site(&site_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_api_call<A, T, E, F, Fut>(call_fn: F) -> ApiCallHandle<A, T, E>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    use_api_call_with_options(
        call_fn,
        SideEffects::none(),
        CallOptions::default(),
    )
}

/// [`use_api_call`] with callbacks run at each transition.
///
/// # Example
///
/// ```rust,ignore
/// let toast = use_toast();
/// let save = use_api_call_with_side_effects(
///     save_profile,
///     SideEffects::none()
///         .on_response(move |_| toast.success("Saved"))
///         .on_error(move |e: &String| tracing::error!("save failed: {e}")),
/// );
/// ```
#[hook]
pub fn use_api_call_with_side_effects<A, T, E, F, Fut>(
    call_fn: F,
    side_effects: SideEffects<A, T, E>,
) -> ApiCallHandle<A, T, E>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    use_api_call_with_options(call_fn, side_effects, CallOptions::default())
}

/// The general form of the api call hooks.
///
/// The call function and callbacks are taken fresh on every render and the
/// stable `call` callback always runs the latest ones. The in-flight count
/// persists across renders so re-entrancy rules see calls fired from earlier
/// renders.
#[hook]
pub fn use_api_call_with_options<A, T, E, F, Fut>(
    call_fn: F,
    side_effects: SideEffects<A, T, E>,
    options: CallOptions,
) -> ApiCallHandle<A, T, E>
where
    A: 'static,
    T: Clone + 'static,
    E: Clone + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = use_reducer(ReducibleCallState::<T, E>::default);
    let in_flight = use_state(InFlight::default);

    let controller =
        CallController::new(call_fn, ReducerSink(state.dispatcher()))
            .with_side_effects(side_effects)
            .with_options(options)
            .with_in_flight((*in_flight).clone());

    let latest = {
        let controller = controller.clone();
        LatestCall(use_mut_ref(move || controller))
    };
    latest.replace(controller);

    let call = {
        let latest = latest.clone();
        use_callback((), move |args: A, _| {
            let call = latest.call(args);
            yew::platform::spawn_local(async move {
                // The outcome is already in state; nothing else to do here.
                let _ = call.await;
            });
        })
    };

    let current = &*state;

    ApiCallHandle {
        loading: current.state.loading,
        data: current.state.data.clone(),
        error: current.state.error.clone(),
        call,
        initial_loading: current.is_initial_loading(),
        latest,
    }
}
