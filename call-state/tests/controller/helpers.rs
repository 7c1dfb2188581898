use call_state::{CallEvent, CallStateSink, LocalCallState, telemetry};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;

pub fn init_tracing() {
    let subscriber = telemetry::get_subscriber("error");
    // Already set by another test in this binary.
    let _ = telemetry::init_subscriber(subscriber);
}

/// A call function whose invocations stay pending until the test settles
/// them, by invocation order.
pub struct Deferred<T, E> {
    senders: Rc<RefCell<Vec<Option<oneshot::Sender<Result<T, E>>>>>>,
}

impl<T: 'static, E: 'static> Deferred<T, E> {
    pub fn new() -> Self {
        Self {
            senders: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn call_fn(
        &self,
    ) -> impl Fn(u32) -> LocalBoxFuture<'static, Result<T, E>> + use<T, E> {
        let senders = self.senders.clone();
        move |_args| {
            let (tx, rx) = oneshot::channel();
            senders.borrow_mut().push(Some(tx));
            async move { rx.await.expect("deferred call was never settled") }
                .boxed_local()
        }
    }

    /// Number of times the call function has been invoked.
    pub fn invocations(&self) -> usize {
        self.senders.borrow().len()
    }

    pub fn settle(&self, invocation: usize, result: Result<T, E>) {
        let sender = self.senders.borrow_mut()[invocation]
            .take()
            .expect("invocation already settled");
        let _ = sender.send(result);
    }
}

/// Sink that records each event into a shared log before applying it.
#[derive(Clone)]
pub struct RecordingSink<T, E> {
    pub state: LocalCallState<T, E>,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl<T, E> RecordingSink<T, E> {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            state: LocalCallState::new(),
            log,
        }
    }
}

impl<T, E> CallStateSink<T, E> for RecordingSink<T, E> {
    fn dispatch(&self, event: CallEvent<T, E>) {
        let name = match &event {
            CallEvent::Fetching => "event:fetching",
            CallEvent::Received(_) => "event:received",
            CallEvent::Errored(_) => "event:errored",
        };
        self.log.borrow_mut().push(name.to_string());
        self.state.dispatch(event);
    }
}
