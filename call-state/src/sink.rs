use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{CallEvent, CallState};

/// Somewhere to send state events.
///
/// The controller only ever emits events; whoever owns the [`CallState`]
/// applies them. In a Yew component this is a reducer dispatcher, elsewhere
/// it's usually [`LocalCallState`].
pub trait CallStateSink<T, E> {
    fn dispatch(&self, event: CallEvent<T, E>);
}

/// A shared, single-threaded [`CallState`] that applies events in place.
pub struct LocalCallState<T, E> {
    inner: Rc<RefCell<CallState<T, E>>>,
}

impl<T, E> Default for LocalCallState<T, E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(CallState::default())),
        }
    }
}

impl<T, E> Clone for LocalCallState<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> LocalCallState<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&CallState<T, E>) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().loading
    }
}

impl<T: Clone, E: Clone> LocalCallState<T, E> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> CallState<T, E> {
        self.inner.borrow().clone()
    }
}

impl<T, E> CallStateSink<T, E> for LocalCallState<T, E> {
    fn dispatch(&self, event: CallEvent<T, E>) {
        let mut state = self.inner.borrow_mut();
        let current = std::mem::take(&mut *state);
        *state = current.reduce(event);
    }
}
