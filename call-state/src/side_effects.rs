use std::rc::Rc;

/// Optional observers invoked as a call moves through its transitions.
///
/// Each callback runs right after the matching state event has been
/// dispatched. An absent callback is skipped.
pub struct SideEffects<A, T, E> {
    on_fetching: Option<Rc<dyn Fn(&A)>>,
    on_response: Option<Rc<dyn Fn(&T)>>,
    on_error: Option<Rc<dyn Fn(&E)>>,
}

impl<A, T, E> Default for SideEffects<A, T, E> {
    fn default() -> Self {
        Self {
            on_fetching: None,
            on_response: None,
            on_error: None,
        }
    }
}

// Manual impl so that A, T and E don't need to be Clone.
impl<A, T, E> Clone for SideEffects<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            on_fetching: self.on_fetching.clone(),
            on_response: self.on_response.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<A, T, E> SideEffects<A, T, E> {
    /// No callbacks.
    pub fn none() -> Self {
        Self::default()
    }

    /// Called with the call arguments after the call is marked as loading,
    /// before the call function runs.
    pub fn on_fetching(mut self, f: impl Fn(&A) + 'static) -> Self {
        self.on_fetching = Some(Rc::new(f));
        self
    }

    /// Called with the resolved value after it is stored.
    pub fn on_response(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.on_response = Some(Rc::new(f));
        self
    }

    /// Called with the error after it is stored.
    pub fn on_error(mut self, f: impl Fn(&E) + 'static) -> Self {
        self.on_error = Some(Rc::new(f));
        self
    }

    pub(crate) fn fetching(&self, args: &A) {
        if let Some(f) = &self.on_fetching {
            f(args);
        }
    }

    pub(crate) fn response(&self, data: &T) {
        if let Some(f) = &self.on_response {
            f(data);
        }
    }

    pub(crate) fn error(&self, error: &E) {
        if let Some(f) = &self.on_error {
            f(error);
        }
    }
}
