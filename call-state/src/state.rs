//! The loading/data/error record and its reducer.

/// State of the most recent invocation of a tracked call.
///
/// Starting a call clears `data` and `error`, and a successful call clears the
/// error, so with one call at a time they are never both set. When calls
/// overlap, a failure that settles after another call's success leaves both
/// set, since a failure doesn't touch `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallState<T, E> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> Default for CallState<T, E> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

/// Transitions a call goes through.
#[derive(Debug, Clone, PartialEq)]
pub enum CallEvent<T, E> {
    /// An invocation started.
    Fetching,
    /// The call function resolved with a value.
    Received(T),
    /// The call function resolved with an error.
    Errored(E),
}

impl<T, E> CallState<T, E> {
    /// Apply an event, producing the next state.
    pub fn reduce(self, event: CallEvent<T, E>) -> Self {
        match event {
            CallEvent::Fetching => Self {
                loading: true,
                data: None,
                error: None,
            },
            CallEvent::Received(data) => Self {
                loading: false,
                data: Some(data),
                error: None,
            },
            // Data is left as-is. It was cleared by Fetching unless an
            // overlapping call succeeded in the meantime.
            CallEvent::Errored(error) => Self {
                loading: false,
                error: Some(error),
                ..self
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Returns true once a call has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }

    /// Returns true if no call has been made yet (or the last one resolved
    /// without leaving anything behind).
    pub fn is_idle(&self) -> bool {
        !self.loading && self.data.is_none() && self.error.is_none()
    }
}
