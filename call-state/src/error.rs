/// Why [`CallController::call`](crate::CallController::call) produced no
/// value.
///
/// The error returned by the call function itself is never carried here; it
/// is recorded in the call state and passed to the error callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// The call function failed. Its error is in the state.
    #[error("call failed, see call state for the error")]
    Failed,
    /// Another invocation was still in flight and re-entrant calls are
    /// rejected.
    #[error("a call is already in progress")]
    InFlight,
}
