//! Loading/data/error tracking for async calls.
//!
//! A [`CallController`] wraps an async function returning `Result<T, E>`.
//! Each [`call`](CallController::call) emits [`CallEvent`]s into a
//! [`CallStateSink`], which folds them into a [`CallState`] with
//! [`CallState::reduce`]. Optional [`SideEffects`] observe each transition.
//!
//! Everything here is single-threaded and framework-free; the `ui` crate
//! plugs the controller into Yew's reducer hook.

mod controller;
mod error;
mod options;
mod side_effects;
mod sink;
mod state;
pub mod telemetry;

pub use controller::{CallController, InFlight};
pub use error::CallError;
pub use options::{CallOptions, Reentrancy};
pub use side_effects::SideEffects;
pub use sink::{CallStateSink, LocalCallState};
pub use state::{CallEvent, CallState};
