//! Yew hooks that track the loading/data/error state of async calls.
//!
//! ```rust,ignore
//! #[function_component]
//! fn SaveButton() -> Html {
//!     let save = use_api_call(|draft: Draft| async move {
//!         get_api_client().save(&draft).await.map_err(|e| e.to_string())
//!     });
//!     let onclick = {
//!         let call = save.call.clone();
//!         Callback::from(move |_| call.emit(Draft::default()))
//!     };
//!     html! {
//!         <button {onclick} disabled={save.loading}>{"Save"}</button>
//!     }
//! }
//! ```

pub mod hooks;
pub mod logs;

pub use call_state::{
    CallError, CallEvent, CallOptions, CallState, Reentrancy, SideEffects,
};
pub use hooks::{
    ApiCallHandle, CallView, use_api_call, use_api_call_with_options,
    use_api_call_with_side_effects,
};
