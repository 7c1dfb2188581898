pub mod use_api_call;

pub use use_api_call::{
    ApiCallHandle, CallView, ReducibleCallState, use_api_call,
    use_api_call_with_options, use_api_call_with_side_effects,
};
