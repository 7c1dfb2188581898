use call_state::{CallController, CallError, LocalCallState, SideEffects};
use std::cell::RefCell;
use std::rc::Rc;

use crate::helpers::{RecordingSink, init_tracing};

fn recording_side_effects(
    log: &Rc<RefCell<Vec<String>>>,
) -> SideEffects<u32, u32, String> {
    let fetching_log = log.clone();
    let response_log = log.clone();
    let error_log = log.clone();
    SideEffects::none()
        .on_fetching(move |args| {
            fetching_log.borrow_mut().push(format!("on_fetching:{args}"))
        })
        .on_response(move |data| {
            response_log.borrow_mut().push(format!("on_response:{data}"))
        })
        .on_error(move |error| {
            error_log.borrow_mut().push(format!("on_error:{error}"))
        })
}

#[tokio::test]
async fn callbacks_follow_state_events_on_success() {
    init_tracing();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink::new(log.clone());
    let call_log = log.clone();
    let controller = CallController::new(
        move |args: u32| {
            call_log.borrow_mut().push(format!("call_fn:{args}"));
            async move { Ok::<_, String>(args * 2) }
        },
        sink.clone(),
    )
    .with_side_effects(recording_side_effects(&log));

    assert_eq!(controller.call(7).await, Ok(14));

    assert_eq!(
        *log.borrow(),
        vec![
            "event:fetching",
            "on_fetching:7",
            "call_fn:7",
            "event:received",
            "on_response:14",
        ]
    );
    assert_eq!(sink.state.snapshot().data, Some(14));
}

#[tokio::test]
async fn callbacks_follow_state_events_on_failure() {
    init_tracing();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink::new(log.clone());
    let controller = CallController::new(
        |_: u32| async { Err::<u32, _>("boom".to_string()) },
        sink.clone(),
    )
    .with_side_effects(recording_side_effects(&log));

    assert_eq!(controller.call(3).await, Err(CallError::Failed));

    assert_eq!(
        *log.borrow(),
        vec![
            "event:fetching",
            "on_fetching:3",
            "event:errored",
            "on_error:boom",
        ]
    );
}

#[tokio::test]
async fn error_callback_sees_stored_error() {
    init_tracing();
    let state = LocalCallState::<u32, String>::new();
    let seen = Rc::new(RefCell::new(None));

    let side_effects = {
        let state = state.clone();
        let seen = seen.clone();
        SideEffects::none().on_error(move |error: &String| {
            *seen.borrow_mut() =
                Some((error.clone(), state.snapshot().error));
        })
    };
    let controller = CallController::new(
        |_: u32| async { Err::<u32, _>("late".to_string()) },
        state.clone(),
    )
    .with_side_effects(side_effects);

    let _ = controller.call(0).await;

    assert_eq!(
        *seen.borrow(),
        Some(("late".to_string(), Some("late".to_string())))
    );
}

#[tokio::test]
async fn missing_callbacks_are_skipped() {
    init_tracing();
    let log = Rc::new(RefCell::new(Vec::new()));
    let response_log = log.clone();
    let controller = CallController::new(
        |_: u32| async { Ok::<u32, String>(1) },
        LocalCallState::new(),
    )
    .with_side_effects(SideEffects::none().on_response(move |data: &u32| {
        response_log.borrow_mut().push(format!("on_response:{data}"))
    }));

    controller.call(0).await.unwrap();
    let failing = CallController::new(
        |_: u32| async { Err::<u32, String>("x".into()) },
        LocalCallState::new(),
    );
    assert_eq!(failing.call(0).await, Err(CallError::Failed));

    assert_eq!(*log.borrow(), vec!["on_response:1"]);
}
