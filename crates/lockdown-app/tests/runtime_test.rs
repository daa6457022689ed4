//! Integration tests for the channel-driven runtime.
//!
//! # Oracle Pattern
//!
//! Each test drives the runtime only through [`KioskHandle`]s, drops them to
//! end the loop, then checks the controller handed back by
//! [`Runtime::run`]: its state and the simulated platform's call journal.

use lockdown_app::{ChannelError, CommandAck, KioskHandle, Runtime, channel};
use lockdown_core::{
    ActivationState, CommandError, Decision, InputEvent, KeyClass, KioskController,
    LifecycleSignal, MethodCall,
};
use lockdown_harness::{AdapterCall, InvariantRegistry, KioskSnapshot, SimAdapter};
use tokio::task::JoinHandle;

type RunResult = Result<KioskController<SimAdapter>, ChannelError>;

/// Spawn a runtime over `adapter` and return a handle to it.
fn spawn_runtime(adapter: SimAdapter) -> (KioskHandle, JoinHandle<RunResult>) {
    let (handle, driver) = channel(8);
    let runtime = Runtime::new(driver, KioskController::new(adapter));
    (handle, tokio::spawn(runtime.run()))
}

/// Drop the handle and wait for the runtime to hand back its controller.
async fn finish(handle: KioskHandle, task: JoinHandle<RunResult>) -> KioskController<SimAdapter> {
    drop(handle);
    let controller = task.await.expect("runtime task panicked").expect("runtime failed");
    InvariantRegistry::standard()
        .assert_all(&KioskSnapshot::capture(&controller), "after runtime shutdown");
    controller
}

#[tokio::test]
async fn set_active_is_acknowledged() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());

    assert_eq!(handle.set_active(true).await, Ok(CommandAck::Accepted));

    let controller = finish(handle, task).await;
    assert_eq!(controller.state(), ActivationState::Active);
    assert!(controller.adapter().lock_held());
}

#[tokio::test]
async fn denied_platform_is_invisible_to_caller() {
    let (handle, task) = spawn_runtime(SimAdapter::denied());

    assert_eq!(handle.set_active(true).await, Ok(CommandAck::Accepted));
    assert_eq!(handle.input(InputEvent::down(KeyClass::Back)).await, Ok(Decision::Consume));

    let controller = finish(handle, task).await;
    assert_eq!(controller.state(), ActivationState::Active);
    assert!(!controller.adapter().lock_held());
}

#[tokio::test]
async fn unknown_method_is_rejected() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());

    let result = handle.call(MethodCall::new("factoryReset", Some(true))).await;
    assert!(matches!(result, Err(ChannelError::Rejected(CommandError::NotImplemented { .. }))));

    let result = handle.call(MethodCall::new(lockdown_core::SET_ACTIVE_METHOD, None)).await;
    assert!(matches!(result, Err(ChannelError::Rejected(CommandError::InvalidArgument { .. }))));

    let controller = finish(handle, task).await;
    assert_eq!(controller.state(), ActivationState::Inactive);
}

#[tokio::test]
async fn call_keys_pass_while_locked() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());
    handle.set_active(true).await.expect("set_active");

    for class in [KeyClass::IncomingCall, KeyClass::EndCall] {
        assert_eq!(handle.input(InputEvent::down(class)).await, Ok(Decision::PassThrough));
        assert_eq!(handle.input(InputEvent::up(class)).await, Ok(Decision::PassThrough));
    }

    finish(handle, task).await;
}

#[tokio::test]
async fn lifecycle_guard_runs_through_channel() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());

    handle.lifecycle(LifecycleSignal::Paused).await.expect("inactive pause");
    handle.set_active(true).await.expect("set_active");
    handle.lifecycle(LifecycleSignal::UserLeaving).await.expect("active leave");

    let controller = finish(handle, task).await;
    assert_eq!(controller.adapter().count(AdapterCall::RequestForeground), 1);
}

#[tokio::test]
async fn round_trip_through_channel() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());

    handle.set_active(true).await.expect("activate");
    handle.set_active(false).await.expect("deactivate");
    handle.set_active(false).await.expect("deactivate again");

    let controller = finish(handle, task).await;
    let adapter = controller.adapter();
    assert_eq!(controller.state(), ActivationState::Inactive);
    assert_eq!(adapter.count(AdapterCall::Show), 1);
    assert_eq!(adapter.count(AdapterCall::Release), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_handles_are_serialised() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());

    let mut senders = Vec::new();
    for i in 0..16 {
        let handle = handle.clone();
        senders.push(tokio::spawn(async move {
            handle.set_active(i % 2 == 0).await.expect("set_active");
            handle.input(InputEvent::down(KeyClass::EndCall)).await.expect("input")
        }));
    }
    for sender in senders {
        assert_eq!(sender.await.expect("sender panicked"), Decision::PassThrough);
    }

    let controller = finish(handle, task).await;
    assert_eq!(controller.adapter().redundant_acquires(), 0);
    assert_eq!(controller.adapter().releases_while_free(), 0);
}

#[tokio::test]
async fn handle_errors_once_runtime_is_gone() {
    let (handle, task) = spawn_runtime(SimAdapter::granted());
    let extra = handle.clone();
    task.abort();
    let _ = task.await;

    assert_eq!(extra.set_active(true).await, Err(ChannelError::Closed));
}
