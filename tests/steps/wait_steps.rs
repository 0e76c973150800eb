//! Behavioural steps for waiting on scripted operations.
#![expect(clippy::expect_used, reason = "simplify test failure output")]

use cucumber::{World, given, then, when};
use test_support::{Countdown, ScriptedFailure};
use waiter::{WaitConfig, WaitError, Waiter};

#[derive(Debug, Default, World)]
pub struct WaitWorld {
    config: WaitConfig,
    operation: Option<Countdown<String>>,
    result: Option<Result<String, WaitError<ScriptedFailure>>>,
}

#[given(regex = r"^a maximum wait of (\d+) seconds$")]
fn maximum_wait(world: &mut WaitWorld, secs: u64) {
    world.config = world.config.with_max_wait_secs(secs);
}

#[given(regex = r"^a poll interval of (\d+) milliseconds$")]
fn poll_interval(world: &mut WaitWorld, ms: u64) {
    world.config = world.config.with_poll_interval_ms(ms);
}

#[given(regex = r#"^an operation that returns "(.+)" on call (\d+)$"#)]
fn ready_on_call(world: &mut WaitWorld, value: String, call: u32) {
    world.operation = Some(Countdown::new(call, value));
}

#[given("an operation that never returns a value")]
fn never_ready(world: &mut WaitWorld) {
    world.operation = Some(Countdown::never(String::new()));
}

#[given(regex = r"^an operation that fails on call (\d+)$")]
fn fails_on_call(world: &mut WaitWorld, call: u32) {
    world.operation = Some(Countdown::never(String::new()).failing_on(call));
}

#[when("the wait runs")]
async fn the_wait_runs(world: &mut WaitWorld) {
    let operation = world.operation.clone().expect("operation set");
    let result = Waiter::new(world.config)
        .named("scenario")
        .try_until_some_async(|| operation.try_poll_async())
        .await;
    world.result = Some(result);
}

#[then(regex = r#"^the result is "(.+)"$"#)]
fn the_result_is(world: &mut WaitWorld, expected: String) {
    match world.result.take() {
        Some(Ok(value)) => assert_eq!(value, expected),
        other => panic!("expected a value, got {other:?}"),
    }
}

#[then("the wait times out")]
fn the_wait_times_out(world: &mut WaitWorld) {
    match world.result.take() {
        Some(Err(WaitError::Timeout(t))) => assert_eq!(t.label, "scenario"),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[then("the operation error is returned")]
fn the_operation_error_is_returned(world: &mut WaitWorld) {
    match world.result.take() {
        Some(Err(WaitError::Operation(e))) => assert_eq!(e.call, 1),
        other => panic!("expected an operation error, got {other:?}"),
    }
}

#[then(regex = r"^the operation was called (\d+) times$")]
fn called_times(world: &mut WaitWorld, expected: u32) {
    let operation = world.operation.as_ref().expect("operation set");
    assert_eq!(operation.calls(), expected);
}
