//! Behavioural test steps for the `waitfor` argument parser.

use clap::Parser;
use cucumber::{World, given, then, when};
use std::ffi::OsString;

use waitfor::Args;

#[derive(Debug, Default, World)]
pub struct CliWorld {
    args: Option<Vec<OsString>>,
    result: Option<Result<Args, clap::Error>>,
}

#[given(regex = r#"^CLI arguments "(.+)"$"#)]
fn cli_arguments(world: &mut CliWorld, line: String) {
    let mut args = vec![OsString::from("waitfor")];
    args.extend(line.split_whitespace().map(OsString::from));
    world.args = Some(args);
}

#[given("no CLI arguments")]
fn no_cli_arguments(world: &mut CliWorld) {
    world.args = Some(vec![OsString::from("waitfor")]);
}

#[when("they are parsed")]
#[expect(clippy::expect_used, reason = "simplify test failure output")]
fn they_are_parsed(world: &mut CliWorld) {
    let args = world
        .args
        .clone()
        .expect("world.args should be set by a given step");
    world.result = Some(Args::try_parse_from(args));
}

#[then("parsing succeeds")]
fn parsing_succeeds(world: &mut CliWorld) {
    match world.result.as_ref() {
        Some(Ok(_)) => {}
        other => panic!("expected success, got {other:?}"),
    }
}

#[then("an error is returned")]
fn an_error_is_returned(world: &mut CliWorld) {
    match world.result.take() {
        Some(Err(_)) => {}
        other => panic!("expected error, got {other:?}"),
    }
}

#[then(regex = r#"^the target is "(.+)"$"#)]
fn the_target_is(world: &mut CliWorld, expected: String) {
    match world.result.take() {
        Some(Ok(args)) => assert_eq!(args.target.describe(), expected),
        other => panic!("expected parsed args, got {other:?}"),
    }
}

#[then(regex = r"^the maximum wait flag is (\d+)$")]
fn the_maximum_wait_flag_is(world: &mut CliWorld, expected: u64) {
    match world.result.take() {
        Some(Ok(args)) => assert_eq!(args.max_wait_secs, Some(expected)),
        other => panic!("expected parsed args, got {other:?}"),
    }
}
