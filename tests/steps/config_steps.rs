//! Behavioural steps for loading wait limits from a file.
#![expect(clippy::expect_used, reason = "simplify test failure output")]

use cucumber::{World, given, then, when};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use waiter::{ConfigError, WaitConfig};

#[derive(Debug, Default, World)]
pub struct ConfigWorld {
    dir: Option<TempDir>,
    path: Option<PathBuf>,
    result: Option<Result<WaitConfig, ConfigError>>,
}

#[given(regex = r"^a configuration file with a maximum wait of (\d+) seconds$")]
fn config_file_with_max_wait(world: &mut ConfigWorld, secs: u64) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("waiter.toml");
    fs::write(&path, format!("max_wait_secs = {secs}")).expect("write file");
    world.dir = Some(dir);
    world.path = Some(path);
}

#[given("a missing configuration file")]
fn missing_configuration_file(world: &mut ConfigWorld) {
    world.path = Some(PathBuf::from("/nonexistent/nowhere.toml"));
}

#[when("the config is loaded")]
fn load_config(world: &mut ConfigWorld) {
    let path = world.path.as_ref().expect("path set");
    world.result = Some(WaitConfig::from_file(path));
}

#[then(regex = r"^the maximum wait is (\d+) seconds$")]
fn maximum_wait_is(world: &mut ConfigWorld, expected: u64) {
    match world.result.as_ref() {
        Some(Ok(cfg)) => assert_eq!(cfg.max_wait(), Duration::from_secs(expected)),
        other => panic!("expected success, got {other:?}"),
    }
}

#[then(regex = r"^the poll interval is (\d+) milliseconds$")]
fn poll_interval_is(world: &mut ConfigWorld, expected: u64) {
    match world.result.as_ref() {
        Some(Ok(cfg)) => assert_eq!(cfg.poll_interval(), Duration::from_millis(expected)),
        other => panic!("expected success, got {other:?}"),
    }
}

#[then("config loading fails")]
fn config_loading_fails(world: &mut ConfigWorld) {
    match world.result.take() {
        Some(Err(_)) => {}
        other => panic!("expected error, got {other:?}"),
    }
}
