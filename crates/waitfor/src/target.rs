//! Things `waitfor` can wait on.
//!
//! Each target is probed once per attempt. A probe answers `Ok(None)` while
//! the target is not ready and `Err` when waiting longer cannot help.

use clap::Subcommand;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::trace;
use waiter::{WaitError, Waiter};

/// What to wait for.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Target {
    /// Wait until a file or directory exists.
    Path {
        /// Path expected to appear.
        path: PathBuf,
    },
    /// Run a command until it exits successfully with non-empty output.
    Command {
        /// Program to run on every attempt.
        program: String,
        /// Arguments passed to the program.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Target {
    /// Human-readable name used as the wait label.
    pub fn describe(&self) -> String {
        match self {
            Self::Path { path } => format!("path {}", path.display()),
            Self::Command { program, args } if args.is_empty() => format!("command `{program}`"),
            Self::Command { program, args } => format!("command `{program} {}`", args.join(" ")),
        }
    }

    /// Poll the target with `waiter` until it yields a value.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Timeout`] when the target never becomes ready and
    /// [`WaitError::Operation`] when a probe fails with an I/O error.
    pub async fn wait(&self, waiter: &Waiter) -> Result<String, WaitError<io::Error>> {
        match self {
            Self::Path { path } => waiter.try_until_some_async(|| probe_path(path)).await,
            Self::Command { program, args } => {
                waiter
                    .try_until_some_async(|| probe_command(program, args))
                    .await
            }
        }
    }
}

/// Return the path once it exists.
///
/// A missing path is "not ready"; any other I/O error, such as a permission
/// failure on a parent directory, is returned.
pub async fn probe_path(path: &Path) -> io::Result<Option<String>> {
    if tokio::fs::try_exists(path).await? {
        Ok(Some(path.display().to_string()))
    } else {
        trace!(path = %path.display(), "path missing");
        Ok(None)
    }
}

/// Run `program` once and return its trimmed stdout if it succeeded with
/// non-empty output.
///
/// Failure to spawn the program is returned as an error.
pub async fn probe_command(program: &str, args: &[String]) -> io::Result<Option<String>> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await?;
    if !output.status.success() {
        trace!(program, status = %output.status, "command not ready");
        return Ok(None);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value = stdout.trim();
    Ok((!value.is_empty()).then(|| value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::path(Target::Path { path: "/run/app.sock".into() }, "path /run/app.sock")]
    #[case::bare_command(
        Target::Command { program: "true".into(), args: vec![] },
        "command `true`"
    )]
    #[case::command_with_args(
        Target::Command { program: "cat".into(), args: vec!["/tmp/ready".into()] },
        "command `cat /tmp/ready`"
    )]
    fn describes_target(#[case] target: Target, #[case] expected: &str) {
        assert_eq!(target.describe(), expected);
    }

    #[tokio::test]
    async fn command_output_is_trimmed() {
        let args = vec![String::from("  ready \n")];
        let value = probe_command("echo", &args).await.expect("spawn echo");
        assert_eq!(value.as_deref(), Some("ready"));
    }

    #[tokio::test]
    async fn failing_command_is_not_ready() {
        let value = probe_command("false", &[]).await.expect("spawn false");
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn empty_output_is_not_ready() {
        let value = probe_command("true", &[]).await.expect("spawn true");
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let err = probe_command("waitfor-no-such-program", &[])
            .await
            .expect_err("spawn should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
