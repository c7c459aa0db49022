// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Default timeout for tmux commands.
pub const TMUX_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for editor list queries.
pub const EDITOR_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a subprocess produced no output at all.
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("{description} failed: {source}")]
    Spawn {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description} timed out after {}ms", .timeout.as_millis())]
    TimedOut {
        description: String,
        timeout: Duration,
    },
}

/// Run a subprocess command with a timeout.
///
/// A non-zero exit is not an error here; callers inspect `Output::status`.
/// The child is killed when the timeout elapses (tokio `kill_on_drop`).
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(SubprocessError::Spawn {
            description: description.to_string(),
            source,
        }),
        Err(_elapsed) => Err(SubprocessError::TimedOut {
            description: description.to_string(),
            timeout,
        }),
    }
}

/// Exit code to forward for a finished child.
///
/// Children killed by a signal report `128 + signal`, like a shell does.
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
