// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process and socket based editor transport

use super::{EditorTransport, TransportError};
use crate::subprocess::{exit_code, run_with_timeout};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::time::Duration;
use tokio::net::UnixStream;
use tokio::process::Command;
use vmux_core::Launch;

/// Transport that runs editor binaries and connects to their sockets
#[derive(Clone, Debug)]
pub struct ProcessTransport {
    query_timeout: Duration,
}

impl Default for ProcessTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTransport {
    pub fn new() -> Self {
        Self {
            query_timeout: crate::env::editor_query_timeout(),
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}

fn command_for(launch: &Launch) -> Command {
    let mut cmd = Command::new(&launch.program);
    cmd.args(&launch.args);
    for key in &launch.env_remove {
        cmd.env_remove(key);
    }
    cmd.envs(launch.env.iter().map(|(k, v)| (k, v)));
    cmd
}

#[async_trait]
impl EditorTransport for ProcessTransport {
    async fn probe(&self, address: &Path) -> Result<(), TransportError> {
        match UnixStream::connect(address).await {
            Ok(_stream) => Ok(()),
            Err(e) if matches!(e.kind(), ErrorKind::ConnectionRefused | ErrorKind::NotFound) => {
                Err(TransportError::Refused(address.display().to_string()))
            }
            Err(e) => Err(TransportError::Failed(format!(
                "cannot connect to {}: {}",
                address.display(),
                e
            ))),
        }
    }

    async fn query(&self, program: &Path, args: &[String]) -> Result<String, TransportError> {
        let description = program.display().to_string();
        let mut cmd = Command::new(program);
        cmd.args(args);
        let output = run_with_timeout(cmd, self.query_timeout, &description)
            .await
            .map_err(|e| TransportError::Spawn {
                program: description.clone(),
                message: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(TransportError::Failed(format!(
                "{} exited with status {}: {}",
                description,
                exit_code(output.status),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn call(&self, launch: &Launch) -> Result<i32, TransportError> {
        let status = command_for(launch)
            .status()
            .await
            .map_err(|e| TransportError::Spawn {
                program: launch.program.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(exit_code(status))
    }
}

/// Replace the current process with the launch.
///
/// Only returns when the exec itself failed.
pub fn exec(launch: &Launch) -> std::io::Error {
    let mut cmd = std::process::Command::new(&launch.program);
    cmd.args(&launch.args);
    for key in &launch.env_remove {
        cmd.env_remove(key);
    }
    cmd.envs(launch.env.iter().map(|(k, v)| (k, v)));
    cmd.exec()
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
