// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tmux control adapter

use super::parse::{parse_environment, parse_pane_list};
use super::{MultiplexerAdapter, MuxError, PaneLocation};
use crate::subprocess::run_with_timeout;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use vmux_core::{PaneId, Scope};

/// Tmux-based multiplexer adapter
#[derive(Clone, Debug)]
pub struct TmuxAdapter {
    program: PathBuf,
    timeout: Duration,
}

impl Default for TmuxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TmuxAdapter {
    pub fn new() -> Self {
        Self::with_program("tmux")
    }

    /// Use a specific tmux binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: crate::env::tmux_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run a tmux subcommand and return its stdout.
    async fn output(&self, args: &[&str]) -> Result<String, MuxError> {
        let description = format!("tmux {}", args.first().copied().unwrap_or_default());
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        let output = run_with_timeout(cmd, self.timeout, &description)
            .await
            .map_err(|e| MuxError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(MuxError::CommandFailed {
                command: description,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a tmux subcommand, discarding its output.
    async fn run(&self, args: &[&str]) -> Result<(), MuxError> {
        self.output(args).await.map(|_| ())
    }
}

/// Leading arguments of `show-environment`/`set-environment` for a scope.
fn environment_args<'a>(command: &'a str, scope: Scope) -> Vec<&'a str> {
    match scope {
        Scope::Global => vec![command, "-g"],
        Scope::Container => vec![command],
    }
}

#[async_trait]
impl MultiplexerAdapter for TmuxAdapter {
    async fn show_environment(&self, scope: Scope) -> Result<HashMap<String, String>, MuxError> {
        let args = environment_args("show-environment", scope);
        let stdout = self.output(&args).await?;
        Ok(parse_environment(&stdout))
    }

    async fn set_environment(
        &self,
        scope: Scope,
        key: &str,
        value: &str,
    ) -> Result<(), MuxError> {
        let mut args = environment_args("set-environment", scope);
        args.extend([key, value]);
        self.run(&args).await
    }

    async fn unset_environment(&self, scope: Scope, key: &str) -> Result<(), MuxError> {
        let mut args = environment_args("set-environment", scope);
        args.extend(["-u", key]);
        self.run(&args).await
    }

    async fn current_session_id(&self) -> Result<String, MuxError> {
        let stdout = self
            .output(&["display-message", "-p", "#{session_id}"])
            .await?;
        Ok(stdout.trim().trim_start_matches('$').to_string())
    }

    async fn list_panes(&self) -> Result<Vec<PaneLocation>, MuxError> {
        let stdout = self
            .output(&["list-panes", "-a", "-F", "#{window_id} #D"])
            .await?;
        Ok(parse_pane_list(&stdout))
    }

    async fn select_window(&self, window_id: &str) -> Result<(), MuxError> {
        self.run(&["select-window", "-t", window_id]).await
    }

    async fn select_pane(&self, pane_id: &PaneId) -> Result<(), MuxError> {
        self.run(&["select-pane", "-t", pane_id.as_str()]).await
    }
}

#[cfg(test)]
#[path = "tmux_tests.rs"]
mod tests;
