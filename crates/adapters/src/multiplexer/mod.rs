// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal multiplexer control interface

mod parse;
mod tmux;

pub use parse::{parse_environment, parse_pane_list};
pub use tmux::TmuxAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeMultiplexer, MuxCall};

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use vmux_core::{PaneId, Scope};

/// Errors from multiplexer control calls
#[derive(Debug, Error)]
pub enum MuxError {
    /// The control binary could not be run or did not answer in time
    #[error("multiplexer unavailable: {0}")]
    Unavailable(String),
    /// The control binary ran and rejected the request
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// A pane and the window that contains it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLocation {
    pub window_id: String,
    pub pane_id: PaneId,
}

/// Adapter for the multiplexer's environment registry and pane selection
#[async_trait]
pub trait MultiplexerAdapter: Clone + Send + Sync + 'static {
    /// Dump every variable of a scope
    async fn show_environment(&self, scope: Scope) -> Result<HashMap<String, String>, MuxError>;

    /// Set a variable in a scope
    async fn set_environment(&self, scope: Scope, key: &str, value: &str)
        -> Result<(), MuxError>;

    /// Remove a variable from a scope
    async fn unset_environment(&self, scope: Scope, key: &str) -> Result<(), MuxError>;

    /// Id of the tmux session this process runs in, without the leading `$`
    async fn current_session_id(&self) -> Result<String, MuxError>;

    /// Every pane on the server with its window
    async fn list_panes(&self) -> Result<Vec<PaneLocation>, MuxError>;

    /// Make a window current
    async fn select_window(&self, window_id: &str) -> Result<(), MuxError>;

    /// Make a pane current within its window
    async fn select_pane(&self, pane_id: &PaneId) -> Result<(), MuxError>;
}
