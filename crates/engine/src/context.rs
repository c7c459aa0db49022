// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution context detection.

use crate::config::Config;
use thiserror::Error;
use vmux_adapters::{MultiplexerAdapter, MuxError};
use vmux_core::ExecutionContext;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("No tmux session found")]
    OutsideMultiplexer,
    #[error("cannot determine tmux session: {0}")]
    Mux(#[from] MuxError),
}

/// Build the context of this invocation.
///
/// Global mode needs no tmux session: its key lives in the server-wide scope,
/// so it also works outside tmux. Otherwise this fails when `TMUX` is unset or
/// the current tmux session cannot be queried.
pub async fn detect<M: MultiplexerAdapter>(
    config: &Config,
    mux: &M,
) -> Result<ExecutionContext, ContextError> {
    if config.global {
        return Ok(config.context(String::new()));
    }
    if !config.inside_tmux {
        return Err(ContextError::OutsideMultiplexer);
    }
    let container_id = mux.current_session_id().await?;
    Ok(config.context(container_id))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
