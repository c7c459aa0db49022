// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::multiplexer::{MultiplexerAdapter, MuxError, PaneLocation};
use crate::transport::{EditorTransport, TransportError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use vmux_core::{Launch, PaneId, Scope};

/// Wrapper that adds tracing to any MultiplexerAdapter
#[derive(Clone)]
pub struct TracedMultiplexer<M> {
    inner: M,
}

impl<M> TracedMultiplexer<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

fn g_flag(scope: Scope) -> &'static str {
    if scope.is_global() {
        " -g"
    } else {
        ""
    }
}

#[async_trait]
impl<M: MultiplexerAdapter> MultiplexerAdapter for TracedMultiplexer<M> {
    async fn show_environment(&self, scope: Scope) -> Result<HashMap<String, String>, MuxError> {
        let result = self.inner.show_environment(scope).await;
        match &result {
            Ok(env) => tracing::debug!(%scope, vars = env.len(), "tmux show-environment"),
            Err(e) => tracing::debug!(%scope, error = %e, "tmux show-environment failed"),
        }
        result
    }

    async fn set_environment(
        &self,
        scope: Scope,
        key: &str,
        value: &str,
    ) -> Result<(), MuxError> {
        tracing::debug!(
            "executing command: tmux set-environment{} {} {}",
            g_flag(scope),
            key,
            value
        );
        let result = self.inner.set_environment(scope, key, value).await;
        if let Err(ref e) = result {
            tracing::warn!(%scope, key, error = %e, "set-environment failed");
        }
        result
    }

    async fn unset_environment(&self, scope: Scope, key: &str) -> Result<(), MuxError> {
        tracing::debug!(
            "executing command: tmux set-environment{} -u {}",
            g_flag(scope),
            key
        );
        let result = self.inner.unset_environment(scope, key).await;
        if let Err(ref e) = result {
            tracing::warn!(%scope, key, error = %e, "unset-environment failed");
        }
        result
    }

    async fn current_session_id(&self) -> Result<String, MuxError> {
        let result = self.inner.current_session_id().await;
        tracing::debug!(session_id = ?result.as_ref().ok(), "tmux display-message");
        result
    }

    async fn list_panes(&self) -> Result<Vec<PaneLocation>, MuxError> {
        tracing::debug!("executing command: tmux list-panes -a -F '#{{window_id}} #D'");
        self.inner.list_panes().await
    }

    async fn select_window(&self, window_id: &str) -> Result<(), MuxError> {
        tracing::debug!("executing command: tmux select-window -t {}", window_id);
        self.inner.select_window(window_id).await
    }

    async fn select_pane(&self, pane_id: &PaneId) -> Result<(), MuxError> {
        tracing::debug!("executing command: tmux select-pane -t {}", pane_id);
        self.inner.select_pane(pane_id).await
    }
}

/// Wrapper that adds tracing to any EditorTransport
#[derive(Clone)]
pub struct TracedTransport<T> {
    inner: T,
}

impl<T> TracedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: EditorTransport> EditorTransport for TracedTransport<T> {
    async fn probe(&self, address: &Path) -> Result<(), TransportError> {
        let result = self.inner.probe(address).await;
        tracing::debug!(
            address = %address.display(),
            refused = result.as_ref().err().map(TransportError::is_refused),
            "probed session socket"
        );
        result
    }

    async fn query(&self, program: &Path, args: &[String]) -> Result<String, TransportError> {
        tracing::debug!(
            "executing command: {} {}",
            program.display(),
            args.join(" ")
        );
        let result = self.inner.query(program, args).await;
        if let Err(ref e) = result {
            tracing::debug!(error = %e, "query failed");
        }
        result
    }

    async fn call(&self, launch: &Launch) -> Result<i32, TransportError> {
        tracing::debug!("executing command: {}", launch.command_line());
        let start = std::time::Instant::now();
        let result = self.inner.call(launch).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(code) => tracing::debug!(code, elapsed_ms, "editor call finished"),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "editor call failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
