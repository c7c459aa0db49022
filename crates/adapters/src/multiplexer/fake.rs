// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake multiplexer adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{MultiplexerAdapter, MuxError, PaneLocation};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use vmux_core::{PaneId, Scope};

/// Recorded multiplexer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxCall {
    ShowEnvironment { scope: Scope },
    SetEnvironment { scope: Scope, key: String, value: String },
    UnsetEnvironment { scope: Scope, key: String },
    CurrentSessionId,
    ListPanes,
    SelectWindow { window_id: String },
    SelectPane { pane_id: PaneId },
}

struct FakeMuxState {
    global: HashMap<String, String>,
    container: HashMap<String, String>,
    session_id: Option<String>,
    panes: Vec<PaneLocation>,
    active_window: Option<String>,
    active_pane: Option<PaneId>,
    fail_reads: bool,
    fail_mutations: bool,
    calls: Vec<MuxCall>,
}

impl FakeMuxState {
    fn scope_mut(&mut self, scope: Scope) -> &mut HashMap<String, String> {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Container => &mut self.container,
        }
    }
}

/// In-memory tmux server for testing
#[derive(Clone)]
pub struct FakeMultiplexer {
    inner: Arc<Mutex<FakeMuxState>>,
}

impl Default for FakeMultiplexer {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeMuxState {
                global: HashMap::new(),
                container: HashMap::new(),
                session_id: Some("1".to_string()),
                panes: Vec::new(),
                active_window: None,
                active_pane: None,
                fail_reads: false,
                fail_mutations: false,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeMultiplexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<MuxCall> {
        self.inner.lock().calls.clone()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    /// Seed a variable without recording a call
    pub fn set_var(&self, scope: Scope, key: &str, value: &str) {
        self.inner
            .lock()
            .scope_mut(scope)
            .insert(key.to_string(), value.to_string());
    }

    /// Change a variable behind the adapter's back, as another process would
    pub fn remove_var(&self, scope: Scope, key: &str) {
        self.inner.lock().scope_mut(scope).remove(key);
    }

    /// Current value of a variable
    pub fn var(&self, scope: Scope, key: &str) -> Option<String> {
        self.inner.lock().scope_mut(scope).get(key).cloned()
    }

    /// Set the id reported by `current_session_id` (`None` makes it fail)
    pub fn set_session_id(&self, id: Option<&str>) {
        self.inner.lock().session_id = id.map(str::to_string);
    }

    /// Add a pane to the server
    pub fn add_pane(&self, window_id: &str, pane_id: &str) {
        self.inner.lock().panes.push(PaneLocation {
            window_id: window_id.to_string(),
            pane_id: PaneId::new(pane_id),
        });
    }

    /// Pane most recently selected
    pub fn active_pane(&self) -> Option<PaneId> {
        self.inner.lock().active_pane.clone()
    }

    /// Window most recently selected
    pub fn active_window(&self) -> Option<String> {
        self.inner.lock().active_window.clone()
    }

    /// Make every `show_environment` fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().fail_reads = fail;
    }

    /// Make every `set_environment`/`unset_environment` fail
    pub fn set_fail_mutations(&self, fail: bool) {
        self.inner.lock().fail_mutations = fail;
    }

    /// Number of `show_environment` calls for a scope
    pub fn reads(&self, scope: Scope) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, MuxCall::ShowEnvironment { scope: s } if *s == scope))
            .count()
    }
}

fn rejected(command: &str) -> MuxError {
    MuxError::CommandFailed {
        command: command.to_string(),
        stderr: "no server running".to_string(),
    }
}

#[async_trait]
impl MultiplexerAdapter for FakeMultiplexer {
    async fn show_environment(&self, scope: Scope) -> Result<HashMap<String, String>, MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::ShowEnvironment { scope });
        if inner.fail_reads {
            return Err(rejected("tmux show-environment"));
        }
        Ok(inner.scope_mut(scope).clone())
    }

    async fn set_environment(
        &self,
        scope: Scope,
        key: &str,
        value: &str,
    ) -> Result<(), MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::SetEnvironment {
            scope,
            key: key.to_string(),
            value: value.to_string(),
        });
        if inner.fail_mutations {
            return Err(rejected("tmux set-environment"));
        }
        inner
            .scope_mut(scope)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn unset_environment(&self, scope: Scope, key: &str) -> Result<(), MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::UnsetEnvironment {
            scope,
            key: key.to_string(),
        });
        if inner.fail_mutations {
            return Err(rejected("tmux set-environment"));
        }
        inner.scope_mut(scope).remove(key);
        Ok(())
    }

    async fn current_session_id(&self) -> Result<String, MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::CurrentSessionId);
        inner
            .session_id
            .clone()
            .ok_or_else(|| rejected("tmux display-message"))
    }

    async fn list_panes(&self) -> Result<Vec<PaneLocation>, MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::ListPanes);
        Ok(inner.panes.clone())
    }

    async fn select_window(&self, window_id: &str) -> Result<(), MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::SelectWindow {
            window_id: window_id.to_string(),
        });
        if !inner.panes.iter().any(|p| p.window_id == window_id) {
            return Err(rejected("tmux select-window"));
        }
        inner.active_window = Some(window_id.to_string());
        Ok(())
    }

    async fn select_pane(&self, pane_id: &PaneId) -> Result<(), MuxError> {
        let mut inner = self.inner.lock();
        inner.calls.push(MuxCall::SelectPane {
            pane_id: pane_id.clone(),
        });
        if !inner.panes.iter().any(|p| &p.pane_id == pane_id) {
            return Err(rejected("tmux select-pane"));
        }
        inner.active_pane = Some(pane_id.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
