// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution context of a single vmux invocation.
//!
//! The context is derived once at process start and never mutated. It decides
//! which tmux environment scope holds the session registration and what the
//! session is called before anything has been registered.

use crate::id::{PaneId, SessionKey, SessionName};

/// Environment key holding the session name in global mode.
pub const GLOBAL_SESSION_KEY: &str = "VMUX_SESSION";

/// Prefix of the per-container session key; the tmux session id follows.
pub const SESSION_KEY_PREFIX: &str = "VMUX_SESSION_";

/// Global-scope key recording the pane that started the global session.
pub const GLOBAL_PANE_KEY: &str = "VMUX_GLOBAL_PANE";

/// Session name used in global mode.
pub const GLOBAL_SESSION_NAME: &str = "global";

/// Scope of the tmux environment a key lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Server-wide environment (`-g`)
    Global,
    /// Environment of the current tmux session
    Container,
}

impl Scope {
    pub fn is_global(self) -> bool {
        matches!(self, Scope::Global)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Container => f.write_str("container"),
        }
    }
}

/// Where this invocation runs and how it was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// `TMUX` was set for this process
    pub inside_multiplexer: bool,
    /// tmux session id without the leading `$` (empty in global mode)
    pub container_id: String,
    /// Pane this invocation was started from
    pub pane_id: PaneId,
    /// One session shared by the whole tmux server
    pub is_global_mode: bool,
    /// Do not move focus to the session's pane before opening files
    pub suppress_pane_focus: bool,
}

impl ExecutionContext {
    /// Scope holding the session registration.
    pub fn scope(&self) -> Scope {
        if self.is_global_mode {
            Scope::Global
        } else {
            Scope::Container
        }
    }

    /// Key the session name is registered under.
    pub fn session_key(&self) -> SessionKey {
        if self.is_global_mode {
            SessionKey::new(GLOBAL_SESSION_KEY)
        } else {
            SessionKey::new(format!("{}{}", SESSION_KEY_PREFIX, self.container_id))
        }
    }

    /// Session name used when nothing has been registered yet.
    pub fn default_session_name(&self) -> SessionName {
        if self.is_global_mode {
            SessionName::new(GLOBAL_SESSION_NAME)
        } else {
            SessionName::new(self.pane_id.as_str())
        }
    }

    /// Whether focus should move to the session pane around an open.
    pub fn shall_select_pane(&self) -> bool {
        !self.suppress_pane_focus
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
