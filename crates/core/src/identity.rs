// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved session identity.

use crate::context::ExecutionContext;
use crate::id::{SessionKey, SessionName};

/// Result of resolving the session for an execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub key: SessionKey,
    pub name: SessionName,
    /// The key was present in the tmux environment
    pub registered: bool,
}

impl Identity {
    /// Build the identity from the value stored under the context's key.
    ///
    /// A stored value wins; otherwise the context's default name is used
    /// and the identity is unregistered.
    pub fn from_lookup(ctx: &ExecutionContext, stored: Option<String>) -> Self {
        let key = ctx.session_key();
        match stored {
            Some(value) => Identity {
                key,
                name: SessionName::new(value),
                registered: true,
            },
            None => Identity {
                key,
                name: ctx.default_session_name(),
                registered: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
