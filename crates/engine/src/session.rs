// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session registration and pane focus for one invocation.

use crate::identity;
use crate::store::EnvStore;
use parking_lot::Mutex;
use vmux_adapters::{MultiplexerAdapter, MuxError};
use vmux_core::{ExecutionContext, Identity, PaneId, Scope, SessionName, GLOBAL_PANE_KEY};

/// Owns the execution context, the environment cache and the resolved
/// identity of the current invocation.
pub struct SessionBroker<M> {
    ctx: ExecutionContext,
    store: EnvStore<M>,
    identity: Mutex<Option<Identity>>,
}

impl<M: MultiplexerAdapter> SessionBroker<M> {
    pub fn new(ctx: ExecutionContext, mux: M) -> Self {
        Self {
            ctx,
            store: EnvStore::new(mux),
            identity: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    pub fn store(&self) -> &EnvStore<M> {
        &self.store
    }

    /// Resolved identity, computed on first use.
    pub async fn identity(&self) -> Identity {
        let cached = self.identity.lock().clone();
        if let Some(identity) = cached {
            return identity;
        }
        let identity = identity::resolve(&self.ctx, &self.store).await;
        *self.identity.lock() = Some(identity.clone());
        identity
    }

    /// Write the session key so other invocations find this session.
    ///
    /// In global mode an interactive editor also records the pane it runs in.
    pub async fn register(&self, interactive: bool) -> Result<Identity, MuxError> {
        let identity = self.identity().await;
        let scope = self.ctx.scope();
        self.store
            .set(scope, identity.key.as_str(), identity.name.as_str())
            .await?;
        if self.ctx.is_global_mode && interactive {
            self.store
                .set(Scope::Global, GLOBAL_PANE_KEY, self.ctx.pane_id.as_str())
                .await?;
        }
        let registered = Identity {
            registered: true,
            ..identity
        };
        *self.identity.lock() = Some(registered.clone());
        tracing::debug!(key = %registered.key, name = %registered.name, "registered session");
        Ok(registered)
    }

    /// Remove the session key and forget everything cached about it.
    pub async fn unregister(&self) -> Result<(), MuxError> {
        let key = self.ctx.session_key();
        let previous = self.identity.lock().take();
        let result = self.store.unset(self.ctx.scope(), key.as_str()).await;
        self.store.invalidate_all();
        tracing::debug!(
            %key,
            name = previous.as_ref().map(|i| i.name.as_str()).unwrap_or_default(),
            "unregistered session"
        );
        result
    }

    /// Pane recorded by the interactive editor that started the global session.
    pub async fn global_pane(&self) -> Option<PaneId> {
        self.store
            .get(Scope::Global, GLOBAL_PANE_KEY)
            .await
            .filter(|pane| !pane.is_empty())
            .map(PaneId::new)
    }

    /// Select the window owning `pane`, then the pane itself.
    ///
    /// Returns false when the pane is not on the server or tmux refused.
    pub async fn focus_pane(&self, pane: &PaneId) -> bool {
        let panes = match self.store.mux().list_panes().await {
            Ok(panes) => panes,
            Err(e) => {
                tracing::debug!(error = %e, "cannot list panes");
                return false;
            }
        };
        let Some(location) = panes.into_iter().find(|p| &p.pane_id == pane) else {
            tracing::debug!(%pane, "pane not found, focus unchanged");
            return false;
        };
        let mux = self.store.mux();
        if let Err(e) = mux.select_window(&location.window_id).await {
            tracing::debug!(window = %location.window_id, error = %e, "select-window failed");
            return false;
        }
        if let Err(e) = mux.select_pane(pane).await {
            tracing::debug!(%pane, error = %e, "select-pane failed");
            return false;
        }
        true
    }

    /// Focus the pane hosting `session`.
    ///
    /// In global mode the recorded global pane is used instead of the name.
    pub async fn focus_session_pane(&self, session: &SessionName) -> bool {
        let target = if self.ctx.is_global_mode {
            match self.global_pane().await {
                Some(pane) => pane,
                None => {
                    tracing::debug!("no global pane recorded");
                    return false;
                }
            }
        } else {
            PaneId::new(session.as_str())
        };
        tracing::debug!(pane = %target, "selecting session pane");
        self.focus_pane(&target).await
    }

    /// Move focus back to the pane this invocation started in.
    pub async fn restore_focus(&self) -> bool {
        tracing::debug!(pane = %self.ctx.pane_id, "restoring pane selection");
        self.focus_pane(&self.ctx.pane_id).await
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
