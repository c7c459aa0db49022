// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch engine: attach to the live session, repair an orphaned one, or
//! start a new one.
//!
//! Every path ends in an [`Outcome`]. `Launch` means the caller must replace
//! the process with the described editor; nothing runs after it.

use crate::editor::{Editor, EditorError, EditorRegistry, OpenOutcome};
use crate::session::SessionBroker;
use std::ffi::OsString;
use thiserror::Error;
use vmux_adapters::{MultiplexerAdapter, TransportError};
use vmux_core::{Launch, SessionName};

/// Terminal action of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replace this process with the editor
    Launch(Launch),
    /// Exit with this status
    Exit(i32),
}

/// Where the invocation stands before anything is started.
pub enum SessionState<'a> {
    /// Not running inside tmux
    NoContext,
    /// Nothing registered for this context
    NoSession,
    /// Registered, but no backend has a live entry for it
    OrphanedSession,
    /// Registered and owned by this backend
    LiveSession(&'a dyn Editor),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to open files in session {session}: {source}")]
    Open {
        session: SessionName,
        #[source]
        source: TransportError,
    },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub struct Dispatcher<'a, M> {
    broker: Option<&'a SessionBroker<M>>,
    editors: &'a EditorRegistry,
    default: &'a dyn Editor,
}

impl<'a, M: MultiplexerAdapter> Dispatcher<'a, M> {
    /// `broker` is `None` when there is no tmux context.
    pub fn new(
        broker: Option<&'a SessionBroker<M>>,
        editors: &'a EditorRegistry,
        default: &'a dyn Editor,
    ) -> Self {
        Self {
            broker,
            editors,
            default,
        }
    }

    pub async fn classify(&self) -> SessionState<'a> {
        let Some(broker) = self.broker else {
            return SessionState::NoContext;
        };
        let identity = broker.identity().await;
        if !identity.registered {
            return SessionState::NoSession;
        }
        match self
            .editors
            .find_owner(self.default.name(), &identity.name)
            .await
        {
            Some(owner) => SessionState::LiveSession(owner),
            None => SessionState::OrphanedSession,
        }
    }

    pub async fn dispatch(&self, args: &[OsString]) -> Result<Outcome, DispatchError> {
        match (self.classify().await, self.broker) {
            (SessionState::NoContext, _) | (_, None) => {
                tracing::debug!(
                    editor = self.default.name(),
                    "no tmux context, starting without a session"
                );
                Ok(Outcome::Launch(self.default.spawn(None, args)?))
            }
            (SessionState::NoSession, Some(broker)) => self.start_new(broker, args).await,
            (SessionState::OrphanedSession, Some(broker)) => {
                tracing::debug!("destroying session without a live editor");
                self.discard(broker, self.default).await;
                self.start_new(broker, args).await
            }
            (SessionState::LiveSession(owner), Some(_)) if args.is_empty() => {
                tracing::debug!(
                    owner = owner.name(),
                    editor = self.default.name(),
                    "session is live, starting editor without a session"
                );
                Ok(Outcome::Launch(self.default.spawn(None, args)?))
            }
            (SessionState::LiveSession(owner), Some(broker)) => {
                self.open_in_session(broker, owner, args).await
            }
        }
    }

    /// Register the session, then describe the editor that will own it.
    async fn start_new(
        &self,
        broker: &SessionBroker<M>,
        args: &[OsString],
    ) -> Result<Outcome, DispatchError> {
        let identity = match broker.register(self.default.is_interactive()).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "session registration failed");
                broker.identity().await
            }
        };
        tracing::debug!(
            editor = self.default.name(),
            session = %identity.name,
            "spawning editor with a new session"
        );
        let launch = self.default.spawn(Some(&identity.name), args)?;
        Ok(Outcome::Launch(launch))
    }

    /// Drop the registration and `editor`'s entry for the current session.
    async fn discard(&self, broker: &SessionBroker<M>, editor: &dyn Editor) {
        let identity = broker.identity().await;
        if let Err(e) = broker.unregister().await {
            tracing::warn!(error = %e, "failed to unregister session");
        }
        if let Err(e) = editor.destroy_session(&identity.name) {
            tracing::warn!(editor = editor.name(), error = %e, "failed to destroy session");
        }
    }

    async fn open_in_session(
        &self,
        broker: &SessionBroker<M>,
        owner: &dyn Editor,
        files: &[OsString],
    ) -> Result<Outcome, DispatchError> {
        let session = broker.identity().await.name;
        let focus = broker.context().shall_select_pane() && owner.is_interactive();
        if focus {
            broker.focus_session_pane(&session).await;
        }
        tracing::debug!(editor = owner.name(), %session, "opening files in session");
        match owner.open(&session, files).await {
            Ok(OpenOutcome::Exited(code)) => {
                if focus {
                    broker.restore_focus().await;
                }
                Ok(Outcome::Exit(code))
            }
            Ok(OpenOutcome::Handoff(launch)) => Ok(Outcome::Launch(launch)),
            Err(e) if e.is_refused() => {
                tracing::debug!(error = %e, "session refused, starting a new one");
                if focus {
                    broker.restore_focus().await;
                }
                self.discard(broker, owner).await;
                self.start_new(broker, files).await
            }
            Err(source) => {
                if focus {
                    broker.restore_focus().await;
                }
                Err(DispatchError::Open { session, source })
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
