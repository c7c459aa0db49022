// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor backends and backend selection.

mod kak;
mod neovim;
mod nvr;
mod vim;

pub use kak::Kak;
pub use neovim::Neovim;
pub use nvr::Nvr;
pub use vim::Vim;

use crate::binary::{resolve_binary, Binary};
use crate::config::Config;
use crate::registry::SessionDir;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;
use vmux_adapters::{EditorTransport, TransportError};
use vmux_core::{Launch, SessionName};

/// Backend names in the order they are tried when none is configured.
pub const PREFERENCE: [&str; 7] = ["nvr", "nvim", "vim", "kak", "gvim", "nvim-qt", "gnvim"];

/// Errors from backend-local work such as preparing registry entries
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot prepare session entry {path}: {source}")]
    SessionDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How an open in a live session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The remote call ran to completion with this exit code
    Exited(i32),
    /// The remote call must replace this process
    Handoff(Launch),
}

/// One editor backend.
#[async_trait]
pub trait Editor: Send + Sync {
    fn name(&self) -> &str;

    /// Runs inside the terminal pane rather than in its own window
    fn is_interactive(&self) -> bool;

    fn binary(&self) -> &Binary;

    /// Whether this backend has a live registry entry for `session`
    async fn session_exists(&self, session: &SessionName) -> bool;

    /// Remove the registry entry for `session`; no-op when absent
    fn destroy_session(&self, session: &SessionName) -> Result<(), EditorError>;

    /// Open `files` in the running `session`
    async fn open(
        &self,
        session: &SessionName,
        files: &[OsString],
    ) -> Result<OpenOutcome, TransportError>;

    /// Describe a new editor process, registered as `session` when given
    fn spawn(&self, session: Option<&SessionName>, args: &[OsString])
        -> Result<Launch, EditorError>;
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Unable to find editor {0}")]
    NotFound(String),
    #[error("Unable to find editor (tried {})", PREFERENCE.join(", "))]
    NoneAvailable,
}

impl SelectError {
    pub fn exit_code(&self) -> i32 {
        3
    }
}

/// Backends keyed by name, kept in preference order.
pub struct EditorRegistry {
    editors: Vec<Box<dyn Editor>>,
}

impl EditorRegistry {
    pub fn new(editors: Vec<Box<dyn Editor>>) -> Self {
        Self { editors }
    }

    /// Every known backend, wired to `transport`.
    pub fn standard<T: EditorTransport>(config: &Config, transport: T) -> Self {
        let binary = |name: &str| resolve_binary(name, config.real_editor(name).as_deref());
        let nvim_dir = SessionDir::new(config.session_dir("nvim", "nvim_sessions"));
        let nvr_dir = SessionDir::new(config.session_dir("nvr", "nvr_sessions"));
        let kak_dir = SessionDir::new(config.session_dir("kak", "kakoune_sessions"));
        Self::new(vec![
            Box::new(Nvr::new(binary("nvr"), nvr_dir, transport.clone())),
            Box::new(Neovim::new(
                "nvim",
                true,
                binary("nvim"),
                nvim_dir.clone(),
                transport.clone(),
            )),
            Box::new(Vim::new("vim", true, binary("vim"), transport.clone())),
            Box::new(Kak::new(binary("kak"), kak_dir, transport.clone())),
            Box::new(Vim::new("gvim", false, binary("gvim"), transport.clone())),
            Box::new(Neovim::new(
                "nvim-qt",
                false,
                binary("nvim-qt"),
                nvim_dir.clone(),
                transport.clone(),
            )),
            Box::new(Neovim::new(
                "gnvim",
                false,
                binary("gnvim"),
                nvim_dir,
                transport,
            )),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&dyn Editor> {
        self.editors
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// The backend this invocation starts editors with.
    pub fn select(&self, configured: Option<&str>) -> Result<&dyn Editor, SelectError> {
        match configured {
            Some(name) => self
                .get(name)
                .filter(|e| e.binary().found)
                .ok_or_else(|| SelectError::NotFound(name.to_string())),
            None => self
                .editors
                .iter()
                .find(|e| e.binary().found)
                .map(|e| e.as_ref())
                .ok_or(SelectError::NoneAvailable),
        }
    }

    /// Backend with a live entry for `session`, checking `default` first.
    pub async fn find_owner(&self, default: &str, session: &SessionName) -> Option<&dyn Editor> {
        let candidates = self
            .get(default)
            .into_iter()
            .chain(
                self.editors
                    .iter()
                    .map(|e| e.as_ref())
                    .filter(|e| e.name() != default),
            )
            .filter(|e| e.binary().found);
        for editor in candidates {
            if editor.session_exists(session).await {
                tracing::debug!(editor = editor.name(), %session, "found editor with session");
                return Some(editor);
            }
        }
        None
    }
}

fn entry_error(
    dir: &SessionDir,
    session: &SessionName,
) -> impl FnOnce(std::io::Error) -> EditorError {
    let path = dir.address(session);
    move |source| EditorError::SessionDir { path, source }
}

fn session_entry(dir: &SessionDir, session: &SessionName) -> Result<PathBuf, EditorError> {
    dir.entry(session).map_err(entry_error(dir, session))
}

fn mark_entry(dir: &SessionDir, session: &SessionName) -> Result<PathBuf, EditorError> {
    dir.mark(session).map_err(entry_error(dir, session))
}

fn remove_entry(dir: &SessionDir, session: &SessionName) -> Result<(), EditorError> {
    dir.remove(session).map_err(entry_error(dir, session))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
