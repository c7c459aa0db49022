// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-backend session directories.
//!
//! A session is live for a backend when a file named after the session
//! exists in the backend's directory. The file is a listening socket for
//! neovim and a plain marker for kakoune.

use std::io;
use std::path::{Path, PathBuf};
use vmux_core::SessionName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDir {
    path: PathBuf,
}

impl SessionDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the entry for `session`, without touching the filesystem.
    pub fn address(&self, session: &SessionName) -> PathBuf {
        self.path.join(session.as_str())
    }

    /// Path of the entry for `session`, creating the directory if needed.
    pub fn entry(&self, session: &SessionName) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.path)?;
        Ok(self.address(session))
    }

    pub fn exists(&self, session: &SessionName) -> bool {
        self.address(session).exists()
    }

    /// Write a plain marker file for `session`.
    pub fn mark(&self, session: &SessionName) -> io::Result<PathBuf> {
        let path = self.entry(session)?;
        std::fs::write(&path, b"")?;
        Ok(path)
    }

    /// Remove the entry for `session`; a missing entry is not an error.
    pub fn remove(&self, session: &SessionName) -> io::Result<()> {
        match std::fs::remove_file(self.address(session)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
