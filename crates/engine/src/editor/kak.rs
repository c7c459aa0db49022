// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kakoune: sessions are marker files next to kakoune's own session list.

use super::{mark_entry, remove_entry, Editor, EditorError, OpenOutcome};
use crate::binary::Binary;
use crate::registry::SessionDir;
use async_trait::async_trait;
use std::ffi::OsString;
use vmux_adapters::{EditorTransport, TransportError};
use vmux_core::{Launch, SessionName};

pub struct Kak<T> {
    binary: Binary,
    dir: SessionDir,
    transport: T,
}

impl<T: EditorTransport> Kak<T> {
    pub fn new(binary: Binary, dir: SessionDir, transport: T) -> Self {
        Self {
            binary,
            dir,
            transport,
        }
    }

    /// `kak -l` lists live sessions one per line; dead ones carry a suffix.
    async fn is_running(&self, session: &SessionName) -> Result<bool, TransportError> {
        let sessions = self
            .transport
            .query(&self.binary.path, &["-l".to_string()])
            .await?;
        Ok(sessions.lines().any(|line| line.trim() == session.as_str()))
    }
}

#[async_trait]
impl<T: EditorTransport> Editor for Kak<T> {
    fn name(&self) -> &str {
        "kak"
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn binary(&self) -> &Binary {
        &self.binary
    }

    async fn session_exists(&self, session: &SessionName) -> bool {
        self.dir.exists(session)
    }

    fn destroy_session(&self, session: &SessionName) -> Result<(), EditorError> {
        remove_entry(&self.dir, session)
    }

    async fn open(
        &self,
        session: &SessionName,
        files: &[OsString],
    ) -> Result<OpenOutcome, TransportError> {
        if !self.is_running(session).await? {
            return Err(TransportError::Refused(format!(
                "kakoune session {session} is not running"
            )));
        }
        let launch = Launch::new(&self.binary.path)
            .arg("-c")
            .arg(session.as_str())
            .args(files.iter().cloned());
        let code = self.transport.call(&launch).await?;
        Ok(OpenOutcome::Exited(code))
    }

    fn spawn(
        &self,
        session: Option<&SessionName>,
        args: &[OsString],
    ) -> Result<Launch, EditorError> {
        let mut launch = Launch::new(&self.binary.path);
        if let Some(session) = session {
            mark_entry(&self.dir, session)?;
            launch = launch.arg("-s").arg(session.as_str());
        }
        Ok(launch.args(args.iter().cloned()))
    }
}

#[cfg(test)]
#[path = "kak_tests.rs"]
mod tests;
