// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! neovim-remote: the session socket is handed to nvim through
//! `NVIM_LISTEN_ADDRESS`, and opening files execs `nvr --servername`.

use super::neovim::LISTEN_ADDRESS_VAR;
use super::{remove_entry, session_entry, Editor, EditorError, OpenOutcome};
use crate::binary::Binary;
use crate::registry::SessionDir;
use async_trait::async_trait;
use std::ffi::OsString;
use vmux_adapters::{EditorTransport, TransportError};
use vmux_core::{Launch, SessionName};

pub struct Nvr<T> {
    binary: Binary,
    dir: SessionDir,
    transport: T,
}

impl<T: EditorTransport> Nvr<T> {
    pub fn new(binary: Binary, dir: SessionDir, transport: T) -> Self {
        Self {
            binary,
            dir,
            transport,
        }
    }
}

#[async_trait]
impl<T: EditorTransport> Editor for Nvr<T> {
    fn name(&self) -> &str {
        "nvr"
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
        let address = self.dir.address(session);
        self.transport.probe(&address).await?;
        Ok(OpenOutcome::Handoff(
            Launch::new(&self.binary.path)
                .arg("--servername")
                .arg(address.display().to_string())
                .args(files.iter().cloned()),
        ))
    }

    fn spawn(
        &self,
        session: Option<&SessionName>,
        args: &[OsString],
    ) -> Result<Launch, EditorError> {
        let launch = Launch::new(&self.binary.path);
        let launch = match session {
            Some(session) => {
                let address = session_entry(&self.dir, session)?;
                launch.env(LISTEN_ADDRESS_VAR, address.display().to_string())
            }
            None => launch.env_remove(LISTEN_ADDRESS_VAR),
        };
        Ok(launch.args(args.iter().cloned()))
    }
}

#[cfg(test)]
#[path = "nvr_tests.rs"]
mod tests;
