// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Neovim and its GUI front-ends.
//!
//! A session is the listening socket `<dir>/<name>`. Files are opened with
//! `--server <socket> --remote-silent` and the client is waited on.

use super::{remove_entry, session_entry, Editor, EditorError, OpenOutcome};
use crate::binary::Binary;
use crate::registry::SessionDir;
use async_trait::async_trait;
use std::ffi::OsString;
use vmux_adapters::{EditorTransport, TransportError};
use vmux_core::{Launch, SessionName};

pub(crate) const LISTEN_ADDRESS_VAR: &str = "NVIM_LISTEN_ADDRESS";

pub struct Neovim<T> {
    name: &'static str,
    interactive: bool,
    binary: Binary,
    dir: SessionDir,
    transport: T,
}

impl<T: EditorTransport> Neovim<T> {
    pub fn new(
        name: &'static str,
        interactive: bool,
        binary: Binary,
        dir: SessionDir,
        transport: T,
    ) -> Self {
        Self {
            name,
            interactive,
            binary,
            dir,
            transport,
        }
    }
}

#[async_trait]
impl<T: EditorTransport> Editor for Neovim<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn is_interactive(&self) -> bool {
        self.interactive
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
        let launch = Launch::new(&self.binary.path)
            .arg("--server")
            .arg(address.display().to_string())
            .arg("--remote-silent")
            .args(files.iter().cloned());
        let code = self.transport.call(&launch).await?;
        Ok(OpenOutcome::Exited(code))
    }

    fn spawn(
        &self,
        session: Option<&SessionName>,
        args: &[OsString],
    ) -> Result<Launch, EditorError> {
        let launch = Launch::new(&self.binary.path);
        let launch = match session {
            Some(session) => {
                let address = session_entry(&self.dir, session)?.display().to_string();
                launch
                    .env(LISTEN_ADDRESS_VAR, address.as_str())
                    .arg("--listen")
                    .arg(address)
            }
            None => launch.env_remove(LISTEN_ADDRESS_VAR),
        };
        Ok(launch.args(args.iter().cloned()))
    }
}

#[cfg(test)]
#[path = "neovim_tests.rs"]
mod tests;
