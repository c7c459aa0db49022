// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vim and gvim, addressed through vim's own clientserver.
//!
//! Server names are upper-cased by vim, so session lookup compares
//! case-insensitively and opens address the upper-cased name.

use super::{Editor, EditorError, OpenOutcome};
use crate::binary::Binary;
use async_trait::async_trait;
use std::ffi::OsString;
use vmux_adapters::{EditorTransport, TransportError};
use vmux_core::{Launch, SessionName};

pub struct Vim<T> {
    name: &'static str,
    interactive: bool,
    binary: Binary,
    transport: T,
}

impl<T: EditorTransport> Vim<T> {
    pub fn new(name: &'static str, interactive: bool, binary: Binary, transport: T) -> Self {
        Self {
            name,
            interactive,
            binary,
            transport,
        }
    }
}

#[async_trait]
impl<T: EditorTransport> Editor for Vim<T> {
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
        let args = ["--serverlist".to_string()];
        match self.transport.query(&self.binary.path, &args).await {
            Ok(servers) => servers
                .lines()
                .any(|server| session.matches_ignore_case(server.trim())),
            Err(e) => {
                tracing::debug!(editor = self.name, error = %e, "server list failed");
                false
            }
        }
    }

    fn destroy_session(&self, _session: &SessionName) -> Result<(), EditorError> {
        Ok(())
    }

    async fn open(
        &self,
        session: &SessionName,
        files: &[OsString],
    ) -> Result<OpenOutcome, TransportError> {
        let (files, stripped_separator) = match files.split_first() {
            Some((first, rest)) if first == "--" => (rest, true),
            _ => (files, false),
        };
        let passes_options = !stripped_separator
            && files
                .first()
                .is_some_and(|arg| arg.as_encoded_bytes().starts_with(b"-"));
        let mut launch = Launch::new(&self.binary.path)
            .arg("--servername")
            .arg(session.to_uppercase());
        if !passes_options {
            launch = launch.arg("--remote-silent");
        }
        Ok(OpenOutcome::Handoff(launch.args(files.iter().cloned())))
    }

    fn spawn(
        &self,
        session: Option<&SessionName>,
        args: &[OsString],
    ) -> Result<Launch, EditorError> {
        let mut launch = Launch::new(&self.binary.path);
        if let Some(session) = session {
            launch = launch.arg("--servername").arg(session.as_str());
        }
        Ok(launch.args(args.iter().cloned()))
    }
}

#[cfg(test)]
#[path = "vim_tests.rs"]
mod tests;
