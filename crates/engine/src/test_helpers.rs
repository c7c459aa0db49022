// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use crate::config::Config;
use crate::editor::{EditorRegistry, PREFERENCE};
use crate::registry::SessionDir;
use crate::session::SessionBroker;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vmux_adapters::{FakeMultiplexer, FakeTransport};
use vmux_core::{ExecutionContext, PaneId};

/// Context of a run inside tmux session `container` from pane `pane`.
pub(crate) fn context(container: &str, pane: &str) -> ExecutionContext {
    ExecutionContext {
        inside_multiplexer: true,
        container_id: container.to_string(),
        pane_id: PaneId::new(pane),
        is_global_mode: false,
        suppress_pane_focus: false,
    }
}

/// Write an empty executable script.
pub(crate) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A home directory with every editor binary present, plus fakes.
pub(crate) struct Harness {
    pub home: TempDir,
    pub config: Config,
    pub mux: FakeMultiplexer,
    pub transport: FakeTransport,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_editors(&PREFERENCE)
    }

    /// Only the named editors have a binary.
    pub fn with_editors(installed: &[&str]) -> Self {
        let home = TempDir::new().unwrap();
        let bin = home.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let mut config = Config {
            inside_tmux: true,
            pane_id: "%3".to_string(),
            home: home.path().to_path_buf(),
            ..Config::default()
        };
        for name in PREFERENCE {
            let path = if installed.contains(&name) {
                write_executable(&bin, name)
            } else {
                bin.join(name)
            };
            config
                .real_editors
                .insert(name.to_string(), path.display().to_string());
        }
        let mux = FakeMultiplexer::new();
        mux.set_session_id(Some("7"));
        mux.add_pane("@1", "%3");
        mux.add_pane("@2", "%5");
        Self {
            home,
            config,
            mux,
            transport: FakeTransport::new(),
        }
    }

    pub fn editors(&self) -> EditorRegistry {
        EditorRegistry::standard(&self.config, self.transport.clone())
    }

    pub fn broker(&self) -> SessionBroker<FakeMultiplexer> {
        SessionBroker::new(self.config.context("7"), self.mux.clone())
    }

    pub fn bin(&self, name: &str) -> PathBuf {
        self.home.path().join("bin").join(name)
    }

    pub fn nvim_dir(&self) -> SessionDir {
        SessionDir::new(self.config.session_dir("nvim", "nvim_sessions"))
    }

    pub fn nvr_dir(&self) -> SessionDir {
        SessionDir::new(self.config.session_dir("nvr", "nvr_sessions"))
    }

    pub fn kak_dir(&self) -> SessionDir {
        SessionDir::new(self.config.session_dir("kak", "kakoune_sessions"))
    }
}
