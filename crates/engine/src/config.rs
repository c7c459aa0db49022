// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation configuration, read once from the process environment.

use crate::editor::PREFERENCE;
use crate::env;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vmux_core::{ExecutionContext, PaneId};

/// Everything vmux reads from its environment.
///
/// Per-backend overrides are kept raw and expanded on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub inside_tmux: bool,
    pub pane_id: String,
    pub global: bool,
    pub suppress_pane_focus: bool,
    pub default_editor: Option<String>,
    pub home: PathBuf,
    pub real_editors: HashMap<String, String>,
    pub session_dirs: HashMap<String, String>,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mut real_editors = HashMap::new();
        let mut session_dirs = HashMap::new();
        for name in PREFERENCE {
            if let Some(value) = env::real_editor(name) {
                real_editors.insert(name.to_string(), value);
            }
            if let Some(value) = env::session_dir(name) {
                session_dirs.insert(name.to_string(), value);
            }
        }
        Self {
            inside_tmux: env::inside_tmux(),
            pane_id: env::tmux_pane(),
            global: env::global_mode(),
            suppress_pane_focus: env::not_select_pane(),
            default_editor: env::default_editor(),
            home: env::home(),
            real_editors,
            session_dirs,
            debug: env::debug(),
        }
    }

    /// Binary override for a backend, expanded.
    pub fn real_editor(&self, backend: &str) -> Option<PathBuf> {
        self.real_editors
            .get(backend)
            .map(|raw| expand_path(raw, &self.home, |var| std::env::var(var).ok()))
    }

    /// Registry directory for a backend: the override when set, else
    /// `$HOME/.cache/tmp/<default_subdir>`.
    pub fn session_dir(&self, backend: &str, default_subdir: &str) -> PathBuf {
        match self.session_dirs.get(backend) {
            Some(raw) => expand_path(raw, &self.home, |var| std::env::var(var).ok()),
            None => self.home.join(".cache").join("tmp").join(default_subdir),
        }
    }

    /// Execution context for a run inside tmux session `container_id`.
    pub fn context(&self, container_id: impl Into<String>) -> ExecutionContext {
        ExecutionContext {
            inside_multiplexer: self.inside_tmux,
            container_id: container_id.into(),
            pane_id: PaneId::new(self.pane_id.as_str()),
            is_global_mode: self.global,
            suppress_pane_focus: self.suppress_pane_focus,
        }
    }
}

/// Expand a leading `~` then `$VAR` / `${VAR}` references.
///
/// Unknown variables are left as written.
pub fn expand_path(raw: &str, home: &Path, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let tilde = if raw == "~" {
        home.display().to_string()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else {
        raw.to_string()
    };
    PathBuf::from(expand_vars(&tilde, lookup))
}

fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };
        let value = if name.is_empty() { None } else { lookup(name) };
        match value {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[pos..pos + 1 + consumed]),
        }
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
