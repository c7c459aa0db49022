// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::path::PathBuf;

/// A variable counts as set when present and non-empty.
fn flag(var: &str) -> bool {
    std::env::var_os(var).is_some_and(|v| !v.is_empty())
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

/// Suffix used in per-backend variable names: `nvim-qt` becomes `NVIM_QT`.
pub fn backend_suffix(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

// --- tmux ---

pub fn inside_tmux() -> bool {
    flag("TMUX")
}

pub fn tmux_pane() -> String {
    std::env::var("TMUX_PANE").unwrap_or_default()
}

// --- vmux behaviour ---

pub fn global_mode() -> bool {
    flag("VMUX_GLOBAL")
}

pub fn not_select_pane() -> bool {
    flag("VMUX_NOT_SELECT_PANE")
}

pub fn debug() -> bool {
    flag("VMUX_DEBUG")
}

pub fn default_editor() -> Option<String> {
    non_empty("VMUX_EDITOR")
}

// --- per-backend overrides ---

/// `VMUX_REALEDITOR_<NAME>`
pub fn real_editor(backend: &str) -> Option<String> {
    non_empty(&format!("VMUX_REALEDITOR_{}", backend_suffix(backend)))
}

/// `VMUX_<NAME>_SESSION_DIR`
pub fn session_dir(backend: &str) -> Option<String> {
    non_empty(&format!("VMUX_{}_SESSION_DIR", backend_suffix(backend)))
}

// --- home ---

/// HOME > platform home dir > /tmp
pub fn home() -> PathBuf {
    non_empty("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
