// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor binary discovery.

use std::path::{Path, PathBuf};

/// A backend's executable and whether it was actually found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub path: PathBuf,
    pub found: bool,
}

impl Binary {
    pub fn found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            found: true,
        }
    }
}

/// Resolve `name`, honoring an override.
///
/// An override naming an existing file is used as-is; otherwise it is looked
/// up on `PATH` like the plain name would be.
pub fn resolve_binary(name: &str, override_path: Option<&Path>) -> Binary {
    let wanted = match override_path {
        Some(path) if path.is_file() => return Binary::found(path),
        Some(path) => path.as_os_str().to_owned(),
        None => name.into(),
    };
    match which::which(&wanted) {
        Ok(path) => Binary::found(path),
        Err(e) => {
            tracing::debug!(binary = ?wanted, error = %e, "editor binary not found");
            Binary {
                path: PathBuf::from(wanted),
                found: false,
            }
        }
    }
}

#[cfg(test)]
#[path = "binary_tests.rs"]
mod tests;
