// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor argument normalization.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Join relative file arguments onto `cwd`.
///
/// Options (`-x`, `--x`, `+cmd`) and absolute paths pass through.
pub fn absolutize(args: &[OsString], cwd: &Path) -> Vec<OsString> {
    args.iter()
        .map(|arg| {
            if is_option(arg) || Path::new(arg).is_absolute() {
                arg.clone()
            } else {
                cwd.join(arg).into_os_string()
            }
        })
        .collect()
}

/// Whether `arg` is an editor option (`-x`, `--x`) or command (`+cmd`).
fn is_option(arg: &OsStr) -> bool {
    matches!(arg.as_encoded_bytes().first(), Some(b'-' | b'+'))
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
