//! Test helpers for behavioral specifications.
//!
//! Each [`Workspace`] is a temp dir holding a fake tmux server (environment
//! kept in files), fake editors that log their argv, and a HOME.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Stores `show-environment` output in `env-global` / `env-session` and
/// logs every call to `calls`.
const FAKE_TMUX: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_TMUX_DIR/calls"
cmd="$1"; shift
scope=session
if [ "$1" = "-g" ]; then scope=global; shift; fi
file="$FAKE_TMUX_DIR/env-$scope"
touch "$file"
case "$cmd" in
  show-environment) cat "$file" ;;
  set-environment)
    if [ "$1" = "-u" ]; then
      grep -v "^$2=" "$file" > "$file.tmp"
    else
      grep -v "^$1=" "$file" > "$file.tmp"
      echo "$1=$2" >> "$file.tmp"
    fi
    mv "$file.tmp" "$file" ;;
  display-message) echo '$7' ;;
  list-panes) printf '@1 %%3\n@2 %%5\n' ;;
  select-window|select-pane) ;;
  *) echo "unknown command: $cmd" >&2; exit 1 ;;
esac
"#;

/// Logs argv and `NVIM_LISTEN_ADDRESS`; creates the `--listen` path.
const FAKE_NVIM: &str = r#"#!/bin/sh
echo "nvim $* [${NVIM_LISTEN_ADDRESS:-}]" >> "$FAKE_EDITOR_LOG"
if [ "$1" = "--listen" ]; then touch "$2"; fi
exit "${FAKE_EDITOR_EXIT:-0}"
"#;

/// Logs argv; `kak -l` prints `$FAKE_KAK_SESSIONS`.
const FAKE_KAK: &str = r#"#!/bin/sh
if [ "$1" = "-l" ]; then printf '%s\n' "$FAKE_KAK_SESSIONS"; exit 0; fi
echo "kak $*" >> "$FAKE_EDITOR_LOG"
exit "${FAKE_EDITOR_EXIT:-0}"
"#;

const BACKENDS: [&str; 7] = ["nvr", "nvim", "vim", "kak", "gvim", "nvim-qt", "gnvim"];

/// Path of the vmux binary under test
fn vmux_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vmux"))
}

pub struct Workspace {
    dir: TempDir,
    envs: Vec<(String, String)>,
    removed: Vec<String>,
    listeners: Vec<UnixListener>,
}

impl Workspace {
    /// A workspace running inside tmux session `$7`, pane `%3`.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for sub in ["bin", "tmux", "home", "nvim", "kak"] {
            std::fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        let ws = Self {
            dir,
            envs: Vec::new(),
            removed: Vec::new(),
            listeners: Vec::new(),
        };
        ws.script("tmux", FAKE_TMUX);
        ws.script("nvim", FAKE_NVIM);
        ws.script("kak", FAKE_KAK);
        ws.env("TMUX", "/tmp/tmux-1000/default,1,7")
            .env("TMUX_PANE", "%3")
            .env("VMUX_EDITOR", "nvim")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn script(&self, name: &str, body: &str) {
        let path = self.path().join("bin").join(name);
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Leave an editor installed but not executable.
    pub fn break_editor(&self, name: &str) {
        let path = self.path().join("bin").join(name);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.retain(|(k, _)| k != key);
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn without_env(mut self, key: &str) -> Self {
        self.envs.retain(|(k, _)| k != key);
        self.removed.push(key.to_string());
        self
    }

    // -- fake tmux ----------------------------------------------------------

    fn env_file(&self, global: bool) -> PathBuf {
        let scope = if global { "global" } else { "session" };
        self.path().join("tmux").join(format!("env-{scope}"))
    }

    /// Seed a tmux environment variable.
    pub fn tmux_set(&self, global: bool, key: &str, value: &str) {
        let path = self.env_file(global);
        let mut content = std::fs::read_to_string(&path).unwrap_or_default();
        content.push_str(&format!("{key}={value}\n"));
        std::fs::write(path, content).unwrap();
    }

    /// Current value of a tmux environment variable.
    pub fn tmux_get(&self, global: bool, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.env_file(global)).unwrap_or_default();
        content
            .lines()
            .find_map(|line| line.strip_prefix(&format!("{key}=")).map(str::to_string))
    }

    /// Every tmux invocation, one line each.
    pub fn tmux_calls(&self) -> Vec<String> {
        read_lines(&self.path().join("tmux").join("calls"))
    }

    // -- registry directories -----------------------------------------------

    pub fn nvim_entry(&self, session: &str) -> PathBuf {
        self.path().join("nvim").join(session)
    }

    pub fn kak_entry(&self, session: &str) -> PathBuf {
        self.path().join("kak").join(session)
    }

    /// A listening socket for a live nvim session.
    pub fn live_nvim(&mut self, session: &str) {
        self.listeners
            .push(UnixListener::bind(self.nvim_entry(session)).unwrap());
    }

    /// A leftover entry nobody listens on.
    pub fn dead_nvim(&self, session: &str) {
        std::fs::write(self.nvim_entry(session), "").unwrap();
    }

    /// Editor invocations, one line each.
    pub fn editor_log(&self) -> Vec<String> {
        read_lines(&self.path().join("editor.log"))
    }

    // -- running ------------------------------------------------------------

    pub fn vmux(&self) -> VmuxRun<'_> {
        VmuxRun {
            ws: self,
            args: Vec::new(),
        }
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(vmux_binary());
        cmd.args(args).current_dir(self.path());
        for key in [
            "TMUX",
            "TMUX_PANE",
            "VMUX_GLOBAL",
            "VMUX_NOT_SELECT_PANE",
            "VMUX_DEBUG",
            "VMUX_EDITOR",
            "RUST_LOG",
            "NVIM_LISTEN_ADDRESS",
        ] {
            cmd.env_remove(key);
        }
        let bin = self.path().join("bin");
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{path}", bin.display()))
            .env("HOME", self.path().join("home"))
            .env("FAKE_TMUX_DIR", self.path().join("tmux"))
            .env("FAKE_EDITOR_LOG", self.path().join("editor.log"))
            .env("VMUX_NVIM_SESSION_DIR", self.path().join("nvim"))
            .env("VMUX_KAK_SESSION_DIR", self.path().join("kak"));
        // Only the fake editors are installed.
        for name in BACKENDS {
            let var = format!("VMUX_REALEDITOR_{}", name.to_uppercase().replace('-', "_"));
            cmd.env(var, bin.join(name));
        }
        for key in &self.removed {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    String::from_utf8_lossy(&std::fs::read(path).unwrap_or_default())
        .lines()
        .map(str::to_string)
        .collect()
}

pub struct VmuxRun<'a> {
    ws: &'a Workspace,
    args: Vec<OsString>,
}

impl VmuxRun<'_> {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(OsString::from));
        self
    }

    /// Append a raw argument that need not be valid UTF-8.
    pub fn raw_arg(mut self, arg: OsString) -> Self {
        self.args.push(arg);
        self
    }

    pub fn output(self) -> RunAssert {
        let output = self.ws.command(&self.args).output().expect("vmux should run");
        RunAssert { output }
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.output().code(0)
    }
}

/// Result of a vmux run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert the exit code (with stderr on failure).
    pub fn code(self, expected: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(expected),
            "unexpected exit status\nstderr: {}",
            self.stderr()
        );
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = self.stderr();
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}
