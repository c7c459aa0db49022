//! Starting a new session

use crate::prelude::*;

#[test]
fn first_run_registers_pane_session() {
    let ws = Workspace::new();

    ws.vmux().args(&["a.txt"]).passes().stderr_eq("");

    assert_eq!(ws.tmux_get(false, "VMUX_SESSION_7").as_deref(), Some("%3"));
    let socket = ws.nvim_entry("%3").display().to_string();
    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(
        ws.editor_log(),
        vec![format!("nvim --listen {socket} {file} [{socket}]")]
    );
    assert!(ws.nvim_entry("%3").exists());
}

#[test]
fn registration_happens_before_the_editor_starts() {
    let ws = Workspace::new();

    ws.vmux().passes();

    let calls = ws.tmux_calls();
    assert!(
        calls.contains(&"set-environment VMUX_SESSION_7 %3".to_string()),
        "{calls:?}"
    );
    assert!(!calls.iter().any(|c| c.contains("-g")), "{calls:?}");
}

#[test]
fn orphaned_registration_is_replaced() {
    let ws = Workspace::new();
    ws.tmux_set(false, "VMUX_SESSION_7", "mysession");

    ws.vmux().args(&["a.txt"]).passes();

    assert!(ws
        .tmux_calls()
        .contains(&"set-environment -u VMUX_SESSION_7".to_string()));
    assert_eq!(ws.tmux_get(false, "VMUX_SESSION_7").as_deref(), Some("%3"));
    assert!(ws.nvim_entry("%3").exists());
    assert!(!ws.nvim_entry("mysession").exists());
}

#[test]
fn kakoune_session_marker_is_written() {
    let ws = Workspace::new().env("VMUX_EDITOR", "kak");

    ws.vmux().args(&["a.txt"]).passes();

    assert!(ws.kak_entry("%3").exists());
    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(ws.editor_log(), vec![format!("kak -s %3 {file}")]);
}

#[test]
fn non_utf8_file_names_reach_the_editor() {
    use std::os::unix::ffi::OsStringExt;

    let ws = Workspace::new();

    ws.vmux()
        .raw_arg(std::ffi::OsString::from_vec(b"caf\xe9.txt".to_vec()))
        .passes()
        .stderr_eq("");

    let socket = ws.nvim_entry("%3").display().to_string();
    let file = ws.path().join("caf\u{fffd}.txt").display().to_string();
    similar_asserts::assert_eq!(
        ws.editor_log(),
        vec![format!("nvim --listen {socket} {file} [{socket}]")]
    );
}
