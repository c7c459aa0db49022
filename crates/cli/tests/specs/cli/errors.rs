//! Backend selection errors

use crate::prelude::*;

#[test]
fn unknown_editor_exits_3() {
    let ws = Workspace::new().env("VMUX_EDITOR", "emacs");

    ws.vmux()
        .args(&["a.txt"])
        .output()
        .code(3)
        .stderr_eq("Unable to find editor emacs\n");

    assert!(ws.tmux_calls().is_empty());
    assert!(ws.editor_log().is_empty());
}

#[test]
fn configured_editor_without_binary_exits_3() {
    let ws = Workspace::new().env("VMUX_EDITOR", "vim");

    ws.vmux()
        .output()
        .code(3)
        .stderr_eq("Unable to find editor vim\n");
}

#[test]
fn first_installed_editor_is_the_default() {
    // nvr, the first preference, is not installed; nvim is.
    let ws = Workspace::new().without_env("VMUX_EDITOR");

    ws.vmux().args(&["a.txt"]).passes();

    let log = ws.editor_log();
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("nvim --listen"), "{log:?}");
}

#[test]
fn unexpected_open_failure_exits_1() {
    let mut ws = Workspace::new();
    ws.tmux_set(false, "VMUX_SESSION_7", "work");
    ws.live_nvim("work");
    ws.break_editor("nvim");

    ws.vmux()
        .args(&["a.txt"])
        .output()
        .code(1)
        .stderr_has("Error: failed to open files in session work");

    assert!(ws.editor_log().is_empty());
    assert!(ws.nvim_entry("work").exists());
    assert_eq!(ws.tmux_get(false, "VMUX_SESSION_7").as_deref(), Some("work"));
}
