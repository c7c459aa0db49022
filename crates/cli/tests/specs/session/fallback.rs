//! Recovering from sessions whose editor is gone

use crate::prelude::*;

#[test]
fn refused_socket_starts_fresh_session() {
    let ws = Workspace::new();
    ws.tmux_set(false, "VMUX_SESSION_7", "mysession");
    ws.dead_nvim("mysession");

    ws.vmux().args(&["a.txt"]).passes();

    let socket = ws.nvim_entry("%3").display().to_string();
    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(
        ws.editor_log(),
        vec![format!("nvim --listen {socket} {file} [{socket}]")]
    );
    assert!(!ws.nvim_entry("mysession").exists());
    assert_eq!(ws.tmux_get(false, "VMUX_SESSION_7").as_deref(), Some("%3"));
}

#[test]
fn dead_kakoune_session_starts_fresh_session() {
    let ws = Workspace::new()
        .env("VMUX_EDITOR", "kak")
        .env("FAKE_KAK_SESSIONS", "mysession (dead)");
    ws.tmux_set(false, "VMUX_SESSION_7", "mysession");
    std::fs::write(ws.kak_entry("mysession"), "").unwrap();

    ws.vmux().args(&["a.txt"]).passes();

    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(ws.editor_log(), vec![format!("kak -s %3 {file}")]);
    assert!(!ws.kak_entry("mysession").exists());
    assert!(ws.kak_entry("%3").exists());
}
