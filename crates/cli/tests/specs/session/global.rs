//! Global mode: one session for the whole tmux server

use crate::prelude::*;

#[test]
fn global_session_records_its_pane() {
    let ws = Workspace::new().env("VMUX_GLOBAL", "1");

    ws.vmux().args(&["a.txt"]).passes();

    assert_eq!(
        ws.tmux_get(true, "VMUX_SESSION").as_deref(),
        Some("global")
    );
    assert_eq!(ws.tmux_get(true, "VMUX_GLOBAL_PANE").as_deref(), Some("%3"));
    assert_eq!(ws.tmux_get(false, "VMUX_SESSION_7"), None);
    assert!(ws.nvim_entry("global").exists());
}

#[test]
fn other_panes_focus_the_recorded_pane() {
    let mut ws = Workspace::new().env("VMUX_GLOBAL", "1");
    ws.tmux_set(true, "VMUX_SESSION", "global");
    ws.tmux_set(true, "VMUX_GLOBAL_PANE", "%5");
    ws.live_nvim("global");

    ws.vmux().args(&["a.txt"]).passes();

    let selects: Vec<String> = ws
        .tmux_calls()
        .into_iter()
        .filter(|c| c.starts_with("select-pane"))
        .collect();
    similar_asserts::assert_eq!(
        selects,
        vec![
            "select-pane -t %5".to_string(),
            "select-pane -t %3".to_string()
        ]
    );
}

#[test]
fn global_session_starts_outside_tmux() {
    let ws = Workspace::new()
        .without_env("TMUX")
        .env("VMUX_GLOBAL", "1");

    ws.vmux().args(&["a.txt"]).passes().stderr_eq("");

    assert_eq!(ws.tmux_get(true, "VMUX_SESSION").as_deref(), Some("global"));
    let socket = ws.nvim_entry("global").display().to_string();
    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(
        ws.editor_log(),
        vec![format!("nvim --listen {socket} {file} [{socket}]")]
    );
    assert!(!ws
        .tmux_calls()
        .iter()
        .any(|call| call.starts_with("display-message")));
}

#[test]
fn global_session_outside_tmux_attaches_to_live_editor() {
    let mut ws = Workspace::new()
        .without_env("TMUX")
        .env("VMUX_GLOBAL", "1")
        .env("VMUX_NOT_SELECT_PANE", "1");
    ws.tmux_set(true, "VMUX_SESSION", "global");
    ws.live_nvim("global");

    ws.vmux().args(&["a.txt"]).passes().stderr_eq("");

    let socket = ws.nvim_entry("global").display().to_string();
    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(
        ws.editor_log(),
        vec![format!("nvim --server {socket} --remote-silent {file} []")]
    );
}
