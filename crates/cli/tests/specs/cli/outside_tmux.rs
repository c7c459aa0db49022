//! Running without a tmux context

use crate::prelude::*;

#[test]
fn warns_and_starts_plain_editor() {
    let ws = Workspace::new().without_env("TMUX");

    ws.vmux()
        .args(&["a.txt"])
        .passes()
        .stderr_eq("Running vmux outside TMUX, no enhanced functionality available\n");

    let file = ws.path().join("a.txt").display().to_string();
    similar_asserts::assert_eq!(ws.editor_log(), vec![format!("nvim {file} []")]);
    assert!(ws.tmux_calls().is_empty());
}

#[test]
fn listen_address_is_not_inherited() {
    let ws = Workspace::new()
        .without_env("TMUX")
        .env("NVIM_LISTEN_ADDRESS", "/tmp/elsewhere");

    ws.vmux().passes();

    similar_asserts::assert_eq!(ws.editor_log(), vec!["nvim  []".to_string()]);
}

#[test]
fn editor_exit_status_is_propagated() {
    let ws = Workspace::new()
        .without_env("TMUX")
        .env("FAKE_EDITOR_EXIT", "5");

    ws.vmux().output().code(5);
}
