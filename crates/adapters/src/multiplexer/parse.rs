// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for line-oriented tmux output

use super::PaneLocation;
use std::collections::HashMap;
use vmux_core::PaneId;

/// Parse `show-environment` output into a map.
///
/// Each line is `KEY=VALUE`, split on the first `=`. Lines without `=`
/// (tmux prints `-KEY` for variables marked as removed) are skipped.
pub fn parse_environment(output: &str) -> HashMap<String, String> {
    output
        .lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Parse `list-panes -a -F '#{window_id} #D'` output.
///
/// Lines that do not have exactly two fields are ignored.
pub fn parse_pane_list(output: &str) -> Vec<PaneLocation> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(window), Some(pane), None) => Some(PaneLocation {
                    window_id: window.to_string(),
                    pane_id: PaneId::new(pane),
                }),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
