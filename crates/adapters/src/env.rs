// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

use crate::subprocess::{EDITOR_QUERY_TIMEOUT, TMUX_TIMEOUT};

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Timeout for a single tmux control call (default: 10s).
pub fn tmux_timeout() -> Duration {
    parse_duration_ms("VMUX_TMUX_TIMEOUT_MS").unwrap_or(TMUX_TIMEOUT)
}

/// Timeout for editor list queries such as `vim --serverlist` (default: 5s).
pub fn editor_query_timeout() -> Duration {
    parse_duration_ms("VMUX_QUERY_TIMEOUT_MS").unwrap_or(EDITOR_QUERY_TIMEOUT)
}
