// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vmux-core: domain types for brokering editor sessions inside tmux

pub mod context;
pub mod id;
pub mod identity;
pub mod launch;

pub use context::{
    ExecutionContext, Scope, GLOBAL_PANE_KEY, GLOBAL_SESSION_KEY, GLOBAL_SESSION_NAME,
    SESSION_KEY_PREFIX,
};
pub use id::{PaneId, SessionKey, SessionName};
pub use identity::Identity;
pub use launch::Launch;
