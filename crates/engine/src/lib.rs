// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vmux engine: session resolution, editor backends and dispatch

pub mod args;
mod binary;
pub mod config;
mod context;
mod dispatch;
pub mod editor;
pub mod env;
mod identity;
pub mod registry;
mod session;
mod store;

#[cfg(test)]
mod test_helpers;

pub use args::absolutize;
pub use binary::{resolve_binary, Binary};
pub use config::Config;
pub use context::{detect, ContextError};
pub use dispatch::{DispatchError, Dispatcher, Outcome, SessionState};
pub use editor::{Editor, EditorError, EditorRegistry, OpenOutcome, SelectError};
pub use identity::resolve;
pub use registry::SessionDir;
pub use session::SessionBroker;
pub use store::EnvStore;
