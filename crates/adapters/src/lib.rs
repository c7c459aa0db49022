// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the tmux control interface and editor transports

mod env;
pub mod multiplexer;
pub mod subprocess;
pub mod traced;
pub mod transport;

pub use multiplexer::{MultiplexerAdapter, MuxError, PaneLocation, TmuxAdapter};
pub use traced::{TracedMultiplexer, TracedTransport};
pub use transport::{exec, EditorTransport, ProcessTransport, TransportError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use multiplexer::{FakeMultiplexer, MuxCall};
#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeTransport, TransportCall};
