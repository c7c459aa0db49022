// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transports for talking to a running editor

mod process;

pub use process::{exec, ProcessTransport};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, TransportCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use vmux_core::Launch;

/// Errors from editor transport calls
#[derive(Debug, Error)]
pub enum TransportError {
    /// Nobody is listening on the session endpoint any more
    #[error("connection refused: {0}")]
    Refused(String),
    #[error("failed to run {program}: {message}")]
    Spawn { program: String, message: String },
    #[error("{0}")]
    Failed(String),
}

impl TransportError {
    pub fn is_refused(&self) -> bool {
        matches!(self, TransportError::Refused(_))
    }
}

/// Adapter for reaching editor processes
#[async_trait]
pub trait EditorTransport: Clone + Send + Sync + 'static {
    /// Check that something accepts connections on a listening socket
    async fn probe(&self, address: &Path) -> Result<(), TransportError>;

    /// Run a short command and capture its stdout
    async fn query(&self, program: &Path, args: &[String]) -> Result<String, TransportError>;

    /// Run a command attached to the terminal and wait for its exit code
    async fn call(&self, launch: &Launch) -> Result<i32, TransportError>;
}
