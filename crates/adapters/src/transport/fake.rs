// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake editor transport for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EditorTransport, TransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vmux_core::Launch;

/// Recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Probe { address: PathBuf },
    Query { program: PathBuf, args: Vec<String> },
    Call { launch: Launch },
}

#[derive(Default)]
struct FakeTransportState {
    refused: HashSet<PathBuf>,
    broken: HashMap<PathBuf, String>,
    query_output: HashMap<PathBuf, Result<String, String>>,
    exit_code: i32,
    call_error: Option<String>,
    calls: Vec<TransportCall>,
}

/// Fake editor transport for testing
///
/// Every socket accepts unless marked refused or broken.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TransportCall> {
        self.inner.lock().calls.clone()
    }

    /// Launches passed to `call`
    pub fn launches(&self) -> Vec<Launch> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                TransportCall::Call { launch } => Some(launch.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `probe` calls
    pub fn probes(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, TransportCall::Probe { .. }))
            .count()
    }

    /// Refuse connections on an address
    pub fn refuse(&self, address: impl Into<PathBuf>) {
        self.inner.lock().refused.insert(address.into());
    }

    /// Fail probes on an address with something other than a refusal
    pub fn break_socket(&self, address: impl Into<PathBuf>, message: &str) {
        self.inner
            .lock()
            .broken
            .insert(address.into(), message.to_string());
    }

    /// Set the stdout returned by queries to a program
    pub fn set_query_output(&self, program: impl Into<PathBuf>, output: &str) {
        self.inner
            .lock()
            .query_output
            .insert(program.into(), Ok(output.to_string()));
    }

    /// Make queries to a program fail
    pub fn fail_query(&self, program: impl Into<PathBuf>, message: &str) {
        self.inner
            .lock()
            .query_output
            .insert(program.into(), Err(message.to_string()));
    }

    /// Exit code returned by `call`
    pub fn set_exit_code(&self, code: i32) {
        self.inner.lock().exit_code = code;
    }

    /// Make `call` fail to start the program
    pub fn fail_calls(&self, message: &str) {
        self.inner.lock().call_error = Some(message.to_string());
    }
}

#[async_trait]
impl EditorTransport for FakeTransport {
    async fn probe(&self, address: &Path) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TransportCall::Probe {
            address: address.to_path_buf(),
        });
        if inner.refused.contains(address) {
            return Err(TransportError::Refused(address.display().to_string()));
        }
        if let Some(message) = inner.broken.get(address) {
            return Err(TransportError::Failed(message.clone()));
        }
        Ok(())
    }

    async fn query(&self, program: &Path, args: &[String]) -> Result<String, TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TransportCall::Query {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        match inner.query_output.get(program) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(message)) => Err(TransportError::Failed(message.clone())),
            None => Ok(String::new()),
        }
    }

    async fn call(&self, launch: &Launch) -> Result<i32, TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TransportCall::Call {
            launch: launch.clone(),
        });
        match &inner.call_error {
            Some(message) => Err(TransportError::Spawn {
                program: launch.program.display().to_string(),
                message: message.clone(),
            }),
            None => Ok(inner.exit_code),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
