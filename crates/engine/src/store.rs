// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-through cache over the tmux environment registry.
//!
//! The first read of a scope dumps the whole scope and keeps it for the rest
//! of the process. Every mutation drops the cached copy of the scope it
//! touched, so the next read goes back to the server.

use parking_lot::Mutex;
use std::collections::HashMap;
use vmux_adapters::{MultiplexerAdapter, MuxError};
use vmux_core::Scope;

type ScopeCache = HashMap<String, String>;

pub struct EnvStore<M> {
    mux: M,
    cache: Mutex<HashMap<Scope, ScopeCache>>,
}

impl<M: MultiplexerAdapter> EnvStore<M> {
    pub fn new(mux: M) -> Self {
        Self {
            mux,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn mux(&self) -> &M {
        &self.mux
    }

    /// Value of `key` in `scope`.
    ///
    /// A failed dump reads as an empty scope and is not cached.
    pub async fn get(&self, scope: Scope, key: &str) -> Option<String> {
        let cached = self.cache.lock().get(&scope).map(|vars| vars.get(key).cloned());
        if let Some(value) = cached {
            return value;
        }
        match self.mux.show_environment(scope).await {
            Ok(vars) => {
                let value = vars.get(key).cloned();
                self.cache.lock().insert(scope, vars);
                value
            }
            Err(e) => {
                tracing::debug!(%scope, error = %e, "environment read failed");
                None
            }
        }
    }

    pub async fn set(&self, scope: Scope, key: &str, value: &str) -> Result<(), MuxError> {
        let result = self.mux.set_environment(scope, key, value).await;
        self.invalidate(scope);
        result
    }

    pub async fn unset(&self, scope: Scope, key: &str) -> Result<(), MuxError> {
        let result = self.mux.unset_environment(scope, key).await;
        self.invalidate(scope);
        result
    }

    pub fn invalidate(&self, scope: Scope) {
        self.cache.lock().remove(&scope);
    }

    pub fn invalidate_all(&self) {
        self.cache.lock().clear();
    }

    pub fn is_cached(&self, scope: Scope) -> bool {
        self.cache.lock().contains_key(&scope)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
