// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identity resolution.

use crate::store::EnvStore;
use vmux_adapters::MultiplexerAdapter;
use vmux_core::{ExecutionContext, Identity};

/// Resolve the session key and name for a context.
///
/// Reads the registration scope through the store and never writes.
pub async fn resolve<M: MultiplexerAdapter>(
    ctx: &ExecutionContext,
    store: &EnvStore<M>,
) -> Identity {
    let key = ctx.session_key();
    let stored = store.get(ctx.scope(), key.as_str()).await;
    let identity = Identity::from_lookup(ctx, stored);
    tracing::debug!(
        key = %identity.key,
        name = %identity.name,
        registered = identity.registered,
        "resolved session identity"
    );
    identity
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
