// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `tracing` instrumentation.
//!
//! Lookups in this crate fail quietly by returning `None`. With the `tracing`
//! feature enabled, each such miss is reported as a `DEBUG` event so embedders
//! can find out why a tile or annotation was not placed.

/// Emits a `tracing::debug!` event when the `tracing` feature is on.
macro_rules! debug_miss {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "quire_world", $($arg)+);
    }};
}

pub(crate) use debug_miss;
