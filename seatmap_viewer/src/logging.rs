// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging support.
//!
//! With the `tracing` feature, `log_debug!`, `log_info!` and `log_warn!` are
//! the `tracing` macros. Without it they expand to nothing, so call sites
//! never need `cfg`. The `log_` prefix keeps `warn` clear of the built-in
//! lint attribute of the same name.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug as log_debug, info as log_info, warn as log_warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    macro_rules! log_debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! log_info {
        ($($arg:tt)*) => {};
    }

    macro_rules! log_warn {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {log_debug, log_info, log_warn};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{log_debug, log_info, log_warn};
