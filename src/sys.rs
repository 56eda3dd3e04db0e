// SPDX-License-Identifier: MIT OR Apache-2.0

//! Monotonic clock types that work on native and WebAssembly targets.
//!
//! Durations measured by [`Logger::time`](crate::Logger::time) use this `Instant`; on wasm32
//! `std::time::Instant` panics, so it comes from `web_time` instead.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};
