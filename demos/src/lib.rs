// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Lookout crates.
//!
//! Each demo lives under `examples/` and scripts its own [`Host`] so it runs
//! without a browser:
//! - `lazy_load`: cushioned viewport tests driving image loading while scrolling.
//! - `sticky_header`: vertical band tests on a host without page offsets.
//!
//! [`Host`]: lookout_viewport::Host
