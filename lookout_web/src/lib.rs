// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_web --heading-base-level=0

//! Browser host for Lookout viewport queries.
//!
//! This crate provides a [`lookout_viewport::Host`] implementation backed by
//! `web_sys::Window` and its document's root element when targeting `wasm32`.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn hero_is_visible(hero: &web_sys::Node) -> bool {
//!     lookout_web::WebHost::probe()
//!         .is_some_and(|probe| probe.intersects_viewport(hero, 0.0))
//! }
//! ```
//!
//! Notes:
//! - Numeric properties are read by name, so a property the browser does not
//!   expose (for example `pageXOffset` in very old engines) is reported as
//!   missing rather than as zero.
//! - JavaScript exceptions are never propagated. A failed read yields NaN
//!   for sizes, `None` for optional capabilities, and `false` for media
//!   queries.
//! - When `window.matchMedia` is absent, `Modernizr.mq` is consulted if a
//!   Modernizr build is loaded on the page.
//! - On other targets this crate is empty.

#![no_std]

#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
