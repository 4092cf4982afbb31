// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_viewport --heading-base-level=0

//! Lookout Viewport: viewport geometry and element visibility queries.
//!
//! This crate answers the questions a document needs for lazy loading,
//! scroll-driven effects and responsive layout decisions:
//! - How large is the layout viewport, and how far has the document scrolled?
//! - Where is an element relative to the viewport, optionally with a cushion?
//! - Does an element overlap the viewport horizontally, vertically, or both?
//! - What is the aspect ratio of the viewport or of an element?
//! - Does a media query currently match?
//!
//! It does **not** read any global state. Every measurement comes from a
//! [`Host`] implementation supplied by the caller. The `lookout_web` crate
//! provides one for browsers; tests and headless tools can script their own.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use lookout_viewport::{Host, MediaQueryList, Probe};
//!
//! /// A fixed 800x600 document whose nodes are their own layout boxes.
//! struct Page;
//!
//! impl Host for Page {
//!     type Node = Rect;
//!     fn inner_width(&self) -> f64 { 800.0 }
//!     fn inner_height(&self) -> f64 { 600.0 }
//!     fn client_width(&self) -> f64 { 785.0 }
//!     fn client_height(&self) -> f64 { 600.0 }
//!     fn page_x_offset(&self) -> Option<f64> { Some(0.0) }
//!     fn page_y_offset(&self) -> Option<f64> { Some(120.0) }
//!     fn scroll_left(&self) -> f64 { 0.0 }
//!     fn scroll_top(&self) -> f64 { 120.0 }
//!     fn bounding_client_rect(&self, node: &Rect) -> Option<Rect> { Some(*node) }
//!     fn match_media(&self, _query: &str) -> Option<MediaQueryList> { None }
//! }
//!
//! let probe = Probe::new(Page);
//! // The client width is narrower than the window, so the window is used.
//! assert_eq!(probe.viewport(), Size::new(800.0, 600.0));
//! assert_eq!(probe.scroll_y(), 120.0);
//!
//! let below_fold = Rect::new(0.0, 640.0, 100.0, 700.0);
//! assert!(!probe.intersects_viewport(&below_fold, 0.0));
//! // Start loading it once it is within 50px of the viewport.
//! assert!(probe.intersects_viewport(&below_fold, 50.0));
//! ```
//!
//! ## Measurement strategy
//!
//! Browsers disagree on whether the root element's client size or the
//! window's inner size describes the layout viewport: one excludes
//! non-overlay scrollbars, the other is the only correct value on some mobile
//! browsers. [`MeasurementStrategy::resolve`] compares the two once and picks
//! the larger per axis. [`Probe::new`] does this at construction; use
//! [`Probe::with_strategy`] to supply a strategy resolved elsewhere.
//!
//! ## Coordinates and cushions
//!
//! Element rectangles are [`ClientRect`]s relative to the viewport's top-left
//! corner. A cushion grows the box on all four sides before testing, so a
//! positive cushion reports elements as visible slightly early and a negative
//! one requires them to be well inside.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aspect;
mod host;
mod probe;
mod rect;
mod strategy;

pub use aspect::{AspectSource, Dimension};
pub use host::{Host, MediaQueryList};
pub use probe::Probe;
pub use rect::{ClientRect, cushion_rect};
pub use strategy::{DimensionSource, MeasurementStrategy};
