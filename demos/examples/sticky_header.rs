// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky header decisions.
//!
//! Decide whether to pin a compact header by testing whether the full header
//! still intersects the viewport vertically, on a host without page offsets.
//!
//! Run:
//! - `cargo run -p lookout_demos --example sticky_header`

use std::cell::Cell;

use kurbo::Rect;
use lookout_viewport::{Host, MediaQueryList, MeasurementStrategy, Probe};

struct LegacyPage {
    scroll_top: Cell<f64>,
}

impl Host for LegacyPage {
    type Node = &'static str;

    fn inner_width(&self) -> f64 {
        800.0
    }
    fn inner_height(&self) -> f64 {
        600.0
    }
    fn client_width(&self) -> f64 {
        800.0
    }
    fn client_height(&self) -> f64 {
        600.0
    }
    // No window-level page offsets on this host.
    fn page_x_offset(&self) -> Option<f64> {
        None
    }
    fn page_y_offset(&self) -> Option<f64> {
        None
    }
    fn scroll_left(&self) -> f64 {
        0.0
    }
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }
    fn bounding_client_rect(&self, node: &&'static str) -> Option<Rect> {
        let y = -self.scroll_top.get();
        match *node {
            "header" => Some(Rect::new(0.0, y, 800.0, y + 180.0)),
            _ => None,
        }
    }
    // Neither `matchMedia` nor a fallback library.
    fn match_media(&self, _query: &str) -> Option<MediaQueryList> {
        None
    }
}

fn main() {
    let page = LegacyPage {
        scroll_top: Cell::new(0.0),
    };
    let probe = Probe::with_strategy(&page, MeasurementStrategy::CLIENT);

    for scroll in [0.0, 120.0, 179.0, 181.0, 900.0] {
        page.scroll_top.set(scroll);
        let pinned = !probe.intersects_y(&"header", 0.0);
        println!("scrollY={:>5}: compact header pinned: {pinned}", probe.scroll_y());
    }

    // Unknown nodes are simply not measurable.
    println!("footer visible: {}", probe.intersects_viewport(&"footer", 0.0));
    println!("print styles: {}", probe.matches_media_query("print"));
}
