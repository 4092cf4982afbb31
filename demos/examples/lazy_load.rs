// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy image loading.
//!
//! Scroll a scripted page of images and report which ones enter the
//! viewport, with a cushion so loading starts just before they appear.
//!
//! Run:
//! - `cargo run -p lookout_demos --example lazy_load`

use std::cell::Cell;

use kurbo::Rect;
use lookout_viewport::{AspectSource, Host, MediaQueryList, Probe};

const IMAGE_HEIGHT: f64 = 400.0;
const GAP: f64 = 120.0;

/// A column of images laid out in document coordinates.
struct Gallery {
    images: Vec<Rect>,
    scroll: Cell<f64>,
}

impl Host for Gallery {
    type Node = usize;

    fn inner_width(&self) -> f64 {
        1024.0
    }
    fn inner_height(&self) -> f64 {
        768.0
    }
    // A classic scrollbar takes 15px.
    fn client_width(&self) -> f64 {
        1009.0
    }
    fn client_height(&self) -> f64 {
        768.0
    }
    fn page_x_offset(&self) -> Option<f64> {
        Some(0.0)
    }
    fn page_y_offset(&self) -> Option<f64> {
        Some(self.scroll.get())
    }
    fn scroll_left(&self) -> f64 {
        0.0
    }
    fn scroll_top(&self) -> f64 {
        self.scroll.get()
    }
    fn bounding_client_rect(&self, index: &usize) -> Option<Rect> {
        let doc = self.images.get(*index)?;
        Some(*doc - kurbo::Vec2::new(0.0, self.scroll.get()))
    }
    fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        Some(MediaQueryList::new(query, query == "(orientation: landscape)"))
    }
}

fn main() {
    let images = (0..8)
        .map(|i| {
            let top = f64::from(i) * (IMAGE_HEIGHT + GAP);
            Rect::new(100.0, top, 700.0, top + IMAGE_HEIGHT)
        })
        .collect();
    let gallery = Gallery {
        images,
        scroll: Cell::new(0.0),
    };
    let probe = Probe::new(&gallery);

    println!(
        "viewport {:?}, aspect {:.3}, landscape: {}",
        probe.viewport(),
        probe.aspect_ratio(AspectSource::Viewport),
        probe.matches_media_query("(orientation: landscape)")
    );

    let mut loaded = vec![false; gallery.images.len()];
    for scroll in [0.0, 600.0, 1_500.0, 3_200.0] {
        gallery.scroll.set(scroll);
        for (index, done) in loaded.iter_mut().enumerate() {
            if !*done && probe.intersects_viewport(&index, 200.0) {
                *done = true;
                println!("scrollY={:>6}: load image {index}", probe.scroll_y());
            }
        }
    }

    let pending: Vec<usize> = (0..loaded.len()).filter(|i| !loaded[*i]).collect();
    println!("never loaded: {pending:?}");
}
