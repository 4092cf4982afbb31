// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host environment seam.
//!
//! Every value this crate derives comes from a [`Host`]. A browser binding
//! reads them from `window` and `document.documentElement`; tests and headless
//! tools script them directly.

use alloc::string::String;

use kurbo::Rect;

/// Result of evaluating a media query through a host's native facility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaQueryList {
    /// The serialized query, as normalized by the host.
    pub media: String,
    /// Whether the query matches the current host capabilities.
    pub matches: bool,
}

impl MediaQueryList {
    /// Creates a result for `media`.
    #[must_use]
    pub fn new(media: impl Into<String>, matches: bool) -> Self {
        Self {
            media: media.into(),
            matches,
        }
    }
}

/// Live measurements provided by the document host.
///
/// All lengths are CSS pixels. Implementations must not cache: each call
/// should report the host's state at the moment of the call.
///
/// Capabilities that a host may lack are expressed as `Option`s. Returning
/// `None` selects the documented fallback rather than signaling an error.
pub trait Host {
    /// Node handle type. Not every node is an element.
    type Node;

    /// Window inner width, including any non-overlay scrollbar.
    fn inner_width(&self) -> f64;

    /// Window inner height, including any non-overlay scrollbar.
    fn inner_height(&self) -> f64;

    /// Root element client width, excluding any non-overlay scrollbar.
    fn client_width(&self) -> f64;

    /// Root element client height, excluding any non-overlay scrollbar.
    fn client_height(&self) -> f64;

    /// Window-level horizontal page offset, if the host exposes one.
    fn page_x_offset(&self) -> Option<f64>;

    /// Window-level vertical page offset, if the host exposes one.
    fn page_y_offset(&self) -> Option<f64>;

    /// Root element horizontal scroll position.
    fn scroll_left(&self) -> f64;

    /// Root element vertical scroll position.
    fn scroll_top(&self) -> f64;

    /// Layout box of `node` relative to the viewport's top-left corner.
    ///
    /// Returns `None` when `node` is not an element node. The rectangle is
    /// passed through as reported; it is not normalized, so `x0` is the left
    /// edge and `y0` the top edge even if they exceed `x1`/`y1`.
    fn bounding_client_rect(&self, node: &Self::Node) -> Option<Rect>;

    /// Evaluates `query` with the native media-query facility.
    ///
    /// Returns `None` when the host has no such facility.
    fn match_media(&self, query: &str) -> Option<MediaQueryList>;

    /// Evaluates `query` with a secondary capability-detection library.
    ///
    /// Only consulted when [`Host::match_media`] is unavailable. The default
    /// reports no such library.
    fn fallback_media_query(&self, query: &str) -> Option<bool> {
        let _ = query;
        None
    }
}

impl<H: Host + ?Sized> Host for &H {
    type Node = H::Node;

    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }

    fn inner_height(&self) -> f64 {
        (**self).inner_height()
    }

    fn client_width(&self) -> f64 {
        (**self).client_width()
    }

    fn client_height(&self) -> f64 {
        (**self).client_height()
    }

    fn page_x_offset(&self) -> Option<f64> {
        (**self).page_x_offset()
    }

    fn page_y_offset(&self) -> Option<f64> {
        (**self).page_y_offset()
    }

    fn scroll_left(&self) -> f64 {
        (**self).scroll_left()
    }

    fn scroll_top(&self) -> f64 {
        (**self).scroll_top()
    }

    fn bounding_client_rect(&self, node: &Self::Node) -> Option<Rect> {
        (**self).bounding_client_rect(node)
    }

    fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        (**self).match_media(query)
    }

    fn fallback_media_query(&self, query: &str) -> Option<bool> {
        (**self).fallback_media_query(query)
    }
}
