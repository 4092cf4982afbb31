// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::aspect::ratio;
use crate::{AspectSource, ClientRect, Host, MeasurementStrategy, MediaQueryList, cushion_rect};

/// Viewport and visibility queries over a [`Host`].
///
/// A `Probe` pairs a host with the [`MeasurementStrategy`] resolved for it.
/// Apart from that strategy it holds no state: every query reads the host
/// afresh and returns immediately.
///
/// Rectangle queries return `None` when the node cannot be measured, and the
/// visibility predicates report `false` in that case. No query panics.
#[derive(Clone, Debug)]
pub struct Probe<H> {
    host: H,
    strategy: MeasurementStrategy,
}

impl<H: Host> Probe<H> {
    /// Creates a probe, resolving the measurement strategy from `host` now.
    #[must_use]
    pub fn new(host: H) -> Self {
        let strategy = MeasurementStrategy::resolve(&host);
        Self { host, strategy }
    }

    /// Creates a probe with an already-resolved measurement strategy.
    #[must_use]
    pub fn with_strategy(host: H, strategy: MeasurementStrategy) -> Self {
        Self { host, strategy }
    }

    /// Returns the underlying host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the measurement strategy in use.
    #[must_use]
    pub fn strategy(&self) -> MeasurementStrategy {
        self.strategy
    }

    /// Consumes the probe and returns the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Tests whether `query` currently matches.
    ///
    /// Uses the host's native facility when present, otherwise the host's
    /// capability-detection fallback, otherwise reports `false`.
    #[must_use]
    pub fn matches_media_query(&self, query: &str) -> bool {
        if let Some(list) = self.host.match_media(query) {
            return list.matches;
        }
        log::trace!("no native media query facility, trying fallback for {query:?}");
        self.host.fallback_media_query(query).unwrap_or(false)
    }

    /// Forwards `query` to the host's native facility.
    ///
    /// Returns `None` when the host has none.
    #[must_use]
    pub fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        self.host.match_media(query)
    }

    /// Layout viewport width in pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.strategy.width(&self.host)
    }

    /// Layout viewport height in pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.strategy.height(&self.host)
    }

    /// Layout viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width(), self.viewport_height())
    }

    /// Horizontal document scroll offset.
    ///
    /// Falls back to the root element's scroll position when the page offset
    /// is missing, zero or NaN.
    #[must_use]
    pub fn scroll_x(&self) -> f64 {
        nonzero(self.host.page_x_offset()).unwrap_or_else(|| self.host.scroll_left())
    }

    /// Vertical document scroll offset.
    ///
    /// Falls back to the root element's scroll position when the page offset
    /// is missing, zero or NaN.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        nonzero(self.host.page_y_offset()).unwrap_or_else(|| self.host.scroll_top())
    }

    /// Layout box of `node` expanded by `cushion` on every side.
    ///
    /// Returns `None` when `node` is not an element.
    #[must_use]
    pub fn element_rect(&self, node: &H::Node, cushion: f64) -> Option<ClientRect> {
        let Some(bounds) = self.host.bounding_client_rect(node) else {
            log::trace!("node has no measurable layout box");
            return None;
        };
        Some(cushion_rect(bounds, cushion))
    }

    /// Like [`Probe::element_rect`] for the first node of `nodes`.
    ///
    /// Returns `None` when `nodes` is empty.
    #[must_use]
    pub fn first_element_rect(&self, nodes: &[H::Node], cushion: f64) -> Option<ClientRect> {
        self.element_rect(nodes.first()?, cushion)
    }

    /// Width divided by height of `source`.
    ///
    /// Zero height is not guarded against and yields an infinity or NaN.
    #[must_use]
    pub fn aspect_ratio(&self, source: AspectSource<'_, H::Node>) -> f64 {
        match source {
            AspectSource::Viewport => {
                let size = self.viewport();
                ratio(size.width, size.height)
            }
            AspectSource::Element(node) => self
                .element_rect(node, 0.0)
                .map_or(f64::NAN, |r| ratio(r.width, r.height)),
            AspectSource::Extent { width, height } => ratio(width.resolve(), height.resolve()),
        }
    }

    /// Tests whether `node` shares the viewport's horizontal band.
    #[must_use]
    pub fn intersects_x(&self, node: &H::Node, cushion: f64) -> bool {
        self.element_rect(node, cushion)
            .is_some_and(|r| self.within_x(&r))
    }

    /// Tests whether `node` shares the viewport's vertical band.
    #[must_use]
    pub fn intersects_y(&self, node: &H::Node, cushion: f64) -> bool {
        self.element_rect(node, cushion)
            .is_some_and(|r| self.within_y(&r))
    }

    /// Tests whether `node` overlaps the viewport.
    ///
    /// Equivalent to `intersects_x && intersects_y`, but measures the node
    /// only once.
    #[must_use]
    pub fn intersects_viewport(&self, node: &H::Node, cushion: f64) -> bool {
        self.element_rect(node, cushion)
            .is_some_and(|r| self.within_y(&r) && self.within_x(&r))
    }

    /// [`Probe::intersects_x`] for the first node of `nodes`.
    #[must_use]
    pub fn intersects_x_first(&self, nodes: &[H::Node], cushion: f64) -> bool {
        nodes.first().is_some_and(|n| self.intersects_x(n, cushion))
    }

    /// [`Probe::intersects_y`] for the first node of `nodes`.
    #[must_use]
    pub fn intersects_y_first(&self, nodes: &[H::Node], cushion: f64) -> bool {
        nodes.first().is_some_and(|n| self.intersects_y(n, cushion))
    }

    /// [`Probe::intersects_viewport`] for the first node of `nodes`.
    #[must_use]
    pub fn intersects_viewport_first(&self, nodes: &[H::Node], cushion: f64) -> bool {
        nodes
            .first()
            .is_some_and(|n| self.intersects_viewport(n, cushion))
    }

    fn within_x(&self, r: &ClientRect) -> bool {
        r.right >= 0.0 && r.left <= self.viewport_width()
    }

    fn within_y(&self, r: &ClientRect) -> bool {
        r.bottom >= 0.0 && r.top <= self.viewport_height()
    }
}

/// Treats zero and NaN like a missing value.
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use kurbo::{Rect, Size};

    use super::Probe;
    use crate::{AspectSource, Host, MeasurementStrategy, MediaQueryList};

    /// Fixed-size host whose only node is its one element.
    struct Fixed {
        inner: Size,
        client: Size,
        element: Rect,
        reads: Cell<u32>,
    }

    impl Fixed {
        fn new(element: Rect) -> Self {
            Self {
                inner: Size::new(800.0, 600.0),
                client: Size::new(800.0, 600.0),
                element,
                reads: Cell::new(0),
            }
        }
    }

    impl Host for Fixed {
        type Node = bool;

        fn inner_width(&self) -> f64 {
            self.inner.width
        }
        fn inner_height(&self) -> f64 {
            self.inner.height
        }
        fn client_width(&self) -> f64 {
            self.client.width
        }
        fn client_height(&self) -> f64 {
            self.client.height
        }
        fn page_x_offset(&self) -> Option<f64> {
            None
        }
        fn page_y_offset(&self) -> Option<f64> {
            Some(0.0)
        }
        fn scroll_left(&self) -> f64 {
            12.0
        }
        fn scroll_top(&self) -> f64 {
            34.0
        }
        fn bounding_client_rect(&self, is_element: &bool) -> Option<Rect> {
            self.reads.set(self.reads.get() + 1);
            is_element.then_some(self.element)
        }
        fn match_media(&self, _query: &str) -> Option<MediaQueryList> {
            None
        }
    }

    #[test]
    fn viewport_predicate_measures_once() {
        let probe = Probe::new(Fixed::new(Rect::new(-10.0, -10.0, 5.0, 5.0)));
        assert!(probe.intersects_viewport(&true, 0.0));
        assert_eq!(probe.host().reads.get(), 1);
    }

    #[test]
    fn non_elements_are_never_visible() {
        let probe = Probe::new(Fixed::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(probe.element_rect(&false, 0.0), None);
        assert!(!probe.intersects_x(&false, 100.0));
        assert!(!probe.intersects_y(&false, 100.0));
        assert!(!probe.intersects_viewport(&false, 100.0));
        assert!(probe.aspect_ratio(AspectSource::Element(&false)).is_nan());
    }

    #[test]
    fn empty_collection_measures_nothing() {
        let probe = Probe::new(Fixed::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(probe.first_element_rect(&[], 0.0), None);
        assert!(!probe.intersects_viewport_first(&[], 0.0));
        assert_eq!(probe.host().reads.get(), 0);
    }

    #[test]
    fn scroll_falls_back_on_missing_or_zero_offset() {
        let probe = Probe::new(Fixed::new(Rect::ZERO));
        assert_eq!(probe.scroll_x(), 12.0);
        assert_eq!(probe.scroll_y(), 34.0);
    }

    #[test]
    fn media_query_without_any_facility_is_false() {
        let probe = Probe::new(Fixed::new(Rect::ZERO));
        assert!(!probe.matches_media_query("(min-width: 1px)"));
        assert_eq!(probe.match_media("(min-width: 1px)"), None);
    }

    #[test]
    fn explicit_strategy_is_kept() {
        let mut host = Fixed::new(Rect::ZERO);
        host.client = Size::new(780.0, 580.0);
        let probe = Probe::with_strategy(&host, MeasurementStrategy::CLIENT);
        assert_eq!(probe.viewport(), Size::new(780.0, 580.0));
        assert_eq!(Probe::new(&host).viewport(), Size::new(800.0, 600.0));
    }
}
