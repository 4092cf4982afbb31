// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Host;

/// Which host measurement an axis of the layout viewport is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DimensionSource {
    /// The root element's client size.
    ///
    /// Excludes non-overlay scrollbars, and is the correct measurement on
    /// hosts where it is not smaller than the window's inner size.
    #[default]
    Client,
    /// The window's inner size.
    ///
    /// Used on hosts whose root element reports a client size smaller than
    /// the window, such as mobile browsers that zoom the layout viewport.
    Inner,
}

impl DimensionSource {
    /// Picks the larger of the two measurements, preferring [`Self::Client`]
    /// on ties or when either value is NaN.
    #[must_use]
    pub fn choose(client: f64, inner: f64) -> Self {
        if client < inner { Self::Inner } else { Self::Client }
    }
}

/// Per-axis measurement choice for the layout viewport.
///
/// The choice is made once, typically at startup through
/// [`MeasurementStrategy::resolve`], and then every viewport query reads
/// live values through it. Re-resolving is the caller's decision; this type
/// never changes on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MeasurementStrategy {
    /// Source for the viewport width.
    pub width: DimensionSource,
    /// Source for the viewport height.
    pub height: DimensionSource,
}

impl MeasurementStrategy {
    /// Reads both axes from the root element's client size.
    pub const CLIENT: Self = Self {
        width: DimensionSource::Client,
        height: DimensionSource::Client,
    };

    /// Reads both axes from the window's inner size.
    pub const INNER: Self = Self {
        width: DimensionSource::Inner,
        height: DimensionSource::Inner,
    };

    /// Compares the host's client and inner sizes right now and picks the
    /// larger source for each axis.
    #[must_use]
    pub fn resolve<H: Host + ?Sized>(host: &H) -> Self {
        let strategy = Self {
            width: DimensionSource::choose(host.client_width(), host.inner_width()),
            height: DimensionSource::choose(host.client_height(), host.inner_height()),
        };
        log::debug!(
            "resolved viewport measurement: width from {:?}, height from {:?}",
            strategy.width,
            strategy.height
        );
        strategy
    }

    /// Reads the viewport width from `host` through the chosen source.
    #[must_use]
    pub fn width<H: Host + ?Sized>(&self, host: &H) -> f64 {
        match self.width {
            DimensionSource::Client => host.client_width(),
            DimensionSource::Inner => host.inner_width(),
        }
    }

    /// Reads the viewport height from `host` through the chosen source.
    #[must_use]
    pub fn height<H: Host + ?Sized>(&self, host: &H) -> f64 {
        match self.height {
            DimensionSource::Client => host.client_height(),
            DimensionSource::Inner => host.inner_height(),
        }
    }
}
