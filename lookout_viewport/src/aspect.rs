// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, Size};

use crate::ClientRect;

/// A width or height that is either stored or computed on demand.
#[derive(Clone, Copy)]
pub enum Dimension<'a> {
    /// A literal value.
    Value(f64),
    /// A zero-argument accessor, invoked each time the dimension is resolved.
    Accessor(&'a dyn Fn() -> f64),
}

impl Dimension<'_> {
    /// Returns the literal value or the accessor's result.
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Accessor(f) => f(),
        }
    }
}

impl fmt::Debug for Dimension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

impl From<f64> for Dimension<'_> {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl<'a, F: Fn() -> f64> From<&'a F> for Dimension<'a> {
    fn from(accessor: &'a F) -> Self {
        Self::Accessor(accessor)
    }
}

/// What an aspect ratio is measured from.
#[derive(Debug)]
pub enum AspectSource<'a, N> {
    /// The layout viewport.
    Viewport,
    /// An element's layout box. A non-element yields NaN.
    Element(&'a N),
    /// Caller-supplied dimensions.
    Extent {
        /// Horizontal extent.
        width: Dimension<'a>,
        /// Vertical extent.
        height: Dimension<'a>,
    },
}

impl<N> Clone for AspectSource<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for AspectSource<'_, N> {}

impl<'a, N> AspectSource<'a, N> {
    /// Builds an [`AspectSource::Extent`] from anything convertible to a [`Dimension`].
    #[must_use]
    pub fn extent(width: impl Into<Dimension<'a>>, height: impl Into<Dimension<'a>>) -> Self {
        Self::Extent {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl<N> From<Size> for AspectSource<'_, N> {
    fn from(size: Size) -> Self {
        Self::extent(size.width, size.height)
    }
}

impl<N> From<Rect> for AspectSource<'_, N> {
    fn from(rect: Rect) -> Self {
        Self::extent(rect.width(), rect.height())
    }
}

impl<N> From<ClientRect> for AspectSource<'_, N> {
    fn from(rect: ClientRect) -> Self {
        Self::extent(rect.width, rect.height)
    }
}

/// Divides `width` by `height` without guarding against zero.
///
/// A zero height yields an infinity, or NaN when the width is also zero.
#[must_use]
pub(crate) fn ratio(width: f64, height: f64) -> f64 {
    width / height
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use kurbo::Size;

    use super::{AspectSource, Dimension, ratio};

    #[test]
    fn accessor_runs_on_every_resolve() {
        let calls = Cell::new(0_u32);
        let width = || {
            calls.set(calls.get() + 1);
            16.0
        };
        let dim = Dimension::from(&width);
        assert_eq!(dim.resolve(), 16.0);
        assert_eq!(dim.resolve(), 16.0);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn size_becomes_literal_extent() {
        let source: AspectSource<'_, ()> = Size::new(16.0, 9.0).into();
        match source {
            AspectSource::Extent { width, height } => {
                assert_eq!(ratio(width.resolve(), height.resolve()), 16.0 / 9.0);
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn zero_height_is_not_guarded() {
        assert_eq!(ratio(4.0, 0.0), f64::INFINITY);
        assert_eq!(ratio(-4.0, 0.0), f64::NEG_INFINITY);
        assert!(ratio(0.0, 0.0).is_nan());
    }
}
