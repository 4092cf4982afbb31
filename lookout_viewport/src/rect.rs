// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// An element's layout box relative to the viewport's top-left corner,
/// after cushion adjustment.
///
/// Edges follow the DOM naming: `top`/`bottom` grow downward and
/// `left`/`right` grow rightward. `width` and `height` always equal
/// `right - left` and `bottom - top` for values produced by [`cushion_rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    /// Distance from the viewport's top edge to the box's top edge.
    pub top: f64,
    /// Distance from the viewport's left edge to the box's right edge.
    pub right: f64,
    /// Distance from the viewport's top edge to the box's bottom edge.
    pub bottom: f64,
    /// Distance from the viewport's left edge to the box's left edge.
    pub left: f64,
    /// `right - left`.
    pub width: f64,
    /// `bottom - top`.
    pub height: f64,
}

impl ClientRect {
    /// Returns the box size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the box as a Kurbo rectangle without normalizing it.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for ClientRect {
    fn from(rect: Rect) -> Self {
        cushion_rect(rect, 0.0)
    }
}

impl From<ClientRect> for Rect {
    fn from(rect: ClientRect) -> Self {
        rect.to_rect()
    }
}

/// Expands `coords` outward by `cushion` on every side.
///
/// A negative cushion contracts the box. A NaN cushion is treated as zero.
/// Width and height are recomputed from the adjusted edges; the box is not
/// normalized, so an over-contracted box reports negative extents.
#[must_use]
pub fn cushion_rect(coords: Rect, cushion: f64) -> ClientRect {
    let cushion = if cushion.is_nan() { 0.0 } else { cushion };
    let top = coords.y0 - cushion;
    let right = coords.x1 + cushion;
    let bottom = coords.y1 + cushion;
    let left = coords.x0 - cushion;
    ClientRect {
        top,
        right,
        bottom,
        left,
        width: right - left,
        height: bottom - top,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ClientRect, cushion_rect};

    #[test]
    fn cushion_expands_every_edge() {
        let r = cushion_rect(Rect::new(10.0, 20.0, 110.0, 70.0), 5.0);
        assert_eq!(r.left, 5.0);
        assert_eq!(r.top, 15.0);
        assert_eq!(r.right, 115.0);
        assert_eq!(r.bottom, 75.0);
        assert_eq!(r.width, (110.0 + 5.0) - (10.0 - 5.0));
        assert_eq!(r.height, (70.0 + 5.0) - (20.0 - 5.0));
    }

    #[test]
    fn negative_cushion_contracts_and_may_invert() {
        let r = cushion_rect(Rect::new(0.0, 0.0, 10.0, 4.0), -3.0);
        assert_eq!(r.left, 3.0);
        assert_eq!(r.right, 7.0);
        assert_eq!(r.width, 4.0);
        assert_eq!(r.height, -2.0, "contracted past zero stays inverted");
    }

    #[test]
    fn nan_cushion_is_zero() {
        let coords = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(cushion_rect(coords, f64::NAN), cushion_rect(coords, 0.0));
    }

    #[test]
    fn kurbo_conversions_keep_edges() {
        let coords = Rect::new(-10.0, -5.0, 30.0, 15.0);
        let client = ClientRect::from(coords);
        assert_eq!(client.size(), Size::new(40.0, 20.0));
        assert_eq!(Rect::from(client), coords);
    }
}
