// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout output.

use kurbo::{Point, Rect, Size, Vec2};

/// Computed placement of a single carousel item.
///
/// Frames live in content coordinates: the same space as the scroll offset
/// and the content extent reported by the layout. The `translation` is an
/// additional offset the host applies on top of `frame` when drawing; it is
/// only ever non-zero along `x`, for the item preceding the one approaching
/// the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAttributes {
    /// Position of the item in the strip.
    pub index: usize,
    /// Untransformed frame in content coordinates.
    pub frame: Rect,
    /// Peek translation applied on top of `frame`.
    pub translation: Vec2,
}

impl ItemAttributes {
    /// Creates attributes for `index` with the given origin and size and no translation.
    #[must_use]
    pub fn new(index: usize, origin: Point, size: Size) -> Self {
        Self {
            index,
            frame: Rect::from_origin_size(origin, size),
            translation: Vec2::ZERO,
        }
    }

    /// Center of the untransformed frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Width of the frame.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    /// Size of the frame.
    #[must_use]
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// The frame with `translation` applied; this is where the item is drawn.
    #[must_use]
    pub fn transformed_frame(&self) -> Rect {
        self.frame + self.translation
    }

    /// Returns `true` if the frame overlaps `rect` with a non-empty area.
    ///
    /// Rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, rect: Rect) -> bool {
        let a = self.frame.abs();
        let b = rect.abs();
        a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ItemAttributes;

    #[test]
    fn center_is_derived_from_frame() {
        let attrs = ItemAttributes::new(0, Point::new(10.0, 20.0), Size::new(40.0, 60.0));
        assert_eq!(attrs.center(), Point::new(30.0, 50.0));
        assert_eq!(attrs.translation, Vec2::ZERO);
    }

    #[test]
    fn transformed_frame_shifts_by_translation() {
        let mut attrs = ItemAttributes::new(3, Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        attrs.translation = Vec2::new(-5.0, 0.0);
        assert_eq!(attrs.transformed_frame(), Rect::new(-5.0, 0.0, 5.0, 10.0));
        // The untransformed frame drives geometry queries.
        assert_eq!(attrs.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let attrs = ItemAttributes::new(0, Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(attrs.intersects(Rect::new(5.0, 5.0, 20.0, 20.0)));
        assert!(!attrs.intersects(Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!attrs.intersects(Rect::new(0.0, 11.0, 10.0, 20.0)));
    }
}
