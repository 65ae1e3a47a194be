// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping a proposed scroll offset so that an item lands in the viewport center.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::ItemAttributes;

/// Returns the item whose center is horizontally closest to `target_center_x`.
///
/// Exact ties go to the item that comes first in `attributes`. Returns `None` for an
/// empty slice.
#[must_use]
pub fn nearest_to_center(
    attributes: &[ItemAttributes],
    target_center_x: f64,
) -> Option<&ItemAttributes> {
    let mut best: Option<(&ItemAttributes, f64)> = None;
    for attrs in attributes {
        let distance = (attrs.center().x - target_center_x).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((attrs, distance)),
        }
    }
    best.map(|(attrs, _)| attrs)
}

/// Resolves where a scroll gesture should come to rest.
///
/// Picks the item whose center is nearest to the center of the viewport at `proposed`
/// and returns the offset that centers it exactly. The vertical component of
/// `proposed` is passed through untouched. With no items, `proposed` is returned as is.
///
/// `_velocity` is accepted to match host deceleration callbacks; selection is purely
/// nearest-center and does not predict momentum.
#[must_use]
pub fn resolve_snap_offset(
    attributes: &[ItemAttributes],
    proposed: Point,
    _velocity: Vec2,
    viewport_width: f64,
) -> Point {
    let half = viewport_width / 2.0;
    match nearest_to_center(attributes, proposed.x + half) {
        Some(attrs) => {
            log::trace!(
                "snapping proposed offset {} to item {} centered at {}",
                proposed.x,
                attrs.index,
                attrs.center().x
            );
            Point::new(attrs.center().x - half, proposed.y)
        }
        None => proposed,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size, Vec2};

    use super::{nearest_to_center, resolve_snap_offset};
    use crate::{ItemAttributes, compute_frames};

    /// Items of width 20 centered at the given x positions.
    fn centered_at(centers: &[f64]) -> Vec<ItemAttributes> {
        centers
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                ItemAttributes::new(i, Point::new(c - 10.0, 0.0), Size::new(20.0, 20.0))
            })
            .collect()
    }

    #[test]
    fn snaps_to_nearest_center() {
        let attrs = centered_at(&[100.0, 300.0, 500.0]);
        let resolved = resolve_snap_offset(&attrs, Point::new(150.0, 7.0), Vec2::ZERO, 200.0);
        assert_eq!(resolved, Point::new(200.0, 7.0));
    }

    #[test]
    fn velocity_does_not_change_selection() {
        let attrs = centered_at(&[100.0, 300.0, 500.0]);
        let slow = resolve_snap_offset(&attrs, Point::new(150.0, 0.0), Vec2::ZERO, 200.0);
        let fling = Vec2::new(-4.0, 0.0);
        let fast = resolve_snap_offset(&attrs, Point::new(150.0, 0.0), fling, 200.0);
        assert_eq!(slow, fast);
    }

    #[test]
    fn empty_attributes_keep_proposed_offset() {
        let proposed = Point::new(42.0, 3.0);
        assert_eq!(
            resolve_snap_offset(&[], proposed, Vec2::new(1.0, 0.0), 200.0),
            proposed
        );
    }

    #[test]
    fn ties_pick_lowest_index() {
        let attrs = centered_at(&[100.0, 300.0]);
        for _ in 0..3 {
            let nearest = nearest_to_center(&attrs, 200.0).unwrap();
            assert_eq!(nearest.index, 0);
        }
    }

    #[test]
    fn snapping_is_idempotent() {
        let viewport = Size::new(320.0, 480.0);
        let sizes = [
            Size::new(100.0, 100.0),
            Size::new(250.0, 200.0),
            Size::new(20.0, 150.0),
            Size::new(200.0, 300.0),
        ];
        let attrs = compute_frames(&sizes, viewport, 30.0);
        for proposed_x in [-50.0, 0.0, 73.0, 260.0, 555.5, 2000.0] {
            let once = resolve_snap_offset(
                &attrs,
                Point::new(proposed_x, 0.0),
                Vec2::ZERO,
                viewport.width,
            );
            let twice = resolve_snap_offset(&attrs, once, Vec2::ZERO, viewport.width);
            assert_eq!(once, twice);
        }
    }
}
