// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Peek translation: sliding the previous item as the next one approaches center.
//!
//! Items of different widths leave different amounts of idle space around them when
//! centered. As item `i` travels from the trailing edge of the viewport towards its
//! center, item `i - 1` is shifted horizontally by the difference between those
//! spaces so it keeps hugging the newly centered item. The shift ramps in linearly
//! while item `i`'s center moves from the trailing edge to the middle of the viewport
//! and stays at full strength afterwards.

use kurbo::Vec2;

use crate::ItemAttributes;

/// Idle horizontal space on each side of a centered item of `width`, after reserving
/// `peek_gap` on both edges of the viewport.
#[must_use]
pub fn peek_space(viewport_width: f64, width: f64, peek_gap: f64) -> f64 {
    (viewport_width - width - 2.0 * peek_gap) / 2.0
}

/// Fraction of the full peek translation to apply for an item whose center sits at
/// `normalized_center` viewport widths from the viewport's leading edge.
///
/// Returns `0.0` at the trailing edge (`1.0`), `1.0` at the center (`0.5`) and for
/// every position before it. Positions past the trailing edge yield negative values;
/// callers skip those items entirely.
#[must_use]
pub fn peek_progress(normalized_center: f64) -> f64 {
    (-(normalized_center - 1.0) * 2.0).min(1.0)
}

/// Recomputes peek translations for `attributes` at the given scroll offset.
///
/// Every translation is reset first, so stale values from a previous offset never
/// survive. The last item is never translated. Translations only move along `x`.
///
/// A zero-width viewport produces no translation.
pub fn apply_peek(
    attributes: &mut [ItemAttributes],
    scroll_offset_x: f64,
    viewport_width: f64,
    peek_gap: f64,
) {
    for attrs in attributes.iter_mut() {
        attrs.translation = Vec2::ZERO;
    }
    if viewport_width <= 0.0 {
        return;
    }

    for i in 1..attributes.len() {
        let current = attributes[i];
        let normalized = (current.center().x - scroll_offset_x) / viewport_width;
        // Not entered from the trailing edge yet, or not a position at all.
        if normalized.is_nan() || normalized >= 1.0 {
            continue;
        }
        let prev = &mut attributes[i - 1];
        let target = peek_space(viewport_width, prev.width(), peek_gap)
            - peek_space(viewport_width, current.width(), peek_gap);
        prev.translation = Vec2::new(target * peek_progress(normalized), 0.0);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{apply_peek, peek_progress, peek_space};
    use crate::{ItemAttributes, compute_frames};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn progress_ramps_over_second_half_of_approach() {
        assert!(approx_eq(peek_progress(1.0), 0.0));
        assert!(approx_eq(peek_progress(0.75), 0.5));
        assert!(approx_eq(peek_progress(0.5), 1.0));
        assert!(approx_eq(peek_progress(0.1), 1.0));
        assert!(approx_eq(peek_progress(-3.0), 1.0));
    }

    #[test]
    fn space_reserves_gap_on_both_edges() {
        assert!(approx_eq(peek_space(300.0, 100.0, 30.0), 70.0));
        assert!(approx_eq(peek_space(300.0, 250.0, 30.0), -5.0));
    }

    /// Two hand-placed items whose space difference is exactly 40.
    fn pair_with_target_40(successor_center_x: f64) -> [ItemAttributes; 2] {
        // space(100) - space(180) = (400 - 100 - 20) / 2 - (400 - 180 - 20) / 2 = 40
        let prev = ItemAttributes::new(0, Point::new(0.0, 0.0), Size::new(100.0, 10.0));
        let next = ItemAttributes::new(
            1,
            Point::new(successor_center_x - 90.0, 0.0),
            Size::new(180.0, 10.0),
        );
        [prev, next]
    }

    #[test]
    fn translation_ramps_with_successor_position() {
        const W: f64 = 400.0;
        const GAP: f64 = 10.0;

        // Successor at the trailing edge: no translation.
        let mut attrs = pair_with_target_40(W);
        apply_peek(&mut attrs, 0.0, W, GAP);
        assert!(approx_eq(attrs[0].translation.x, 0.0));

        // Three quarters across: half strength.
        let mut attrs = pair_with_target_40(0.75 * W);
        apply_peek(&mut attrs, 0.0, W, GAP);
        assert!(approx_eq(attrs[0].translation.x, 20.0));

        // Centered: full strength.
        let mut attrs = pair_with_target_40(0.5 * W);
        apply_peek(&mut attrs, 0.0, W, GAP);
        assert!(approx_eq(attrs[0].translation.x, 40.0));

        // The successor itself is never translated, and nothing moves vertically.
        assert_eq!(attrs[1].translation, Vec2::ZERO);
        assert_eq!(attrs[0].translation.y, 0.0);
    }

    #[test]
    fn scroll_offset_shifts_normalized_position() {
        const W: f64 = 400.0;
        // Successor center at 700; scrolling by 500 puts it at 200, the viewport center.
        let mut attrs = pair_with_target_40(700.0);
        apply_peek(&mut attrs, 0.0, W, 10.0);
        assert_eq!(attrs[0].translation, Vec2::ZERO);
        apply_peek(&mut attrs, 500.0, W, 10.0);
        assert!(approx_eq(attrs[0].translation.x, 40.0));
        // Scrolling back resets the stale translation.
        apply_peek(&mut attrs, 0.0, W, 10.0);
        assert_eq!(attrs[0].translation, Vec2::ZERO);
    }

    #[test]
    fn single_item_is_never_translated() {
        let viewport = Size::new(300.0, 300.0);
        let mut attrs = compute_frames(&[Size::new(100.0, 100.0)], viewport, 30.0);
        apply_peek(&mut attrs, 0.0, viewport.width, 30.0);
        assert_eq!(attrs[0].translation, Vec2::ZERO);
    }

    #[test]
    fn nan_scroll_offset_produces_no_translation() {
        let mut attrs = pair_with_target_40(200.0);
        apply_peek(&mut attrs, f64::NAN, 400.0, 10.0);
        assert_eq!(attrs[0].translation, Vec2::ZERO);
    }

    #[test]
    fn zero_width_viewport_produces_no_translation() {
        let mut attrs = pair_with_target_40(0.0);
        apply_peek(&mut attrs, 0.0, 0.0, 10.0);
        assert_eq!(attrs[0].translation, Vec2::ZERO);
    }
}
