// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame building: chaining item origins along the strip.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::ItemAttributes;

/// Computes untransformed frames for `sizes` laid out in a viewport of `viewport` size.
///
/// - The first item is centered horizontally: `x = (W - w0) / 2`.
/// - Every following item starts at `prev.x + prev.width / 2 + W / 2 - peek_gap`, so
///   that while the previous item is centered, the next one peeks in with its leading
///   edge exactly `peek_gap` before the viewport's trailing edge.
/// - All items are bottom-aligned: `y = H - h`.
///
/// Negative widths or heights are clamped to zero. Sizes are expected to be finite.
///
/// The returned attributes carry no translation; see [`apply_peek`](crate::apply_peek).
#[must_use]
pub fn compute_frames(sizes: &[Size], viewport: Size, peek_gap: f64) -> Vec<ItemAttributes> {
    let mut attributes: Vec<ItemAttributes> = Vec::with_capacity(sizes.len());
    for (index, &size) in sizes.iter().enumerate() {
        let size = clamp_size(index, size);
        let x = match attributes.last() {
            Some(prev) => prev.frame.x0 + prev.width() / 2.0 + viewport.width / 2.0 - peek_gap,
            None => viewport.width / 2.0 - size.width / 2.0,
        };
        let y = viewport.height - size.height;
        attributes.push(ItemAttributes::new(index, Point::new(x, y), size));
    }
    attributes
}

/// Total scrollable extent for a strip laid out by [`compute_frames`].
///
/// The width leaves enough room after the last item to scroll it to the center of the
/// viewport. The height always matches the viewport. An empty strip has zero width.
#[must_use]
pub fn content_extent(attributes: &[ItemAttributes], viewport: Size) -> Size {
    match attributes.last() {
        Some(last) => {
            let trailing_space = (viewport.width - last.width()) / 2.0;
            Size::new(last.frame.x0 + last.width() + trailing_space, viewport.height)
        }
        None => Size::new(0.0, viewport.height),
    }
}

fn clamp_size(index: usize, size: Size) -> Size {
    debug_assert!(
        size.is_finite(),
        "carousel item sizes must be finite; got {size:?} at index {index}"
    );
    if size.width.is_sign_negative() || size.height.is_sign_negative() {
        log::warn!("clamping negative size {size:?} of carousel item {index} to zero");
        Size::new(size.width.max(0.0), size.height.max(0.0))
    } else {
        size
    }
}
