// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The query surface a host rendering pass drives.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::{CarouselSource, ItemAttributes};

/// Why cached layout output is being discarded.
///
/// Every kind clears the whole cache; there is no partial invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// The host reloaded everything.
    Everything,
    /// The number of items changed.
    DataSourceCounts,
    /// The viewport bounds changed.
    Bounds,
}

/// A layout that a host view framework prepares and then queries during its rendering pass.
///
/// Hosts typically wrap an implementation in a thin adapter for their own layout
/// hooks. A host is expected to call [`ItemLayout::prepare`] after any invalidation
/// and before querying; until then, queries behave as if the strip were empty.
pub trait ItemLayout {
    /// Rebuilds the layout from `source`.
    fn prepare(&mut self, source: &dyn CarouselSource);

    /// Discards all cached output.
    fn invalidate(&mut self, invalidation: Invalidation);

    /// Attributes of every item whose frame overlaps `rect`, in index order.
    fn attributes_intersecting(&self, rect: Rect) -> Vec<ItemAttributes>;

    /// Attributes of the item at `index`, if it exists.
    fn attributes_for_index(&self, index: usize) -> Option<ItemAttributes>;

    /// Untransformed frame of the item at `index`, if it exists.
    fn frame_for_index(&self, index: usize) -> Option<Rect> {
        self.attributes_for_index(index).map(|attrs| attrs.frame)
    }

    /// Total scrollable extent.
    fn content_extent(&self) -> Size;

    /// Where a scroll gesture released at `proposed` with `velocity` should come to rest.
    fn snap_offset(&self, proposed: Point, velocity: Vec2) -> Point;
}
