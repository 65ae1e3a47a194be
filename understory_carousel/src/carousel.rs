// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controller that caches one layout pass and tracks viewport and scroll state.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::{
    CarouselConfig, CarouselSource, DecelerationRate, Invalidation, ItemAttributes, ItemLayout,
    LayoutError, apply_peek, compute_frames, content_extent, nearest_to_center,
    resolve_snap_offset,
};

/// Centered, snapping carousel layout over a horizontal strip of items.
///
/// This type:
/// - stores the viewport size, scroll offset, and deceleration hint,
/// - caches the frames of the most recent layout pass,
/// - re-applies peek translations whenever the scroll offset changes,
/// - answers the host's attribute, extent, and snap queries.
///
/// It does *not* own item data; a [`CarouselSource`] is passed to every
/// [`prepare`](Self::prepare) call instead.
#[derive(Debug, Clone)]
pub struct CarouselLayout {
    viewport: Size,
    scroll_offset: Point,
    deceleration: DecelerationRate,
    peek_gap: f64,

    prepared: bool,
    frames: Vec<ItemAttributes>,
    attributes: Vec<ItemAttributes>,
}

impl CarouselLayout {
    /// Creates an unprepared layout for a viewport of `viewport` size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self::with_config(CarouselConfig::new(viewport))
    }

    /// Creates an unprepared layout from `config`.
    #[must_use]
    pub fn with_config(config: CarouselConfig) -> Self {
        Self {
            viewport: config.viewport,
            scroll_offset: config.scroll_offset,
            deceleration: config.deceleration,
            peek_gap: 0.0,
            prepared: false,
            frames: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Rebuilds all frames from `source` and applies peek translations for the
    /// current scroll offset.
    ///
    /// # Panics
    ///
    /// Panics if `source` breaks its contract; see [`try_prepare`](Self::try_prepare).
    #[track_caller]
    pub fn prepare<S: CarouselSource + ?Sized>(&mut self, source: &S) {
        if let Err(err) = self.try_prepare(source) {
            panic!("{err}");
        }
    }

    /// Rebuilds all frames from `source`, reporting contract violations instead of panicking.
    ///
    /// On error the cache is left cleared, so no partially built or stale output is
    /// ever served.
    pub fn try_prepare<S: CarouselSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<(), LayoutError> {
        self.clear();

        check_finite("viewport width", self.viewport.width)?;
        check_finite("viewport height", self.viewport.height)?;
        let peek_gap = source.peek_gap();
        check_finite("peek gap", peek_gap)?;

        let len = source.len();
        let mut sizes = Vec::with_capacity(len);
        for index in 0..len {
            let size = source
                .size_of(index)
                .ok_or(LayoutError::MissingSize { index, len })?;
            check_finite("item width", size.width)?;
            check_finite("item height", size.height)?;
            sizes.push(size);
        }
        if source.size_of(len).is_some() {
            return Err(LayoutError::ExtraSize { len });
        }

        self.peek_gap = peek_gap;
        self.frames = compute_frames(&sizes, self.viewport, peek_gap);
        self.prepared = true;
        self.refresh_peek();

        log::debug!(
            "prepared carousel layout: {len} items, viewport {:?}, content extent {:?}",
            self.viewport,
            self.content_extent()
        );
        Ok(())
    }

    /// Discards all cached output. Queries behave as if the strip were empty until
    /// the next [`prepare`](Self::prepare).
    pub fn invalidate(&mut self, invalidation: Invalidation) {
        log::trace!("invalidating carousel layout: {invalidation:?}");
        self.clear();
    }

    fn clear(&mut self) {
        self.prepared = false;
        self.peek_gap = 0.0;
        self.frames.clear();
        self.attributes.clear();
    }

    fn refresh_peek(&mut self) {
        self.attributes.clone_from(&self.frames);
        apply_peek(
            &mut self.attributes,
            self.scroll_offset.x,
            self.viewport.width,
            self.peek_gap,
        );
    }

    /// Returns `true` if the layout holds output from a [`prepare`](Self::prepare)
    /// that has not been invalidated since.
    #[must_use]
    pub const fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Number of laid out items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no items are laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size.
    ///
    /// Frames depend on the viewport, so any change invalidates the layout.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.invalidate(Invalidation::Bounds);
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Sets the scroll offset and re-applies peek translations.
    pub fn set_scroll_offset(&mut self, offset: Point) {
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.refresh_peek();
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Returns the peek gap used by the last pass, or `0.0` while unprepared.
    #[must_use]
    pub const fn peek_gap(&self) -> f64 {
        self.peek_gap
    }

    /// Returns the deceleration the host should apply to released scroll gestures.
    #[must_use]
    pub const fn deceleration_rate(&self) -> DecelerationRate {
        self.deceleration
    }

    /// All item attributes at the current scroll offset, in index order.
    #[must_use]
    pub fn attributes(&self) -> &[ItemAttributes] {
        &self.attributes
    }

    /// Attributes of every item whose untransformed frame overlaps `rect`.
    #[must_use]
    pub fn attributes_intersecting(&self, rect: Rect) -> Vec<ItemAttributes> {
        self.attributes
            .iter()
            .filter(|attrs| attrs.intersects(rect))
            .copied()
            .collect()
    }

    /// Attributes of the item at `index`, if it exists.
    #[must_use]
    pub fn attributes_for_index(&self, index: usize) -> Option<ItemAttributes> {
        self.attributes.get(index).copied()
    }

    /// Untransformed frame of the item at `index`, if it exists.
    #[must_use]
    pub fn frame_for_index(&self, index: usize) -> Option<Rect> {
        self.attributes.get(index).map(|attrs| attrs.frame)
    }

    /// Total scrollable extent. Zero-width until a non-empty pass is prepared.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        content_extent(&self.attributes, self.viewport)
    }

    /// Where a scroll gesture released at `proposed` should come to rest.
    ///
    /// `velocity` does not influence the result.
    #[must_use]
    pub fn snap_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        resolve_snap_offset(&self.attributes, proposed, velocity, self.viewport.width)
    }

    /// Index of the item nearest to the viewport center at the current scroll offset.
    #[must_use]
    pub fn centered_index(&self) -> Option<usize> {
        let target = self.scroll_offset.x + self.viewport.width / 2.0;
        nearest_to_center(&self.attributes, target).map(|attrs| attrs.index)
    }

    /// Scroll offset that centers the item at `index`, keeping the current vertical offset.
    #[must_use]
    pub fn scroll_offset_for_index(&self, index: usize) -> Option<Point> {
        let attrs = self.attributes.get(index)?;
        Some(Point::new(
            attrs.center().x - self.viewport.width / 2.0,
            self.scroll_offset.y,
        ))
    }

    /// Scrolls so the item at `index` is centered.
    ///
    /// Out-of-range indices are clamped to the last item. Does nothing while the
    /// layout is empty.
    pub fn scroll_to_index(&mut self, index: usize) {
        let Some(last) = self.len().checked_sub(1) else {
            return;
        };
        if let Some(offset) = self.scroll_offset_for_index(index.min(last)) {
            self.set_scroll_offset(offset);
        }
    }

    /// Indices of items whose frames overlap the viewport at the current scroll offset.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let viewport = Rect::from_origin_size(self.scroll_offset, self.viewport);
        self.attributes
            .iter()
            .filter(move |attrs| attrs.intersects(viewport))
            .map(|attrs| attrs.index)
    }
}

impl ItemLayout for CarouselLayout {
    fn prepare(&mut self, source: &dyn CarouselSource) {
        Self::prepare(self, source);
    }

    fn invalidate(&mut self, invalidation: Invalidation) {
        Self::invalidate(self, invalidation);
    }

    fn attributes_intersecting(&self, rect: Rect) -> Vec<ItemAttributes> {
        Self::attributes_intersecting(self, rect)
    }

    fn attributes_for_index(&self, index: usize) -> Option<ItemAttributes> {
        Self::attributes_for_index(self, index)
    }

    fn frame_for_index(&self, index: usize) -> Option<Rect> {
        Self::frame_for_index(self, index)
    }

    fn content_extent(&self) -> Size {
        Self::content_extent(self)
    }

    fn snap_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        Self::snap_offset(self, proposed, velocity)
    }
}

fn check_finite(what: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::NonFinite { what, value })
    }
}
