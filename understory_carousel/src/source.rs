// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item size providers.

use alloc::vec::Vec;

use kurbo::Size;

/// Supplies item count, per-item sizes, and the peek gap for one layout pass.
///
/// A source is handed to [`CarouselLayout::prepare`](crate::CarouselLayout::prepare)
/// by reference on every pass; the layout never keeps hold of it. Values must be
/// stable for the duration of a single pass but may change between passes.
pub trait CarouselSource {
    /// Number of items in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the item at `index`.
    ///
    /// Must return `Some` for every index in `0..len()` and `None` at `len()`.
    /// Either mismatch is treated as a contract violation, never as a shorter or
    /// longer strip.
    fn size_of(&self, index: usize) -> Option<Size>;

    /// Horizontal gap reserved between the centered item and the next item's
    /// leading edge.
    fn peek_gap(&self) -> f64;
}

impl<T: CarouselSource + ?Sized> CarouselSource for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        (**self).size_of(index)
    }

    fn peek_gap(&self) -> f64 {
        (**self).peek_gap()
    }
}

/// A [`CarouselSource`] backed by an explicit list of per-item sizes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeList {
    sizes: Vec<Size>,
    peek_gap: f64,
}

impl SizeList {
    /// Creates a source from `sizes` with the given peek gap.
    #[must_use]
    pub fn new(sizes: impl Into<Vec<Size>>, peek_gap: f64) -> Self {
        Self {
            sizes: sizes.into(),
            peek_gap,
        }
    }

    /// Returns the sizes in index order.
    #[must_use]
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// Appends an item.
    pub fn push(&mut self, size: Size) {
        self.sizes.push(size);
    }

    /// Replaces the size of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_size(&mut self, index: usize, size: Size) {
        self.sizes[index] = size;
    }

    /// Sets the peek gap.
    pub fn set_peek_gap(&mut self, peek_gap: f64) {
        self.peek_gap = peek_gap;
    }

    /// Rebuilds the sizes from a sequence of items and a size function.
    ///
    /// Any previous sizes are discarded.
    pub fn rebuild<T, I>(&mut self, items: I, size_fn: &dyn Fn(&T) -> Size)
    where
        I: IntoIterator<Item = T>,
    {
        self.sizes.clear();
        self.sizes.extend(items.into_iter().map(|item| size_fn(&item)));
    }
}

impl CarouselSource for SizeList {
    fn len(&self) -> usize {
        self.sizes.len()
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        self.sizes.get(index).copied()
    }

    fn peek_gap(&self) -> f64 {
        self.peek_gap
    }
}

/// A [`CarouselSource`] where every item shares the same size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSizes {
    len: usize,
    size: Size,
    peek_gap: f64,
}

impl UniformSizes {
    /// Creates a source with `len` items of `size`.
    #[must_use]
    pub const fn new(len: usize, size: Size, peek_gap: f64) -> Self {
        Self {
            len,
            size,
            peek_gap,
        }
    }

    /// Sets the number of items.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Returns the shared item size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

impl CarouselSource for UniformSizes {
    fn len(&self) -> usize {
        self.len
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        (index < self.len).then_some(self.size)
    }

    fn peek_gap(&self) -> f64 {
        self.peek_gap
    }
}
