// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a centered, snapping layout for horizontal item strips.
//!
//! This crate computes where the items of a horizontally scrolling "carousel" go.
//! Items may all have different sizes. The layout keeps one item centered in the
//! viewport, lets the next one peek in from the trailing edge, and snaps released
//! scroll gestures so that an item comes to rest exactly in the center.
//!
//! The core concepts are:
//!
//! - [`CarouselSource`]: supplies the item count, per-item sizes, and the peek gap
//!   for a layout pass. [`SizeList`] and [`UniformSizes`] cover the common cases.
//! - [`compute_frames`] and [`content_extent`]: chain item frames left to right and
//!   report how far the strip can scroll.
//! - [`apply_peek`]: slides the item before the one approaching center so that it
//!   keeps hugging its successor as widths change.
//! - [`resolve_snap_offset`]: turns a proposed resting offset into one that centers
//!   the nearest item.
//! - [`CarouselLayout`]: a small controller that caches one pass, tracks viewport
//!   and scroll state, and implements the [`ItemLayout`] query surface hosts drive.
//!
//! This crate deliberately does **not** know about widgets, views, or any particular
//! UI framework. Host frameworks are responsible for:
//!
//! - Calling [`CarouselLayout::prepare`] after any [`Invalidation`] and before
//!   querying.
//! - Feeding scroll offsets back via [`CarouselLayout::set_scroll_offset`].
//! - Drawing each item at [`ItemAttributes::transformed_frame`].
//! - Asking [`CarouselLayout::snap_offset`] where a released gesture should end and
//!   animating there using [`CarouselLayout::deceleration_rate`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_carousel::{CarouselLayout, SizeList};
//!
//! let sizes = SizeList::new(
//!     [
//!         Size::new(100.0, 100.0),
//!         Size::new(250.0, 200.0),
//!         Size::new(200.0, 300.0),
//!     ],
//!     30.0,
//! );
//! let mut layout = CarouselLayout::new(Size::new(300.0, 500.0));
//! layout.prepare(&sizes);
//!
//! // The first item starts centered and bottom-aligned.
//! let first = layout.frame_for_index(0).unwrap();
//! assert_eq!(first.origin(), Point::new(100.0, 400.0));
//!
//! // A gesture released near the second item comes to rest centering it.
//! let item1 = layout.attributes_for_index(1).unwrap().center().x;
//! let proposed = Point::new(item1 - 150.0 + 12.0, 0.0);
//! let resting = layout.snap_offset(proposed, Vec2::new(1.5, 0.0));
//! assert_eq!(resting.x, item1 - 150.0);
//!
//! // Scrolling there slides the first item by its peek translation.
//! layout.set_scroll_offset(resting);
//! assert!(layout.attributes()[0].translation.x > 0.0);
//! ```
//!
//! All sizes and offsets live in the host's content coordinate space (typically
//! logical pixels) and are expected to be finite. Negative sizes are clamped to zero.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod carousel;
mod config;
mod error;
mod frames;
mod layout;
mod peek;
mod snap;
mod source;

pub use attributes::ItemAttributes;
pub use carousel::CarouselLayout;
pub use config::{CarouselConfig, DecelerationRate};
pub use error::LayoutError;
pub use frames::{compute_frames, content_extent};
pub use layout::{Invalidation, ItemLayout};
pub use peek::{apply_peek, peek_progress, peek_space};
pub use snap::{nearest_to_center, resolve_snap_offset};
pub use source::{CarouselSource, SizeList, UniformSizes};
