// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel layout: frames, peek translation while scrolling, and snapping.
//!
//! This example lays out nine items of mixed sizes with a 30pt peek gap, then:
//! - prints the untransformed frames and the content extent,
//! - scrolls from one item to the next and shows how the previous item slides,
//! - resolves a few released gestures to their snapped resting offsets.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_snap`

use kurbo::{Point, Size, Vec2};
use understory_carousel::{CarouselLayout, SizeList};

fn main() {
    let sizes = SizeList::new(
        [
            Size::new(100.0, 100.0),
            Size::new(250.0, 200.0),
            Size::new(200.0, 300.0),
            Size::new(50.0, 200.0),
            Size::new(200.0, 300.0),
            Size::new(20.0, 150.0),
            Size::new(50.0, 100.0),
            Size::new(50.0, 100.0),
            Size::new(50.0, 100.0),
        ],
        30.0,
    );

    let mut layout = CarouselLayout::new(Size::new(335.0, 520.0));
    layout.prepare(&sizes);

    println!("== Frames ==");
    for attrs in layout.attributes() {
        let f = attrs.frame;
        println!(
            "item {}: x {:>7.1}..{:>7.1}  y {:>5.1}..{:>5.1}  center {:>7.1}",
            attrs.index,
            f.x0,
            f.x1,
            f.y0,
            f.y1,
            attrs.center().x
        );
    }
    let extent = layout.content_extent();
    println!("content extent: {:.1} x {:.1}", extent.width, extent.height);

    // Scroll from centering item 0 to centering item 1 in a few steps.
    let start = layout.scroll_offset_for_index(0).unwrap_or(Point::ORIGIN);
    let end = layout.scroll_offset_for_index(1).unwrap_or(Point::ORIGIN);
    println!("\n== Peek while scrolling item 1 into the center ==");
    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        layout.set_scroll_offset(start.lerp(end, t));
        let prev = layout.attributes()[0];
        println!(
            "offset {:>6.1}: item 0 translation {:>6.1}, drawn at x {:>6.1}",
            layout.scroll_offset().x,
            prev.translation.x,
            prev.transformed_frame().x0
        );
    }

    println!("\n== Snapping released gestures ==");
    for (proposed_x, velocity_x) in [(40.0, 0.3), (150.0, -1.2), (333.0, 2.0), (10_000.0, 0.0)] {
        let proposed = Point::new(proposed_x, 0.0);
        let resting = layout.snap_offset(proposed, Vec2::new(velocity_x, 0.0));
        layout.set_scroll_offset(resting);
        println!(
            "proposed {:>8.1} -> resting {:>7.1} (item {:?} centered)",
            proposed.x,
            resting.x,
            layout.centered_index()
        );
    }

    let visible: Vec<usize> = layout.visible_indices().collect();
    println!("visible at rest: {visible:?}");
}
