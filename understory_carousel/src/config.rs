// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time settings for [`CarouselLayout`](crate::CarouselLayout).

use kurbo::{Point, Size};

/// How quickly the host should decelerate a released scroll gesture.
///
/// The layout only reports this; applying it is up to the host's scroll physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecelerationRate {
    /// Long, gliding deceleration.
    Normal,
    /// Short deceleration, so snapping kicks in quickly.
    #[default]
    Fast,
}

/// Settings used to construct a [`CarouselLayout`](crate::CarouselLayout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Size of the visible viewport.
    pub viewport: Size,
    /// Initial scroll offset in content coordinates.
    pub scroll_offset: Point,
    /// Deceleration reported to the host.
    pub deceleration: DecelerationRate,
}

impl CarouselConfig {
    /// Creates a config for a viewport of `viewport` size, scrolled to the origin.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scroll_offset: Point::ORIGIN,
            deceleration: DecelerationRate::Fast,
        }
    }

    /// Sets the initial scroll offset.
    #[must_use]
    pub const fn with_scroll_offset(mut self, scroll_offset: Point) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Sets the deceleration rate.
    #[must_use]
    pub const fn with_deceleration(mut self, deceleration: DecelerationRate) -> Self {
        self.deceleration = deceleration;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{CarouselConfig, DecelerationRate};

    #[test]
    fn builder_overrides_defaults() {
        let config = CarouselConfig::new(Size::new(320.0, 480.0));
        assert_eq!(config.scroll_offset, Point::ORIGIN);
        assert_eq!(config.deceleration, DecelerationRate::Fast);

        let config = config
            .with_scroll_offset(Point::new(10.0, 0.0))
            .with_deceleration(DecelerationRate::Normal);
        assert_eq!(config.scroll_offset, Point::new(10.0, 0.0));
        assert_eq!(config.deceleration, DecelerationRate::Normal);
    }
}
