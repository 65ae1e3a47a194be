// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations reported while preparing a layout pass.

/// Error produced when a [`CarouselSource`](crate::CarouselSource) breaks its contract.
///
/// These are programming errors on the host side. [`CarouselLayout::prepare`](crate::CarouselLayout::prepare)
/// panics on them; [`CarouselLayout::try_prepare`](crate::CarouselLayout::try_prepare)
/// hands them back instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The source reported `len` items but had no size for `index`.
    #[error("carousel source reported {len} items but returned no size for index {index}")]
    MissingSize {
        /// Index that had no size.
        index: usize,
        /// Item count reported by the source for this pass.
        len: usize,
    },
    /// The source reported `len` items but still had a size for index `len`.
    #[error("carousel source reported {len} items but returned a size for index {len}")]
    ExtraSize {
        /// Item count reported by the source for this pass.
        len: usize,
    },
    /// A size, the peek gap, or the viewport contained a NaN or infinity.
    #[error("carousel {what} must be finite; got {value:?}")]
    NonFinite {
        /// Which input was not finite.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::LayoutError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = LayoutError::MissingSize { index: 4, len: 9 };
        assert_eq!(
            err.to_string(),
            "carousel source reported 9 items but returned no size for index 4"
        );

        let err = LayoutError::ExtraSize { len: 2 };
        assert_eq!(
            err.to_string(),
            "carousel source reported 2 items but returned a size for index 2"
        );

        let err = LayoutError::NonFinite {
            what: "peek gap",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "carousel peek gap must be finite; got NaN");
    }

    #[test]
    fn is_a_core_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&LayoutError::ExtraSize { len: 0 });
    }
}
