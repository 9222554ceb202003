// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The scanning engine itself never fails: offsets are clamped and an exhausted source
//! produces an empty cluster. The checked entry points ([`crate::try_decode_at`] and
//! [`crate::try_decode_before`]) validate offsets up front instead, and report problems
//! using the types in this module.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`GcScanError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Offset validation errors for the checked decode API.
///
/// | Variant                     | Cause                                                 |
/// | :-------------------------- | :---------------------------------------------------- |
/// | [`OffsetOutOfBounds`]       | The offset is past the end of the source              |
/// | [`OffsetNotOnCharBoundary`] | The offset splits the UTF-8 encoding of a code point |
///
/// [`OffsetOutOfBounds`]: Self::OffsetOutOfBounds
/// [`OffsetNotOnCharBoundary`]: Self::OffsetNotOnCharBoundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GcScanError {
    #[error("📏 Offset {offset} is out of bounds for a source of {len} bytes")]
    #[diagnostic(
        code(gc_scan::offset_out_of_bounds),
        help("Offsets must be in the range `0..=len`.")
    )]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("✂️ Offset {offset} is not on a UTF-8 code point boundary")]
    #[diagnostic(
        code(gc_scan::offset_not_on_char_boundary),
        help(
            "The offset lands on a UTF-8 continuation byte. Use an offset returned by \
             a previous scan, or move it back to the start of the code point."
        )
    )]
    OffsetNotOnCharBoundary { offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_error_messages() {
        let it = GcScanError::OffsetOutOfBounds { offset: 9, len: 4 };
        assert_eq2!(
            it.to_string(),
            "📏 Offset 9 is out of bounds for a source of 4 bytes"
        );

        let it = GcScanError::OffsetNotOnCharBoundary { offset: 1 };
        assert_eq2!(
            it.to_string(),
            "✂️ Offset 1 is not on a UTF-8 code point boundary"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let it = GcScanError::OffsetNotOnCharBoundary { offset: 1 };
        assert_eq2!(
            it.code().map(|code| code.to_string()),
            Some("gc_scan::offset_not_on_char_boundary".to_string())
        );
    }

    #[test]
    fn test_into_report() {
        let result: CommonResult<()> =
            Err(GcScanError::OffsetOutOfBounds { offset: 2, len: 1 }.into());
        let report = result.unwrap_err();
        assert_eq2!(
            report.downcast_ref::<GcScanError>(),
            Some(&GcScanError::OffsetOutOfBounds { offset: 2, len: 1 })
        );
    }
}
