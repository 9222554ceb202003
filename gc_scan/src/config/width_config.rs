// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthChar;

/// Name of the environment variable read by [`WidthConfig::from_env()`].
pub const EAST_ASIAN_WIDTH_ENV_VAR: &str = "GC_SCAN_EAST_ASIAN_WIDTH";

/// How many columns an East Asian Ambiguous character (e.g. `±`, `§`, Greek and
/// Cyrillic letters) occupies. This depends on the terminal and the user's locale;
/// CJK terminals usually render them wide.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum AmbiguousWidth {
    #[default]
    Narrow,
    Wide,
}

/// Display width configuration for the scanners.
///
/// 1. [`WidthConfig::default()`] treats ambiguous characters as narrow.
/// 2. [`WidthConfig::from_env()`] reads [`EAST_ASIAN_WIDTH_ENV_VAR`].
/// 3. Any [`AmbiguousWidth`] converts into a [`WidthConfig`].
///
/// # Examples
///
/// ```
/// use gc_scan::{AmbiguousWidth, GraphemeScanner, WidthConfig};
///
/// let scanner = GraphemeScanner::new(AmbiguousWidth::Wide);
/// assert_eq!(scanner.str_width("±").as_usize(), 2);
/// assert_eq!(GraphemeScanner::default().str_width("±").as_usize(), 1);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct WidthConfig {
    pub ambiguous_width: AmbiguousWidth,
}

impl WidthConfig {
    /// Read the ambiguous width preference from [`EAST_ASIAN_WIDTH_ENV_VAR`]. Falls back
    /// to [`AmbiguousWidth::Narrow`] when the variable is unset or unrecognized.
    #[must_use]
    pub fn from_env() -> Self {
        let maybe_value = std::env::var(EAST_ASIAN_WIDTH_ENV_VAR).ok();
        Self::from_env_value(maybe_value.as_deref())
    }

    /// `wide`, `2`, `1` and `true` (case insensitive) select [`AmbiguousWidth::Wide`].
    #[must_use]
    pub fn from_env_value(maybe_value: Option<&str>) -> Self {
        let ambiguous_width = match maybe_value.map(str::trim) {
            Some(value)
                if ["wide", "2", "1", "true"]
                    .iter()
                    .any(|it| value.eq_ignore_ascii_case(it)) =>
            {
                AmbiguousWidth::Wide
            }
            _ => AmbiguousWidth::Narrow,
        };
        Self { ambiguous_width }
    }

    /// East Asian width of `ch` as reported by [`unicode_width`], honoring the
    /// ambiguous width preference. `None` for control characters.
    #[must_use]
    pub fn east_asian_width(&self, ch: char) -> Option<usize> {
        match self.ambiguous_width {
            AmbiguousWidth::Narrow => UnicodeWidthChar::width(ch),
            AmbiguousWidth::Wide => UnicodeWidthChar::width_cjk(ch),
        }
    }
}

impl From<AmbiguousWidth> for WidthConfig {
    fn from(ambiguous_width: AmbiguousWidth) -> Self { Self { ambiguous_width } }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(None, AmbiguousWidth::Narrow)]
    #[test_case(Some(""), AmbiguousWidth::Narrow)]
    #[test_case(Some("narrow"), AmbiguousWidth::Narrow)]
    #[test_case(Some("0"), AmbiguousWidth::Narrow)]
    #[test_case(Some("wide"), AmbiguousWidth::Wide)]
    #[test_case(Some(" WIDE "), AmbiguousWidth::Wide)]
    #[test_case(Some("2"), AmbiguousWidth::Wide)]
    #[test_case(Some("1"), AmbiguousWidth::Wide)]
    #[test_case(Some("true"), AmbiguousWidth::Wide)]
    fn test_from_env_value(value: Option<&str>, expected: AmbiguousWidth) {
        assert_eq2!(WidthConfig::from_env_value(value).ambiguous_width, expected);
    }

    #[test]
    fn test_east_asian_width() {
        let narrow = WidthConfig::default();
        let wide = WidthConfig::from(AmbiguousWidth::Wide);

        // Ambiguous.
        assert_eq2!(narrow.east_asian_width('±'), Some(1));
        assert_eq2!(wide.east_asian_width('±'), Some(2));

        // Not ambiguous, config makes no difference.
        assert_eq2!(narrow.east_asian_width('a'), Some(1));
        assert_eq2!(wide.east_asian_width('a'), Some(1));
        assert_eq2!(narrow.east_asian_width('中'), Some(2));
        assert_eq2!(wide.east_asian_width('中'), Some(2));
    }
}
