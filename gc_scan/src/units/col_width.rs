// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{iter::Sum,
          ops::{Add, AddAssign, Deref, DerefMut}};

/// [`ColWidth`] is a column count, i.e., the number of fixed-width terminal columns
/// that a grapheme cluster occupies when rendered. For a single cluster it is `0`, `1`
/// or `2` (a few rare symbols are wider). You can use [`width()`] to create a new
/// instance.
///
/// # Examples
/// ```
/// use gc_scan::{ColWidth, width};
/// let it = width(2) + width(1);
/// assert_eq!(it, ColWidth(3));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColWidth(pub usize);

pub fn width(arg_col_width: impl Into<ColWidth>) -> ColWidth { arg_col_width.into() }

impl ColWidth {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl Deref for ColWidth {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ColWidth {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ColWidth {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u8> for ColWidth {
    fn from(it: u8) -> Self { Self(usize::from(it)) }
}

impl From<i32> for ColWidth {
    fn from(it: i32) -> Self { Self(usize::try_from(it).unwrap_or(0)) }
}

impl Add for ColWidth {
    type Output = ColWidth;
    fn add(self, rhs: ColWidth) -> Self::Output { ColWidth(self.0 + rhs.0) }
}

impl AddAssign for ColWidth {
    fn add_assign(&mut self, rhs: ColWidth) { self.0 += rhs.0; }
}

impl Sum for ColWidth {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold(width(0), Add::add) }
}
