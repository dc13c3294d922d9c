use std::fmt;

use crate::{Error, Result};

/// Set of visited city indices, one bit per city.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisitedSet(u32);

impl VisitedSet {
    /// Number of cities a set can track.
    pub const CAPACITY: usize = u32::BITS as usize;

    pub const EMPTY: Self = Self(0);

    /// The set holding only the start city.
    pub fn with_start() -> Self {
        Self(1)
    }

    /// The set holding cities `0..n`.
    pub fn full(n: usize) -> Result<Self> {
        match n {
            0 => Ok(Self::EMPTY),
            n if n < Self::CAPACITY => Ok(Self((1u32 << n) - 1)),
            n if n == Self::CAPACITY => Ok(Self(u32::MAX)),
            n => Err(Error::capacity_exceeded(n, Self::CAPACITY)),
        }
    }

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub fn contains(self, city: usize) -> bool {
        debug_assert!(city < Self::CAPACITY);
        self.0 & (1 << city) != 0
    }

    #[inline(always)]
    pub fn with(self, city: usize) -> Self {
        debug_assert!(city < Self::CAPACITY);
        Self(self.0 | (1 << city))
    }

    #[inline(always)]
    pub fn insert(&mut self, city: usize) {
        *self = self.with(city);
    }

    #[inline(always)]
    pub fn remove(&mut self, city: usize) {
        debug_assert!(city < Self::CAPACITY);
        self.0 &= !(1 << city);
    }

    #[inline(always)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when the set is exactly `0..n`.
    pub fn is_full(self, n: usize) -> bool {
        Self::full(n).is_ok_and(|full| self == full)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cities in `0..n` that are not in the set, ascending.
    pub fn missing(self, n: usize) -> impl Iterator<Item = usize> {
        (0..n).filter(move |&city| !self.contains(city))
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
