//! Splittable ranges of positions.
//!
//! A [`SubsetRange`] owns a half-open interval of positions. It can be bisected
//! into two independent ranges covering disjoint intervals, which is what
//! makes parallel traversal possible without any shared mutable state.
//!
//! # Split convention
//!
//! [`SubsetRange::try_split`] returns the *lower* half and keeps the *upper*
//! half, so draining the returned range before the original one visits
//! positions in their original order.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use subsets::Subsets;
//!
//! let subsets = Subsets::from_set(&HashSet::from([1, 2, 3]))?;
//! let mut upper = subsets.range();
//! let lower = upper.try_split().unwrap();
//!
//! assert_eq!(lower.bounds(), (0, 4));
//! assert_eq!(upper.bounds(), (4, 8));
//! assert_eq!(lower.estimate_size() + upper.estimate_size(), 8);
//! # Ok::<(), subsets::SubsetsError>(())
//! ```

use std::{hash::Hash, iter::FusedIterator};

use crate::{Capability, ElementIndex, Position, Subset, decode};

bitflags::bitflags! {
    /// Structural properties of the subsets yielded by a [`SubsetRange`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Characteristics: u8 {
        /// Every position yields a different subset.
        const DISTINCT = 1 << 0;
        /// Yielded subsets are never modified by the range.
        const IMMUTABLE = 1 << 1;
        /// Every position yields a subset.
        const NONNULL = 1 << 2;
        /// Subsets iterate their elements in a defined order.
        const ORDERED = 1 << 3;
        /// The remaining count is known exactly.
        const SIZED = 1 << 4;
        /// Ranges produced by splitting are sized too.
        const SUBSIZED = 1 << 5;
    }
}

/// A half-open range `[position, high)` of subset positions.
///
/// Created by [`Subsets::range`](crate::Subsets::range), or by splitting
/// another range. The range exclusively owns its interval: after
/// [`try_split`](Self::try_split) the two ranges can be moved to different
/// threads and drained independently.
#[derive(Debug, Clone)]
pub struct SubsetRange<'a, T> {
    elements: &'a ElementIndex<T>,
    capability: &'a Capability<T>,
    position: Position,
    high: Position,
}

impl<'a, T> SubsetRange<'a, T> {
    pub(crate) fn new(
        elements: &'a ElementIndex<T>,
        capability: &'a Capability<T>,
        position: Position,
        high: Position,
    ) -> Self {
        debug_assert!(position <= high);
        debug_assert!(high <= elements.upper_bound());
        Self {
            elements,
            capability,
            position,
            high,
        }
    }

    /// Splits off the lower half of the range.
    ///
    /// Returns `None` and leaves the range unchanged if fewer than two
    /// positions remain. Otherwise, with `mid` the floor of the midpoint,
    /// returns a range over `[position, mid)` and keeps `[mid, high)`.
    pub fn try_split(&mut self) -> Option<Self> {
        if self.high - self.position < 2 {
            return None;
        }
        let mid = self.position + (self.high - self.position) / 2;
        let head = Self::new(self.elements, self.capability, self.position, mid);
        self.position = mid;
        log::trace!(
            "split subset range into [{}, {}) and [{}, {})",
            head.position,
            head.high,
            self.position,
            self.high
        );
        Some(head)
    }

    /// Returns the exact number of positions left in the range.
    #[must_use]
    pub fn estimate_size(&self) -> u64 {
        self.high - self.position
    }

    /// Returns `(position, high)`.
    #[must_use]
    pub fn bounds(&self) -> (Position, Position) {
        (self.position, self.high)
    }

    /// Returns `true` if every position of the range has been visited.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.high
    }

    /// Returns the structural properties of the yielded subsets.
    #[must_use]
    pub fn characteristics(&self) -> Characteristics {
        let mut characteristics = Characteristics::DISTINCT
            | Characteristics::IMMUTABLE
            | Characteristics::NONNULL
            | Characteristics::SIZED
            | Characteristics::SUBSIZED;
        if self.capability.preserves_order() {
            characteristics |= Characteristics::ORDERED;
        }
        characteristics
    }
}

impl<T: Clone + Eq + Hash> SubsetRange<'_, T> {
    /// Passes the subset at the current position to `consumer` and moves
    /// forward.
    ///
    /// Returns `false` without calling `consumer` if the range is exhausted.
    pub fn try_advance<F>(&mut self, consumer: F) -> bool
    where
        F: FnOnce(Subset<T>),
    {
        if self.is_exhausted() {
            return false;
        }
        consumer(decode(self.position, self.elements, self.capability));
        self.position += 1;
        true
    }

    /// Passes every remaining subset to `consumer`, in position order.
    pub fn for_each_remaining<F>(&mut self, mut consumer: F)
    where
        F: FnMut(Subset<T>),
    {
        while self.try_advance(&mut consumer) {}
    }
}

impl<T: Clone + Eq + Hash> Iterator for SubsetRange<'_, T> {
    type Item = Subset<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mut next = None;
        self.try_advance(|subset| next = Some(subset));
        next
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.estimate_size()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Clone + Eq + Hash> FusedIterator for SubsetRange<'_, T> {}
