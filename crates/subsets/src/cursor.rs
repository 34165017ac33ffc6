//! Sequential, pull-based traversal of subsets.

use std::{hash::Hash, iter::FusedIterator};

use crate::{Capability, ElementIndex, Position, Subset, SubsetsError, decode};

/// A forward-only cursor over the subsets, in position order.
///
/// The cursor is active while its position is below `2^len`. Each call to
/// [`advance`](Self::advance) yields the subset at the current position and
/// moves forward by one; once the last subset has been yielded the cursor is
/// exhausted for good.
///
/// Created by [`Subsets::iter`](crate::Subsets::iter).
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use subsets::{Subsets, SubsetsError};
///
/// let subsets = Subsets::from_set(&HashSet::from([7]))?;
/// let mut iter = subsets.iter();
///
/// assert!(iter.advance()?.is_empty());
/// assert_eq!(iter.advance()?.len(), 1);
/// assert!(!iter.has_next());
/// assert_eq!(iter.advance(), Err(SubsetsError::Exhausted));
/// # Ok::<(), SubsetsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    elements: &'a ElementIndex<T>,
    capability: &'a Capability<T>,
    position: Position,
    upper_bound: Position,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a ElementIndex<T>, capability: &'a Capability<T>) -> Self {
        Self {
            elements,
            capability,
            position: 0,
            upper_bound: elements.upper_bound(),
        }
    }

    /// Returns `true` if another subset is available.
    #[must_use]
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.upper_bound
    }

    /// Returns the position of the next subset.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the number of subsets not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.upper_bound - self.position
    }
}

impl<T: Clone + Eq + Hash> Iter<'_, T> {
    /// Yields the subset at the current position and moves forward.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::Exhausted`] if every subset has already been
    /// yielded. The cursor is left unchanged.
    pub fn advance(&mut self) -> Result<Subset<T>, SubsetsError> {
        if !self.has_next() {
            return Err(SubsetsError::Exhausted);
        }
        let subset = decode(self.position, self.elements, self.capability);
        self.position += 1;
        Ok(subset)
    }
}

impl<T: Clone + Eq + Hash> Iterator for Iter<'_, T> {
    type Item = Subset<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Clone + Eq + Hash> FusedIterator for Iter<'_, T> {}
