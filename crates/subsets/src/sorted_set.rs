//! An ordered set with a configurable comparator.
//!
//! [`SortedSet`] keeps its members in a sorted `Vec`, ordered by a
//! [`Comparator`]. Unlike [`BTreeSet`](std::collections::BTreeSet), the order
//! is a runtime value, so sets built from the same comparator can be checked
//! for sharing it.
//!
//! # Examples
//!
//! ```
//! use subsets::{Comparator, SortedSet};
//!
//! let mut set = SortedSet::new(Comparator::by(|a: &i32, b: &i32| b.cmp(a)));
//! set.insert(1);
//! set.insert(3);
//! set.insert(2);
//!
//! assert_eq!(set.as_slice(), &[3, 2, 1]);
//! assert!(set.contains(&2));
//! ```

use std::{fmt, slice};

use crate::Comparator;

/// A set of values kept in the order defined by a [`Comparator`].
///
/// Two values are considered the same member when the comparator reports
/// [`Ordering::Equal`](std::cmp::Ordering::Equal).
#[derive(Clone)]
pub struct SortedSet<T> {
    items: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> SortedSet<T> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub fn new(comparator: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty set in the natural order of `T`.
    #[must_use]
    pub fn natural() -> Self
    where
        T: Ord + 'static,
    {
        Self::new(Comparator::natural())
    }

    /// Returns the comparator ordering this set.
    #[must_use]
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if no equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.items.insert(index, value);
                true
            }
        }
    }

    /// Removes the member equal to `value`.
    ///
    /// Returns `true` if such a member was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.search(value) {
            Ok(index) => {
                self.items.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `true` if the set has a member equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the smallest member.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest member.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the members in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the members in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn search(&self, value: &T) -> Result<usize, usize> {
        self.items
            .binary_search_by(|probe| self.comparator.compare(probe, value))
    }
}

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparator == other.comparator && self.items == other.items
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_natural_order() {
        let mut set = SortedSet::natural();
        set.extend([5, 1, 4, 1, 3]);
        assert_eq!(set.as_slice(), &[1, 3, 4, 5]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&5));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = SortedSet::natural();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = SortedSet::natural();
        set.extend([1, 2, 3]);
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_custom_comparator_defines_equality() {
        let by_len = Comparator::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let mut set = SortedSet::new(by_len);
        assert!(set.insert("ccc"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.as_slice(), &["a", "ccc"]);
        assert!(set.contains(&"z"));
    }

    #[test]
    fn test_equality_requires_same_comparator() {
        let reversed = Comparator::by(|a: &i32, b: &i32| b.cmp(a));
        let mut a = SortedSet::new(reversed.clone());
        let mut b = SortedSet::new(reversed);
        a.insert(1);
        b.insert(1);
        assert_eq!(a, b);

        let mut c = SortedSet::new(Comparator::by(|a: &i32, b: &i32| b.cmp(a)));
        c.insert(1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_lists_members() {
        let mut set = SortedSet::natural();
        set.extend([2, 1]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }
}
