//! The subsets produced by enumeration.
//!
//! A [`Subset`] is one of three set kinds, chosen by the
//! [`Capability`](crate::Capability) of the enumeration. Every subset is a
//! fresh value owned by the caller.

use std::{
    collections::{HashSet, hash_set},
    fmt,
    hash::Hash,
    iter::FusedIterator,
    slice,
};

use crate::{Capability, DetectCapability, DomainSet, SortedSet, domain::DomainSetIter};

/// A subset of the enumerated elements.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use subsets::Subsets;
///
/// let subsets = Subsets::from_set(&BTreeSet::from([1, 2, 3]))?;
/// let subset = subsets.get(0b110).unwrap();
///
/// assert!(subset.is_ordered());
/// assert!(subset.has_order());
/// assert_eq!(subset.len(), 2);
/// assert!(subset.contains(&3));
/// assert_eq!(subset.to_vec(), [2, 3]);
/// # Ok::<(), subsets::SubsetsError>(())
/// ```
#[derive(Clone, derive_more::IsVariant)]
pub enum Subset<T> {
    /// A subset without a defined iteration order.
    Unordered(HashSet<T>),
    /// A subset ordered by a comparator.
    Ordered(SortedSet<T>),
    /// A subset of a closed domain.
    EnumLike(DomainSet<T>),
}

impl<T: Eq + Hash> Subset<T> {
    /// Adds `value` to the subset.
    ///
    /// # Panics
    ///
    /// Panics if the subset is [`EnumLike`](Self::EnumLike) and `value` is not
    /// in its domain.
    pub(crate) fn insert(&mut self, value: T) {
        match self {
            Self::Unordered(set) => {
                set.insert(value);
            }
            Self::Ordered(set) => {
                set.insert(value);
            }
            Self::EnumLike(set) => {
                set.insert(&value);
            }
        }
    }

    /// Returns `true` if `value` is in the subset.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Unordered(set) => set.contains(value),
            Self::Ordered(set) => set.contains(value),
            Self::EnumLike(set) => set.contains(value),
        }
    }

    /// Returns `true` if this subset was built by `capability`.
    ///
    /// Ordered subsets must share the comparator, enum-like subsets an equal
    /// domain.
    #[must_use]
    pub fn matches(&self, capability: &Capability<T>) -> bool {
        self.capability() == *capability
    }
}

impl<T> Subset<T> {
    /// Returns the number of elements in the subset.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unordered(set) => set.len(),
            Self::Ordered(set) => set.len(),
            Self::EnumLike(set) => set.len(),
        }
    }

    /// Returns `true` if the subset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if iteration over the subset follows a defined order.
    ///
    /// This holds for both [`Ordered`](Self::Ordered) and
    /// [`EnumLike`](Self::EnumLike) subsets.
    #[must_use]
    pub fn has_order(&self) -> bool {
        !self.is_unordered()
    }

    /// Returns an iterator over the elements of the subset.
    ///
    /// Ordered and enum-like subsets iterate in their defined order; the order
    /// of unordered subsets is unspecified.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let inner = match self {
            Self::Unordered(set) => IterInner::Unordered(set.iter()),
            Self::Ordered(set) => IterInner::Ordered(set.iter()),
            Self::EnumLike(set) => IterInner::EnumLike(set.iter()),
        };
        Iter { inner }
    }

    /// Clones the elements into a `Vec`, in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> PartialEq for Subset<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unordered(a), Self::Unordered(b)) => a == b,
            (Self::Ordered(a), Self::Ordered(b)) => a == b,
            (Self::EnumLike(a), Self::EnumLike(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq + Hash> Eq for Subset<T> {}

impl<T: fmt::Debug> fmt::Debug for Subset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Subset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Subset`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

#[derive(Debug, Clone)]
enum IterInner<'a, T> {
    Unordered(hash_set::Iter<'a, T>),
    Ordered(slice::Iter<'a, T>),
    EnumLike(DomainSetIter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Unordered(iter) => iter.next(),
            IterInner::Ordered(iter) => iter.next(),
            IterInner::EnumLike(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Unordered(iter) => iter.size_hint(),
            IterInner::Ordered(iter) => iter.size_hint(),
            IterInner::EnumLike(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Comparator, Domain};

    #[test]
    fn test_unordered_subset() {
        let mut subset = Subset::Unordered(HashSet::new());
        subset.insert(3);
        subset.insert(1);
        assert!(subset.is_unordered());
        assert!(!subset.has_order());
        assert!(subset.contains(&1));
        assert_eq!(subset.len(), 2);
        let mut values = subset.to_vec();
        values.sort_unstable();
        assert_eq!(values, [1, 3]);
    }

    #[test]
    fn test_ordered_subset_iterates_in_order() {
        let reversed = Comparator::by(|a: &i32, b: &i32| b.cmp(a));
        let mut subset = Subset::Ordered(SortedSet::new(reversed));
        subset.insert(1);
        subset.insert(3);
        subset.insert(2);
        assert!(subset.is_ordered());
        assert!(subset.has_order());
        assert_eq!(subset.to_vec(), [3, 2, 1]);
        assert_eq!(subset.iter().len(), 3);
    }

    #[test]
    fn test_enum_like_subset() {
        let domain = Domain::new(['x', 'y', 'z']);
        let mut subset = Subset::EnumLike(domain.empty_set());
        subset.insert('z');
        subset.insert('x');
        assert!(subset.is_enum_like());
        assert!(subset.has_order());
        assert_eq!(subset.to_vec(), ['x', 'z']);
        assert!(!subset.contains(&'y'));
    }

    #[test]
    fn test_empty() {
        let subset: Subset<u8> = Subset::Unordered(HashSet::new());
        assert!(subset.is_empty());
        assert_eq!(subset.iter().next(), None);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Subset::Unordered(HashSet::from([1, 2]));
        let b = Subset::Unordered(HashSet::from([2, 1]));
        assert_eq!(a, b);
        let c = Subset::Ordered({
            let mut set = SortedSet::natural();
            set.extend([1, 2]);
            set
        });
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug() {
        let mut set = SortedSet::natural();
        set.extend(["b", "a"]);
        assert_eq!(format!("{:?}", Subset::Ordered(set)), r#"{"a", "b"}"#);
    }

    #[test]
    fn test_matches() {
        let domain = Domain::new([1_u8, 2]);
        let subset = Subset::EnumLike(domain.full_set());
        assert!(subset.matches(&Capability::EnumLike(domain)));
        assert!(!subset.matches(&Capability::EnumLike(Domain::new([1_u8, 2, 3]))));
        assert!(!subset.matches(&Capability::Unordered));
    }
}
