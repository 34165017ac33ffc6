//! Closed domains and fixed-domain bit sets.
//!
//! A [`Domain`] is a fixed list of at most 64 distinct values, decided when
//! the domain is created. A [`DomainSet`] is a set over a domain, stored as a
//! 64-bit vector where bit `i` stands for the `i`-th value of the domain.
//!
//! This plays the role of an enum set: every set built from the same domain
//! shares the same universe, and iteration always follows domain order.
//!
//! # Examples
//!
//! ```
//! use subsets::Domain;
//!
//! let colors = Domain::new(["red", "green", "blue"]);
//!
//! let mut set = colors.empty_set();
//! set.insert(&"blue");
//! set.insert(&"red");
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.iter().collect::<Vec<_>>(), [&"red", &"blue"]);
//! assert_eq!(colors.full_set().len(), 3);
//! ```

use std::{fmt, iter::FusedIterator, sync::Arc};

/// Maximum number of values in a [`Domain`].
pub const MAX_DOMAIN_VALUES: usize = 64;

/// A closed, ordered universe of at most [`MAX_DOMAIN_VALUES`] distinct values.
///
/// Cloning a domain is cheap: clones share the same value buffer.
#[derive(Debug)]
pub struct Domain<T> {
    values: Arc<[T]>,
}

impl<T: PartialEq> Domain<T> {
    /// Creates a domain from its values, in order.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_DOMAIN_VALUES`] values, or if a
    /// value appears more than once.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Arc<[T]> = values.into_iter().collect();
        assert!(
            values.len() <= MAX_DOMAIN_VALUES,
            "Domain must have at most {MAX_DOMAIN_VALUES} values, got {}",
            values.len()
        );
        for (i, value) in values.iter().enumerate() {
            assert!(
                !values[..i].contains(value),
                "Domain values must be distinct, value at index {i} is repeated"
            );
        }
        Self { values }
    }

    /// Returns the bit index of `value`, or `None` if it is not in the domain.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Returns `true` if `value` belongs to the domain.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Domain<T> {
    /// Returns the number of values in the domain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the domain has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the domain values in order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an empty set over this domain.
    #[must_use]
    pub fn empty_set(&self) -> DomainSet<T> {
        DomainSet {
            domain: self.clone(),
            bits: 0,
        }
    }

    /// Returns the set containing every value of this domain.
    #[must_use]
    pub fn full_set(&self) -> DomainSet<T> {
        DomainSet {
            domain: self.clone(),
            bits: self.mask(),
        }
    }

    fn mask(&self) -> u64 {
        match self.values.len() {
            MAX_DOMAIN_VALUES => u64::MAX,
            len => (1 << len) - 1,
        }
    }
}

impl<T> Clone for Domain<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T: PartialEq> PartialEq for Domain<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values) || self.values == other.values
    }
}

impl<T: Eq> Eq for Domain<T> {}

/// A set of values drawn from a [`Domain`].
///
/// Two sets are equal if they have equal domains and the same members.
///
/// # Examples
///
/// ```
/// use subsets::Domain;
///
/// let domain = Domain::new(['a', 'b', 'c', 'd']);
/// let set = domain.set_from_iter(['d', 'b']);
///
/// assert!(set.contains(&'b'));
/// assert!(!set.contains(&'c'));
/// assert_eq!(set.bits(), 0b1010);
/// assert_eq!(set.domain(), &domain);
/// ```
#[derive(Clone)]
pub struct DomainSet<T> {
    domain: Domain<T>,
    bits: u64,
}

impl<T: PartialEq> Domain<T> {
    /// Builds a set over this domain from the given values.
    ///
    /// # Panics
    ///
    /// Panics if a value is not in the domain.
    #[must_use]
    pub fn set_from_iter<I>(&self, values: I) -> DomainSet<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = self.empty_set();
        for value in values {
            set.insert(&value);
        }
        set
    }
}

impl<T: PartialEq> DomainSet<T> {
    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the domain.
    pub fn insert(&mut self, value: &T) -> bool {
        let bit = self.bit_of(value);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.domain.index_of(value) else {
            return false;
        };
        let bit = 1 << index;
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if `value` is in the set.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.domain
            .index_of(value)
            .is_some_and(|index| self.bits & (1 << index) != 0)
    }

    fn bit_of(&self, value: &T) -> u64 {
        let Some(index) = self.domain.index_of(value) else {
            panic!("Value is not a member of the domain");
        };
        1 << index
    }
}

impl<T> DomainSet<T> {
    /// Returns the domain of the set.
    #[must_use]
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    /// Returns the membership bits, bit `i` standing for the `i`-th domain value.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the members in domain order.
    #[must_use]
    pub fn iter(&self) -> DomainSetIter<'_, T> {
        DomainSetIter {
            values: self.domain.values(),
            bits: self.bits,
        }
    }
}

impl<T: PartialEq> PartialEq for DomainSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.domain == other.domain
    }
}

impl<T: Eq> Eq for DomainSet<T> {}

impl<T: fmt::Debug> fmt::Debug for DomainSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DomainSet<T> {
    type Item = &'a T;
    type IntoIter = DomainSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`DomainSet`], in domain order.
#[derive(Debug, Clone)]
pub struct DomainSetIter<'a, T> {
    values: &'a [T],
    bits: u64,
}

impl<'a, T> Iterator for DomainSetIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(&self.values[index])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for DomainSetIter<'_, T> {}
impl<T> FusedIterator for DomainSetIter<'_, T> {}
