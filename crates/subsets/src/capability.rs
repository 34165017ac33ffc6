//! The structural kind of the produced subsets.
//!
//! A [`Capability`] is chosen once per [`Subsets`](crate::Subsets) and decides
//! which kind of set every subset is built as. It is either given explicitly
//! or detected from the input set through [`DetectCapability`].
//!
//! | Input                  | Capability                         | Subset kind   |
//! |------------------------|------------------------------------|---------------|
//! | [`HashSet`]            | [`Capability::Unordered`]          | [`HashSet`]   |
//! | [`BTreeSet`]           | [`Capability::Ordered`] (natural)  | [`SortedSet`] |
//! | [`SortedSet`]          | [`Capability::Ordered`] (same)     | [`SortedSet`] |
//! | [`DomainSet`]          | [`Capability::EnumLike`] (same)    | [`DomainSet`] |
//! | [`Subset`]             | matching the variant               | same kind     |

use std::collections::{BTreeSet, HashSet};

use crate::{Comparator, Domain, DomainSet, SortedSet, Subset};

/// Describes how to build empty output subsets.
///
/// # Examples
///
/// ```
/// use subsets::{Capability, Comparator};
///
/// let capability = Capability::Ordered(Comparator::<u8>::natural());
/// let subset = capability.new_subset();
///
/// assert!(subset.is_ordered());
/// assert!(subset.is_empty());
/// assert!(capability.preserves_order());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Capability<T> {
    /// Subsets are [`HashSet`]s with unspecified iteration order.
    Unordered,
    /// Subsets are [`SortedSet`]s ordered by the comparator.
    Ordered(Comparator<T>),
    /// Subsets are [`DomainSet`]s over the domain.
    EnumLike(Domain<T>),
}

impl<T> Capability<T> {
    /// Returns a new empty subset of the described kind.
    ///
    /// Every call returns a distinct value; the capability itself is never
    /// modified, so it may be shared between threads.
    #[must_use]
    pub fn new_subset(&self) -> Subset<T> {
        match self {
            Self::Unordered => Subset::Unordered(HashSet::new()),
            Self::Ordered(comparator) => Subset::Ordered(SortedSet::new(comparator.clone())),
            Self::EnumLike(domain) => Subset::EnumLike(domain.empty_set()),
        }
    }

    /// Returns `true` if subsets built from this capability iterate in a
    /// defined order.
    #[must_use]
    pub fn preserves_order(&self) -> bool {
        !self.is_unordered()
    }

    /// Returns a short name of the variant, used in log messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unordered => "unordered",
            Self::Ordered(_) => "ordered",
            Self::EnumLike(_) => "enum-like",
        }
    }
}

impl<T: PartialEq> Capability<T> {
    /// Returns `true` if `a` and `b` would be the same member of a subset.
    ///
    /// Ordered subsets compare with their comparator; the other kinds use
    /// [`PartialEq`].
    ///
    /// # Examples
    ///
    /// ```
    /// use subsets::{Capability, Comparator};
    ///
    /// let by_len = Comparator::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// assert!(Capability::Ordered(by_len).same_member(&"ab", &"cd"));
    /// assert!(!Capability::Unordered.same_member(&"ab", &"cd"));
    /// ```
    #[must_use]
    pub fn same_member(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Ordered(comparator) => comparator.compare(a, b).is_eq(),
            Self::Unordered | Self::EnumLike(_) => a == b,
        }
    }
}

/// Detects the [`Capability`] that mirrors the structure of a set.
///
/// Detection is a plain trait implementation per set type; it runs once when
/// [`Subsets::from_set`](crate::Subsets::from_set) is called.
pub trait DetectCapability<T> {
    /// Returns the capability matching this set.
    fn capability(&self) -> Capability<T>;
}

impl<T, S> DetectCapability<T> for HashSet<T, S> {
    fn capability(&self) -> Capability<T> {
        Capability::Unordered
    }
}

impl<T: Ord + 'static> DetectCapability<T> for BTreeSet<T> {
    fn capability(&self) -> Capability<T> {
        Capability::Ordered(Comparator::natural())
    }
}

impl<T> DetectCapability<T> for SortedSet<T> {
    fn capability(&self) -> Capability<T> {
        Capability::Ordered(self.comparator().clone())
    }
}

impl<T> DetectCapability<T> for DomainSet<T> {
    fn capability(&self) -> Capability<T> {
        Capability::EnumLike(self.domain().clone())
    }
}

impl<T> DetectCapability<T> for Subset<T> {
    fn capability(&self) -> Capability<T> {
        match self {
            Subset::Unordered(set) => set.capability(),
            Subset::Ordered(set) => set.capability(),
            Subset::EnumLike(set) => set.capability(),
        }
    }
}
