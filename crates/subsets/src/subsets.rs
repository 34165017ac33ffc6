//! The enumeration facade.
//!
//! [`Subsets`] captures the input and hands out every traversal: the
//! sequential [`Iter`], the splittable [`SubsetRange`] and the rayon-backed
//! [`ParSubsets`]. [`SubsetsBuilder`] assembles one from separately supplied
//! arguments.

use std::hash::Hash;

use crate::{
    Capability, DetectCapability, ElementIndex, Iter, MAX_LIST_ELEMENTS, ParSubsets, Position,
    Subset, SubsetRange, SubsetsError, decode,
};

/// All subsets of a collection of at most 62 elements.
///
/// `Subsets` captures the elements of the input in iteration order, together
/// with the [`Capability`] deciding what kind of set each subset is. The
/// subset at position `p` contains the `i`-th element if and only if bit `i`
/// of `p` is set, so subsets are produced in the order
///
/// ```text
/// {}, {A}, {B}, {A, B}, {C}, {A, C}, {B, C}, {A, B, C}, ...
/// ```
///
/// for elements captured as `[A, B, C, ...]`.
///
/// Enumeration is `O(n * 2^n)`; in practice only small collections can be
/// traversed completely.
///
/// # Examples
///
/// ```
/// use subsets::{Capability, Subsets};
///
/// let subsets = Subsets::new(["A", "B", "C"], Capability::Unordered)?;
/// assert_eq!(subsets.len(), 3);
/// assert_eq!(subsets.subset_count(), 8);
///
/// for subset in &subsets {
///     assert!(subset.len() <= 3);
/// }
/// # Ok::<(), subsets::SubsetsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Subsets<T> {
    elements: ElementIndex<T>,
    capability: Capability<T>,
}

impl<T> Subsets<T>
where
    T: Clone + Eq + Hash,
{
    /// Captures `elements` and builds subsets as described by `capability`.
    ///
    /// Elements are taken in iteration order; later changes to the source
    /// collection have no effect.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::SizeExceeded`] if there are more than 62
    /// elements, and [`SubsetsError::ElementOutsideDomain`] if `capability` is
    /// [`Capability::EnumLike`] and an element is not in its domain.
    ///
    /// Returns [`SubsetsError::DuplicateElement`] if two elements would be the
    /// same member of a subset, as decided by
    /// [`Capability::same_member`]. For [`Capability::Ordered`] this means
    /// comparing equal under the comparator.
    pub fn new<I>(elements: I, capability: Capability<T>) -> Result<Self, SubsetsError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = ElementIndex::new(elements)?;
        if let Capability::EnumLike(domain) = &capability
            && let Some(index) = elements.as_slice().iter().position(|e| !domain.contains(e))
        {
            return Err(SubsetsError::ElementOutsideDomain { index });
        }
        if let Some((index, first)) = first_duplicate(elements.as_slice(), &capability) {
            return Err(SubsetsError::DuplicateElement { index, first });
        }
        log::debug!(
            "enumerating subsets of {} elements as {} sets",
            elements.len(),
            capability.kind()
        );
        Ok(Self {
            elements,
            capability,
        })
    }

    /// Captures the elements of `set`, mirroring its structure.
    ///
    /// The capability is detected once, through [`DetectCapability`]:
    ///
    /// - a [`DomainSet`](crate::DomainSet) gives enum-like subsets over the same domain,
    /// - a [`SortedSet`](crate::SortedSet) gives ordered subsets with the same comparator,
    /// - a [`BTreeSet`](std::collections::BTreeSet) gives subsets in natural order,
    /// - a [`HashSet`](std::collections::HashSet) gives unordered subsets.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::SizeExceeded`] if `set` has more than 62
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use subsets::{Domain, Subsets};
    ///
    /// let domain = Domain::new(['a', 'b', 'c', 'd']);
    /// let input = domain.set_from_iter(['b', 'd']);
    /// let subsets = Subsets::from_set(&input)?;
    ///
    /// for subset in &subsets {
    ///     assert!(subset.is_enum_like());
    /// }
    /// # Ok::<(), subsets::SubsetsError>(())
    /// ```
    pub fn from_set<S>(set: &S) -> Result<Self, SubsetsError>
    where
        S: DetectCapability<T>,
        for<'a> &'a S: IntoIterator<Item = &'a T>,
    {
        Self::new(set.into_iter().cloned(), set.capability())
    }

    /// Returns the subset at `position`, or `None` if `position` is not below
    /// [`subset_count`](Self::subset_count).
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Subset<T>> {
        (position < self.subset_count())
            .then(|| decode(position, &self.elements, &self.capability))
    }

    /// Collects every subset into a `Vec`, in position order.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::ListTooLarge`] if there are more than 30
    /// elements. Nothing is allocated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use subsets::Subsets;
    ///
    /// let subsets = Subsets::from_set(&BTreeSet::from([1, 2]))?;
    /// let all: Vec<Vec<i32>> = subsets.to_vec()?.iter().map(|s| s.to_vec()).collect();
    /// assert_eq!(all, [vec![], vec![1], vec![2], vec![1, 2]]);
    /// # Ok::<(), subsets::SubsetsError>(())
    /// ```
    pub fn to_vec(&self) -> Result<Vec<Subset<T>>, SubsetsError> {
        if self.len() > MAX_LIST_ELEMENTS {
            return Err(SubsetsError::ListTooLarge { len: self.len() });
        }
        let mut subsets = Vec::with_capacity(1 << self.len());
        subsets.extend(self.iter());
        Ok(subsets)
    }
}

impl<T> Subsets<T> {
    /// Starts building a [`Subsets`] from separately supplied arguments.
    #[must_use]
    pub fn builder() -> SubsetsBuilder<T> {
        SubsetsBuilder::default()
    }

    /// Returns the number of captured elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element was captured.
    ///
    /// There is still exactly one subset, the empty one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the captured elements, in capture order.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns the capability used to build subsets.
    #[must_use]
    pub fn capability(&self) -> &Capability<T> {
        &self.capability
    }

    /// Returns the number of subsets, `2^len`.
    #[must_use]
    pub fn subset_count(&self) -> u64 {
        self.elements.upper_bound()
    }

    /// Returns a sequential cursor over all subsets.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements, &self.capability)
    }

    /// Returns a splittable range over all positions.
    #[must_use]
    pub fn range(&self) -> SubsetRange<'_, T> {
        SubsetRange::new(&self.elements, &self.capability, 0, self.subset_count())
    }

    /// Returns a parallel iterator over all subsets.
    #[must_use]
    pub fn par_iter(&self) -> ParSubsets<'_, T> {
        self.stream(true)
    }

    /// Returns a rayon traversal over all subsets, split across threads only
    /// if `parallel` is `true`.
    #[must_use]
    pub fn stream(&self, parallel: bool) -> ParSubsets<'_, T> {
        ParSubsets::new(self.range(), parallel)
    }
}

/// Returns the index of the first repeated element and of its first
/// occurrence.
fn first_duplicate<T: PartialEq>(
    elements: &[T],
    capability: &Capability<T>,
) -> Option<(usize, usize)> {
    elements.iter().enumerate().find_map(|(index, element)| {
        elements[..index]
            .iter()
            .position(|earlier| capability.same_member(earlier, element))
            .map(|first| (index, first))
    })
}

impl<'a, T> IntoIterator for &'a Subsets<T>
where
    T: Clone + Eq + Hash,
{
    type Item = Subset<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> rayon::iter::IntoParallelIterator for &'a Subsets<T>
where
    T: Clone + Eq + Hash + Send + Sync,
{
    type Item = Subset<T>;
    type Iter = ParSubsets<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter()
    }
}

/// Builder for [`Subsets`] with separately supplied arguments.
///
/// Both the elements and the capability are required.
///
/// # Examples
///
/// ```
/// use subsets::{Capability, Subsets, SubsetsError};
///
/// let subsets = Subsets::builder()
///     .elements([1, 2, 3])
///     .capability(Capability::Unordered)
///     .build()?;
/// assert_eq!(subsets.subset_count(), 8);
///
/// let missing = Subsets::<i32>::builder().elements([1]).build();
/// assert_eq!(
///     missing.unwrap_err(),
///     SubsetsError::NullInput { argument: "capability" }
/// );
/// # Ok::<(), SubsetsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SubsetsBuilder<T> {
    elements: Option<Vec<T>>,
    capability: Option<Capability<T>>,
}

impl<T> Default for SubsetsBuilder<T> {
    fn default() -> Self {
        Self {
            elements: None,
            capability: None,
        }
    }
}

impl<T> SubsetsBuilder<T> {
    /// Sets the elements, in iteration order.
    #[must_use]
    pub fn elements<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements = Some(elements.into_iter().collect());
        self
    }

    /// Sets the capability.
    #[must_use]
    pub fn capability(mut self, capability: Capability<T>) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Sets both the elements and the capability from `set`.
    #[must_use]
    pub fn set<S>(self, set: &S) -> Self
    where
        T: Clone,
        S: DetectCapability<T>,
        for<'a> &'a S: IntoIterator<Item = &'a T>,
    {
        self.elements(set.into_iter().cloned())
            .capability(set.capability())
    }

    /// Builds the [`Subsets`].
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::NullInput`] if the elements or the capability
    /// were never set, and otherwise the errors of [`Subsets::new`].
    pub fn build(self) -> Result<Subsets<T>, SubsetsError>
    where
        T: Clone + Eq + Hash,
    {
        let elements = self.elements.ok_or(SubsetsError::NullInput {
            argument: "elements",
        })?;
        let capability = self.capability.ok_or(SubsetsError::NullInput {
            argument: "capability",
        })?;
        Subsets::new(elements, capability)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;
    use crate::{Comparator, Domain, SortedSet};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Letter {
        A,
        B,
        C,
    }

    fn letters() -> Domain<Letter> {
        Domain::new([Letter::A, Letter::B, Letter::C])
    }

    fn expected_order() -> Vec<Vec<Letter>> {
        use Letter::*;
        vec![
            vec![],
            vec![A],
            vec![B],
            vec![A, B],
            vec![C],
            vec![A, C],
            vec![B, C],
            vec![A, B, C],
        ]
    }

    #[test]
    fn test_ordering_example() {
        let subsets = Subsets::from_set(&letters().full_set()).unwrap();
        let all: Vec<_> = subsets.iter().map(|s| s.to_vec()).collect();
        assert_eq!(all, expected_order());
    }

    #[test]
    fn test_unordered_input_contains_all_subsets() {
        let input = HashSet::from([Letter::A, Letter::B, Letter::C]);
        let subsets = Subsets::from_set(&input).unwrap();
        let all = subsets.to_vec().unwrap();
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(Subset::is_unordered));
        for expected in expected_order() {
            let expected = Subset::Unordered(expected.into_iter().collect());
            assert!(all.contains(&expected));
        }
    }

    #[test]
    fn test_empty_input_for_every_capability() {
        let capabilities = [
            Capability::Unordered,
            Capability::Ordered(Comparator::natural()),
            Capability::EnumLike(Domain::new([1_u8, 2])),
        ];
        for capability in capabilities {
            let subsets = Subsets::new([], capability.clone()).unwrap();
            let all = subsets.to_vec().unwrap();
            assert_eq!(all.len(), 1);
            assert!(all[0].is_empty());
            assert!(all[0].matches(&capability));
        }
    }

    #[test]
    fn test_enum_like_mirrors_domain() {
        let domain = letters();
        let input = domain.set_from_iter([Letter::C, Letter::A]);
        let subsets = Subsets::from_set(&input).unwrap();
        assert_eq!(subsets.elements(), &[Letter::A, Letter::C]);
        for subset in &subsets {
            let Subset::EnumLike(set) = subset else {
                panic!("expected an enum-like subset");
            };
            assert_eq!(set.domain(), &domain);
        }
    }

    #[test]
    fn test_ordered_mirrors_comparator() {
        let reversed = Comparator::by(|a: &u8, b: &u8| b.cmp(a));
        let mut input = SortedSet::new(reversed.clone());
        input.extend([1, 2, 3]);
        let subsets = Subsets::from_set(&input).unwrap();
        assert_eq!(subsets.elements(), &[3, 2, 1]);
        for subset in &subsets {
            let Subset::Ordered(set) = &subset else {
                panic!("expected an ordered subset");
            };
            assert_eq!(set.comparator(), &reversed);
        }
        assert_eq!(subsets.get(0b111).unwrap().to_vec(), [3, 2, 1]);
    }

    #[test]
    fn test_btree_set_uses_natural_order() {
        let subsets = Subsets::from_set(&BTreeSet::from([2, 1])).unwrap();
        for subset in &subsets {
            let Subset::Ordered(set) = &subset else {
                panic!("expected an ordered subset");
            };
            assert!(set.comparator().is_natural());
        }
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(
            Subsets::new(0..63, Capability::Unordered).unwrap_err(),
            SubsetsError::SizeExceeded { len: 63 }
        );
        let subsets = Subsets::new(0..62, Capability::Unordered).unwrap();
        assert_eq!(subsets.subset_count(), 1 << 62);
    }

    #[test]
    fn test_to_vec_limit() {
        let subsets = Subsets::new(0..31, Capability::Unordered).unwrap();
        assert_eq!(
            subsets.to_vec().unwrap_err(),
            SubsetsError::ListTooLarge { len: 31 }
        );
        // Other traversals still work.
        let mut iter = subsets.iter();
        assert!(iter.next().unwrap().is_empty());
        assert_eq!(subsets.range().estimate_size(), 1 << 31);
    }

    #[test]
    fn test_input_is_captured() {
        let mut input = vec![1, 2];
        let subsets = Subsets::new(input.clone(), Capability::Unordered).unwrap();
        input.push(3);
        assert_eq!(subsets.len(), 2);
        assert_eq!(subsets.iter().count(), 4);
    }

    #[test]
    fn test_traversals_are_deterministic() {
        let subsets = Subsets::new(0..6, Capability::Unordered).unwrap();
        let first: Vec<_> = subsets.iter().collect();
        let second: Vec<_> = subsets.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get() {
        let capability = Capability::Ordered(Comparator::natural());
        let subsets = Subsets::new(['x', 'y'], capability).unwrap();
        assert_eq!(subsets.get(0b10).unwrap().to_vec(), ['y']);
        assert!(subsets.get(4).is_none());
    }

    #[test]
    fn test_rejects_elements_outside_domain() {
        let result = Subsets::new(
            [Letter::A, Letter::B],
            Capability::EnumLike(Domain::new([Letter::A, Letter::C])),
        );
        assert_eq!(
            result.unwrap_err(),
            SubsetsError::ElementOutsideDomain { index: 1 }
        );
    }

    #[test]
    fn test_rejects_repeated_elements() {
        assert_eq!(
            Subsets::new([1, 1, 1], Capability::Unordered).unwrap_err(),
            SubsetsError::DuplicateElement { index: 1, first: 0 }
        );
        assert_eq!(
            Subsets::new([1, 2, 3, 2], Capability::Ordered(Comparator::natural())).unwrap_err(),
            SubsetsError::DuplicateElement { index: 3, first: 1 }
        );
        let result = Subsets::new(
            [Letter::B, Letter::A, Letter::B],
            Capability::EnumLike(letters()),
        );
        assert_eq!(
            result.unwrap_err(),
            SubsetsError::DuplicateElement { index: 2, first: 0 }
        );
        let result = Subsets::builder()
            .elements(['x', 'y', 'x'])
            .capability(Capability::Unordered)
            .build();
        assert!(result.unwrap_err().is_duplicate_element());
    }

    #[test]
    fn test_rejects_elements_equal_under_comparator() {
        let by_len = Comparator::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let result = Subsets::new(["a", "bb", "cc"], Capability::Ordered(by_len.clone()));
        assert_eq!(
            result.unwrap_err(),
            SubsetsError::DuplicateElement { index: 2, first: 1 }
        );

        let subsets = Subsets::new(["a", "bb", "ccc"], Capability::Ordered(by_len)).unwrap();
        for position in 0..subsets.subset_count() {
            let subset = subsets.get(position).unwrap();
            assert_eq!(subset.len(), position.count_ones() as usize);
        }
    }

    #[test]
    fn test_subsets_are_distinct() {
        let subsets = Subsets::new([3, 1, 2], Capability::Unordered).unwrap();
        let all = subsets.to_vec().unwrap();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| a != b));
        }
        assert!(
            subsets
                .range()
                .characteristics()
                .contains(crate::Characteristics::DISTINCT)
        );
    }

    #[test]
    fn test_builder_requires_arguments() {
        assert_eq!(
            Subsets::<u8>::builder().build().unwrap_err(),
            SubsetsError::NullInput {
                argument: "elements"
            }
        );
        assert_eq!(
            Subsets::<u8>::builder()
                .capability(Capability::Unordered)
                .build()
                .unwrap_err(),
            SubsetsError::NullInput {
                argument: "elements"
            }
        );
        assert_eq!(
            Subsets::builder().elements([1_u8]).build().unwrap_err(),
            SubsetsError::NullInput {
                argument: "capability"
            }
        );
    }

    #[test]
    fn test_builder_from_set() {
        let subsets = Subsets::builder()
            .set(&BTreeSet::from([3, 1, 2]))
            .build()
            .unwrap();
        assert_eq!(subsets.elements(), &[1, 2, 3]);
        assert!(subsets.capability().is_ordered());
    }

    #[test]
    fn test_builder_rejects_too_many_elements() {
        let result = Subsets::builder()
            .elements(0..100)
            .capability(Capability::Unordered)
            .build();
        assert_eq!(result.unwrap_err(), SubsetsError::SizeExceeded { len: 100 });
    }
}
