//! The captured input elements and the position encoding.
//!
//! An [`ElementIndex`] is the input collection frozen in its iteration order
//! at construction time. A [`Position`] is a bitmask over that order: bit `i`
//! set means the element at index `i` belongs to the subset.
//!
//! # Examples
//!
//! ```
//! use subsets::ElementIndex;
//!
//! let index = ElementIndex::new(["x", "y", "z"])?;
//! assert_eq!(index.len(), 3);
//! assert_eq!(index.upper_bound(), 8);
//! assert_eq!(index.selected(0b101).collect::<Vec<_>>(), [&"x", &"z"]);
//! # Ok::<(), subsets::SubsetsError>(())
//! ```

use std::ops::Index;

use crate::SubsetsError;

/// A bitmask selecting elements of an [`ElementIndex`].
pub type Position = u64;

/// Maximum number of elements whose subsets can be enumerated.
pub const MAX_ELEMENTS: usize = 62;

/// Maximum number of elements whose subsets can be materialized eagerly.
///
/// 2^30 subsets is already on the order of a billion allocations.
pub const MAX_LIST_ELEMENTS: usize = 30;

/// An immutable, order-preserving sequence of at most [`MAX_ELEMENTS`] elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIndex<T> {
    elements: Box<[T]>,
}

impl<T> ElementIndex<T> {
    /// Captures the elements in iteration order.
    ///
    /// Repeated elements are kept as they are; [`Subsets`](crate::Subsets)
    /// rejects them.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetsError::SizeExceeded`] if there are more than
    /// [`MAX_ELEMENTS`] elements.
    pub fn new<I>(elements: I) -> Result<Self, SubsetsError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Box<[T]> = elements.into_iter().collect();
        if elements.len() > MAX_ELEMENTS {
            return Err(SubsetsError::SizeExceeded {
                len: elements.len(),
            });
        }
        Ok(Self { elements })
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in capture order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the exclusive upper bound of positions, `2^len`.
    #[must_use]
    pub fn upper_bound(&self) -> Position {
        1 << self.elements.len()
    }

    /// Returns the elements selected by `position`, in capture order.
    ///
    /// Bits above [`len`](Self::len) are ignored.
    pub fn selected(&self, position: Position) -> impl Iterator<Item = &T> {
        self.elements
            .iter()
            .enumerate()
            .filter(move |&(i, _)| position & (1 << i) != 0)
            .map(|(_, element)| element)
    }
}

impl<T> Index<usize> for ElementIndex<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let index = ElementIndex::new([3, 1, 2]).unwrap();
        assert_eq!(index.as_slice(), &[3, 1, 2]);
        assert_eq!(index[0], 3);
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(ElementIndex::<u8>::new([]).unwrap().upper_bound(), 1);
        assert_eq!(ElementIndex::new(0..10).unwrap().upper_bound(), 1024);
        assert_eq!(
            ElementIndex::new(0..62).unwrap().upper_bound(),
            1 << 62
        );
    }

    #[test]
    fn test_rejects_too_many_elements() {
        assert_eq!(
            ElementIndex::new(0..63),
            Err(SubsetsError::SizeExceeded { len: 63 })
        );
        assert!(ElementIndex::new(0..62).is_ok());
    }

    #[test]
    fn test_selected() {
        let index = ElementIndex::new(['a', 'b', 'c', 'd']).unwrap();
        assert_eq!(index.selected(0).count(), 0);
        assert_eq!(index.selected(0b1010).collect::<Vec<_>>(), [&'b', &'d']);
        assert_eq!(index.selected(0b1111).count(), 4);
    }
}
