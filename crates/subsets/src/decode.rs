//! Decoding positions into subsets.

use std::hash::Hash;

use crate::{Capability, ElementIndex, Position, Subset};

/// Builds the subset at `position`.
///
/// Starts from an empty subset made by `capability` and inserts element `i`
/// of `elements` for every set bit `i` of `position`. The result depends only
/// on the arguments: decoding the same position twice gives equal, distinct
/// subsets.
///
/// Bits at or above `elements.len()` are ignored.
///
/// # Panics
///
/// Panics if `capability` is [`Capability::EnumLike`] and a selected element
/// is not in its domain. [`Subsets`](crate::Subsets) rejects such inputs at
/// construction time.
///
/// # Examples
///
/// ```
/// use subsets::{Capability, Comparator, ElementIndex, decode};
///
/// let elements = ElementIndex::new(["a", "b", "c"])?;
/// let capability = Capability::Ordered(Comparator::natural());
///
/// assert!(decode(0, &elements, &capability).is_empty());
/// assert_eq!(decode(0b011, &elements, &capability).to_vec(), ["a", "b"]);
/// assert_eq!(decode(0b111, &elements, &capability).len(), 3);
/// # Ok::<(), subsets::SubsetsError>(())
/// ```
#[must_use]
pub fn decode<T>(
    position: Position,
    elements: &ElementIndex<T>,
    capability: &Capability<T>,
) -> Subset<T>
where
    T: Clone + Eq + Hash,
{
    let mut subset = capability.new_subset();
    for element in elements.selected(position) {
        subset.insert(element.clone());
    }
    subset
}
