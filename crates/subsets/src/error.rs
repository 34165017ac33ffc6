use crate::element_index::{MAX_ELEMENTS, MAX_LIST_ELEMENTS};

/// Errors reported by [`Subsets`](crate::Subsets) and its traversals.
///
/// All variants are usage-contract violations detected synchronously at the
/// point of the call. No partially built value is returned alongside them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SubsetsError {
    /// The input has more elements than can be encoded in a position.
    #[display("input has {len} elements, at most {} are supported", MAX_ELEMENTS)]
    SizeExceeded {
        /// Number of elements in the rejected input.
        len: usize,
    },
    /// A required construction argument was never supplied.
    #[display("required argument `{argument}` is missing")]
    NullInput {
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// The cursor was advanced after yielding its last subset.
    #[display("no more subsets")]
    Exhausted,
    /// Eager materialization was requested for too many elements.
    #[display(
        "cannot materialize subsets of {len} elements, at most {} are supported",
        MAX_LIST_ELEMENTS
    )]
    ListTooLarge {
        /// Number of elements in the collection.
        len: usize,
    },
    /// An element is not a member of the closed domain of the capability.
    #[display("element at index {index} is outside the domain")]
    ElementOutsideDomain {
        /// Index of the offending element in the input order.
        index: usize,
    },
    /// Two input elements would be the same member of a subset.
    #[display("element at index {index} repeats the element at index {first}")]
    DuplicateElement {
        /// Index of the repeated element in the input order.
        index: usize,
        /// Index of its first occurrence.
        first: usize,
    },
}
