//! Power-set enumeration for small collections.
//!
//! This crate enumerates every subset of a collection of at most 62 elements.
//! Subsets are generated in a deterministic order derived from the iteration
//! order of the input: the subset at position `p` contains element `i` if and
//! only if bit `i` of `p` is set.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Facade** - [`Subsets`] owns the captured elements and the output
//!    capability, and hands out traversals.
//!
//! 2. **Capabilities** - [`Capability`] describes the kind of set each subset
//!    is built as, mirroring the structure of the input:
//!    - [`Capability::Unordered`]: [`HashSet`](std::collections::HashSet)
//!    - [`Capability::Ordered`]: [`SortedSet`] with a [`Comparator`]
//!    - [`Capability::EnumLike`]: [`DomainSet`] over a closed [`Domain`]
//!
//! 3. **Traversals** - all of them share the same pure [`decode`] function:
//!    - [`Iter`]: a sequential, pull-based cursor
//!    - [`SubsetRange`]: a splittable range of positions
//!    - [`ParSubsets`]: a [`rayon`] parallel iterator built on [`SubsetRange`]
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use subsets::Subsets;
//!
//! let input = BTreeSet::from(['a', 'b', 'c']);
//! let subsets = Subsets::from_set(&input)?;
//!
//! let all: Vec<Vec<char>> = subsets
//!     .iter()
//!     .map(|subset| subset.iter().copied().collect())
//!     .collect();
//! assert_eq!(
//!     all,
//!     [
//!         vec![],
//!         vec!['a'],
//!         vec!['b'],
//!         vec!['a', 'b'],
//!         vec!['c'],
//!         vec!['a', 'c'],
//!         vec!['b', 'c'],
//!         vec!['a', 'b', 'c'],
//!     ]
//! );
//! # Ok::<(), subsets::SubsetsError>(())
//! ```
//!
//! Counting pairs in parallel:
//!
//! ```
//! use std::collections::HashSet;
//!
//! use rayon::prelude::*;
//! use subsets::Subsets;
//!
//! let input: HashSet<u32> = (0..8).collect();
//! let subsets = Subsets::from_set(&input)?;
//! let pairs = subsets.par_iter().filter(|subset| subset.len() == 2).count();
//! assert_eq!(pairs, 28);
//! # Ok::<(), subsets::SubsetsError>(())
//! ```

pub mod capability;
pub mod combinatorial;
pub mod comparator;
pub mod cursor;
pub mod decode;
pub mod domain;
pub mod element_index;
mod error;
pub mod par_iter;
pub mod range;
pub mod sorted_set;
pub mod subset;
mod subsets;

// Re-export commonly used types
pub use self::{
    capability::{Capability, DetectCapability},
    comparator::Comparator,
    cursor::Iter,
    decode::decode,
    domain::{Domain, DomainSet},
    element_index::{ElementIndex, MAX_ELEMENTS, MAX_LIST_ELEMENTS, Position},
    error::SubsetsError,
    par_iter::ParSubsets,
    range::{Characteristics, SubsetRange},
    sorted_set::SortedSet,
    subset::Subset,
    subsets::{Subsets, SubsetsBuilder},
};
