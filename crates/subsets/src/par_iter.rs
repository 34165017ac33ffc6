//! Parallel traversal of subsets with [`rayon`].
//!
//! [`ParSubsets`] drives a [`SubsetRange`] through rayon: the range is split
//! recursively by midpoint bisection, and each piece is drained on whichever
//! worker picks it up. Pieces cover disjoint positions, so workers never share
//! mutable state.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use rayon::prelude::*;
//! use subsets::Subsets;
//!
//! let input: HashSet<u64> = (1..=10).collect();
//! let subsets = Subsets::from_set(&input)?;
//!
//! // Number of subsets whose sum is even
//! let even = subsets
//!     .par_iter()
//!     .filter(|subset| subset.iter().sum::<u64>() % 2 == 0)
//!     .count();
//! assert_eq!(even, 512);
//! # Ok::<(), subsets::SubsetsError>(())
//! ```

use std::hash::Hash;

use rayon::iter::{
    ParallelIterator,
    plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed},
};

use crate::{Characteristics, Subset, SubsetRange};

/// A parallel iterator over subsets.
///
/// Created by [`Subsets::par_iter`](crate::Subsets::par_iter) or
/// [`Subsets::stream`](crate::Subsets::stream). With parallelism disabled the
/// range is never split and all subsets are produced by the calling thread,
/// in position order.
///
/// Results are combined by rayon's reductions; order-sensitive adaptors such
/// as `collect` keep position order, other consumers see subsets in any
/// order.
#[derive(Debug, Clone)]
pub struct ParSubsets<'a, T> {
    range: SubsetRange<'a, T>,
    parallel: bool,
}

impl<'a, T> ParSubsets<'a, T> {
    pub(crate) fn new(range: SubsetRange<'a, T>, parallel: bool) -> Self {
        Self { range, parallel }
    }

    /// Returns `true` if the traversal may be split across threads.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Enables or disables splitting across threads.
    #[must_use]
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    /// Returns the structural properties of the yielded subsets.
    #[must_use]
    pub fn characteristics(&self) -> Characteristics {
        self.range.characteristics()
    }

    /// Returns the exact number of subsets the traversal will produce.
    #[must_use]
    pub fn estimate_size(&self) -> u64 {
        self.range.estimate_size()
    }
}

impl<T> ParallelIterator for ParSubsets<'_, T>
where
    T: Clone + Eq + Hash + Send + Sync,
{
    type Item = Subset<T>;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        let producer = RangeProducer {
            range: self.range,
            parallel: self.parallel,
        };
        bridge_unindexed(producer, consumer)
    }
}

struct RangeProducer<'a, T> {
    range: SubsetRange<'a, T>,
    parallel: bool,
}

impl<T> UnindexedProducer for RangeProducer<'_, T>
where
    T: Clone + Eq + Hash + Send + Sync,
{
    type Item = Subset<T>;

    fn split(mut self) -> (Self, Option<Self>) {
        if !self.parallel {
            return (self, None);
        }
        match self.range.try_split() {
            Some(head) => {
                let head = Self {
                    range: head,
                    parallel: true,
                };
                (head, Some(self))
            }
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.range)
    }
}
