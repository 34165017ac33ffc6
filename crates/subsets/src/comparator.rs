//! Shareable ordering functions for [`SortedSet`](crate::SortedSet).

use std::{cmp::Ordering, fmt, sync::Arc};

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A total order over `T`, cheap to clone and safe to share between threads.
///
/// A comparator is either the natural order of `T` ([`Ord`]) or a custom
/// function. Two comparators are equal if both are natural, or if they are
/// clones of the same custom comparator.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use subsets::Comparator;
///
/// let natural = Comparator::<i32>::natural();
/// assert_eq!(natural.compare(&1, &2), Ordering::Less);
///
/// let reversed = Comparator::by(|a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
/// assert_eq!(reversed, reversed.clone());
/// assert_ne!(reversed, natural);
/// ```
pub struct Comparator<T> {
    compare: Arc<CompareFn<T>>,
    natural: bool,
}

impl<T> Comparator<T> {
    /// Returns the natural order of `T`.
    #[must_use]
    pub fn natural() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            compare: Arc::new(T::cmp),
            natural: true,
        }
    }

    /// Wraps a custom ordering function.
    ///
    /// The function must be a total order consistent with equality of `T`.
    #[must_use]
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
            natural: false,
        }
    }

    /// Compares two values.
    #[must_use]
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Returns `true` if this is the natural order of `T`.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.natural
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            natural: self.natural,
        }
    }
}

impl<T> PartialEq for Comparator<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.natural && other.natural) || Arc::ptr_eq(&self.compare, &other.compare)
    }
}

impl<T> Eq for Comparator<T> {}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.natural {
            f.write_str("Comparator(natural)")
        } else {
            f.write_str("Comparator(custom)")
        }
    }
}
