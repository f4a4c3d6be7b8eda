use core::ops::Index;

use super::SkipList;
use crate::Rank;
use crate::comparator::Comparator;
use crate::raw::NodeId;

impl<T, C, G> SkipList<T, C, G> {
    /// Returns the element at the one-based `rank` in sorted order.
    ///
    /// Returns `None` if `rank` is 0 or greater than [`len`](SkipList::len).
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list = SkipList::from([10, 20, 30]);
    /// assert_eq!(list.get_by_rank(2), Some(&20));
    /// assert!(list.get_by_rank(0).is_none());
    /// assert!(list.get_by_rank(4).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.raw.get_by_rank(rank).map(|h| self.raw.value(h))
    }

    /// Returns the node at the one-based `rank` in sorted order.
    ///
    /// This is the inverse of [`rank_of`](SkipList::rank_of).
    #[must_use]
    pub fn node_by_rank(&self, rank: usize) -> Option<NodeId> {
        self.raw.get_by_rank(rank).map(|h| self.raw.node_id(h))
    }

    /// Removes the element at the one-based `rank` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::from([10, 20, 30]);
    /// assert_eq!(list.remove_by_rank(2), Some(20));
    /// assert_eq!(list.remove_by_rank(3), None);
    /// assert_eq!(list.get_by_rank(2), Some(&30));
    /// ```
    pub fn remove_by_rank(&mut self, rank: usize) -> Option<T> {
        self.raw.remove_by_rank(rank)
    }
}

impl<T, C: Comparator<T>, G> SkipList<T, C, G> {
    /// Returns the one-based rank of the first element equal to `value`, or `None` if there is no
    /// such element.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list = SkipList::from([10, 20, 20, 30]);
    ///
    /// assert_eq!(list.rank_of(&10), Some(1));
    /// assert_eq!(list.rank_of(&20), Some(2));
    /// assert_eq!(list.rank_of(&30), Some(4));
    /// assert_eq!(list.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.raw.rank_of(value, &self.comparator)
    }
}

/// Indexes into the list by rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or greater than the length of the list.
///
/// # Examples
///
/// ```
/// use rank_skiplist::{Rank, SkipList};
///
/// let list = SkipList::from([10, 20, 30]);
/// assert_eq!(list[Rank(1)], 10);
/// assert_eq!(list[Rank(3)], 30);
/// ```
impl<T, C, G> Index<Rank> for SkipList<T, C, G> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("rank out of bounds")
    }
}
