/// A one-based rank into the sorted order of a [`SkipList`](crate::SkipList).
///
/// `Rank(1)` is the smallest element and `Rank(len)` the largest.
///
/// # Examples
///
/// ```
/// use rank_skiplist::{Rank, SkipList};
///
/// let list: SkipList<_> = ["b", "a"].into_iter().collect();
///
/// assert_eq!(list[Rank(1)], "a");
/// assert_eq!(list[Rank(2)], "b");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
