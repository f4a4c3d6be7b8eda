use alloc::vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::comparator::{Comparator, Natural};
use crate::level::{Geometric, LevelGenerator, MAX_LEVEL};
use crate::raw::{Handle, NodeId, RawSkipList};

mod capacity;
mod order_statistic;

/// An ordered list based on a skip list, with O(log n) expected rank queries.
///
/// Elements are kept sorted by a [`Comparator`]: [`Natural`] (the element type's [`Ord`]) by
/// default, or any `Fn(&T, &T) -> bool` closure via [`SkipList::with_comparator`]. Elements that
/// compare equal are all kept, in the order they were inserted.
///
/// Every element is threaded on level 0; each higher level skips over a random subset of the
/// level below, chosen by a [`LevelGenerator`]. Each forward link also records how many elements
/// it skips, which is what turns value lookups into rank lookups and back.
///
/// Inserting returns a [`NodeId`] that can later be used to walk to neighbors
/// ([`next`](SkipList::next), [`prev`](SkipList::prev)) or to remove exactly that element with
/// [`remove`](SkipList::remove), even when other elements compare equal to it.
///
/// It is a logic error for an element to be modified in such a way that its ordering relative to
/// any other element changes while it is in the list, or for the comparator not to be a strict
/// weak ordering. The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `SkipList` that observed the logic error and not result in undefined
/// behavior. This could include panics or incorrect results.
///
/// # Examples
///
/// ```
/// use rank_skiplist::SkipList;
///
/// let mut scores = SkipList::new();
/// for score in [5, 1, 3, 2, 4] {
///     scores.insert(score);
/// }
///
/// assert_eq!(scores.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert_eq!(scores.rank_of(&3), Some(3));
/// assert_eq!(scores.get_by_rank(1), Some(&1));
///
/// assert_eq!(scores.delete(&3), Some(3));
/// assert_eq!(scores.rank_of(&4), Some(3));
/// assert_eq!(scores.len(), 4);
/// ```
pub struct SkipList<T, C = Natural, G = Geometric> {
    raw: RawSkipList<T>,
    comparator: C,
    level_generator: G,
}

/// An iterator over the elements of a `SkipList`, in sorted order.
///
/// This `struct` is created by the [`iter`] method on [`SkipList`]. See its documentation for
/// more.
///
/// # Examples
///
/// ```
/// use rank_skiplist::SkipList;
///
/// let list = SkipList::from([3, 1, 2]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SkipList::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    list: &'a RawSkipList<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the elements of a `SkipList`, in sorted order.
///
/// This `struct` is created by the [`into_iter`] method on [`SkipList`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: SkipList#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> SkipList<T> {
    /// Makes a new, empty `SkipList` ordered by `T`'s [`Ord`] implementation, with node heights
    /// drawn from an entropy-seeded generator.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert("a");
    /// assert_eq!(list.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_level_generator(Natural, Geometric::new())
    }

    /// Makes a new, empty `SkipList` whose node heights are reproducible from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::with_seed(42);
    /// list.extend([2, 1]);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_level_generator(Natural, Geometric::from_seed(seed))
    }
}

impl<T, C> SkipList<T, C> {
    /// Makes a new, empty `SkipList` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// // Order by length only; equal lengths keep insertion order.
    /// let mut words = SkipList::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
    /// words.extend(["ccc", "a", "bb", "d"]);
    /// assert_eq!(words.iter().copied().collect::<Vec<_>>(), ["a", "d", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_level_generator(comparator, Geometric::new())
    }
}

impl<T, C, G> SkipList<T, C, G> {
    /// Makes a new, empty `SkipList` ordered by `comparator`, drawing node heights from
    /// `level_generator`.
    #[must_use]
    pub const fn with_level_generator(comparator: C, level_generator: G) -> Self {
        Self {
            raw: RawSkipList::new(),
            comparator,
            level_generator,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(list.len(), 0);
    /// list.insert(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the list, removing all elements.
    ///
    /// Every [`NodeId`] issued so far stops resolving.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// let one = list.insert(1);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.get(one), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the node holding the smallest element, or `None` if the list is empty.
    #[must_use]
    pub fn front(&self) -> Option<NodeId> {
        self.raw.first().map(|h| self.raw.node_id(h))
    }

    /// Returns the node holding the largest element, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn back(&self) -> Option<NodeId> {
        self.raw.last().map(|h| self.raw.node_id(h))
    }

    /// Returns the node after `node` in sorted order.
    ///
    /// Returns `None` if `node` is the last node or no longer in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list = SkipList::from([10, 30, 20]);
    /// let mut values = Vec::new();
    /// let mut cursor = list.front();
    /// while let Some(node) = cursor {
    ///     values.push(*list.get(node).unwrap());
    ///     cursor = list.next(node);
    /// }
    /// assert_eq!(values, [10, 20, 30]);
    /// ```
    #[must_use]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let handle = self.raw.resolve(node)?;
        self.raw.next(handle).map(|h| self.raw.node_id(h))
    }

    /// Returns the node before `node` in sorted order.
    ///
    /// Returns `None` if `node` is the first node or no longer in the list.
    #[must_use]
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        let handle = self.raw.resolve(node)?;
        self.raw.prev(handle).map(|h| self.raw.node_id(h))
    }

    /// Returns the element held by `node`, or `None` if it is no longer in the list.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.raw.resolve(node).map(|h| self.raw.value(h))
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(list.first(), None);
    /// list.extend([2, 1]);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first().map(|h| self.raw.value(h))
    }

    /// Returns the largest element. Among equal elements, the last one inserted.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last().map(|h| self.raw.value(h))
    }

    /// Removes and returns the smallest element.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.remove_by_rank(1)
    }

    /// Removes and returns the largest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut list = SkipList::from([1, 2]);
    /// assert_eq!(list.pop_last(), Some(2));
    /// assert_eq!(list.pop_last(), Some(1));
    /// assert_eq!(list.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.remove_by_rank(self.raw.len())
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list = SkipList::from([3, 1, 2]);
    /// let descending: Vec<_> = list.iter().rev().copied().collect();
    /// assert_eq!(descending, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }
}

impl<T, C: Comparator<T>, G: LevelGenerator> SkipList<T, C, G> {
    /// Adds an element to the list and returns the node holding it.
    ///
    /// Insertion always succeeds. An element equal to ones already present is placed after
    /// them.
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
    /// let mut list = SkipList::new();
    /// let node = list.insert(7);
    /// assert_eq!(list.get(node), Some(&7));
    /// assert_eq!(list.front(), Some(node));
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId {
        let height = self.level_generator.random_level().clamp(1, MAX_LEVEL);
        let handle = self.raw.insert(value, height, &self.comparator);
        self.raw.node_id(handle)
    }
}

impl<T, C: Comparator<T>, G> SkipList<T, C, G> {
    /// Returns the node holding the first element equal to `value`.
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
    /// let list = SkipList::from([1, 2, 3]);
    /// let two = list.find(&2).unwrap();
    /// assert_eq!(list.get(two), Some(&2));
    /// assert!(list.find(&4).is_none());
    /// ```
    #[must_use]
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.raw.find(value, &self.comparator).map(|h| self.raw.node_id(h))
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.find(value, &self.comparator).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
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
    /// let mut list = SkipList::from([1, 2]);
    /// assert_eq!(list.delete(&1), Some(1));
    /// assert_eq!(list.delete(&1), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        self.raw.delete(value, &self.comparator)
    }

    /// Removes the element held by `node` and returns it.
    ///
    /// Exactly that element is removed, even when others compare equal to it. Returns `None` if
    /// `node` is no longer in the list.
    ///
    /// # Complexity
    ///
    /// O(log n + d) expected, where d is the number of elements equal to the removed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let mut pairs = SkipList::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
    /// pairs.insert((1, 'a'));
    /// let b = pairs.insert((1, 'b'));
    /// pairs.insert((1, 'c'));
    ///
    /// assert_eq!(pairs.remove(b), Some((1, 'b')));
    /// assert_eq!(pairs.remove(b), None);
    /// assert_eq!(pairs.iter().map(|p| p.1).collect::<String>(), "ac");
    /// ```
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        let handle = self.raw.resolve(node)?;
        self.raw.remove(handle, &self.comparator)
    }
}

impl<T: Clone, C: Clone, G: Clone> Clone for SkipList<T, C, G> {
    fn clone(&self) -> Self {
        SkipList {
            raw: self.raw.clone(),
            comparator: self.comparator.clone(),
            level_generator: self.level_generator.clone(),
        }
    }
}

impl<T: Hash, C, G> Hash for SkipList<T, C, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq, C, G> PartialEq for SkipList<T, C, G> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, G> Eq for SkipList<T, C, G> {}

impl<T: fmt::Debug, C, G> fmt::Debug for SkipList<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        SkipList::new()
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SkipList<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C: Comparator<T>, G: LevelGenerator> Extend<T> for SkipList<T, C, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Copy + 'a, C: Comparator<T>, G: LevelGenerator> Extend<&'a T> for SkipList<T, C, G> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C, G> IntoIterator for &'a SkipList<T, C, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C, G> IntoIterator for SkipList<T, C, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an owning iterator over the elements of the list, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list = SkipList::from([2, 1]);
    /// let mut iter = list.into_iter();
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next_back(), Some(2));
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        self.front = self.list.next(handle);
        self.remaining -= 1;
        Some(self.list.value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        self.back = self.list.prev(handle);
        self.remaining -= 1;
        Some(self.list.value(handle))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
