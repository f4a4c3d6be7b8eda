use super::SkipList;
use crate::comparator::Natural;
use crate::level::Geometric;
use crate::raw::RawSkipList;

impl<T> SkipList<T> {
    /// Creates an empty list with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_skiplist::SkipList;
    ///
    /// let list: SkipList<i32> = SkipList::with_capacity(16);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SkipList {
            raw: RawSkipList::with_capacity(capacity),
            comparator: Natural,
            level_generator: Geometric::new(),
        }
    }
}

impl<T, C, G> SkipList<T, C, G> {
    /// Returns the number of elements the list can hold without reallocating its node storage.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
