//! Orderings used to sort the elements of a [`SkipList`](crate::SkipList).

/// A strict weak ordering over `T`.
///
/// `less(a, b)` must be irreflexive, transitive and consistent across calls. Two elements are
/// considered equal when neither is less than the other; no other notion of equality is used.
///
/// Breaking these rules is a logic error. The list will not detect it: queries may then return
/// wrong answers, but the behavior stays memory safe.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use rank_skiplist::SkipList;
///
/// // Descending order.
/// let mut list = SkipList::with_comparator(|a: &i32, b: &i32| a > b);
/// list.extend([1, 3, 2]);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither element sorts before the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The ordering given by the element type's [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
