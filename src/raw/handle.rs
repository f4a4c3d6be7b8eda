use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // `index + 1` cannot be zero and cannot overflow.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// A reference to one element of a [`SkipList`](crate::SkipList).
///
/// Returned by [`insert`](crate::SkipList::insert) and the navigation methods. A `NodeId` stays
/// valid until its element is removed or the list is cleared; after that, every method taking it
/// returns `None`, even if the underlying slot has been reused by a newer element.
///
/// Passing a `NodeId` obtained from a different list is a logic error. The result is unspecified
/// but memory safe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId {
    handle: Handle,
    generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(handle: Handle, generation: u32) -> Self {
        Self {
            handle,
            generation,
        }
    }

    #[inline]
    pub(crate) const fn handle(self) -> Handle {
        self.handle
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}
