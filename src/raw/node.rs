use smallvec::{SmallVec, smallvec};

use super::handle::Handle;
use crate::level::MAX_LEVEL;

/// Heights up to this many levels are stored inline in the node.
///
/// With a promotion ratio of 4, fewer than one node in 250 is taller than this.
pub(crate) const INLINE_LEVELS: usize = 4;

/// One forward link of a node (or of the head) at a single level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Link {
    /// Next node at this level, if any.
    pub(crate) forward: Option<Handle>,
    /// Number of level-0 steps to `forward`. When `forward` is `None`, the number of elements
    /// after the owner of this link.
    pub(crate) span: usize,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    // Previous node at level 0; `None` for the first node.
    backward: Option<Handle>,
    // One link per level the node occupies. Never resized after creation.
    levels: SmallVec<[Link; INLINE_LEVELS]>,
}

impl<T> Node<T> {
    /// Creates an unlinked node occupying levels `[0, height)`.
    pub(crate) fn new(value: T, height: usize) -> Self {
        debug_assert!((1..=MAX_LEVEL).contains(&height), "`Node::new()` - `height` {height} is out of range!");
        Self {
            value,
            backward: None,
            levels: smallvec![Link::default(); height],
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Returns the number of levels this node occupies.
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub(crate) fn backward(&self) -> Option<Handle> {
        self.backward
    }

    #[inline]
    pub(crate) fn set_backward(&mut self, backward: Option<Handle>) {
        self.backward = backward;
    }

    /// Returns the level-0 successor.
    #[inline]
    pub(crate) fn next(&self) -> Option<Handle> {
        self.levels[0].forward
    }

    #[inline]
    pub(crate) fn link(&self, level: usize) -> &Link {
        &self.levels[level]
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, level: usize) -> &mut Link {
        &mut self.levels[level]
    }
}
