use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::{Handle, NodeId};
use super::node::{Link, Node};
use crate::comparator::Comparator;
use crate::level::MAX_LEVEL;

/// Predecessor reached at every level during a descent. `None` designates the head.
type Update = [Option<Handle>; MAX_LEVEL];

/// Rank of the predecessor recorded at every level during a descent.
type Ranks = [usize; MAX_LEVEL];

/// The core skip list backing `SkipList`.
///
/// The raw list never draws random heights and never owns the comparator; both are passed in by
/// the caller so the structure can be driven deterministically.
pub(crate) struct RawSkipList<T> {
    /// Arena storing every element node.
    nodes: Arena<Node<T>>,
    /// Links of the head sentinel, one per possible level.
    head: [Link; MAX_LEVEL],
    /// Handle to the last node in sort order, if the list is non-empty.
    tail: Option<Handle>,
    /// Number of active levels, in `1..=MAX_LEVEL`.
    level: usize,
    /// Total number of elements in the list.
    len: usize,
}

impl<T> RawSkipList<T> {
    /// Creates a new, empty list.
    pub(crate) const fn new() -> Self {
        Self::from_arena(Arena::new())
    }

    /// Creates a new list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(Arena::with_capacity(capacity))
    }

    const fn from_arena(nodes: Arena<Node<T>>) -> Self {
        Self {
            nodes,
            head: [Link {
                forward: None,
                span: 0,
            }; MAX_LEVEL],
            tail: None,
            level: 1,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node capacity of the list.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Discards every node and returns to the empty state.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = [Link::default(); MAX_LEVEL];
        self.tail = None;
        self.level = 1;
        self.len = 0;
    }

    /// Returns the first node, if any.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.head[0].forward
    }

    /// Returns the last node, if any.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.tail
    }

    /// Returns the level-0 successor of a live node.
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).next()
    }

    /// Returns the level-0 predecessor of a live node.
    pub(crate) fn prev(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).backward()
    }

    /// Returns the value stored in a live node.
    pub(crate) fn value(&self, handle: Handle) -> &T {
        self.nodes.get(handle).value()
    }

    /// Stamps a live handle with its current generation.
    pub(crate) fn node_id(&self, handle: Handle) -> NodeId {
        NodeId::new(handle, self.nodes.generation(handle))
    }

    /// Resolves an id to its handle if the node it names is still in the list.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<Handle> {
        self.nodes.is_live(id.handle(), id.generation()).then_some(id.handle())
    }

    /// Removes every element and returns them in sort order.
    ///
    /// This is O(n) as it walks level 0 once instead of unlinking node by node.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len);
        let mut current = self.head[0].forward;

        while let Some(handle) = current {
            let node = self.nodes.take(handle);
            current = node.next();
            result.push(node.into_value());
        }

        self.clear();
        result
    }

    #[inline]
    fn link(&self, at: Option<Handle>, level: usize) -> &Link {
        match at {
            Some(handle) => self.nodes.get(handle).link(level),
            None => &self.head[level],
        }
    }

    #[inline]
    fn link_mut(&mut self, at: Option<Handle>, level: usize) -> &mut Link {
        match at {
            Some(handle) => self.nodes.get_mut(handle).link_mut(level),
            None => &mut self.head[level],
        }
    }

    /// Walks from the head down through every active level, moving right while `advance` accepts
    /// the next node. `advance` receives the candidate's value and the rank it would have once
    /// stepped onto.
    ///
    /// Returns the last node reached at each level and that node's rank.
    fn descend<F>(&self, mut advance: F) -> (Update, Ranks)
    where
        F: FnMut(&T, usize) -> bool,
    {
        let mut update: Update = [None; MAX_LEVEL];
        let mut rank: Ranks = [0; MAX_LEVEL];
        let mut x = None;

        for i in (0..self.level).rev() {
            rank[i] = if i + 1 == self.level { 0 } else { rank[i + 1] };
            loop {
                let link = self.link(x, i);
                let Some(next) = link.forward else {
                    break;
                };
                let reached = rank[i] + link.span;
                if !advance(self.nodes.get(next).value(), reached) {
                    break;
                }
                rank[i] = reached;
                x = Some(next);
            }
            update[i] = x;
        }

        (update, rank)
    }

    /// Links a new node of the given height after every element that does not sort after
    /// `value`, so equal elements keep insertion order.
    pub(crate) fn insert<C>(&mut self, value: T, height: usize, cmp: &C) -> Handle
    where
        C: Comparator<T> + ?Sized,
    {
        debug_assert!((1..=MAX_LEVEL).contains(&height), "`RawSkipList::insert()` - `height` {height} is out of range!");
        let (mut update, mut rank) = self.descend(|v, _| !cmp.less(&value, v));

        if height > self.level {
            for i in self.level..height {
                update[i] = None;
                rank[i] = 0;
                self.head[i].span = self.len;
            }
            self.level = height;
        }

        let handle = self.nodes.alloc(Node::new(value, height));
        for i in 0..height {
            let predecessor = *self.link(update[i], i);
            let distance = rank[0] - rank[i];
            *self.nodes.get_mut(handle).link_mut(i) = Link {
                forward: predecessor.forward,
                span: predecessor.span - distance,
            };
            *self.link_mut(update[i], i) = Link {
                forward: Some(handle),
                span: distance + 1,
            };
        }

        // The new node sits under every taller link that skips past it.
        for i in height..self.level {
            self.link_mut(update[i], i).span += 1;
        }

        let node = self.nodes.get_mut(handle);
        node.set_backward(update[0]);
        match node.next() {
            Some(next) => self.nodes.get_mut(next).set_backward(Some(handle)),
            None => self.tail = Some(handle),
        }
        self.len += 1;

        handle
    }

    /// Detaches `handle` given its predecessor at every active level and returns its value.
    fn unlink(&mut self, handle: Handle, update: &Update) -> T {
        let node = self.nodes.take(handle);

        for i in 0..self.level {
            let predecessor = self.link_mut(update[i], i);
            if predecessor.forward == Some(handle) {
                let link = node.link(i);
                predecessor.span = predecessor.span + link.span - 1;
                predecessor.forward = link.forward;
            } else {
                predecessor.span -= 1;
            }
        }

        match node.next() {
            Some(next) => self.nodes.get_mut(next).set_backward(node.backward()),
            None => self.tail = node.backward(),
        }

        while self.level > 1 && self.head[self.level - 1].forward.is_none() {
            self.level -= 1;
        }
        self.len -= 1;

        node.into_value()
    }

    /// Descends to the first node that is not less than `value` and returns it if it is an exact
    /// match, along with the predecessors recorded on the way.
    fn search<C>(&self, value: &T, cmp: &C) -> (Option<Handle>, Update, Ranks)
    where
        C: Comparator<T> + ?Sized,
    {
        let (update, rank) = self.descend(|v, _| cmp.less(v, value));
        let candidate = self.link(update[0], 0).forward;
        // The descent already ruled out `candidate < value`.
        let found = candidate.filter(|&h| !cmp.less(value, self.nodes.get(h).value()));
        (found, update, rank)
    }

    /// Returns the first node equal to `value`.
    pub(crate) fn find<C>(&self, value: &T, cmp: &C) -> Option<Handle>
    where
        C: Comparator<T> + ?Sized,
    {
        self.search(value, cmp).0
    }

    /// Removes the first node equal to `value` and returns its value.
    pub(crate) fn delete<C>(&mut self, value: &T, cmp: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        let (found, update, _) = self.search(value, cmp);
        found.map(|handle| self.unlink(handle, &update))
    }

    /// Removes exactly the node `handle`, even when other nodes compare equal to it.
    ///
    /// Returns `None` if the node cannot be reached from the run of elements equal to its value,
    /// which only happens when the comparator is not a strict weak ordering.
    pub(crate) fn remove<C>(&mut self, handle: Handle, cmp: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        let value = self.nodes.get(handle).value();
        let (mut update, _) = self.descend(|v, _| cmp.less(v, value));

        // Step across the equal run; each node passed becomes the predecessor at its levels.
        let mut current = self.link(update[0], 0).forward;
        while let Some(x) = current {
            if x == handle {
                break;
            }
            let node = self.nodes.get(x);
            if !cmp.equivalent(node.value(), value) {
                return None;
            }
            for slot in &mut update[..node.height()] {
                *slot = Some(x);
            }
            current = node.next();
        }

        current?;
        Some(self.unlink(handle, &update))
    }

    /// Removes the node at the 1-based `rank` and returns its value.
    pub(crate) fn remove_by_rank(&mut self, rank: usize) -> Option<T> {
        if rank == 0 || rank > self.len {
            return None;
        }

        let (update, _) = self.descend(|_, reached| reached < rank);
        let handle = self.link(update[0], 0).forward?;
        Some(self.unlink(handle, &update))
    }

    /// Returns the 1-based rank of the first node equal to `value`.
    pub(crate) fn rank_of<C>(&self, value: &T, cmp: &C) -> Option<usize>
    where
        C: Comparator<T> + ?Sized,
    {
        let (found, _, rank) = self.search(value, cmp);
        found.map(|_| rank[0] + 1)
    }

    /// Returns the node at the 1-based `rank`.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<Handle> {
        if rank == 0 || rank > self.len {
            return None;
        }

        let mut x = None;
        let mut traversed = 0;
        for i in (0..self.level).rev() {
            loop {
                let link = self.link(x, i);
                match link.forward {
                    Some(next) if traversed + link.span <= rank => {
                        traversed += link.span;
                        x = Some(next);
                    }
                    _ => break,
                }
            }
            if traversed == rank {
                return x;
            }
        }

        // Unreachable while spans are exact.
        None
    }
}

impl<T: Clone> Clone for RawSkipList<T> {
    fn clone(&self) -> Self {
        // Handles are arena indices, so a slot-for-slot copy keeps every link valid.
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            level: self.level,
            len: self.len,
        }
    }
}
