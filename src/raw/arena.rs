use alloc::vec::Vec;

use super::handle::Handle;

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    element: Option<T>,
}

/// Slot storage for skip list nodes.
///
/// Every allocation is stamped with a fresh generation drawn from a counter that survives
/// [`Arena::clear`], so a `(Handle, generation)` pair issued before a slot was freed or the
/// arena was cleared never matches a later occupant.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<Handle>,
    generation: u32,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of occupied slots.
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        self.generation = self.generation.wrapping_add(1);
        let slot = Slot {
            generation: self.generation,
            element: Some(element),
        };

        if let Some(h) = self.free.pop() {
            // Reuse a free slot/handle.
            self.slots[h.to_index()] = slot;
            h
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            // Allocate a new slot/handle.
            self.slots.push(slot);
            Handle::from_index(self.slots.len() - 1)
        }
    }

    /// Returns the generation stamped on the slot at `handle`.
    #[inline]
    pub(crate) fn generation(&self, handle: Handle) -> u32 {
        self.slots[handle.to_index()].generation
    }

    /// Returns true if `handle` is occupied by the allocation that was stamped with `generation`.
    #[inline]
    pub(crate) fn is_live(&self, handle: Handle, generation: u32) -> bool {
        self.slots
            .get(handle.to_index())
            .is_some_and(|slot| slot.generation == generation && slot.element.is_some())
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].element.as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].element.as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element =
            self.slots[handle.to_index()].element.take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
