//! Ordered List Module
//!
//! Doubly-linked list over a slot arena. Nodes are addressed by
//! [`NodeHandle`]s which carry the owning list's tag, so a handle from
//! another list (or one whose node was already removed) is simply ignored.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique owner tags, one per list instance.
static NEXT_LIST_TAG: AtomicU64 = AtomicU64::new(1);

/// Every index reachable from front/back or a node link is occupied.
const LINKED_SLOT: &str = "linked index points at an occupied slot";

// == Node Handle ==
/// Opaque reference to a node inside an [`OrderedList`].
///
/// Handles are cheap to copy and never grant access to the node's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    owner: u64,
    index: usize,
    generation: u32,
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

struct Slot<T> {
    /// Bumped every time the slot is vacated
    generation: u32,
    node: Option<Node<T>>,
}

// == Ordered List ==
/// A doubly-linked sequence with O(1) push, remove and move-to-front.
pub struct OrderedList<T> {
    tag: u64,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    front: Option<usize>,
    back: Option<usize>,
    length: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedList")
            .field("tag", &self.tag)
            .field("length", &self.length)
            .finish()
    }
}

impl<T> OrderedList<T> {
    // == Constructor ==
    /// Creates an empty list with a fresh owner tag.
    pub fn new() -> Self {
        Self {
            tag: NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            length: 0,
        }
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    // == Front / Back ==
    /// Returns the head node, or None if the list is empty.
    pub fn front(&self) -> Option<NodeHandle> {
        self.front.map(|index| self.handle_at(index))
    }

    /// Returns the tail node, or None if the list is empty.
    pub fn back(&self) -> Option<NodeHandle> {
        self.back.map(|index| self.handle_at(index))
    }

    // == Push ==
    /// Links `value` as the new head and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        let index = self.alloc(Node {
            value,
            prev: None,
            next: self.front,
        });
        match self.front {
            Some(old_front) => self.node_mut(old_front).prev = Some(index),
            None => self.back = Some(index),
        }
        self.front = Some(index);
        self.length += 1;
        self.handle_at(index)
    }

    /// Links `value` as the new tail and returns its handle.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        let index = self.alloc(Node {
            value,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(old_back) => self.node_mut(old_back).next = Some(index),
            None => self.front = Some(index),
        }
        self.back = Some(index);
        self.length += 1;
        self.handle_at(index)
    }

    // == Remove ==
    /// Detaches the node and hands its payload back.
    ///
    /// Foreign or stale handles are ignored: the list is left untouched
    /// and `None` is returned.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index);

        let slot = &mut self.slots[index];
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.length -= 1;
        Some(node.value)
    }

    // == Move To Front ==
    /// Relinks the node as the new head.
    ///
    /// No-op when the node already is the head or does not belong to
    /// this list.
    pub fn move_to_front(&mut self, handle: NodeHandle) {
        let Some(index) = self.resolve(handle) else {
            return;
        };
        if self.front == Some(index) {
            return;
        }

        self.unlink(index);

        let old_front = self.front;
        {
            let node = self.node_mut(index);
            node.prev = None;
            node.next = old_front;
        }
        match old_front {
            Some(old_front) => self.node_mut(old_front).prev = Some(index),
            None => self.back = Some(index),
        }
        self.front = Some(index);
    }

    // == Accessors ==
    /// Returns true if the handle refers to a node currently in this list.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_some()
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let index = self.resolve(handle)?;
        self.slots[index].node.as_ref().map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        self.slots[index].node.as_mut().map(|node| &mut node.value)
    }

    /// Returns the node after `handle`, towards the back.
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle)?;
        self.node(index).next.map(|next| self.handle_at(next))
    }

    /// Returns the node before `handle`, towards the front.
    pub fn prev(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle)?;
        self.node(index).prev.map(|prev| self.handle_at(prev))
    }

    /// Iterates payloads from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.front,
            back: self.back,
            remaining: self.length,
        }
    }

    // == Internals ==
    fn resolve(&self, handle: NodeHandle) -> Option<usize> {
        if handle.owner != self.tag {
            return None;
        }
        let slot = self.slots.get(handle.index)?;
        if slot.generation != handle.generation || slot.node.is_none() {
            return None;
        }
        Some(handle.index)
    }

    fn handle_at(&self, index: usize) -> NodeHandle {
        NodeHandle {
            owner: self.tag,
            index,
            generation: self.slots[index].generation,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Splices the node out of the chain, patching front/back as needed.
    /// The node's own links are left stale for the caller to overwrite.
    fn unlink(&mut self, index: usize) {
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.front = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.back = prev,
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index].node.as_ref().expect(LINKED_SLOT)
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].node.as_mut().expect(LINKED_SLOT)
    }
}

// == Iterator ==
/// Front-to-back iterator over list payloads.
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
