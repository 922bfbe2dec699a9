//! Doubly linked list stored in an arena.
//!
//! Nodes live in a `Vec` and link to each other by [`NodeId`] index rather
//! than by pointer. Removing a node rewires its neighbours' indices and
//! leaves a tombstone in its slot; slots are never reused, so a stale id
//! resolves to `None` instead of to some other element.
//!
//! ```text
//! nodes:  [ A | B (removed) | C | D ]
//! links:    A <-> C <-> D              head = A, tail = D
//! ```
//!
//! Removal while walking is the intended use: [`List::remove`] hands back
//! the removed node's successor so the walk can continue from there.

use std::fmt;

use thiserror::Error;

/// Index of a node in a [`List`] arena.
///
/// Ids stay valid (and keep pointing at the same element) until that
/// element is removed. They are only meaningful for the list that issued
/// them.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.raw())
    }
}

/// The arena is full: node ids are `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("list arena exceeded {} nodes", u32::MAX)]
pub struct ListOverflow;

#[derive(Clone, Debug)]
struct Node<T> {
    /// `None` once the node has been removed.
    value: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Arena-backed doubly linked list.
#[derive(Clone, Debug)]
pub struct List<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append `value` at the tail. Returns the id of the new node.
    ///
    /// # Errors
    ///
    /// [`ListOverflow`] when the arena already holds `u32::MAX` nodes
    /// (removed nodes included).
    pub fn push_back(&mut self, value: T) -> Result<NodeId, ListOverflow> {
        let raw = u32::try_from(self.nodes.len()).map_err(|_| ListOverflow)?;
        if raw == u32::MAX {
            return Err(ListOverflow);
        }
        let id = NodeId::new(raw);
        self.nodes.push(Node {
            value: Some(value),
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        Ok(id)
    }

    /// Unlink the node `id`, connecting its predecessor to its successor.
    ///
    /// Returns the removed value together with the former successor, or
    /// `None` if `id` was already removed or never issued.
    pub fn remove(&mut self, id: NodeId) -> Option<(T, Option<NodeId>)> {
        let node = self.nodes.get_mut(id.index())?;
        let value = node.value.take()?;
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev {
            Some(p) => self.nodes[p.index()].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n.index()].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        Some((value, next))
    }

    /// The value stored at `id`, if the node is live.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index())?.value.as_ref()
    }

    /// Mutable access to the value stored at `id`, if the node is live.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.index())?.value.as_mut()
    }

    /// Successor of `id`, or `None` at the tail or for a dead id.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.live(id)?.next
    }

    /// Predecessor of `id`, or `None` at the head or for a dead id.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.live(id)?.prev
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate `(id, value)` pairs from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn live(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index()).filter(|n| n.value.is_some())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.live(id)?;
        self.cursor = node.next;
        node.value.as_ref().map(|value| (id, value))
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = (NodeId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
