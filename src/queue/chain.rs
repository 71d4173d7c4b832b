//! Ordered node chain over a slab arena.
//!
//! ## Design
//!
//! The chain keeps every node sorted by non-increasing priority at all
//! times. Nodes live in a `Slab` and link forward by key, so structural
//! surgery (unlink, relink, splice) is pointer-free and a detached node
//! stays addressable until it is explicitly discarded, which is exactly
//! what the re-prioritization rollback needs.
//!
//! ## Tie-break
//!
//! Insertion scans while the resident node's priority compares
//! greater-or-equal to the incoming one and stops at the first strictly
//! lower node. A new node therefore lands *after* the last node of its
//! own priority band, which keeps equal-priority nodes in FIFO order
//! relative to their insertion history.
//!
//! ## Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | Insert             | O(n)       |
//! | Find by identity   | O(n)       |
//! | Unlink (known prev)| O(1)       |
//! | Pop front          | O(1)       |
//! | Deep copy          | O(n)       |

use std::cmp::Ordering;

use slab::Slab;

use crate::queue::behavior::{QueueElement, QueueError, QueuePriority};
use crate::queue::node::ChainNode;

/// The storage backing one queue: a slab of nodes threaded into a single
/// sorted, singly-linked chain.
#[derive(Debug)]
pub(crate) struct Chain<E, P> {
    /// Node arena. Keys stay valid until the node is removed.
    nodes: Slab<ChainNode<E, P>>,

    /// First node of the chain (highest priority), `None` when empty.
    head: Option<usize>,

    /// Number of linked nodes. Always equals the reachable chain length.
    len: usize,
}

impl<E: QueueElement, P: QueuePriority> Chain<E, P> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    // ========================================================================
    // Size and access
    // ========================================================================

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    #[inline]
    pub(crate) fn next_key(&self, key: usize) -> Option<usize> {
        self.nodes[key].next
    }

    #[inline]
    pub(crate) fn element(&self, key: usize) -> &E {
        &self.nodes[key].element
    }

    #[inline]
    pub(crate) fn element_mut(&mut self, key: usize) -> &mut E {
        &mut self.nodes[key].element
    }

    #[inline]
    pub(crate) fn entry(&self, key: usize) -> (&E, &P) {
        let node = &self.nodes[key];
        (&node.element, &node.priority)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert already-owned payloads at their sorted position.
    ///
    /// Returns the slab key of the new node. Infallible: by the time the
    /// payloads are owned, every copy that could have been refused has
    /// already succeeded.
    pub(crate) fn insert_owned(&mut self, element: E, priority: P) -> usize {
        let prev = self.position_for(&priority);
        let key = self.nodes.insert(ChainNode::new(element, priority));
        self.link_after(prev, key);
        self.len += 1;
        key
    }

    /// Find the node the incoming priority should be linked after,
    /// or `None` to become the new head.
    fn position_for(&self, priority: &P) -> Option<usize> {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            // Stop at the first strictly lower priority: equal priorities
            // keep insertion order, so the newcomer joins its band's tail.
            if node.priority.compare(priority) == Ordering::Less {
                break;
            }
            prev = Some(key);
            cursor = node.next;
        }
        prev
    }

    /// Splice `key` into the chain directly after `prev` (or at the head).
    fn link_after(&mut self, prev: Option<usize>, key: usize) {
        match prev {
            None => {
                self.nodes[key].next = self.head;
                self.head = Some(key);
            }
            Some(prev_key) => {
                let after = self.nodes[prev_key].next;
                self.nodes[key].next = after;
                self.nodes[prev_key].next = Some(key);
            }
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// First node matching the element identity, head to tail.
    pub(crate) fn find(&self, element: &E) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if node.element.same_identity(element) {
                return Some(key);
            }
            cursor = node.next;
        }
        None
    }

    /// First node matching the element identity, plus its predecessor.
    pub(crate) fn locate(&self, element: &E) -> Option<(Option<usize>, usize)> {
        self.locate_by(|node| node.element.same_identity(element))
    }

    /// First node matching identity *and* whose current priority compares
    /// equal to `priority`, plus its predecessor. The double match guards
    /// a re-prioritization against acting on a stale priority snapshot.
    pub(crate) fn locate_entry(
        &self,
        element: &E,
        priority: &P,
    ) -> Option<(Option<usize>, usize)> {
        self.locate_by(|node| {
            node.element.same_identity(element)
                && node.priority.compare(priority) == Ordering::Equal
        })
    }

    fn locate_by(
        &self,
        matches: impl Fn(&ChainNode<E, P>) -> bool,
    ) -> Option<(Option<usize>, usize)> {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if matches(node) {
                return Some((prev, key));
            }
            prev = Some(key);
            cursor = node.next;
        }
        None
    }

    // ========================================================================
    // Removal and rollback
    // ========================================================================

    /// Detach `key` from the chain without touching its payloads or its
    /// own forward link. The node stays in the slab so [`Chain::relink`]
    /// can splice it back exactly where it was.
    pub(crate) fn unlink(&mut self, prev: Option<usize>, key: usize) {
        let next = self.nodes[key].next;
        match prev {
            None => self.head = next,
            Some(prev_key) => self.nodes[prev_key].next = next,
        }
        self.len -= 1;
    }

    /// Undo an [`Chain::unlink`]. Valid only while no structural mutation
    /// happened in between: the node's forward link still points at its
    /// old successor, so restoring the predecessor's link is enough.
    pub(crate) fn relink(&mut self, prev: Option<usize>, key: usize) {
        match prev {
            None => self.head = Some(key),
            Some(prev_key) => self.nodes[prev_key].next = Some(key),
        }
        self.len += 1;
    }

    /// Release an unlinked node, dropping both payloads.
    pub(crate) fn discard(&mut self, key: usize) {
        self.nodes.remove(key);
    }

    /// Unlink and release the first node matching `element`.
    pub(crate) fn remove_element(&mut self, element: &E) -> Option<(E, P)> {
        let (prev, key) = self.locate(element)?;
        self.unlink(prev, key);
        Some(self.nodes.remove(key).into_payload())
    }

    /// Unlink and release the head node.
    pub(crate) fn pop_front(&mut self) -> Option<(E, P)> {
        let key = self.head?;
        self.head = self.nodes[key].next;
        self.len -= 1;
        Some(self.nodes.remove(key).into_payload())
    }

    /// Release every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    // ========================================================================
    // Deep copy
    // ========================================================================

    /// Copy the whole chain, element by element, priority by priority.
    ///
    /// The source is already sorted, so the copy appends at its own tail
    /// and never re-scans. If any payload copy is refused, the partially
    /// built chain is dropped on the way out and the source is untouched.
    pub(crate) fn try_copy(&self) -> Result<Self, QueueError> {
        let mut copy = Chain::with_capacity(self.len);
        let mut tail: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            let element = node.element.try_clone()?;
            let priority = node.priority.try_clone()?;
            let new_key = copy.nodes.insert(ChainNode::new(element, priority));
            match tail {
                None => copy.head = Some(new_key),
                Some(tail_key) => copy.nodes[tail_key].next = Some(new_key),
            }
            tail = Some(new_key);
            copy.len += 1;
            cursor = node.next;
        }
        Ok(copy)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
