//! Chain node for slab-based storage.
//!
//! ## Design
//!
//! `ChainNode` pairs one element with its priority and carries the single
//! forward link of the chain. The link is a slab key (`usize`), not a
//! direct reference, so unlinking and relinking a node during removal or
//! rollback never creates a dangling pointer.
//!
//! ## Ownership
//!
//! A node exclusively owns both payloads. Removing a node from the slab
//! drops them; there is no separate free step.

/// One link of the ordered chain.
///
/// The chain is singly linked: `next` points at the node with the next
/// lower (or equal, for later insertions in the same band) priority, or
/// `None` at the tail.
#[derive(Debug, Clone)]
pub(crate) struct ChainNode<E, P> {
    /// The stored element.
    pub(crate) element: E,

    /// The priority that placed this node in the chain.
    pub(crate) priority: P,

    /// Next node in the chain (slab key), `None` at the tail.
    pub(crate) next: Option<usize>,
}

impl<E, P> ChainNode<E, P> {
    /// Create a new node that is not yet linked into any chain.
    #[inline]
    pub(crate) fn new(element: E, priority: P) -> Self {
        Self {
            element,
            priority,
            next: None,
        }
    }

    /// Tear the node apart into its owned payloads.
    #[inline]
    pub(crate) fn into_payload(self) -> (E, P) {
        (self.element, self.priority)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
