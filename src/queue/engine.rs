//! Priority queue engine.
//!
//! ## Architecture
//!
//! [`PriorityQueue`] wraps the sorted chain with the public contract:
//!
//! - **Deep-copy insertion**: every `insert` copies both payloads through
//!   their `try_clone`, so the queue never aliases caller memory.
//! - **Identity-based removal**: `remove_element` and `change_priority`
//!   look elements up with `same_identity`, never with the priority.
//! - **Rollback**: `change_priority` is remove-then-fresh-insert; when the
//!   fresh copies are refused the original node is spliced back and the
//!   queue reports the failure with zero net change.
//! - **Cursor iteration**: the queue carries one embedded cursor driven by
//!   `iter_first` / `iter_next`. Every successful mutation resets it.
//!   Borrowing traversals that cannot race a mutation are available
//!   through [`PriorityQueue::iter`].
//!
//! ## Concurrency
//!
//! Single-threaded by design: the cursor is shared mutable state on the
//! queue itself, so two interleaved cursor traversals corrupt each other.
//! Callers needing independent traversals take separate copies (or use
//! the borrowing iterator, which the borrow checker keeps exclusive from
//! mutation).
//!
//! ## Example
//!
//! ```
//! use eventbook::PriorityQueue;
//!
//! let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
//! queue.insert(&1, &5).unwrap();
//! queue.insert(&2, &9).unwrap();
//! queue.insert(&3, &5).unwrap();
//!
//! // Highest priority first; equal priorities stay in insertion order.
//! let order: Vec<u32> = queue.iter().copied().collect();
//! assert_eq!(order, [2, 1, 3]);
//! ```

use crate::queue::behavior::{QueueElement, QueueError, QueuePriority};
use crate::queue::chain::Chain;

// ============================================================================
// Cursor
// ============================================================================

/// Embedded iteration state.
///
/// `Unset` is both the initial state and the state after any mutation;
/// advancing from `Unset` or `Exhausted` yields nothing and parks the
/// cursor at `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Unset,
    At(usize),
    Exhausted,
}

// ============================================================================
// PriorityQueue
// ============================================================================

/// An ordered priority queue over a slab-backed chain.
///
/// Elements are kept sorted by descending priority; among equal
/// priorities, earlier insertions come first. All lookups are O(n) by
/// design: this is an ordered list, not a heap.
#[derive(Debug)]
pub struct PriorityQueue<E, P> {
    chain: Chain<E, P>,
    cursor: Cursor,
}

impl<E: QueueElement, P: QueuePriority> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: QueueElement, P: QueuePriority> PriorityQueue<E, P> {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            cursor: Cursor::Unset,
        }
    }

    /// Create a queue with pre-allocated node capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use eventbook::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32, u32> = PriorityQueue::with_capacity(1_000);
    /// assert!(queue.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
            cursor: Cursor::Unset,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Pre-allocated node capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert deep copies of `element` and `priority` at their sorted
    /// position.
    ///
    /// The new element lands after the last queued element whose priority
    /// compares greater-or-equal, so equal priorities serve FIFO. The
    /// queue does not reject identity duplicates; uniqueness is caller
    /// discipline (check [`PriorityQueue::contains`] first).
    ///
    /// # Errors
    ///
    /// [`QueueError::OutOfMemory`] when either payload copy is refused;
    /// the queue is unchanged and the cursor keeps its position.
    pub fn insert(&mut self, element: &E, priority: &P) -> Result<(), QueueError> {
        let element = element.try_clone()?;
        let priority = priority.try_clone()?;
        self.chain.insert_owned(element, priority);
        self.cursor = Cursor::Unset;
        Ok(())
    }

    /// Unlink and drop the first element matching `element`'s identity.
    ///
    /// Head-to-tail scan order: with the uniqueness discipline intact
    /// there is exactly one candidate; if it was violated, the first
    /// match wins.
    ///
    /// # Errors
    ///
    /// [`QueueError::ElementNotFound`] when nothing matches; the queue is
    /// unchanged.
    pub fn remove_element(&mut self, element: &E) -> Result<(), QueueError> {
        match self.chain.remove_element(element) {
            Some(_payload) => {
                self.cursor = Cursor::Unset;
                Ok(())
            }
            None => Err(QueueError::ElementNotFound),
        }
    }

    /// Move an element to a new priority.
    ///
    /// The target is the first node matching `element`'s identity *and*
    /// holding a priority equal to `old_priority`, so the caller's
    /// snapshot must still be current. On success the operation behaves as
    /// remove-then-fresh-insert: the element re-enters at the tail of its
    /// new priority band, and the queue's size is unchanged.
    ///
    /// # Errors
    ///
    /// - [`QueueError::ElementNotFound`] when no node matches both checks.
    /// - [`QueueError::OutOfMemory`] when copying the payloads for the
    ///   re-insert is refused. The original node is spliced back exactly
    ///   where it was: size, contents, and order are untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use eventbook::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
    /// queue.insert(&1, &5).unwrap();
    /// queue.insert(&2, &9).unwrap();
    ///
    /// queue.change_priority(&1, &5, &20).unwrap();
    /// let order: Vec<u32> = queue.iter().copied().collect();
    /// assert_eq!(order, [1, 2]);
    /// ```
    pub fn change_priority(
        &mut self,
        element: &E,
        old_priority: &P,
        new_priority: &P,
    ) -> Result<(), QueueError> {
        let (prev, key) = self
            .chain
            .locate_entry(element, old_priority)
            .ok_or(QueueError::ElementNotFound)?;

        // Detach first, then copy: a refused copy rolls the node back in.
        self.chain.unlink(prev, key);
        let copies = element
            .try_clone()
            .and_then(|element| Ok((element, new_priority.try_clone()?)));
        match copies {
            Ok((element, priority)) => {
                self.chain.discard(key);
                self.chain.insert_owned(element, priority);
                self.cursor = Cursor::Unset;
                Ok(())
            }
            Err(err) => {
                self.chain.relink(prev, key);
                Err(err)
            }
        }
    }

    /// Remove the highest-priority element, returning its payloads.
    ///
    /// Popping an empty queue is a successful no-op that returns `None`
    /// and leaves the cursor alone.
    pub fn pop_front(&mut self) -> Option<(E, P)> {
        let popped = self.chain.pop_front();
        if popped.is_some() {
            self.cursor = Cursor::Unset;
        }
        popped
    }

    /// Drop every element and reset the cursor.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.cursor = Cursor::Unset;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Whether some queued element matches `element`'s identity.
    ///
    /// Priority plays no part in the match.
    pub fn contains(&self, element: &E) -> bool {
        self.chain.find(element).is_some()
    }

    /// The highest-priority element, if any.
    #[inline]
    pub fn front(&self) -> Option<&E> {
        self.chain.head().map(|key| self.chain.element(key))
    }

    /// The highest-priority element together with its priority.
    #[inline]
    pub fn front_entry(&self) -> Option<(&E, &P)> {
        self.chain.head().map(|key| self.chain.entry(key))
    }

    /// Mutable access to the first element matching `element`'s identity.
    ///
    /// The caller must not alter the element's identity or anything the
    /// priority was derived from; the node keeps its chain position. The
    /// cursor is reset because the queue's contents may change underneath
    /// it.
    pub fn find_mut(&mut self, element: &E) -> Option<&mut E> {
        let key = self.chain.find(element)?;
        self.cursor = Cursor::Unset;
        Some(self.chain.element_mut(key))
    }

    // ========================================================================
    // Deep copy
    // ========================================================================

    /// Duplicate the whole queue, payload by payload.
    ///
    /// The copy shares no memory with the original and starts with an
    /// unset cursor. If any payload copy is refused, the partial copy is
    /// dropped, the original is untouched, and the error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use eventbook::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
    /// queue.insert(&1, &5).unwrap();
    ///
    /// let copy = queue.try_copy().unwrap();
    /// queue.pop_front();
    ///
    /// assert_eq!(copy.len(), 1);
    /// assert!(queue.is_empty());
    /// ```
    pub fn try_copy(&self) -> Result<Self, QueueError> {
        Ok(Self {
            chain: self.chain.try_copy()?,
            cursor: Cursor::Unset,
        })
    }

    // ========================================================================
    // Cursor iteration
    // ========================================================================

    /// Park the cursor at the head and return the first element.
    ///
    /// Returns `None` (cursor exhausted) when the queue is empty.
    pub fn iter_first(&mut self) -> Option<&E> {
        match self.chain.head() {
            Some(key) => {
                self.cursor = Cursor::At(key);
                Some(self.chain.element(key))
            }
            None => {
                self.cursor = Cursor::Exhausted;
                None
            }
        }
    }

    /// Advance the cursor and return the next element.
    ///
    /// From an unset or exhausted cursor this yields `None`. The cursor
    /// is only meaningful between mutations; restart with
    /// [`PriorityQueue::iter_first`] after any insert/remove/change.
    pub fn iter_next(&mut self) -> Option<&E> {
        match self.cursor {
            Cursor::At(key) => match self.chain.next_key(key) {
                Some(next) => {
                    self.cursor = Cursor::At(next);
                    Some(self.chain.element(next))
                }
                None => {
                    self.cursor = Cursor::Exhausted;
                    None
                }
            },
            Cursor::Unset | Cursor::Exhausted => {
                self.cursor = Cursor::Exhausted;
                None
            }
        }
    }

    /// Lazy, restartable traversal in chain order (highest priority
    /// first).
    ///
    /// Borrows the queue shared, so mutation while iterating is rejected
    /// at compile time.
    pub fn iter(&self) -> Iter<'_, E, P> {
        Iter {
            queue: self,
            cursor: self.chain.head(),
        }
    }

    /// Like [`PriorityQueue::iter`], but yields the priority alongside
    /// each element.
    pub fn iter_entries(&self) -> Entries<'_, E, P> {
        Entries {
            queue: self,
            cursor: self.chain.head(),
        }
    }
}

// ============================================================================
// Borrowing iterators
// ============================================================================

/// Forward element traversal produced by [`PriorityQueue::iter`].
#[derive(Debug)]
pub struct Iter<'a, E, P> {
    queue: &'a PriorityQueue<E, P>,
    cursor: Option<usize>,
}

impl<'a, E: QueueElement, P: QueuePriority> Iterator for Iter<'a, E, P> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.queue.chain.next_key(key);
        Some(self.queue.chain.element(key))
    }
}

/// Forward (element, priority) traversal produced by
/// [`PriorityQueue::iter_entries`].
#[derive(Debug)]
pub struct Entries<'a, E, P> {
    queue: &'a PriorityQueue<E, P>,
    cursor: Option<usize>,
}

impl<'a, E: QueueElement, P: QueuePriority> Iterator for Entries<'a, E, P> {
    type Item = (&'a E, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.queue.chain.next_key(key);
        Some(self.queue.chain.entry(key))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
