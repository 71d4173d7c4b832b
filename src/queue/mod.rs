//! Ordered priority-queue engine.
//!
//! ## Architecture
//!
//! The engine is an intrusive, sorted, singly-linked chain over a slab
//! arena:
//!
//! - **Slab-backed nodes**: nodes are addressed by stable `usize` keys,
//!   so removal and rollback never juggle dangling references
//! - **Descending priority order**: the front of the chain is always the
//!   highest-ranked element
//! - **FIFO tie-break**: equal priorities are served in insertion order
//!
//! ## Components
//!
//! - `ChainNode`: one (element, priority) pair plus its forward link
//! - `Chain`: the arena and all structural surgery (insert position scan,
//!   unlink/relink, deep copy)
//! - [`PriorityQueue`]: the public engine (lifecycle, mutation, lookup,
//!   cursor and borrowing iteration)
//! - [`QueueElement`] / [`QueuePriority`]: pluggable payload behavior
//!
//! ## Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | Insert           | O(n)       |
//! | Contains/remove  | O(n)       |
//! | Change priority  | O(n)       |
//! | Pop front        | O(1)       |
//! | Deep copy        | O(n)       |
//!
//! O(n) is by design: the structure is an ordered list, not a heap, and
//! trades asymptotics for exact, deterministic ordering semantics.

pub mod behavior;

mod chain;
mod node;

pub mod engine;

pub use behavior::{QueueElement, QueueError, QueuePriority};
pub use engine::{Entries, Iter, PriorityQueue};
