//! # Eventbook
//!
//! An ordered priority-queue engine and the event scheduler built on it.
//!
//! ## Architecture
//!
//! - **Queue**: generic ordered priority queue, a sorted, singly-linked
//!   chain over a slab arena with deep-copy insertion, identity-based
//!   removal, rollback-safe re-prioritization, and cursor iteration
//! - **Types**: scheduler domain values (Date, Member, Event) and their
//!   priority keys
//! - **Manager**: the scheduler: two engine instances (events by date,
//!   members by workload) plus nested attendee queues
//!
//! ## Design Principles
//!
//! 1. **Deep-copy ownership**: the queue copies every payload on the way
//!    in and never aliases caller memory
//! 2. **Deterministic ordering**: descending priority with FIFO ties,
//!    O(n) ordered list by design, no heap, no rebalancing
//! 3. **Explicit failure**: every refused copy and every missed lookup is
//!    a status the caller must handle, never a crash
//! 4. **Synchronous execution**: single-threaded, every operation
//!    completes before returning

// ============================================================================
// Module declarations
// ============================================================================

/// Priority-queue engine: chain, behavior traits, cursor iteration
pub mod queue;

/// Scheduler domain types: Date, Member, Event, priority keys
pub mod types;

/// Event manager: the scheduling client of the engine
pub mod manager;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use queue::{Entries, Iter, PriorityQueue, QueueElement, QueueError, QueuePriority};
pub use types::{Date, Event, Member, MemberKey, Workload};
pub use manager::{EventManager, ManagerError};
