//! Members and the priority keys that rank them.
//!
//! A member appears in two kinds of queues with two different rankings:
//! inside an event's attendee list (by id, ascending) and in the
//! manager's responsibility ranking (by linked-event count, descending).
//! Both rankings are separate priority types so neither leaks into the
//! member itself.

use std::cmp::Ordering;
use std::fmt;

use crate::queue::{QueueElement, QueueError, QueuePriority};

// ============================================================================
// Member
// ============================================================================

/// A person who can be linked to events.
///
/// Identity is the id alone; the display name never participates in
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: u32,
    name: String,
}

impl Member {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

impl QueueElement for Member {
    fn try_clone(&self) -> Result<Self, QueueError> {
        Ok(self.clone())
    }

    fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// ============================================================================
// Priority keys
// ============================================================================

/// Ranks attendees inside an event: the smallest id is served first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberKey(pub u32);

impl QueuePriority for MemberKey {
    fn try_clone(&self) -> Result<Self, QueueError> {
        Ok(*self)
    }

    fn compare(&self, other: &Self) -> Ordering {
        // Smaller id outranks larger: reverse the natural order.
        other.0.cmp(&self.0)
    }
}

/// Ranks members by responsibility: more linked events first, then the
/// smaller id among ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    /// Number of upcoming events the member is linked to.
    pub events: u32,

    /// The member's id, used only as the tie-break.
    pub member_id: u32,
}

impl Workload {
    pub fn new(events: u32, member_id: u32) -> Self {
        Self { events, member_id }
    }
}

impl QueuePriority for Workload {
    fn try_clone(&self) -> Result<Self, QueueError> {
        Ok(*self)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.events
            .cmp(&other.events)
            .then(other.member_id.cmp(&self.member_id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
