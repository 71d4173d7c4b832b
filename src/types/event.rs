//! Events and their attendee lists.

use crate::queue::{Iter, PriorityQueue, QueueElement, QueueError};
use crate::types::date::Date;
use crate::types::member::{Member, MemberKey};

/// A dated event with an ordered attendee list.
///
/// Identity is the id alone: two events with the same id are the same
/// event regardless of name or date, which is what lets a reschedule
/// find its target under a changed date.
///
/// The attendee list is itself a priority queue, keyed so the smallest
/// member id comes first.
#[derive(Debug)]
pub struct Event {
    id: u32,
    name: String,
    date: Date,
    attendees: PriorityQueue<Member, MemberKey>,
}

impl Event {
    pub fn new(id: u32, name: impl Into<String>, date: Date) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            attendees: PriorityQueue::new(),
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

    #[inline]
    pub fn date(&self) -> &Date {
        &self.date
    }

    /// Move the event to a new date. The caller owns keeping any queue
    /// this event sits in consistent with the change.
    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    // ========================================================================
    // Attendees
    // ========================================================================

    /// Whether `member` is on the attendee list.
    pub fn has_attendee(&self, member: &Member) -> bool {
        self.attendees.contains(member)
    }

    /// Add `member` to the attendee list, ranked by id.
    ///
    /// Does not check for duplicates; callers check
    /// [`Event::has_attendee`] first to keep identities unique.
    pub fn add_attendee(&mut self, member: &Member) -> Result<(), QueueError> {
        self.attendees.insert(member, &MemberKey(member.id()))
    }

    /// Remove `member` from the attendee list.
    pub fn remove_attendee(&mut self, member: &Member) -> Result<(), QueueError> {
        self.attendees.remove_element(member)
    }

    /// Number of attendees.
    #[inline]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Attendees in id order, smallest first.
    pub fn attendees(&self) -> Iter<'_, Member, MemberKey> {
        self.attendees.iter()
    }
}

impl QueueElement for Event {
    /// Deep copy: the attendee queue is duplicated payload by payload, so
    /// the copy shares nothing with the original.
    fn try_clone(&self) -> Result<Self, QueueError> {
        Ok(Self {
            id: self.id,
            name: self.name.clone(),
            date: self.date.clone(),
            attendees: self.attendees.try_copy()?,
        })
    }

    fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
