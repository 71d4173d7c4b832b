//! Event manager: the scheduler built on two queue instances.

use std::collections::HashMap;

use thiserror::Error;

use crate::queue::{Iter, PriorityQueue, QueueElement, QueueError};
use crate::types::{Date, Event, Member, Workload};

// ============================================================================
// Error taxonomy
// ============================================================================

/// Domain errors reported by [`EventManager`] operations.
///
/// The engine's status vocabulary maps into this taxonomy at the
/// boundary: a refused payload copy becomes [`ManagerError::OutOfMemory`],
/// a failed engine lookup becomes the specific not-found variant of the
/// operation that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ManagerError {
    /// A required name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The date lies before the manager's current date.
    #[error("date is already in the past")]
    InvalidDate,

    /// An event with this id already exists.
    #[error("event id is already taken")]
    EventIdTaken,

    /// An event with this name already exists on the same date.
    #[error("an event with this name already exists on that date")]
    EventAlreadyExists,

    /// No event with this id exists.
    #[error("no event with this id")]
    EventNotFound,

    /// A member with this id already exists.
    #[error("member id is already taken")]
    MemberIdTaken,

    /// No member with this id exists.
    #[error("no member with this id")]
    MemberNotFound,

    /// The member is already linked to the event.
    #[error("member is already linked to this event")]
    AlreadyLinked,

    /// The member is not linked to the event.
    #[error("member is not linked to this event")]
    NotLinked,

    /// A payload copy was refused inside the engine.
    #[error("out of memory")]
    OutOfMemory,
}

#[inline]
fn oom(_: QueueError) -> ManagerError {
    ManagerError::OutOfMemory
}

// ============================================================================
// EventManager
// ============================================================================

/// Tracks dated events, their attendees, and member workloads.
///
/// Two independent engine instances do the ordering work:
///
/// - `events`, keyed by [`Date`]: the soonest event sits at the front
/// - `members`, keyed by [`Workload`]: the busiest member sits at the
///   front, smaller id first among ties
///
/// Each event additionally owns a nested attendee queue keyed by member
/// id. A side `HashMap` keeps each member's current linked-event count,
/// which is the old-priority snapshot every workload re-rank needs.
///
/// The manager upholds the engine's uniqueness discipline: every insert
/// is preceded by a `contains` check on the owning queue.
///
/// # Example
///
/// ```
/// use eventbook::{Date, EventManager};
///
/// let mut manager = EventManager::new(Date::new(1, 1, 2026).unwrap());
///
/// manager.add_event(1, "kickoff", Date::new(5, 1, 2026).unwrap()).unwrap();
/// manager.add_member(10, "Avi").unwrap();
/// manager.link(10, 1).unwrap();
///
/// assert_eq!(manager.event_count(), 1);
/// assert_eq!(manager.next_event().unwrap().name(), "kickoff");
/// ```
#[derive(Debug)]
pub struct EventManager {
    current: Date,
    events: PriorityQueue<Event, Date>,
    members: PriorityQueue<Member, Workload>,
    loads: HashMap<u32, u32>,
}

impl EventManager {
    /// Create a manager whose clock starts at `start`.
    pub fn new(start: Date) -> Self {
        Self {
            current: start,
            events: PriorityQueue::new(),
            members: PriorityQueue::new(),
            loads: HashMap::new(),
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Schedule a new event on `date`.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::EmptyName`] for an empty name
    /// - [`ManagerError::InvalidDate`] for a date before today
    /// - [`ManagerError::EventIdTaken`] when the id is in use
    /// - [`ManagerError::EventAlreadyExists`] when another event with the
    ///   same name sits on the same date
    pub fn add_event(&mut self, id: u32, name: &str, date: Date) -> Result<(), ManagerError> {
        if name.is_empty() {
            return Err(ManagerError::EmptyName);
        }
        if date < self.current {
            return Err(ManagerError::InvalidDate);
        }
        let event = Event::new(id, name, date);
        if self.events.contains(&event) {
            return Err(ManagerError::EventIdTaken);
        }
        if self
            .events
            .iter()
            .any(|queued| queued.name() == name && queued.date() == event.date())
        {
            return Err(ManagerError::EventAlreadyExists);
        }
        self.events.insert(&event, event.date()).map_err(oom)
    }

    /// Schedule a new event `days` ticks from the current date.
    pub fn add_event_in(&mut self, id: u32, name: &str, days: u32) -> Result<(), ManagerError> {
        let date = self.current.plus_days(days);
        self.add_event(id, name, date)
    }

    /// Remove an event and unlink all of its attendees, lowering their
    /// workloads.
    pub fn remove_event(&mut self, event_id: u32) -> Result<(), ManagerError> {
        let attendees: Vec<Member> = {
            let event = self
                .find_event(event_id)
                .ok_or(ManagerError::EventNotFound)?;
            event.attendees().cloned().collect()
        };
        // Event identity is the id, so a minimal probe finds the target.
        let probe = Event::new(event_id, "", self.current.clone());
        self.events
            .remove_element(&probe)
            .map_err(|_| ManagerError::EventNotFound)?;
        for member in &attendees {
            self.decrease_load(member)?;
        }
        Ok(())
    }

    /// Move an event to a new date, keeping its attendee list.
    ///
    /// Re-entry goes through the engine's re-prioritization, so among
    /// events already on `new_date` the moved one comes last.
    pub fn reschedule_event(&mut self, event_id: u32, new_date: Date) -> Result<(), ManagerError> {
        if new_date < self.current {
            return Err(ManagerError::InvalidDate);
        }
        let (moved, old_date) = {
            let event = self
                .find_event(event_id)
                .ok_or(ManagerError::EventNotFound)?;
            if self.events.iter().any(|queued| {
                queued.id() != event_id
                    && queued.name() == event.name()
                    && queued.date() == &new_date
            }) {
                return Err(ManagerError::EventAlreadyExists);
            }
            let mut moved = event.try_clone().map_err(oom)?;
            let old_date = event.date().clone();
            moved.set_date(new_date.clone());
            (moved, old_date)
        };
        self.events
            .change_priority(&moved, &old_date, &new_date)
            .map_err(|err| match err {
                QueueError::OutOfMemory => ManagerError::OutOfMemory,
                QueueError::ElementNotFound => ManagerError::EventNotFound,
            })
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Register a new member with no linked events.
    pub fn add_member(&mut self, id: u32, name: &str) -> Result<(), ManagerError> {
        if name.is_empty() {
            return Err(ManagerError::EmptyName);
        }
        let member = Member::new(id, name);
        if self.members.contains(&member) {
            return Err(ManagerError::MemberIdTaken);
        }
        self.members
            .insert(&member, &Workload::new(0, id))
            .map_err(oom)?;
        self.loads.insert(id, 0);
        Ok(())
    }

    /// Link a member to an event and raise the member's workload.
    pub fn link(&mut self, member_id: u32, event_id: u32) -> Result<(), ManagerError> {
        let member = self
            .find_member(member_id)
            .ok_or(ManagerError::MemberNotFound)?
            .clone();
        let probe = Event::new(event_id, "", self.current.clone());
        let event = self
            .events
            .find_mut(&probe)
            .ok_or(ManagerError::EventNotFound)?;
        if event.has_attendee(&member) {
            return Err(ManagerError::AlreadyLinked);
        }
        event.add_attendee(&member).map_err(oom)?;
        self.increase_load(&member)
    }

    /// Unlink a member from an event and lower the member's workload.
    pub fn unlink(&mut self, member_id: u32, event_id: u32) -> Result<(), ManagerError> {
        let member = self
            .find_member(member_id)
            .ok_or(ManagerError::MemberNotFound)?
            .clone();
        let probe = Event::new(event_id, "", self.current.clone());
        let event = self
            .events
            .find_mut(&probe)
            .ok_or(ManagerError::EventNotFound)?;
        if !event.has_attendee(&member) {
            return Err(ManagerError::NotLinked);
        }
        event
            .remove_attendee(&member)
            .map_err(|_| ManagerError::NotLinked)?;
        self.decrease_load(&member)
    }

    // ========================================================================
    // Clock
    // ========================================================================

    /// Advance the clock by `days` and drop every event whose date has
    /// passed, lowering its attendees' workloads.
    ///
    /// Events on the new current date stay: they have not happened yet.
    pub fn tick(&mut self, days: u32) -> Result<(), ManagerError> {
        for _ in 0..days {
            self.current.tick();
        }
        loop {
            let due = matches!(
                self.events.front(),
                Some(event) if event.date() < &self.current
            );
            if !due {
                break;
            }
            if let Some((event, _date)) = self.events.pop_front() {
                for member in event.attendees() {
                    self.decrease_load(member)?;
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// The manager's current date.
    #[inline]
    pub fn current_date(&self) -> &Date {
        &self.current
    }

    /// Number of upcoming events.
    #[inline]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of registered members.
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// The soonest upcoming event, if any.
    #[inline]
    pub fn next_event(&self) -> Option<&Event> {
        self.events.front()
    }

    /// All upcoming events in chronological order; same-day events keep
    /// their scheduling order.
    pub fn events(&self) -> Iter<'_, Event, Date> {
        self.events.iter()
    }

    /// Members linked to at least one upcoming event, busiest first,
    /// smaller id first among ties.
    pub fn responsible_members(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(move |member| self.loads.get(&member.id()).copied().unwrap_or(0) > 0)
    }

    // ========================================================================
    // Internal bookkeeping
    // ========================================================================

    fn find_event(&self, event_id: u32) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == event_id)
    }

    fn find_member(&self, member_id: u32) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == member_id)
    }

    /// Re-rank `member` after gaining one linked event.
    fn increase_load(&mut self, member: &Member) -> Result<(), ManagerError> {
        let id = member.id();
        let old = self.loads.get(&id).copied().unwrap_or(0);
        self.shift_load(member, old, old.saturating_add(1))
    }

    /// Re-rank `member` after losing one linked event.
    fn decrease_load(&mut self, member: &Member) -> Result<(), ManagerError> {
        let id = member.id();
        let old = self.loads.get(&id).copied().unwrap_or(0);
        self.shift_load(member, old, old.saturating_sub(1))
    }

    fn shift_load(&mut self, member: &Member, old: u32, new: u32) -> Result<(), ManagerError> {
        let id = member.id();
        self.members
            .change_priority(member, &Workload::new(old, id), &Workload::new(new, id))
            .map_err(|err| match err {
                QueueError::OutOfMemory => ManagerError::OutOfMemory,
                QueueError::ElementNotFound => ManagerError::MemberNotFound,
            })?;
        self.loads.insert(id, new);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
