//! Domain types for the event scheduler.
//!
//! ## Types
//!
//! - [`Date`]: scheduler calendar date (30-day months, 12-month years)
//! - [`Member`]: a person linkable to events, identified by id
//! - [`Event`]: a dated event carrying its own attendee queue
//! - [`MemberKey`] / [`Workload`]: the priority keys ranking members
//!   inside attendee lists and in the responsibility ranking
//!
//! All of these implement the queue behavior traits, so they plug
//! straight into [`PriorityQueue`](crate::queue::PriorityQueue).

mod date;
mod event;
mod member;

// Re-export all types at module level
pub use date::{Date, DAYS_IN_MONTH, MONTHS_IN_YEAR};
pub use event::Event;
pub use member::{Member, MemberKey, Workload};
