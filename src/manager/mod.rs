//! Event manager module.
//!
//! ## Design
//!
//! The manager is a pure client of the queue engine. It owns no ordering
//! logic of its own:
//!
//! - events live in a queue keyed by date (soonest first)
//! - members live in a queue keyed by workload (busiest first)
//! - each event owns an attendee queue keyed by member id
//!
//! Every rule the engine leaves to callers (identity uniqueness, the
//! old-priority snapshot for re-ranking) is enforced here.
//!
//! ## Example
//!
//! ```
//! use eventbook::{Date, EventManager};
//!
//! let mut manager = EventManager::new(Date::new(1, 1, 2026).unwrap());
//! manager.add_event_in(1, "standup", 1).unwrap();
//! manager.tick(2).unwrap();
//!
//! // The standup happened yesterday; it is gone.
//! assert_eq!(manager.event_count(), 0);
//! ```

pub mod planner;

pub use planner::{EventManager, ManagerError};
