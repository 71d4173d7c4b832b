//! End-to-end scheduling flows through the event manager.
//!
//! These tests drive the manager the way a calendar front end would:
//! plan events, register members, link them, move things around, and
//! let time pass.

use eventbook::{Date, Event, EventManager, ManagerError, Member};

fn date(day: u8, month: u8, year: i32) -> Date {
    Date::new(day, month, year).unwrap()
}

fn event_ids(manager: &EventManager) -> Vec<u32> {
    manager.events().map(Event::id).collect()
}

#[test]
fn plan_a_quarter() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    manager.add_event(1, "kickoff", date(5, 1, 2026)).unwrap();
    manager.add_event(2, "design review", date(20, 2, 2026)).unwrap();
    manager.add_event(3, "release", date(30, 3, 2026)).unwrap();
    manager.add_event(4, "standup", date(5, 1, 2026)).unwrap();

    // Chronological order, same-day events in scheduling order.
    assert_eq!(event_ids(&manager), [1, 4, 2, 3]);
    assert_eq!(manager.event_count(), 4);
    assert_eq!(manager.next_event().unwrap().name(), "kickoff");
}

#[test]
fn linking_drives_the_responsibility_ranking() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    manager.add_event_in(1, "kickoff", 1).unwrap();
    manager.add_event_in(2, "review", 2).unwrap();
    manager.add_event_in(3, "retro", 3).unwrap();

    manager.add_member(30, "Gal").unwrap();
    manager.add_member(10, "Avi").unwrap();
    manager.add_member(20, "Noa").unwrap();

    // Nobody is responsible for anything yet.
    assert_eq!(manager.responsible_members().count(), 0);

    manager.link(10, 1).unwrap();
    manager.link(30, 1).unwrap();
    manager.link(30, 2).unwrap();
    manager.link(30, 3).unwrap();
    manager.link(20, 2).unwrap();

    let ranking: Vec<(u32, &str)> = manager
        .responsible_members()
        .map(|member| (member.id(), member.name()))
        .collect();
    assert_eq!(ranking, [(30, "Gal"), (10, "Avi"), (20, "Noa")]);

    // Attendees inside an event come out in id order.
    let kickoff = manager.events().find(|event| event.id() == 1).unwrap();
    let attendees: Vec<u32> = kickoff.attendees().map(Member::id).collect();
    assert_eq!(attendees, [10, 30]);
}

#[test]
fn unlink_demotes_a_member() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    manager.add_event_in(1, "kickoff", 1).unwrap();
    manager.add_event_in(2, "review", 2).unwrap();
    manager.add_member(10, "Avi").unwrap();
    manager.add_member(20, "Noa").unwrap();

    manager.link(10, 1).unwrap();
    manager.link(10, 2).unwrap();
    manager.link(20, 1).unwrap();

    manager.unlink(10, 1).unwrap();
    manager.unlink(10, 2).unwrap();

    let ranking: Vec<u32> = manager.responsible_members().map(Member::id).collect();
    assert_eq!(ranking, [20]);
}

#[test]
fn reschedule_keeps_attendees_and_reorders() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    manager.add_event(1, "workshop", date(3, 1, 2026)).unwrap();
    manager.add_event(2, "summit", date(10, 1, 2026)).unwrap();
    manager.add_member(10, "Avi").unwrap();
    manager.link(10, 1).unwrap();

    manager.reschedule_event(1, date(20, 1, 2026)).unwrap();

    assert_eq!(event_ids(&manager), [2, 1]);
    let workshop = manager.events().find(|event| event.id() == 1).unwrap();
    assert_eq!(workshop.date(), &date(20, 1, 2026));
    assert_eq!(workshop.attendee_count(), 1);
}

#[test]
fn reschedule_onto_an_occupied_slot_is_rejected() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    manager.add_event(1, "sync", date(3, 1, 2026)).unwrap();
    manager.add_event(2, "sync", date(10, 1, 2026)).unwrap();

    // Another "sync" already sits on 10.1.2026.
    assert_eq!(
        manager.reschedule_event(1, date(10, 1, 2026)),
        Err(ManagerError::EventAlreadyExists)
    );
    assert_eq!(event_ids(&manager), [1, 2]);
}

#[test]
fn time_passes_and_the_calendar_drains() {
    let mut manager = EventManager::new(date(28, 12, 2026));

    // Spans the year boundary of the 30-day calendar.
    manager.add_event(1, "year-end", date(30, 12, 2026)).unwrap();
    manager.add_event(2, "new-year", date(2, 1, 2027)).unwrap();
    manager.add_event(3, "far out", date(15, 1, 2027)).unwrap();

    manager.add_member(10, "Avi").unwrap();
    manager.link(10, 1).unwrap();
    manager.link(10, 3).unwrap();

    manager.tick(5).unwrap();

    assert_eq!(manager.current_date(), &date(3, 1, 2027));
    assert_eq!(event_ids(&manager), [3]);

    // One of Avi's two events happened; one remains.
    let ranking: Vec<u32> = manager.responsible_members().map(Member::id).collect();
    assert_eq!(ranking, [10]);

    manager.tick(30).unwrap();
    assert_eq!(manager.event_count(), 0);
    assert_eq!(manager.responsible_members().count(), 0);
}

#[test]
fn full_lifecycle_smoke() {
    let mut manager = EventManager::new(date(1, 1, 2026));

    for id in 1..=10u32 {
        manager
            .add_event_in(id, &format!("event-{}", id), id)
            .unwrap();
    }
    for id in 1..=5u32 {
        manager.add_member(id, &format!("member-{}", id)).unwrap();
    }
    for event_id in 1..=10u32 {
        let member_id = (event_id % 5) + 1;
        manager.link(member_id, event_id).unwrap();
    }

    assert_eq!(manager.event_count(), 10);
    assert_eq!(manager.responsible_members().count(), 5);

    // Remove a mid-calendar event outright.
    manager.remove_event(5).unwrap();
    assert_eq!(manager.event_count(), 9);

    // Let half the calendar elapse.
    manager.tick(5).unwrap();
    assert_eq!(manager.event_count(), 5);

    // Everything left is still chronological.
    let dates: Vec<&Date> = manager.events().map(Event::date).collect();
    for pair in dates.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}
