//! Eventbook - Binary Entry Point
//!
//! Small demonstration of the scheduler: create a manager, plan a week,
//! and print the resulting schedule and responsibility ranking.

use eventbook::{Date, EventManager};

fn main() {
    println!("===========================================");
    println!("  Eventbook - schedule demo");
    println!("===========================================");
    println!();

    let start = Date::new(1, 1, 2026).expect("valid start date");
    let mut manager = EventManager::new(start);

    println!("Planning the week of {}...", manager.current_date());
    manager
        .add_event_in(1, "kickoff", 1)
        .expect("schedule kickoff");
    manager
        .add_event_in(2, "design review", 3)
        .expect("schedule design review");
    manager
        .add_event_in(3, "retrospective", 3)
        .expect("schedule retrospective");

    manager.add_member(10, "Avi").expect("register Avi");
    manager.add_member(20, "Noa").expect("register Noa");

    manager.link(10, 1).expect("link Avi to kickoff");
    manager.link(10, 2).expect("link Avi to design review");
    manager.link(20, 3).expect("link Noa to retrospective");

    println!();
    println!("Upcoming events:");
    for event in manager.events() {
        let attendees: Vec<&str> = event.attendees().map(|member| member.name()).collect();
        println!(
            "  {} - {} (attendees: {})",
            event.date(),
            event.name(),
            if attendees.is_empty() {
                String::from("none")
            } else {
                attendees.join(", ")
            }
        );
    }

    println!();
    println!("Responsibility ranking:");
    for member in manager.responsible_members() {
        println!("  {}", member);
    }

    println!();
    println!("Two days pass...");
    manager.tick(2).expect("advance the clock");

    println!("It is now {}.", manager.current_date());
    println!("{} event(s) remain on the calendar.", manager.event_count());
}
