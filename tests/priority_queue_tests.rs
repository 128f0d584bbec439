//! Priority queue integration tests.
//!
//! These tests drive the public API the way a boarding desk would:
//! enqueue arrivals, serve them, peek at the next passenger, upgrade, print.

use zone_queue::{PriorityQueue, QueueError, UpgradeOutcome, ZoneId};

fn zone(z: u16) -> ZoneId {
    ZoneId::new(z)
}

fn render(pq: &PriorityQueue) -> String {
    let mut out = Vec::new();
    pq.print(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Boarding Scenario
// =============================================================================

/// Walk through a full desk session with three zones.
#[test]
fn test_boarding_scenario() {
    let mut pq = PriorityQueue::new(3).unwrap();
    pq.enqueue("Alice", zone(2)).unwrap();
    pq.enqueue("Bob", zone(1)).unwrap();
    pq.enqueue("Carl", zone(3)).unwrap();
    pq.enqueue("Dana", zone(2)).unwrap();

    let served = pq.dequeue().unwrap();
    assert_eq!(served.name(), "Bob");
    assert_eq!(served.zone(), zone(1));

    let before = pq.clone();
    let next = pq.front().unwrap();
    assert_eq!(next.name(), "Alice");
    assert_eq!(next.zone(), zone(2));
    assert_eq!(pq, before);

    assert!(pq.upgrade("Carl", zone(1)).unwrap().is_upgraded());
    assert_eq!(
        render(&pq),
        "Zone 1: Queue -> Carl (#1)\n\
         Zone 2: Queue -> Alice (#2) -> Dana (#2)\n\
         Zone 3: Queue\n"
    );

    assert_eq!(pq.upgrade("Dana", zone(2)).unwrap(), UpgradeOutcome::NotFound);

    let served = pq.dequeue().unwrap();
    assert_eq!(served.name(), "Carl");
    assert_eq!(served.zone(), zone(1));
}

/// Serving passengers prints the same text the desk shows.
#[test]
fn test_served_passenger_rendering() {
    let mut pq = PriorityQueue::new(5).unwrap();
    pq.enqueue("Eve", zone(4)).unwrap();

    let mut out = Vec::new();
    pq.front().unwrap().print(&mut out).unwrap();
    pq.dequeue().unwrap().print(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Eve (#4)\nEve (#4)\n");
}

// =============================================================================
// Empty Queue
// =============================================================================

/// An empty queue yields no passenger instead of failing.
#[test]
fn test_empty_queue_has_no_passenger() {
    let mut pq = PriorityQueue::new(2).unwrap();

    assert!(pq.is_empty());
    assert!(pq.dequeue().is_none());
    assert!(pq.front().is_none());
    assert_eq!(render(&pq), "Zone 1: Queue\nZone 2: Queue\n");
}

/// Draining the queue returns it to the empty state.
#[test]
fn test_drain_to_empty() {
    let mut pq = PriorityQueue::new(2).unwrap();
    pq.enqueue("a", zone(2)).unwrap();
    pq.enqueue("b", zone(1)).unwrap();

    assert!(!pq.is_empty());
    pq.dequeue().unwrap();
    pq.dequeue().unwrap();
    assert!(pq.is_empty());
    assert!(pq.dequeue().is_none());
}

// =============================================================================
// Ordering
// =============================================================================

/// Passengers in the same zone leave in arrival order, zones in number order.
#[test]
fn test_zone_then_arrival_order() {
    let mut pq = PriorityQueue::new(3).unwrap();
    for (name, z) in [("c1", 3), ("b1", 2), ("a1", 1), ("c2", 3), ("a2", 1), ("b2", 2)] {
        pq.enqueue(name, zone(z)).unwrap();
    }

    let order: Vec<_> = std::iter::from_fn(|| pq.dequeue())
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(order, vec!["a1", "a2", "b1", "b2", "c1", "c2"]);
}

/// Duplicate names are allowed and both are stored.
#[test]
fn test_duplicate_names_coexist() {
    let mut pq = PriorityQueue::new(2).unwrap();
    pq.enqueue("Sam", zone(1)).unwrap();
    pq.enqueue("Sam", zone(1)).unwrap();

    assert_eq!(pq.len(), 2);
    assert_eq!(pq.dequeue().unwrap().name(), "Sam");
    assert_eq!(pq.dequeue().unwrap().name(), "Sam");
}

// =============================================================================
// Preconditions
// =============================================================================

/// Contract violations come back as errors and leave the queue alone.
#[test]
fn test_precondition_violations() {
    let mut pq = PriorityQueue::new(3).unwrap();
    pq.enqueue("a", zone(3)).unwrap();
    let before = pq.clone();

    assert!(matches!(
        pq.enqueue("b", zone(4)),
        Err(QueueError::ZoneOutOfRange { .. })
    ));
    assert!(matches!(pq.enqueue("", zone(1)), Err(QueueError::EmptyName)));
    assert!(matches!(
        pq.enqueue("x".repeat(41), zone(1)),
        Err(QueueError::NameTooLong { len: 41, max: 40 })
    ));
    assert!(matches!(
        pq.upgrade("a", zone(3)),
        Err(QueueError::UpgradeZoneOutOfRange { .. })
    ));

    assert_eq!(pq, before);
}

/// Errors format into readable messages.
#[test]
fn test_error_messages() {
    let err = PriorityQueue::new(2).unwrap().enqueue("a", zone(9)).unwrap_err();
    assert_eq!(err.to_string(), "zone 9 is outside 1..=2");

    let err = PriorityQueue::new(0).unwrap_err();
    assert_eq!(err.to_string(), "a priority queue needs at least one zone");
}
