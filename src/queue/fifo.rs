//! First-in-first-out passenger queue.
//!
//! One `FifoQueue` backs each zone of a [`PriorityQueue`](super::PriorityQueue).
//! Storage is an `im::Vector`, so pushing at the back and popping at the
//! front are amortized O(1) and cloning a whole queue is O(1).

use std::io::{self, Write};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{QueueResult, ZoneId, MAX_NAME_LEN};
use crate::passenger::Passenger;

/// Ordered sequence of owned passengers; insertion order is service order.
///
/// ```
/// use zone_queue::core::ZoneId;
/// use zone_queue::queue::FifoQueue;
///
/// let mut queue = FifoQueue::new();
/// queue.enqueue("Alice", ZoneId::new(1)).unwrap();
/// queue.enqueue("Bob", ZoneId::new(1)).unwrap();
///
/// assert_eq!(queue.front().unwrap().name(), "Alice");
/// assert_eq!(queue.dequeue().unwrap().name(), "Alice");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FifoQueue {
    /// Front of the queue is index 0.
    passengers: Vector<Passenger>,
}

impl FifoQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a passenger from `name` and `zone` and append it at the back.
    pub fn enqueue(&mut self, name: impl Into<String>, zone: ZoneId) -> QueueResult<()> {
        self.enqueue_bounded(name, zone, MAX_NAME_LEN)
    }

    /// Like [`enqueue`](Self::enqueue) with an explicit name bound.
    pub fn enqueue_bounded(
        &mut self,
        name: impl Into<String>,
        zone: ZoneId,
        max_name_len: usize,
    ) -> QueueResult<()> {
        let passenger = Passenger::with_limit(name, zone, max_name_len)?;
        self.push(passenger);
        Ok(())
    }

    /// Append an existing passenger at the back.
    pub fn push(&mut self, passenger: Passenger) {
        self.passengers.push_back(passenger);
    }

    /// Remove and return the front passenger, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<Passenger> {
        self.passengers.pop_front()
    }

    /// Copy of the front passenger. The queue keeps the original.
    #[must_use]
    pub fn front(&self) -> Option<Passenger> {
        self.peek().cloned()
    }

    /// Borrow the front passenger.
    #[must_use]
    pub fn peek(&self) -> Option<&Passenger> {
        self.passengers.front()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Number of queued passengers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.passengers.iter()
    }

    /// Position of the first passenger called `name`, front-based.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.passengers.iter().position(|p| p.name() == name)
    }

    /// Remove the first passenger called `name`.
    ///
    /// Everyone else keeps their relative order. Returns `None` and leaves
    /// the queue untouched if nobody matches.
    pub fn take_first(&mut self, name: &str) -> Option<Passenger> {
        let index = self.position(name)?;
        Some(self.passengers.remove(index))
    }

    /// Drop every queued passenger.
    pub fn clear(&mut self) {
        self.passengers.clear();
    }

    /// Write `"Queue -> a (#1) -> b (#1)\n"`, or `"Queue\n"` when empty.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl std::fmt::Display for FifoQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Queue")?;
        for passenger in &self.passengers {
            write!(f, " -> {passenger}")?;
        }
        Ok(())
    }
}

impl Extend<Passenger> for FifoQueue {
    fn extend<I: IntoIterator<Item = Passenger>>(&mut self, iter: I) {
        for passenger in iter {
            self.push(passenger);
        }
    }
}

impl FromIterator<Passenger> for FifoQueue {
    fn from_iter<I: IntoIterator<Item = Passenger>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
