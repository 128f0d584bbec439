//! Queues: a FIFO queue per zone, composed into a zone priority queue.
//!
//! ## Key Types
//!
//! - `FifoQueue`: arrival-ordered passengers for a single zone
//! - `PriorityQueue`: one `FifoQueue` per zone, served lowest zone first
//! - `UpgradeOutcome`: whether an upgrade moved anybody
//!
//! `front` returns a copy and leaves the queue alone; `dequeue` hands the
//! passenger itself to the caller.

mod fifo;
mod priority;

pub use fifo::FifoQueue;
pub use priority::{PriorityQueue, UpgradeOutcome};
