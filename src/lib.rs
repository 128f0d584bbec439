//! # zone-queue
//!
//! A boarding queue where passengers are served by zone.
//!
//! ## Design Principles
//!
//! 1. **Zones Are Buckets**: Zone `z` owns one FIFO queue. Lower zones are
//!    served first; inside a zone, arrival order wins.
//!
//! 2. **Copy on Peek, Move on Pop**: `front` hands back a clone and leaves
//!    the queue alone. `dequeue` transfers the passenger itself.
//!
//! 3. **Errors for Contract Violations Only**: Bad zones and bad names are
//!    `QueueError`s. An empty queue or an upgrade that finds nobody are
//!    normal outcomes (`Option`, `UpgradeOutcome`).
//!
//! ## Modules
//!
//! - `core`: Zone IDs, configuration, errors
//! - `passenger`: The passenger record
//! - `queue`: `FifoQueue` and the zone `PriorityQueue`
//!
//! ## Example
//!
//! ```
//! use zone_queue::{PriorityQueue, UpgradeOutcome, ZoneId};
//!
//! let mut pq = PriorityQueue::new(3).unwrap();
//! pq.enqueue("Alice", ZoneId::new(2)).unwrap();
//! pq.enqueue("Carl", ZoneId::new(3)).unwrap();
//!
//! let outcome = pq.upgrade("Carl", ZoneId::new(1)).unwrap();
//! assert_eq!(outcome, UpgradeOutcome::Upgraded { from: ZoneId::new(3) });
//! assert_eq!(pq.dequeue().unwrap().name(), "Carl");
//! ```

pub mod core;
pub mod passenger;
pub mod queue;

// Re-export commonly used types
pub use crate::core::{QueueConfig, QueueError, QueueResult, ZoneId, MAX_NAME_LEN};
pub use crate::passenger::Passenger;
pub use crate::queue::{FifoQueue, PriorityQueue, UpgradeOutcome};
