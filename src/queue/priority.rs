//! Zone-bucketed priority queue.
//!
//! One [`FifoQueue`] per zone. Dequeue serves the front of the lowest
//! non-empty zone, so passengers leave in zone order and, inside a zone,
//! in arrival order.
//!
//! ## Upgrade
//!
//! `upgrade(name, new_zone)` searches zones strictly worse than
//! `new_zone`, starting from the worst zone. The first bucket holding the
//! name gives up its first match (stable removal, nobody else moves) and
//! the passenger joins the back of `new_zone` as a fresh arrival.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::fifo::FifoQueue;
use crate::core::{QueueConfig, QueueError, QueueResult, ZoneId, MAX_NAME_LEN};
use crate::passenger::Passenger;

/// Result of a well-formed upgrade request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeOutcome {
    /// The passenger moved out of `from` into the requested zone.
    Upgraded { from: ZoneId },

    /// No passenger with that name sits in a zone worse than the target.
    /// The queue is unchanged.
    NotFound,
}

impl UpgradeOutcome {
    /// `true` if a passenger was moved.
    #[must_use]
    pub const fn is_upgraded(self) -> bool {
        matches!(self, Self::Upgraded { .. })
    }
}

/// Priority queue of passengers keyed by zone.
///
/// The zone count is fixed at construction. Bucket `z` (1-based) only
/// ever holds passengers whose zone is `z`.
///
/// ## Usage
///
/// ```
/// use zone_queue::core::ZoneId;
/// use zone_queue::queue::PriorityQueue;
///
/// let mut pq = PriorityQueue::new(3).unwrap();
/// pq.enqueue("Alice", ZoneId::new(2)).unwrap();
/// pq.enqueue("Bob", ZoneId::new(1)).unwrap();
///
/// assert_eq!(pq.dequeue().unwrap().name(), "Bob");
/// assert_eq!(pq.front().unwrap().name(), "Alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriorityQueue")]
pub struct PriorityQueue {
    /// Bucket for zone `z` at index `z - 1`.
    buckets: SmallVec<[FifoQueue; 8]>,

    /// Longest accepted name on enqueue.
    max_name_len: usize,
}

fn default_max_name_len() -> usize {
    MAX_NAME_LEN
}

impl PriorityQueue {
    /// Create an empty queue with `num_zones` zones.
    pub fn new(num_zones: u16) -> QueueResult<Self> {
        Self::with_config(QueueConfig::new(num_zones))
    }

    /// Create an empty queue from a configuration.
    pub fn with_config(config: QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        let buckets = (0..config.num_zones).map(|_| FifoQueue::new()).collect();
        debug!(num_zones = config.num_zones, "created priority queue");
        Ok(Self {
            buckets,
            max_name_len: config.max_name_len,
        })
    }

    /// Number of zones.
    #[must_use]
    pub fn num_zones(&self) -> u16 {
        self.buckets.len() as u16
    }

    /// Longest accepted passenger name.
    #[must_use]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// The FIFO queue for `zone`, if the zone exists.
    #[must_use]
    pub fn bucket(&self, zone: ZoneId) -> Option<&FifoQueue> {
        self.buckets.get(zone.checked_index()?)
    }

    /// Iterate over `(zone, bucket)` pairs in service order.
    pub fn buckets(&self) -> impl Iterator<Item = (ZoneId, &FifoQueue)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| (ZoneId::from_index(i), bucket))
    }

    /// Add a passenger at the back of `zone`.
    ///
    /// Requires `1 <= zone <= num_zones`. Names are not checked for
    /// uniqueness.
    pub fn enqueue(&mut self, name: impl Into<String>, zone: ZoneId) -> QueueResult<()> {
        let num_zones = self.num_zones();
        if !zone.is_valid() || zone.raw() > num_zones {
            warn!(%zone, num_zones, "enqueue rejected: zone out of range");
            return Err(QueueError::ZoneOutOfRange { zone, num_zones });
        }

        let name = name.into();
        debug!(name = %name, %zone, "enqueue");
        self.buckets[zone.index()].enqueue_bounded(name, zone, self.max_name_len)
    }

    /// Remove and return the next passenger to be served.
    ///
    /// Returns `None` when every zone is empty.
    pub fn dequeue(&mut self) -> Option<Passenger> {
        let passenger = self.buckets.iter_mut().find_map(FifoQueue::dequeue)?;
        debug!(name = passenger.name(), zone = %passenger.zone(), "dequeue");
        Some(passenger)
    }

    /// Copy of the next passenger to be served. The queue is not changed.
    #[must_use]
    pub fn front(&self) -> Option<Passenger> {
        self.peek().cloned()
    }

    /// Borrow the next passenger to be served.
    #[must_use]
    pub fn peek(&self) -> Option<&Passenger> {
        self.buckets.iter().find_map(FifoQueue::peek)
    }

    /// `true` iff every zone is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(FifoQueue::is_empty)
    }

    /// Total passengers across all zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(FifoQueue::len).sum()
    }

    /// Move the passenger called `name` into `new_zone`.
    ///
    /// Requires `1 <= new_zone < num_zones`. Only zones worse than
    /// `new_zone` are searched, from the worst zone down, so a passenger
    /// already in `new_zone` or better yields [`UpgradeOutcome::NotFound`].
    /// With duplicate names, the first match in the worst matching zone
    /// is the one moved.
    pub fn upgrade(&mut self, name: &str, new_zone: ZoneId) -> QueueResult<UpgradeOutcome> {
        let num_zones = self.num_zones();
        if !new_zone.is_valid() || new_zone.raw() >= num_zones {
            warn!(zone = %new_zone, num_zones, "upgrade rejected: target zone out of range");
            return Err(QueueError::UpgradeZoneOutOfRange {
                zone: new_zone,
                num_zones,
            });
        }

        for index in (new_zone.raw() as usize..self.buckets.len()).rev() {
            let zone = ZoneId::from_index(index);
            trace!(name, %zone, "upgrade scanning zone");

            let Some(passenger) = self.buckets[index].take_first(name) else {
                continue;
            };

            self.buckets[new_zone.index()].push(passenger.rezoned(new_zone));
            debug!(name, from = %zone, to = %new_zone, "upgraded passenger");
            return Ok(UpgradeOutcome::Upgraded { from: zone });
        }

        debug!(name, to = %new_zone, "upgrade found no eligible passenger");
        Ok(UpgradeOutcome::NotFound)
    }

    /// Drop every queued passenger. The zone count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Write one `"Zone <z>: Queue ..."` line per zone, in zone order.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (zone, bucket) in self.buckets() {
            write!(out, "Zone {zone}: ")?;
            bucket.print(out)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (zone, bucket) in self.buckets() {
            writeln!(f, "Zone {zone}: {bucket}")?;
        }
        Ok(())
    }
}

/// Unchecked wire form; validated on the way into [`PriorityQueue`].
#[derive(Deserialize)]
struct RawPriorityQueue {
    buckets: Vec<FifoQueue>,
    #[serde(default = "default_max_name_len")]
    max_name_len: usize,
}

impl TryFrom<RawPriorityQueue> for PriorityQueue {
    type Error = QueueError;

    fn try_from(raw: RawPriorityQueue) -> Result<Self, Self::Error> {
        let num_zones =
            u16::try_from(raw.buckets.len()).map_err(|_| QueueError::InvalidZoneCount)?;
        QueueConfig::new(num_zones)
            .with_max_name_len(raw.max_name_len)
            .validate()?;

        for (index, bucket) in raw.buckets.iter().enumerate() {
            let expected = ZoneId::from_index(index);
            for passenger in bucket.iter() {
                if passenger.zone() != expected {
                    return Err(QueueError::ZoneMismatch {
                        zone: passenger.zone(),
                        bucket: expected,
                    });
                }
                passenger.check_name_len(raw.max_name_len)?;
            }
        }

        Ok(Self {
            buckets: raw.buckets.into_iter().collect(),
            max_name_len: raw.max_name_len,
        })
    }
}
