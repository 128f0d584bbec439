//! Error type for queue operations.
//!
//! Only contract violations are errors. An empty queue and an upgrade
//! that finds nobody are ordinary outcomes and are reported through
//! `Option` and [`UpgradeOutcome`](crate::queue::UpgradeOutcome).

use thiserror::Error;

use super::zone::ZoneId;

/// Rejected call into a passenger, FIFO queue, or priority queue.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    #[error("a priority queue needs at least one zone")]
    InvalidZoneCount,

    #[error("zone {zone} is not a valid zone number")]
    InvalidZone { zone: ZoneId },

    #[error("zone {zone} is outside 1..={num_zones}")]
    ZoneOutOfRange { zone: ZoneId, num_zones: u16 },

    #[error("cannot upgrade to zone {zone}: target must be in 1..{num_zones}")]
    UpgradeZoneOutOfRange { zone: ZoneId, num_zones: u16 },

    #[error("name limit must allow at least one character")]
    InvalidNameLimit,

    #[error("passenger name is empty")]
    EmptyName,

    #[error("passenger name has {len} characters, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("passenger in zone {zone} stored in bucket for zone {bucket}")]
    ZoneMismatch { zone: ZoneId, bucket: ZoneId },
}

/// Result alias used throughout the crate.
pub type QueueResult<T> = Result<T, QueueError>;
