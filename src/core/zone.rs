//! Zone identifiers.
//!
//! Zones are 1-based: zone 1 boards first. A priority queue with
//! `num_zones` buckets stores zone `z` at bucket index `z - 1`.

use serde::{Deserialize, Serialize};

/// Boarding zone number. Lower numbers are served earlier.
///
/// `ZoneId(0)` is representable but never valid inside a queue; the
/// constructors that build passengers and queues reject it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// The best zone.
    pub const FIRST: ZoneId = ZoneId(1);

    /// Create a new zone ID.
    #[must_use]
    pub const fn new(zone: u16) -> Self {
        Self(zone)
    }

    /// Get the raw zone number.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check that this is a usable zone number (at least 1).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1
    }

    /// Bucket index for this zone (`zone - 1`).
    ///
    /// # Panics
    ///
    /// Panics on `ZoneId(0)`. Use [`checked_index`](Self::checked_index)
    /// for zones that have not been validated.
    #[must_use]
    pub const fn index(self) -> usize {
        match self.checked_index() {
            Some(index) => index,
            None => panic!("zone 0 has no bucket index"),
        }
    }

    /// Bucket index for this zone, or `None` for `ZoneId(0)`.
    #[must_use]
    pub const fn checked_index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            zone => Some(zone as usize - 1),
        }
    }

    /// Zone for a 0-based bucket index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u16 + 1)
    }

    /// Iterate over zones `1..=num_zones` in service order.
    ///
    /// ```
    /// use zone_queue::core::ZoneId;
    ///
    /// let zones: Vec<_> = ZoneId::all(3).collect();
    /// assert_eq!(zones, vec![ZoneId::new(1), ZoneId::new(2), ZoneId::new(3)]);
    /// ```
    pub fn all(num_zones: u16) -> impl DoubleEndedIterator<Item = ZoneId> {
        (1..=num_zones).map(ZoneId)
    }
}

impl From<u16> for ZoneId {
    fn from(zone: u16) -> Self {
        Self(zone)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
