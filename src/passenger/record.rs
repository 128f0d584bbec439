//! The passenger record.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::{QueueError, QueueResult, ZoneId, MAX_NAME_LEN};

/// A waiting passenger: a name and an assigned zone.
///
/// Records are immutable once built. Moving a passenger to another zone
/// goes through [`Passenger::relocated`], which consumes the old record.
/// `Clone` produces a fully independent copy.
///
/// Deserialization checks the zone and rejects empty names. The length
/// bound is a per-queue setting, so the owning queue checks it.
///
/// ```
/// use zone_queue::core::ZoneId;
/// use zone_queue::passenger::Passenger;
///
/// let p = Passenger::new("Alice", ZoneId::new(2)).unwrap();
/// assert_eq!(p.name(), "Alice");
/// assert_eq!(p.to_string(), "Alice (#2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPassenger")]
pub struct Passenger {
    name: String,
    zone: ZoneId,
}

impl Passenger {
    /// Create a passenger, enforcing the default 40-character name bound.
    pub fn new(name: impl Into<String>, zone: ZoneId) -> QueueResult<Self> {
        Self::with_limit(name, zone, MAX_NAME_LEN)
    }

    /// Create a passenger with an explicit name bound (in characters).
    pub fn with_limit(name: impl Into<String>, zone: ZoneId, max_name_len: usize) -> QueueResult<Self> {
        let name = name.into();
        if !zone.is_valid() {
            return Err(QueueError::InvalidZone { zone });
        }
        if name.is_empty() {
            return Err(QueueError::EmptyName);
        }
        let passenger = Self { name, zone };
        passenger.check_name_len(max_name_len)?;
        Ok(passenger)
    }

    /// The passenger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The passenger's zone.
    #[must_use]
    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// Same passenger, now assigned to `zone`.
    ///
    /// The name was already validated, so only the zone is checked.
    pub fn relocated(self, zone: ZoneId) -> QueueResult<Self> {
        if !zone.is_valid() {
            return Err(QueueError::InvalidZone { zone });
        }
        Ok(self.rezoned(zone))
    }

    /// Re-zone without checking; `zone` must already be validated.
    pub(crate) fn rezoned(self, zone: ZoneId) -> Self {
        debug_assert!(zone.is_valid());
        Self { name: self.name, zone }
    }

    /// Check the name against a queue's configured bound.
    pub(crate) fn check_name_len(&self, max_name_len: usize) -> QueueResult<()> {
        let len = self.name.chars().count();
        if len > max_name_len {
            return Err(QueueError::NameTooLong { len, max: max_name_len });
        }
        Ok(())
    }

    /// Write `"<name> (#<zone>)\n"` to `out`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl std::fmt::Display for Passenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.zone)
    }
}

/// Unchecked wire form; validated on the way into [`Passenger`].
#[derive(Deserialize)]
struct RawPassenger {
    name: String,
    zone: ZoneId,
}

impl TryFrom<RawPassenger> for Passenger {
    type Error = QueueError;

    fn try_from(raw: RawPassenger) -> Result<Self, Self::Error> {
        Self::with_limit(raw.name, raw.zone, usize::MAX)
    }
}
