//! Queue configuration.
//!
//! Callers configure a priority queue at construction:
//! - `num_zones`: how many boarding zones exist (fixed for the queue's life)
//! - `max_name_len`: longest passenger name accepted, in characters
//!
//! The queue never resizes; build a new one to change the zone count.

use serde::{Deserialize, Serialize};

use super::error::{QueueError, QueueResult};

/// Default name bound, matching the boarding desk's 40-character field.
pub const MAX_NAME_LEN: usize = 40;

/// Default zone count for a fresh configuration.
pub const DEFAULT_NUM_ZONES: u16 = 5;

/// Configuration for a [`PriorityQueue`](crate::queue::PriorityQueue).
///
/// ```
/// use zone_queue::core::QueueConfig;
///
/// let config = QueueConfig::new(3).with_max_name_len(16);
/// assert_eq!(config.num_zones, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Number of zones (buckets). Must be at least 1.
    pub num_zones: u16,

    /// Longest accepted passenger name, in characters.
    pub max_name_len: usize,
}

impl QueueConfig {
    /// Create a configuration with `num_zones` zones and the default name bound.
    #[must_use]
    pub fn new(num_zones: u16) -> Self {
        Self {
            num_zones,
            max_name_len: MAX_NAME_LEN,
        }
    }

    /// Set the zone count.
    #[must_use]
    pub fn with_num_zones(mut self, num_zones: u16) -> Self {
        self.num_zones = num_zones;
        self
    }

    /// Set the name bound.
    #[must_use]
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Check the configuration before building a queue from it.
    pub fn validate(&self) -> QueueResult<()> {
        if self.num_zones == 0 {
            return Err(QueueError::InvalidZoneCount);
        }
        if self.max_name_len == 0 {
            return Err(QueueError::InvalidNameLimit);
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_ZONES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = QueueConfig::default();
        assert_eq!(config.num_zones, DEFAULT_NUM_ZONES);
        assert_eq!(config.max_name_len, MAX_NAME_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_zones_rejected() {
        let config = QueueConfig::default().with_num_zones(0);
        assert_eq!(config.validate(), Err(QueueError::InvalidZoneCount));
    }

    #[test]
    fn test_zero_name_limit_rejected() {
        let config = QueueConfig::default().with_max_name_len(0);
        assert_eq!(config.validate(), Err(QueueError::InvalidNameLimit));
        assert!(QueueConfig::default().with_max_name_len(1).validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = QueueConfig::new(7).with_max_name_len(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: QueueConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
