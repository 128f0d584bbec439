//! Core types: zone identifiers, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod zone;

pub use config::{QueueConfig, DEFAULT_NUM_ZONES, MAX_NAME_LEN};
pub use error::{QueueError, QueueResult};
pub use zone::ZoneId;
