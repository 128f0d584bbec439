//! Passenger records.
//!
//! A `Passenger` is the unit stored in every queue. Each record is owned
//! by exactly one container at a time; `front` hands out clones and
//! `dequeue` hands out the record itself.

mod record;

pub use record::Passenger;
