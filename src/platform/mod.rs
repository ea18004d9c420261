//! Platform abstraction layer
//!
//! Keeps the simulation independent of how time is delivered: the browser
//! drives it from animation frames, tests call it directly.

pub mod clock;

pub use clock::FixedTimestep;
