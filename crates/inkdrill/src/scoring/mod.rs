//! Heuristic handwriting scoring.
//!
//! Geometry only: the scorer never looks at letter shapes. It compares how
//! much ink was drawn, how wide the writing is, and how many pen lifts were
//! made against what a word of the target's length would need.

pub mod config;
pub mod error;
pub mod metrics;
pub mod scorer;
