//! Domain layer - entities, value objects and the gap analysis rules.

pub mod foundation;
pub mod gap_analysis;
pub mod workforce;
