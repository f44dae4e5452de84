//! Employee Skills Gap Analyzer
//!
//! Compares each employee's assessed skill proficiencies with the
//! requirements of their role, stores the resulting gaps and derives
//! training predictions and recommendations from them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
