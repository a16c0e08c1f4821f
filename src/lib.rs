//! trainsum
//!
//! Turns raw workout sensor packages into distance, speed and calorie
//! summaries for running, sports walking and swimming.
//!
//! The core lives in [`model`]: pure workout formulas, the factory that maps
//! a workout code to a variant, and the immutable summary record. The other
//! modules form the shell around it: package sources, JSONL parsing,
//! configuration, logging and the driver that ties them together.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;

// Re-export driver integration
pub mod integration;
