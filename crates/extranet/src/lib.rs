//! Scoring, booking and rate engine for the hotel partner extranet.
//!
//! Everything under [`partner`] is a pure computation over in-memory snapshots.
//! Callers own persistence and rendering; the engine only returns new values.

pub mod config;
pub mod error;
pub mod partner;
pub mod telemetry;
