//! Narrative events and state history for the Kismet simulation.
//!
//! Two append-only sinks live here:
//!
//! - [`feed`] -- The month-indexed [`EventsFeed`] of narrative lines that the
//!   outcome phase writes and the diary phase reads.
//! - [`history`] -- [`AgentSnapshot`] rows collected into a [`WorldHistory`],
//!   one row per agent per recorded month.
//!
//! Neither sink persists anything; both serialize with serde so a caller
//! can write them wherever it likes.

pub mod feed;
pub mod history;

pub use feed::EventsFeed;
pub use history::{AgentSnapshot, WorldHistory};
