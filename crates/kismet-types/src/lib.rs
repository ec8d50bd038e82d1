//! Shared type definitions for the Kismet simulation.
//!
//! This crate is the single source of truth for the plain data carried
//! between the agent logic, the events feed, and the simulation core.
//!
//! # Modules
//!
//! - [`ids`] -- The [`AgentLabel`] primary key for agents
//! - [`enums`] -- Life domains, action tags, themes, and outcome classes
//! - [`structs`] -- Trait vectors, life state, desires, archetypes, and peer memory

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActionType, Domain, OutcomeQuality, ParseDomainError, Theme};
pub use ids::AgentLabel;
pub use structs::{AgentMemory, Archetype, Desires, LifeState, Traits, clamp_score};
