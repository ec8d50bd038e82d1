//! Error types for the kismet-agents crate.
//!
//! The monthly cycle itself never fails: stale labels, unknown domains, and
//! unknown themes are tolerated as no-ops. Errors are reserved for building
//! a population from an invalid roster.

use kismet_types::AgentLabel;

/// Errors that can occur when assembling agents.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Two agents in the same population share a label.
    #[error("duplicate agent label: {0}")]
    DuplicateLabel(AgentLabel),

    /// A roster entry names no known archetype.
    #[error("unknown archetype: {label}")]
    UnknownArchetype {
        /// The label that was requested.
        label: String,
    },
}
