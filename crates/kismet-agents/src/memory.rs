//! Peer memory updates.
//!
//! Memory is never overwritten wholesale: each interaction applies a
//! [`MemoryDelta`] whose numeric parts are added and re-clamped to
//! `[0, 100]`, and whose optional bookkeeping parts replace the previous
//! values only when present.

use kismet_types::{ActionType, AgentMemory, OutcomeQuality, clamp_score};

/// An incremental change to what an agent remembers about a peer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryDelta {
    /// Added to trust.
    pub trust: f64,
    /// Added to attraction.
    pub attraction: f64,
    /// Added to familiarity.
    pub familiarity: f64,
    /// Replaces `last_interaction_type` when set.
    pub interaction_type: Option<ActionType>,
    /// Replaces `last_result` when set.
    pub result: Option<OutcomeQuality>,
    /// Replaces `last_time` when set.
    pub month: Option<u32>,
}

/// Apply a delta to a memory record in place.
pub fn apply_memory_delta(memory: &mut AgentMemory, delta: &MemoryDelta) {
    memory.trust = clamp_score(memory.trust + delta.trust);
    memory.attraction = clamp_score(memory.attraction + delta.attraction);
    memory.familiarity = clamp_score(memory.familiarity + delta.familiarity);

    if let Some(interaction_type) = delta.interaction_type {
        memory.last_interaction_type = Some(interaction_type);
    }
    if let Some(result) = delta.result {
        memory.last_result = Some(result);
    }
    if let Some(month) = delta.month {
        memory.last_time = Some(month);
    }
}
