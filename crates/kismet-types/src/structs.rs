//! Core entity structs for the Kismet simulation.
//!
//! All state scalars (life state, trauma, desires, peer memory) live on a
//! 0-100 scale and are re-clamped after every mutation via [`clamp_score`].
//! Trait scalars live on a 0-10 scale and never change after creation.

use serde::{Deserialize, Serialize};

use crate::enums::{ActionType, Domain, OutcomeQuality};
use crate::ids::AgentLabel;

/// Lower bound of every 0-100 scalar.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every 0-100 scalar.
pub const SCORE_MAX: f64 = 100.0;

/// Clamp a value to the `[0, 100]` score range.
///
/// `NaN` collapses to the lower bound so that no out-of-range value can
/// propagate through later phases.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_MIN;
    }
    value.clamp(SCORE_MIN, SCORE_MAX)
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// The twelve fixed personality scalars, each in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Orientation towards love and relationships.
    pub love_orientation: f64,
    /// Motivation and ambition.
    pub drive: f64,
    /// Tendency to seek social interaction.
    pub sociability: f64,
    /// Emotional and behavioral consistency.
    pub stability: f64,
    /// Desire to explore and learn.
    pub curiosity: f64,
    /// Tendency towards creative expression.
    pub creativity: f64,
    /// Work ethic and persistence.
    pub hardworking: f64,
    /// Base cognitive capability.
    pub intelligence_base: f64,
    /// Emotional warmth and empathy.
    pub warmth: f64,
    /// Tendency towards impulsive choices.
    pub impulse: f64,
    /// Sensitivity to negative experiences.
    pub trauma_sensitivity: f64,
    /// Depth and persistence of memories.
    pub memory_depth: f64,
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// An immutable named personality template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Display name (e.g. `Vayu`).
    pub name: String,
    /// Unique label (e.g. `vayu`).
    pub label: AgentLabel,
    /// Trait vector copied into every agent built from this archetype.
    pub traits: Traits,
}

// ---------------------------------------------------------------------------
// LifeState
// ---------------------------------------------------------------------------

/// The six mutable life-state scalars, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeState {
    /// Health and fitness.
    pub physical: f64,
    /// Romantic fulfilment.
    pub love: f64,
    /// Professional standing.
    pub career: f64,
    /// Social standing.
    pub social: f64,
    /// Accumulated knowledge.
    pub intelligence: f64,
    /// Available energy.
    pub energy: f64,
}

impl LifeState {
    /// Mid-twenties baseline used for new agents: every scalar at 50.
    pub const BASELINE: Self = Self {
        physical: 50.0,
        love: 50.0,
        career: 50.0,
        social: 50.0,
        intelligence: 50.0,
        energy: 50.0,
    };

    /// Re-clamp every scalar to `[0, 100]`.
    pub fn clamp_all(&mut self) {
        self.physical = clamp_score(self.physical);
        self.love = clamp_score(self.love);
        self.career = clamp_score(self.career);
        self.social = clamp_score(self.social);
        self.intelligence = clamp_score(self.intelligence);
        self.energy = clamp_score(self.energy);
    }
}

impl Default for LifeState {
    fn default() -> Self {
        Self::BASELINE
    }
}

// ---------------------------------------------------------------------------
// Desires
// ---------------------------------------------------------------------------

/// The six desire scalars, recomputed from scratch every month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Desires {
    /// Pull towards romance.
    pub love: f64,
    /// Pull towards work.
    pub career: f64,
    /// Pull towards friends.
    pub social: f64,
    /// Pull towards fitness.
    pub physical: f64,
    /// Pull towards study.
    pub learning: f64,
    /// Pull towards recovery.
    pub rest: f64,
}

impl Desires {
    /// Read the desire for a domain.
    pub const fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Love => self.love,
            Domain::Career => self.career,
            Domain::Social => self.social,
            Domain::Physical => self.physical,
            Domain::Learning => self.learning,
            Domain::Rest => self.rest,
        }
    }

    /// Mutable access to the desire for a domain.
    pub const fn get_mut(&mut self, domain: Domain) -> &mut f64 {
        match domain {
            Domain::Love => &mut self.love,
            Domain::Career => &mut self.career,
            Domain::Social => &mut self.social,
            Domain::Physical => &mut self.physical,
            Domain::Learning => &mut self.learning,
            Domain::Rest => &mut self.rest,
        }
    }

    /// Re-clamp every desire to `[0, 100]`.
    pub fn clamp_all(&mut self) {
        for domain in Domain::ALL {
            let value = self.get_mut(domain);
            *value = clamp_score(*value);
        }
    }
}

// ---------------------------------------------------------------------------
// AgentMemory
// ---------------------------------------------------------------------------

/// What one agent remembers about one peer.
///
/// Created lazily on the first interaction, updated by clamped deltas, and
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMemory {
    /// Trust in the peer, `[0, 100]`.
    pub trust: f64,
    /// Attraction to the peer, `[0, 100]`.
    pub attraction: f64,
    /// Familiarity with the peer, `[0, 100]`.
    pub familiarity: f64,
    /// Action tag of the last shared interaction.
    pub last_interaction_type: Option<ActionType>,
    /// Outcome of the last shared interaction.
    pub last_result: Option<OutcomeQuality>,
    /// Month of the last shared interaction.
    pub last_time: Option<u32>,
}

impl AgentMemory {
    /// Memory of a stranger: trust 50, attraction 50, familiarity 0.
    pub const STRANGER: Self = Self {
        trust: 50.0,
        attraction: 50.0,
        familiarity: 0.0,
        last_interaction_type: None,
        last_result: None,
        last_time: None,
    };
}

impl Default for AgentMemory {
    fn default() -> Self {
        Self::STRANGER
    }
}
