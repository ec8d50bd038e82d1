//! The agent entity.
//!
//! An [`Agent`] owns its fixed trait vector, its mutable life state, trauma,
//! the desires recomputed each month, and its memory of every peer it has
//! interacted with (keyed by label -- memory never points at another agent).
//!
//! All state mutation goes through [`Agent::apply_delta`] and
//! [`Agent::update_memory_for`], which re-clamp to `[0, 100]`.

use std::collections::BTreeMap;

use kismet_types::{AgentLabel, AgentMemory, Archetype, Desires, Domain, LifeState, Traits, clamp_score};
use serde::Serialize;

use crate::intro;
use crate::memory::{MemoryDelta, apply_memory_delta};

/// An additive change to an agent's life state and trauma.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateDelta {
    /// Added to physical.
    pub physical: f64,
    /// Added to love.
    pub love: f64,
    /// Added to career.
    pub career: f64,
    /// Added to social.
    pub social: f64,
    /// Added to intelligence.
    pub intelligence: f64,
    /// Added to energy.
    pub energy: f64,
    /// Added to trauma level.
    pub trauma: f64,
}

/// A simulated person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    // --- Identity ---
    /// Display name.
    pub name: String,
    /// Unique label (primary key).
    pub label: AgentLabel,
    /// Personality, fixed for life.
    pub traits: Traits,

    // --- Narrative identity ---
    /// One-line poetic description.
    pub soul_note: String,
    /// Short personality summary.
    pub personality_summary: String,
    /// Domains the agent initially gravitates towards.
    pub initial_goals: Vec<Domain>,
    /// Destiny seed in `[0, 1]`, fixed at creation.
    pub destiny_seed: f64,
    /// Blessing added to the seed for the current month (set by overrides).
    pub destiny_blessing: f64,
    /// Forced big-action domain for the current month (set by overrides).
    pub locked_action_domain: Option<Domain>,

    // --- State ---
    /// Life-state scalars.
    pub state: LifeState,
    /// Trauma level in `[0, 100]`.
    pub trauma_level: f64,
    /// Desires recomputed at the start of every month.
    pub desires: Desires,

    // --- Relationships ---
    /// What this agent remembers about each peer.
    pub memory: BTreeMap<AgentLabel, AgentMemory>,

    // --- Config & narrative log ---
    /// Whether per-interaction luck noise applies to this agent.
    pub luck_enabled: bool,
    /// Diary entry per month.
    pub diary_log: BTreeMap<u32, String>,
    /// Life state as of the last diary entry, used to narrate deltas.
    pub last_state_snapshot: LifeState,
}

impl Agent {
    /// Create an agent from an archetype with baseline state.
    pub fn from_archetype(archetype: &Archetype) -> Self {
        let mut agent = Self {
            name: archetype.name.clone(),
            label: archetype.label.clone(),
            traits: archetype.traits,
            soul_note: intro::soul_note(archetype),
            personality_summary: intro::personality_summary(archetype),
            initial_goals: intro::initial_goals(archetype),
            destiny_seed: intro::destiny_seed(archetype),
            destiny_blessing: 0.0,
            locked_action_domain: None,
            state: LifeState::BASELINE,
            trauma_level: 0.0,
            desires: Desires::default(),
            memory: BTreeMap::new(),
            luck_enabled: true,
            diary_log: BTreeMap::new(),
            last_state_snapshot: LifeState::BASELINE,
        };
        agent.reset_state();
        agent
    }

    /// Reset life state to the baseline and refresh the diary snapshot.
    ///
    /// Trauma and memory are left untouched.
    pub fn reset_state(&mut self) {
        self.state = LifeState::BASELINE;
        self.last_state_snapshot = self.state;
    }

    /// Add a delta to life state and trauma, clamping every scalar.
    pub fn apply_delta(&mut self, delta: &StateDelta) {
        self.state.physical += delta.physical;
        self.state.love += delta.love;
        self.state.career += delta.career;
        self.state.social += delta.social;
        self.state.intelligence += delta.intelligence;
        self.state.energy += delta.energy;
        self.state.clamp_all();
        self.trauma_level = clamp_score(self.trauma_level + delta.trauma);
    }

    /// Update (creating if needed) the memory of another agent.
    pub fn update_memory_for(&mut self, other: &AgentLabel, delta: &MemoryDelta) {
        let memory = self.memory.entry(other.clone()).or_default();
        apply_memory_delta(memory, delta);
    }

    /// Memory of a peer, if any interaction has happened.
    pub fn memory_of(&self, other: &str) -> Option<&AgentMemory> {
        self.memory.get(other)
    }

    /// Memory of a peer, or the stranger defaults.
    pub fn memory_or_default(&self, other: &str) -> AgentMemory {
        self.memory_of(other).cloned().unwrap_or_default()
    }
}
