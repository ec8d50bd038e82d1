//! Agent state, desires, planning, and targeting for the Kismet simulation.
//!
//! This crate contains the per-agent logic layer -- everything that reads or
//! mutates a single agent (plus read-only peers) without orchestrating a
//! month. It sits between `kismet-types` (plain data) and `kismet-core`
//! (the world and the monthly phase cycle).
//!
//! # Modules
//!
//! - [`actions`] -- [`PlannedAction`] and the solo-action effects table
//! - [`agent`] -- The [`Agent`] entity and its clamped mutators
//! - [`archetypes`] -- The fixed table of ten default archetypes
//! - [`desires`] -- The desire engine (traits + deficits + theme)
//! - [`destiny`] -- Destiny bias ([`Destiny`])
//! - [`diary`] -- Monthly diary entries built from state deltas
//! - [`error`] -- Error types ([`AgentError`])
//! - [`intro`] -- Soul notes, summaries, initial goals, destiny seeds
//! - [`memory`] -- Peer memory deltas ([`MemoryDelta`])
//! - [`planner`] -- The 1 big + 2 small action planner
//! - [`targeting`] -- Target scoring and selection for social actions

pub mod actions;
pub mod agent;
pub mod archetypes;
pub mod desires;
pub mod destiny;
pub mod diary;
pub mod error;
pub mod intro;
pub mod memory;
pub mod planner;
pub mod targeting;

// Re-export primary types at crate root for convenience.
pub use actions::{PlannedAction, apply_solo_action_effects};
pub use agent::{Agent, StateDelta};
pub use archetypes::{archetype_by_label, default_archetypes};
pub use desires::{compute_desires, theme_bonus, update_agent_desires};
pub use destiny::Destiny;
pub use diary::generate_monthly_diary;
pub use error::AgentError;
pub use memory::MemoryDelta;
pub use planner::{big_action_for, plan_agent_actions, small_action_for};
pub use targeting::{assign_action_targets, score_target};
