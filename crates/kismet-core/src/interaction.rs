//! Interaction resolution and outcome application.
//!
//! Social actions become [`InteractionProposal`]s. Each target decides once,
//! independently, whether to accept ([`evaluate_interaction_proposals`]).
//! Every accepted pair then gets a chemistry score that drives state,
//! trauma, and two-way memory changes ([`apply_interaction_outcomes`]).
//!
//! All proposals are resolved before any outcome is applied, so acceptance
//! is decided against start-of-phase state. Outcomes are applied pair by
//! pair in proposal order.

use std::collections::BTreeMap;

use kismet_agents::{Agent, Destiny, MemoryDelta, PlannedAction, StateDelta};
use kismet_types::{ActionType, AgentLabel, OutcomeQuality, clamp_score};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::world::World;

/// Interaction lines per agent for the current month, read by the diary.
pub type InteractionLog = BTreeMap<AgentLabel, Vec<String>>;

/// Bound of the uniform per-agent luck noise.
const LUCK_RANGE: f64 = 5.0;

/// A social action offered to one or more targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionProposal {
    /// Agent making the offer.
    pub initiator_label: AgentLabel,
    /// Agents the offer is made to.
    pub target_labels: Vec<AgentLabel>,
    /// Social action tag.
    pub action_type: ActionType,
}

/// A proposal after every target has decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInteraction {
    /// Agent that made the offer.
    pub initiator_label: AgentLabel,
    /// Every target the offer was made to.
    pub target_labels: Vec<AgentLabel>,
    /// Social action tag.
    pub action_type: ActionType,
    /// Targets that accepted, in proposal order.
    pub accepted_targets: Vec<AgentLabel>,
    /// Targets that declined or could not be found, in proposal order.
    pub rejected_targets: Vec<AgentLabel>,
}

/// Turn targeted social actions into proposals.
pub fn collect_interaction_proposals(actions: &[PlannedAction]) -> Vec<InteractionProposal> {
    actions
        .iter()
        .filter(|action| action.action_type.is_social() && action.has_targets())
        .map(|action| InteractionProposal {
            initiator_label: action.actor_label.clone(),
            target_labels: action.target_labels.clone().unwrap_or_default(),
            action_type: action.action_type,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

/// Acceptance probability before jitter and clamping.
///
/// Energy, the wish to rest, and trauma scale a 0.5 base down; a matching
/// desire and trust in the initiator add to it; bad history with the
/// initiator scales it down again; warmth (romantic only) and sociability
/// add a final nudge.
pub fn base_acceptance_probability(target: &Agent, initiator: &Agent, action_type: ActionType) -> f64 {
    let memory = target.memory_or_default(initiator.label.as_str());

    let mut p = 0.5;
    p *= target.state.energy / 100.0;
    p *= 1.0 - target.desires.rest / 200.0;
    p *= 1.0 - target.trauma_level / 200.0;

    if action_type.is_romantic() {
        p += (target.desires.love / 100.0) * 0.3;
    } else if action_type.is_social() {
        p += (target.desires.social / 100.0) * 0.3;
    }

    p += (memory.trust / 100.0) * 0.2;

    match memory.last_result {
        Some(OutcomeQuality::Negative) => p *= 0.3,
        Some(OutcomeQuality::Neutral) => p *= 0.7,
        Some(OutcomeQuality::Positive) | None => {}
    }

    if action_type.is_romantic() {
        p += (target.traits.warmth / 10.0) * 0.1;
    }
    p += (target.traits.sociability / 10.0) * 0.1;
    p
}

/// Half-width of the impulse jitter added to the acceptance probability.
pub fn impulse_variation(target: &Agent) -> f64 {
    ((target.traits.impulse / 10.0) * 0.2).max(0.0)
}

/// Decide whether `target` accepts `initiator`'s offer.
///
/// Draws twice from `rng`: once for the impulse jitter and once for the
/// decision itself.
pub fn should_accept(
    target: &Agent,
    initiator: &Agent,
    action_type: ActionType,
    rng: &mut impl Rng,
) -> bool {
    let variation = impulse_variation(target);
    let jitter = rng.random_range(-variation..=variation);
    let p = (base_acceptance_probability(target, initiator, action_type) + jitter).clamp(0.0, 1.0);
    rng.random::<f64>() < p
}

/// Resolve every proposal against the current population.
///
/// A proposal whose initiator is gone is dropped. A target that cannot be
/// found, or that is the initiator itself, is rejected without a draw.
pub fn evaluate_interaction_proposals(
    world: &World,
    proposals: &[InteractionProposal],
    rng: &mut impl Rng,
) -> Vec<ResolvedInteraction> {
    let mut resolved = Vec::with_capacity(proposals.len());

    for proposal in proposals {
        let Some(initiator) = world.agent(proposal.initiator_label.as_str()) else {
            debug!(initiator = %proposal.initiator_label, "Dropping proposal from unknown agent");
            continue;
        };

        let mut accepted_targets = Vec::new();
        let mut rejected_targets = Vec::new();

        for target_label in &proposal.target_labels {
            let target = world
                .agent(target_label.as_str())
                .filter(|target| target.label != initiator.label);
            match target {
                Some(target) if should_accept(target, initiator, proposal.action_type, rng) => {
                    accepted_targets.push(target_label.clone());
                }
                Some(_) => rejected_targets.push(target_label.clone()),
                None => {
                    debug!(
                        initiator = %initiator.label,
                        target = %target_label,
                        "Rejecting proposal to unknown target"
                    );
                    rejected_targets.push(target_label.clone());
                }
            }
        }

        resolved.push(ResolvedInteraction {
            initiator_label: proposal.initiator_label.clone(),
            target_labels: proposal.target_labels.clone(),
            action_type: proposal.action_type,
            accepted_targets,
            rejected_targets,
        });
    }

    resolved
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Chemistry between two agents for an action, in `[0, 100]`.
///
/// Weighted 40/40/20 from the initiator's memory of the target, trait
/// match, and mean stability. Only `initiator`'s memory is consulted.
pub fn compute_chemistry(initiator: &Agent, target: &Agent, action_type: ActionType) -> f64 {
    let base = initiator
        .memory_of(target.label.as_str())
        .map_or(50.0, |memory| {
            (memory.trust + memory.attraction + memory.familiarity) / 3.0
        });

    let matched = |a: f64, b: f64| 100.0 - (a * 10.0 - b * 10.0).abs();
    let a = &initiator.traits;
    let b = &target.traits;
    let trait_chemistry = if action_type.is_romantic() {
        (matched(a.warmth, b.warmth) + matched(a.love_orientation, b.love_orientation)) / 2.0
    } else {
        matched(a.sociability, b.sociability)
    };

    let stability_bonus = (a.stability + b.stability) / 2.0;

    clamp_score(base * 0.4 + trait_chemistry * 0.4 + stability_bonus * 0.2)
}

/// Chemistry after both agents' destiny nudges, initiator first.
pub fn destined_chemistry(
    initiator: &Agent,
    target: &Agent,
    action_type: ActionType,
    destiny: Destiny,
) -> f64 {
    let chemistry = compute_chemistry(initiator, target, action_type);
    let chemistry = destiny.apply(initiator, chemistry);
    destiny.apply(target, chemistry)
}

/// State changes for one accepted pair, as `(initiator, target)` deltas.
pub fn interaction_deltas(
    action_type: ActionType,
    chemistry: f64,
    quality: OutcomeQuality,
    initiator_luck: f64,
    target_luck: f64,
) -> (StateDelta, StateDelta) {
    if action_type.is_romantic() {
        let love = chemistry / 10.0 + initiator_luck;
        let social = chemistry / 15.0 + initiator_luck * 0.5;
        let trauma = if quality == OutcomeQuality::Negative {
            (100.0 - chemistry) / 20.0
        } else {
            0.0
        };
        (
            StateDelta {
                love,
                social,
                trauma,
                ..StateDelta::default()
            },
            StateDelta {
                love: love + target_luck,
                social: social + target_luck * 0.5,
                trauma,
                ..StateDelta::default()
            },
        )
    } else {
        let social = chemistry / 12.0 + initiator_luck * 0.5;
        let love = if chemistry > 60.0 {
            (chemistry - 60.0) / 20.0
        } else {
            0.0
        };
        (
            StateDelta {
                social,
                love,
                ..StateDelta::default()
            },
            StateDelta {
                social: social + target_luck * 0.5,
                love,
                ..StateDelta::default()
            },
        )
    }
}

/// Memory change written on both sides of an accepted pair.
pub fn interaction_memory_delta(
    action_type: ActionType,
    chemistry: f64,
    quality: OutcomeQuality,
    month: u32,
) -> MemoryDelta {
    let romantic = action_type.is_romantic();
    MemoryDelta {
        trust: (chemistry - 50.0) / if romantic { 10.0 } else { 12.0 },
        attraction: if romantic { (chemistry - 50.0) / 8.0 } else { 0.0 },
        familiarity: if romantic { 10.0 } else { 8.0 },
        interaction_type: Some(action_type),
        result: Some(quality),
        month: Some(month),
    }
}

fn draw_luck(agent: &Agent, rng: &mut impl Rng) -> f64 {
    if agent.luck_enabled {
        rng.random_range(-LUCK_RANGE..=LUCK_RANGE)
    } else {
        0.0
    }
}

/// Apply every accepted pair, returning how many pairs were applied.
///
/// Emits one event per pair to the world's feed and appends one line per
/// participant to `logs`. Pairs naming a missing agent are skipped.
pub fn apply_interaction_outcomes(
    world: &mut World,
    resolved: &[ResolvedInteraction],
    logs: &mut InteractionLog,
    rng: &mut impl Rng,
) -> usize {
    let month = world.current_month;
    let destiny = world.destiny;
    let mut applied: usize = 0;

    for interaction in resolved {
        let Some(i) = world.agent_index(interaction.initiator_label.as_str()) else {
            continue;
        };
        for target_label in &interaction.accepted_targets {
            let Some(j) = world.agent_index(target_label.as_str()) else {
                continue;
            };
            let Ok([initiator, target]) = world.agents.get_disjoint_mut([i, j]) else {
                debug!(agent = %interaction.initiator_label, "Skipping self-interaction");
                continue;
            };

            let action_type = interaction.action_type;
            let chemistry = destined_chemistry(initiator, target, action_type, destiny);
            let initiator_luck = draw_luck(initiator, rng);
            let target_luck = draw_luck(target, rng);
            let quality = OutcomeQuality::classify(chemistry);

            let (initiator_delta, target_delta) =
                interaction_deltas(action_type, chemistry, quality, initiator_luck, target_luck);
            initiator.apply_delta(&initiator_delta);
            target.apply_delta(&target_delta);

            let memory = interaction_memory_delta(action_type, chemistry, quality, month);
            initiator.update_memory_for(&target.label, &memory);
            target.update_memory_for(&initiator.label, &memory);

            let name = action_type.display_name();
            world.events_feed.add_event(
                month,
                format!("{} and {} shared {name} ({quality}).", initiator.name, target.name),
            );
            let tag = action_type.log_name();
            logs.entry(initiator.label.clone())
                .or_default()
                .push(format!("With {}: {tag} ({quality})", target.name));
            logs.entry(target.label.clone())
                .or_default()
                .push(format!("With {}: {tag} ({quality})", initiator.name));

            debug!(
                month,
                initiator = %initiator.label,
                target = %target.label,
                action = action_type.as_str(),
                chemistry,
                %quality,
                "Interaction applied"
            );
            applied = applied.saturating_add(1);
        }
    }

    applied
}
