//! Target scoring and selection for social actions.
//!
//! Only the four social tags take targets. Candidates are every other
//! agent in the population; scoring is deterministic and reads only the
//! actor's memory and both agents' traits.

use kismet_types::{ActionType, AgentLabel, OutcomeQuality};

use crate::actions::PlannedAction;
use crate::agent::Agent;

/// Maximum number of guests at a big social event.
const BIG_SOCIAL_TARGETS: usize = 3;

/// Penalty applied when the last interaction with the target went badly.
const NEGATIVE_PENALTY: f64 = 30.0;

/// Penalty applied when the last interaction with the target was flat.
const NEUTRAL_PENALTY: f64 = 10.0;

/// Familiarity below which impulsive actors get a novelty bonus.
const NOVELTY_FAMILIARITY: f64 = 20.0;

/// Score how well `target` fits `actor`'s action. Higher is better.
pub fn score_target(actor: &Agent, target: &Agent, action_type: ActionType) -> f64 {
    let memory = actor.memory_or_default(target.label.as_str());
    let mut score = memory.trust + memory.attraction + memory.familiarity;

    if action_type.is_romantic() {
        score += actor.traits.warmth * 2.0;
        score += actor.traits.love_orientation * 2.0;
        score += target.traits.warmth;
    } else {
        score += actor.traits.sociability * 2.0;
        score += target.traits.sociability;
    }

    score += actor.traits.curiosity + actor.traits.stability;

    match memory.last_result {
        Some(OutcomeQuality::Negative) => score -= NEGATIVE_PENALTY,
        Some(OutcomeQuality::Neutral) => score -= NEUTRAL_PENALTY,
        Some(OutcomeQuality::Positive) | None => {}
    }

    if memory.familiarity < NOVELTY_FAMILIARITY {
        score += actor.traits.impulse;
    }

    score
}

/// Fill in `target_labels` for each social action in `actions`.
///
/// Candidates are ranked by [`score_target`] with a stable sort, so ties
/// keep population order. A big social event takes up to three guests;
/// other social actions take the single best candidate. An actor with no
/// peers leaves its actions untargeted.
pub fn assign_action_targets(actor: &Agent, population: &[Agent], actions: &mut [PlannedAction]) {
    let candidates: Vec<&Agent> = population
        .iter()
        .filter(|other| other.label != actor.label)
        .collect();
    if candidates.is_empty() {
        return;
    }

    for action in actions.iter_mut().filter(|a| a.action_type.is_social()) {
        let mut scored: Vec<(&AgentLabel, f64)> = candidates
            .iter()
            .map(|target| (&target.label, score_target(actor, target, action.action_type)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let take = if action.action_type == ActionType::BigSocialEvent {
            BIG_SOCIAL_TARGETS
        } else {
            1
        };
        action.target_labels = Some(
            scored
                .into_iter()
                .take(take)
                .map(|(label, _)| label.clone())
                .collect(),
        );
    }
}
