//! Planned actions and solo-action effects.
//!
//! A [`PlannedAction`] lives for a single month. Social actions receive
//! their targets during targeting and are resolved as interactions; every
//! other action is a solo action that changes only its actor's state
//! through the fixed effects table below.

use kismet_types::{ActionType, AgentLabel};
use serde::Serialize;

use crate::agent::{Agent, StateDelta};

/// One action an agent intends to take this month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    /// Label of the acting agent.
    pub actor_label: AgentLabel,
    /// Action tag.
    pub action_type: ActionType,
    /// Whether this is the month's big action.
    pub is_big: bool,
    /// Targets for social actions, populated during targeting.
    pub target_labels: Option<Vec<AgentLabel>>,
}

impl PlannedAction {
    /// Create an untargeted action.
    pub const fn new(actor_label: AgentLabel, action_type: ActionType, is_big: bool) -> Self {
        Self {
            actor_label,
            action_type,
            is_big,
            target_labels: None,
        }
    }

    /// Whether any target has been assigned.
    pub fn has_targets(&self) -> bool {
        self.target_labels
            .as_ref()
            .is_some_and(|targets| !targets.is_empty())
    }
}

/// State change produced by a solo action, or `None` for social tags.
///
/// Effort costs energy; rest restores it. Big and small variants of the same
/// domain never share a tag, so the size flag is implied by the tag.
pub const fn solo_effect(action_type: ActionType) -> Option<StateDelta> {
    let zero = StateDelta {
        physical: 0.0,
        love: 0.0,
        career: 0.0,
        social: 0.0,
        intelligence: 0.0,
        energy: 0.0,
        trauma: 0.0,
    };
    let delta = match action_type {
        // --- Big ---
        ActionType::DeepWork => StateDelta {
            career: 15.0,
            energy: -12.0,
            ..zero
        },
        ActionType::DeepStudy => StateDelta {
            intelligence: 12.0,
            career: 5.0,
            energy: -10.0,
            ..zero
        },
        ActionType::MajorRest => StateDelta {
            energy: 20.0,
            physical: 3.0,
            ..zero
        },
        ActionType::HealthPush => StateDelta {
            physical: 12.0,
            energy: -10.0,
            ..zero
        },

        // --- Small ---
        ActionType::LightExercise => StateDelta {
            physical: 5.0,
            energy: -4.0,
            ..zero
        },
        ActionType::CasualLearning => StateDelta {
            intelligence: 5.0,
            energy: -3.0,
            ..zero
        },
        ActionType::Hobby => StateDelta {
            social: 4.0,
            career: 2.0,
            energy: -2.0,
            ..zero
        },
        ActionType::MinorRest => StateDelta {
            energy: 8.0,
            physical: 1.0,
            ..zero
        },

        ActionType::DeepRelationship
        | ActionType::BigSocialEvent
        | ActionType::LightSocial
        | ActionType::CasualDate => return None,
    };
    Some(delta)
}

/// Apply the effects of an agent's solo actions for the month.
///
/// Actions with assigned targets and social action tags are skipped; they
/// are handled by the interaction phase.
pub fn apply_solo_action_effects(agent: &mut Agent, actions: &[PlannedAction]) {
    for action in actions {
        if action.has_targets() || !action.action_type.is_solo() {
            continue;
        }
        if let Some(delta) = solo_effect(action.action_type) {
            agent.apply_delta(&delta);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::archetypes::archetype_by_label;

    fn agent() -> Agent {
        Agent::from_archetype(&archetype_by_label("pashan").unwrap())
    }

    #[test]
    fn big_and_small_solo_effects() {
        let mut agent = agent();
        let label = agent.label.clone();
        let actions = vec![
            PlannedAction::new(label.clone(), ActionType::DeepWork, true),
            PlannedAction::new(label.clone(), ActionType::Hobby, false),
            PlannedAction::new(label, ActionType::MinorRest, false),
        ];
        apply_solo_action_effects(&mut agent, &actions);
        // career 50 + 15 + 2, energy 50 - 12 - 2 + 8, social 50 + 4, physical 50 + 1
        assert!((agent.state.career - 67.0).abs() < 1e-9);
        assert!((agent.state.energy - 44.0).abs() < 1e-9);
        assert!((agent.state.social - 54.0).abs() < 1e-9);
        assert!((agent.state.physical - 51.0).abs() < 1e-9);
    }

    #[test]
    fn social_and_targeted_actions_are_skipped() {
        let mut agent = agent();
        let before = agent.state;
        let label = agent.label.clone();
        let mut targeted = PlannedAction::new(label.clone(), ActionType::MajorRest, true);
        targeted.target_labels = Some(vec![AgentLabel::from("neer")]);
        let actions = vec![
            targeted,
            PlannedAction::new(label, ActionType::LightSocial, false),
        ];
        apply_solo_action_effects(&mut agent, &actions);
        assert_eq!(agent.state, before);
    }

    #[test]
    fn energy_cost_clamps_at_zero() {
        let mut agent = agent();
        agent.state.energy = 5.0;
        let label = agent.label.clone();
        apply_solo_action_effects(
            &mut agent,
            &[PlannedAction::new(label, ActionType::DeepWork, true)],
        );
        assert!(agent.state.energy.abs() < 1e-9);
    }

    #[test]
    fn every_social_tag_has_no_solo_effect() {
        for tag in [
            ActionType::DeepRelationship,
            ActionType::BigSocialEvent,
            ActionType::LightSocial,
            ActionType::CasualDate,
        ] {
            assert!(solo_effect(tag).is_none());
        }
    }
}
