//! The monthly cycle.
//!
//! Each month runs these phases over the whole population, each finishing
//! before the next begins:
//!
//! 1. **Calendar** -- advance the month and pick its theme.
//! 2. **Desires** -- apply overrides and recompute every agent's desires.
//! 3. **Planning** -- plan one big and two small actions per agent, then
//!    assign targets to the social ones.
//! 4. **Interactions** -- collect proposals, resolve acceptance, apply
//!    outcomes for accepted pairs.
//! 5. **Solo** -- apply solo-action effects, then roll for destiny flares.
//! 6. **Diary** -- write every agent's diary entry for the month.
//!
//! Given the same world and the same RNG stream, a month is deterministic.

use kismet_agents::{
    Agent, PlannedAction, apply_solo_action_effects, assign_action_targets,
    generate_monthly_diary, plan_agent_actions, update_agent_desires,
};
use kismet_types::{Theme, clamp_score};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::interaction::{
    InteractionLog, apply_interaction_outcomes, collect_interaction_proposals,
    evaluate_interaction_proposals,
};
use crate::world::{AgentOverride, World};

/// Summary of one completed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    /// The month that ran.
    pub month: u32,
    /// Its theme.
    pub theme: Theme,
    /// Number of interaction proposals made.
    pub proposals: usize,
    /// Number of accepted pairs whose outcome was applied.
    pub accepted_pairs: usize,
    /// Number of rejected (proposal, target) pairs.
    pub rejections: usize,
    /// Number of destiny flares.
    pub flares: usize,
    /// Number of events emitted this month.
    pub events: usize,
}

/// Run one month of the simulation.
///
/// Returns `None` (and changes nothing) once the horizon is reached, or
/// `None` after advancing the calendar if the theme rotation is empty.
pub fn run_month(world: &mut World, rng: &mut impl Rng) -> Option<MonthSummary> {
    // --- Phase 1: Calendar ---
    let Some(theme) = world.advance_month() else {
        debug!(month = world.current_month, "No month to run");
        return None;
    };
    let month = world.current_month;
    debug!(month, %theme, "Month started");

    // --- Phase 2: Desires ---
    phase_desires(world, &theme);

    // --- Phase 3: Planning ---
    let plans = phase_planning(world);

    // --- Phase 4: Interactions ---
    let all_actions: Vec<PlannedAction> = plans.iter().flatten().cloned().collect();
    let proposals = collect_interaction_proposals(&all_actions);
    let resolved = evaluate_interaction_proposals(world, &proposals, rng);
    let rejections = resolved.iter().map(|r| r.rejected_targets.len()).sum();
    let mut logs = InteractionLog::new();
    let accepted_pairs = apply_interaction_outcomes(world, &resolved, &mut logs, rng);

    // --- Phase 5: Solo ---
    let flares = phase_solo(world, &plans, rng);

    // --- Phase 6: Diary ---
    phase_diary(world, &logs);

    let summary = MonthSummary {
        month,
        theme,
        proposals: proposals.len(),
        accepted_pairs,
        rejections,
        flares,
        events: world.events_feed.month_entries(month).len(),
    };
    info!(
        month,
        theme = %summary.theme,
        proposals = summary.proposals,
        accepted_pairs = summary.accepted_pairs,
        rejections = summary.rejections,
        flares = summary.flares,
        "Month completed"
    );
    Some(summary)
}

/// Apply overrides, then recompute desires and apply any boost.
///
/// Blessing and lock are reset every month, so clearing an override takes
/// effect on the next month.
fn phase_desires(world: &mut World, theme: &Theme) {
    let month = world.current_month;
    for agent in &mut world.agents {
        let adjustment = world.agent_overrides.get(&agent.label);

        agent.destiny_blessing = adjustment.map_or(0.0, AgentOverride::blessing);
        agent.locked_action_domain = adjustment.and_then(AgentOverride::locked_domain);

        if let Some(amount) = adjustment.and_then(AgentOverride::trauma_change) {
            agent.trauma_level = clamp_score(agent.trauma_level + amount);
            world
                .events_feed
                .add_event(month, format!("{} carries extra trauma ({amount:+.0}).", agent.name));
        }

        update_agent_desires(agent, theme);

        let boost = adjustment.and_then(|o| o.boosted_domain().map(|d| (d, o.desire_boost_value)));
        if let Some((domain, amount)) = boost {
            let desire = agent.desires.get_mut(domain);
            *desire = clamp_score(*desire + amount);
            debug!(month, agent = %agent.label, %domain, amount, "Desire boosted");
        }
    }
}

/// Plan every agent's actions and assign targets against the full population.
fn phase_planning(world: &World) -> Vec<Vec<PlannedAction>> {
    world
        .agents
        .iter()
        .map(|agent| {
            let mut actions = plan_agent_actions(agent, world.destiny);
            assign_action_targets(agent, &world.agents, &mut actions);
            actions
        })
        .collect()
}

/// Apply solo effects and roll destiny flares; returns the flare count.
fn phase_solo(world: &mut World, plans: &[Vec<PlannedAction>], rng: &mut impl Rng) -> usize {
    let month = world.current_month;
    let destiny = world.destiny;
    let mut flares: usize = 0;
    for (agent, actions) in world.agents.iter_mut().zip(plans) {
        apply_solo_action_effects(agent, actions);
        if flare(agent, destiny.bias(agent), rng) {
            world.events_feed.add_event(
                month,
                format!("Destiny flares around {}, hinting at a pivot.", agent.name),
            );
            flares = flares.saturating_add(1);
        }
    }
    flares
}

fn flare(agent: &Agent, bias: f64, rng: &mut impl Rng) -> bool {
    let hit = rng.random::<f64>() < bias / 4.0;
    if hit {
        debug!(agent = %agent.label, bias, "Destiny flare");
    }
    hit
}

/// Write every agent's diary entry for the current month.
fn phase_diary(world: &mut World, logs: &InteractionLog) {
    let month = world.current_month;
    let destiny = world.destiny;
    let events = world.events_feed.month_entries(month);
    for agent in &mut world.agents {
        let interactions = logs.get(&agent.label).map_or(&[][..], Vec::as_slice);
        let entry = generate_monthly_diary(agent, month, interactions, events, destiny);
        agent.diary_log.insert(month, entry);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kismet_types::{AgentLabel, Domain};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn month_advances_and_writes_diaries() {
        let mut world = World::initialize_default_world();
        let mut rng = SmallRng::seed_from_u64(42);
        let summary = run_month(&mut world, &mut rng).unwrap();

        assert_eq!(summary.month, 1);
        assert_eq!(summary.theme, Theme::Romance);
        assert_eq!(world.current_month, 1);
        assert!(summary.accepted_pairs + summary.rejections > 0);
        for agent in &world.agents {
            let entry = agent.diary_log.get(&1).unwrap();
            assert!(entry.starts_with("Month 1:"));
            assert_eq!(agent.last_state_snapshot, agent.state);
        }
    }

    #[test]
    fn month_after_horizon_is_noop() {
        let mut world = World::initialize_default_world();
        world.total_months = 1;
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(run_month(&mut world, &mut rng).is_some());
        let before = world.agents.clone();
        assert!(run_month(&mut world, &mut rng).is_none());
        assert_eq!(world.current_month, 1);
        assert_eq!(world.agents, before);
    }

    #[test]
    fn negative_trauma_override_eases_trauma() {
        let mut world = World::initialize_default_world();
        world.current_month = 1;
        world.agents.iter_mut().for_each(|agent| agent.trauma_level = 20.0);
        world.set_override(
            "neer",
            AgentOverride {
                trauma_increase: -5.0,
                ..AgentOverride::default()
            },
        );
        phase_desires(&mut world, &Theme::Romance);

        let neer = world.agent("neer").unwrap();
        assert!((neer.trauma_level - 15.0).abs() < 1e-9);
        assert!((world.agent("vayu").unwrap().trauma_level - 20.0).abs() < 1e-9);
        assert_eq!(
            world.events_feed.month_entries(1),
            ["Neer carries extra trauma (-5).".to_owned()]
        );
    }

    #[test]
    fn overrides_apply_at_month_start() {
        let mut world = World::initialize_default_world();
        world.set_override(
            "neer",
            AgentOverride {
                trauma_increase: 12.0,
                bless: true,
                lock_choice: true,
                lock_domain: Some("physical".to_owned()),
                desire_boost_domain: Some("rest".to_owned()),
                desire_boost_value: 200.0,
                ..AgentOverride::default()
            },
        );
        world.set_override(
            "vayu",
            AgentOverride {
                desire_boost_domain: Some("fame".to_owned()),
                desire_boost_value: 30.0,
                ..AgentOverride::default()
            },
        );
        let mut rng = SmallRng::seed_from_u64(7);
        run_month(&mut world, &mut rng).unwrap();

        let neer = world.agent("neer").unwrap();
        assert!((neer.destiny_blessing - 0.2).abs() < 1e-9);
        assert_eq!(neer.locked_action_domain, Some(Domain::Physical));
        assert!((neer.desires.rest - 100.0).abs() < 1e-9);
        assert!(neer.trauma_level >= 12.0);
        assert!(
            world
                .events_feed
                .month_entries(1)
                .contains(&"Neer carries extra trauma (+12).".to_owned())
        );

        // Clearing the override resets blessing and lock next month.
        world.agent_overrides.remove(&AgentLabel::from("neer"));
        run_month(&mut world, &mut rng).unwrap();
        let neer = world.agent("neer").unwrap();
        assert!(neer.destiny_blessing.abs() < 1e-9);
        assert!(neer.locked_action_domain.is_none());
    }

    #[test]
    fn lone_agent_only_acts_solo() {
        let mut world = World::initialize_default_world();
        world.agents.truncate(1);
        let mut rng = SmallRng::seed_from_u64(9);
        let summary = run_month(&mut world, &mut rng).unwrap();
        assert_eq!(summary.proposals, 0);
        assert_eq!(summary.accepted_pairs, 0);
        assert!(world.agents.first().unwrap().memory.is_empty());
    }

    #[test]
    fn no_flares_without_destiny() {
        let mut world = World::initialize_default_world();
        world.destiny = kismet_agents::Destiny::new(0.0);
        let mut rng = SmallRng::seed_from_u64(2);
        let summary = run_month(&mut world, &mut rng).unwrap();
        assert_eq!(summary.flares, 0);
    }
}
