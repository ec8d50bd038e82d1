//! Integration tests for the `kismet-core` monthly cycle and full runs.
//!
//! Every stochastic path is driven by a seeded `SmallRng`, so these run as
//! part of a normal `cargo test`.

// Panicking on failure is the correct behavior in test code.
#![allow(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing
)]

use kismet_agents::{Agent, Destiny, MemoryDelta, assign_action_targets, plan_agent_actions};
use kismet_core::interaction::{InteractionProposal, evaluate_interaction_proposals};
use kismet_core::runner::run_full_simulation;
use kismet_core::tick::run_month;
use kismet_core::world::{AgentOverride, World};
use kismet_types::{ActionType, AgentLabel, Domain, OutcomeQuality};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn in_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

fn assert_clamped(agent: &Agent) {
    let s = agent.state;
    for value in [s.physical, s.love, s.career, s.social, s.intelligence, s.energy] {
        assert!(in_range(value), "{} state out of range: {value}", agent.label);
    }
    assert!(in_range(agent.trauma_level));
    for domain in Domain::ALL {
        assert!(in_range(agent.desires.get(domain)));
    }
    for memory in agent.memory.values() {
        assert!(in_range(memory.trust));
        assert!(in_range(memory.attraction));
        assert!(in_range(memory.familiarity));
    }
}

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

#[test]
fn scalars_stay_clamped_under_extreme_overrides() {
    let mut world = World::initialize_default_world();
    world.total_months = 36;
    world.destiny = Destiny::new(100.0);
    for (i, agent) in world.agents.clone().iter().enumerate() {
        let domain = Domain::ALL.get(i % 6).unwrap();
        world.set_override(
            agent.label.clone(),
            AgentOverride {
                trauma_increase: 45.0,
                desire_boost_domain: Some(domain.as_str().to_owned()),
                desire_boost_value: if i % 2 == 0 { 500.0 } else { -500.0 },
                bless: true,
                lock_choice: i % 3 == 0,
                lock_domain: Some("social".to_owned()),
            },
        );
    }

    let mut rng = SmallRng::seed_from_u64(99);
    while run_month(&mut world, &mut rng).is_some() {
        for agent in &world.agents {
            assert_clamped(agent);
        }
    }
    assert_eq!(world.current_month, 36);
}

// ---------------------------------------------------------------------------
// Planning and targeting
// ---------------------------------------------------------------------------

#[test]
fn every_agent_plans_one_big_two_small_with_valid_targets() {
    let mut world = World::initialize_default_world();
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..6 {
        run_month(&mut world, &mut rng).unwrap();
        for agent in &world.agents {
            let mut actions = plan_agent_actions(agent, world.destiny);
            assert_eq!(actions.len(), 3);
            assert_eq!(actions.iter().filter(|a| a.is_big).count(), 1);

            assign_action_targets(agent, &world.agents, &mut actions);
            for action in &actions {
                let targets = action.target_labels.clone().unwrap_or_default();
                assert!(!targets.contains(&agent.label));
                match action.action_type {
                    ActionType::BigSocialEvent => assert_eq!(targets.len(), 3),
                    t if t.is_social() => assert_eq!(targets.len(), 1),
                    _ => assert!(targets.is_empty()),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_month() {
    let mut a = World::initialize_default_world();
    let mut b = World::initialize_default_world();
    let mut rng_a = SmallRng::seed_from_u64(2024);
    let mut rng_b = SmallRng::seed_from_u64(2024);

    for _ in 0..4 {
        let sa = run_month(&mut a, &mut rng_a);
        let sb = run_month(&mut b, &mut rng_b);
        assert_eq!(sa, sb);
    }
    assert_eq!(a.agents, b.agents);
    assert_eq!(a.events_feed, b.events_feed);
}

#[test]
fn same_seed_same_history() {
    let mut a = World::initialize_default_world();
    let mut b = World::initialize_default_world();
    let ha = run_full_simulation(&mut a, None, &mut SmallRng::seed_from_u64(7));
    let hb = run_full_simulation(&mut b, None, &mut SmallRng::seed_from_u64(7));
    assert_eq!(ha, hb);
}

// ---------------------------------------------------------------------------
// Full horizon
// ---------------------------------------------------------------------------

#[test]
fn full_run_records_every_month_for_every_agent() {
    let mut world = World::initialize_default_world();
    let mut rng = SmallRng::seed_from_u64(42);
    let history = run_full_simulation(&mut world, None, &mut rng);

    let months = history.months();
    assert_eq!(months, (0..=12).collect::<Vec<u32>>());
    for month in months {
        assert_eq!(history.for_month(month).count(), 10);
    }
    assert_eq!(history.len(), 130);
    assert_eq!(world.current_month, 12);
    for agent in &world.agents {
        assert_eq!(agent.diary_log.len(), 12);
    }
}

// ---------------------------------------------------------------------------
// Rejection path
// ---------------------------------------------------------------------------

#[test]
fn proposal_to_missing_agent_is_rejected_without_mutation() {
    let world = World::initialize_default_world();
    let before = world.agents.clone();
    let proposal = InteractionProposal {
        initiator_label: AgentLabel::from("agni"),
        target_labels: vec![AgentLabel::from("nobody")],
        action_type: ActionType::CasualDate,
    };
    let mut rng = SmallRng::seed_from_u64(0);
    let resolved = evaluate_interaction_proposals(&world, &[proposal], &mut rng);

    let only = resolved.first().unwrap();
    assert_eq!(only.rejected_targets, vec![AgentLabel::from("nobody")]);
    assert!(only.accepted_targets.is_empty());
    assert_eq!(world.agents, before);
}

// ---------------------------------------------------------------------------
// Memory bounds and classification
// ---------------------------------------------------------------------------

#[test]
fn memory_stays_bounded_under_arbitrary_deltas() {
    let mut world = World::initialize_default_world();
    let peer = AgentLabel::from("agni");
    let agent = world.agents.first_mut().unwrap();
    for (i, magnitude) in [250.0, -1000.0, 35.5, -0.1, 1e9, -1e9].into_iter().enumerate() {
        agent.update_memory_for(
            &peer,
            &MemoryDelta {
                trust: magnitude,
                attraction: -magnitude,
                familiarity: magnitude * 0.5,
                month: Some(u32::try_from(i).unwrap()),
                ..MemoryDelta::default()
            },
        );
        let memory = agent.memory_of("agni").unwrap();
        assert!(in_range(memory.trust));
        assert!(in_range(memory.attraction));
        assert!(in_range(memory.familiarity));
    }
}

#[test]
fn classification_boundaries_are_strict() {
    assert_eq!(OutcomeQuality::classify(70.0), OutcomeQuality::Neutral);
    assert_eq!(OutcomeQuality::classify(70.0001), OutcomeQuality::Positive);
    assert_eq!(OutcomeQuality::classify(30.0), OutcomeQuality::Neutral);
    assert_eq!(OutcomeQuality::classify(29.9999), OutcomeQuality::Negative);
}
