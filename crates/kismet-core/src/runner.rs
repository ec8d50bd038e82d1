//! Full-run driver and history recording.
//!
//! [`run_full_simulation`] records a snapshot of every agent before the
//! first month and after each month, running [`run_month`] until the
//! horizon. [`run_full_simulation_with`] does the same and hands every
//! [`MonthSummary`] to a [`MonthCallback`].
//!
//! [`run_month`]: crate::tick::run_month

use kismet_events::{AgentSnapshot, EventsFeed, WorldHistory};
use rand::Rng;
use tracing::{info, warn};

use crate::tick::{self, MonthSummary};
use crate::world::World;

/// Callback invoked after each month completes.
pub trait MonthCallback {
    /// Called after a month completes and its snapshot is recorded.
    fn on_month(&mut self, summary: &MonthSummary, world: &World);
}

/// A no-op month callback.
pub struct NoOpCallback;

impl MonthCallback for NoOpCallback {
    fn on_month(&mut self, _summary: &MonthSummary, _world: &World) {}
}

/// Append one snapshot per agent for the world's current month.
pub fn record_world_state(world: &World, history: &mut WorldHistory) {
    for agent in &world.agents {
        history.push(AgentSnapshot {
            month: world.current_month,
            label: agent.label.clone(),
            name: agent.name.clone(),
            physical: agent.state.physical,
            love: agent.state.love,
            career: agent.state.career,
            social: agent.state.social,
            intelligence: agent.state.intelligence,
            energy: agent.state.energy,
            trauma_level: agent.trauma_level,
        });
    }
}

/// Run the world to its horizon, recording state before and after every month.
///
/// The events feed is reset before the first snapshot. Snapshots are
/// appended to `history` when one is given.
pub fn run_full_simulation(
    world: &mut World,
    history: Option<WorldHistory>,
    rng: &mut impl Rng,
) -> WorldHistory {
    run_full_simulation_with(world, history, rng, &mut NoOpCallback)
}

/// [`run_full_simulation`] with a per-month callback.
pub fn run_full_simulation_with(
    world: &mut World,
    history: Option<WorldHistory>,
    rng: &mut impl Rng,
    callback: &mut dyn MonthCallback,
) -> WorldHistory {
    let mut history = history.unwrap_or_default();
    world.events_feed = EventsFeed::new();

    info!(
        name = %world.name,
        agents = world.agents.len(),
        start_month = world.current_month,
        total_months = world.total_months,
        destiny_strength = world.destiny.strength(),
        "Simulation starting"
    );

    record_world_state(world, &mut history);

    while !world.is_finished() {
        let summary = tick::run_month(world, rng);
        record_world_state(world, &mut history);
        if let Some(ref summary) = summary {
            callback.on_month(summary, world);
        }
    }

    history
}

/// Log the end-of-run summary.
pub fn log_simulation_end(world: &World, history: &WorldHistory) {
    info!(
        name = %world.name,
        months = world.current_month,
        snapshots = history.len(),
        events = world.events_feed.len(),
        "Simulation ended"
    );

    if world.current_month == 0 {
        warn!("Simulation ended with no months executed");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn records_initial_state_as_month_zero() {
        let world = World::initialize_default_world();
        let mut history = WorldHistory::new();
        record_world_state(&world, &mut history);
        assert_eq!(history.len(), 10);
        assert!(history.snapshots.iter().all(|s| s.month == 0));
        let first = history.snapshots.first().unwrap();
        assert_eq!(first.label.as_str(), "vayu");
        assert!((first.love - 50.0).abs() < 1e-9);
    }

    #[test]
    fn appends_to_existing_history() {
        let mut world = World::initialize_default_world();
        world.total_months = 2;
        let mut seed = WorldHistory::new();
        record_world_state(&world, &mut seed);

        let mut rng = SmallRng::seed_from_u64(4);
        let history = run_full_simulation(&mut world, Some(seed), &mut rng);
        assert_eq!(history.len(), 40);
        assert_eq!(history.months(), vec![0, 1, 2]);
    }

    #[test]
    fn callback_sees_every_month() {
        struct Months(Vec<u32>);
        impl MonthCallback for Months {
            fn on_month(&mut self, summary: &MonthSummary, world: &World) {
                assert_eq!(summary.month, world.current_month);
                self.0.push(summary.month);
            }
        }

        let mut world = World::initialize_default_world();
        world.total_months = 4;
        let mut months = Months(Vec::new());
        let mut rng = SmallRng::seed_from_u64(8);
        run_full_simulation_with(&mut world, None, &mut rng, &mut months);
        assert_eq!(months.0, vec![1, 2, 3, 4]);
    }

    #[test]
    fn history_serializes_as_snapshot_rows() {
        let mut world = World::initialize_default_world();
        world.total_months = 1;
        let mut rng = SmallRng::seed_from_u64(6);
        let history = run_full_simulation(&mut world, None, &mut rng);
        let json = serde_json::to_value(&history).unwrap();
        let rows = json["snapshots"].as_array().unwrap();
        assert_eq!(rows.len(), 20);
        let first_month = rows.get(10).unwrap();
        assert_eq!(first_month["month"], 1);
        assert!(first_month["trauma_level"].is_number());
    }

    #[test]
    fn finished_world_records_once() {
        let mut world = World::initialize_default_world();
        world.current_month = world.total_months;
        let mut rng = SmallRng::seed_from_u64(0);
        let history = run_full_simulation(&mut world, None, &mut rng);
        assert_eq!(history.months(), vec![12]);
    }
}
