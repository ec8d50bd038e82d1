//! Month callback that surfaces each month's diary entries in the log.

use kismet_core::runner::MonthCallback;
use kismet_core::tick::MonthSummary;
use kismet_core::world::World;
use tracing::debug;

/// Logs every agent's diary entry at `debug` after each month.
pub struct DiaryCallback;

impl MonthCallback for DiaryCallback {
    fn on_month(&mut self, summary: &MonthSummary, world: &World) {
        for agent in &world.agents {
            if let Some(entry) = agent.diary_log.get(&summary.month) {
                debug!(month = summary.month, agent = %agent.label, entry = %entry, "Diary");
            }
        }
    }
}
