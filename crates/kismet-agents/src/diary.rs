//! Monthly diary entries.
//!
//! A diary entry narrates what changed since the previous entry, the first
//! interaction of the month, trauma, the latest world event, and how loud
//! destiny feels. Generating an entry refreshes the agent's state snapshot.

use kismet_types::LifeState;

use crate::agent::Agent;
use crate::destiny::Destiny;

/// Smallest state change worth narrating.
const NOTABLE_DELTA: f64 = 3.0;

/// Describe notable changes between two states, e.g. `"Love rose by 6."`.
fn summarize_state_changes(previous: &LifeState, current: &LifeState) -> Option<String> {
    let tracked = [
        ("Love", previous.love, current.love),
        ("Career", previous.career, current.career),
        ("Social", previous.social, current.social),
        ("Intelligence", previous.intelligence, current.intelligence),
        ("Physical", previous.physical, current.physical),
        ("Energy", previous.energy, current.energy),
    ];

    let phrases: Vec<String> = tracked
        .into_iter()
        .filter_map(|(field, before, after)| {
            let delta = after - before;
            if delta.abs() < NOTABLE_DELTA {
                return None;
            }
            let direction = if delta > 0.0 { "rose" } else { "fell" };
            Some(format!("{field} {direction} by {:.0}", delta.abs()))
        })
        .collect();

    if phrases.is_empty() {
        None
    } else {
        Some(format!("{}.", phrases.join(", ")))
    }
}

/// Build the diary entry for `month` and refresh `last_state_snapshot`.
///
/// The header keeps its trailing space, so any following text sits two
/// spaces after `Month N:`; an entry with nothing to say is just the header.
///
/// `interactions` are this agent's interaction lines for the month;
/// `events` are the world's events for the month, in emission order.
pub fn generate_monthly_diary(
    agent: &mut Agent,
    month: u32,
    interactions: &[String],
    events: &[String],
    destiny: Destiny,
) -> String {
    let mut parts: Vec<String> = vec![format!("Month {month}: ")];

    if let Some(changes) = summarize_state_changes(&agent.last_state_snapshot, &agent.state) {
        parts.push(changes);
    }

    if let Some(first) = interactions.first() {
        parts.push(format!("Key moments: {first}"));
        if interactions.len() > 1 {
            parts.push("More ripples followed.".to_owned());
        }
    }

    if agent.trauma_level > 60.0 {
        parts.push("Trauma feels heavy; breath work is urgent.".to_owned());
    } else if agent.trauma_level > 30.0 {
        parts.push("Old wounds ache but remain manageable.".to_owned());
    }

    if let Some(latest) = events.last() {
        parts.push(format!("Destiny feed whispers: {latest}"));
    }

    let bias = destiny.bias(agent);
    if bias > 0.8 {
        parts.push("Destiny hums loudly; choices feel guided.".to_owned());
    } else if bias < 0.2 {
        parts.push("Destiny is quiet; free will feels wide open.".to_owned());
    }

    agent.last_state_snapshot = agent.state;
    parts.join(" ").trim().to_owned()
}
