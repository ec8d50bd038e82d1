//! Per-month agent snapshots.

use kismet_types::AgentLabel;
use serde::{Deserialize, Serialize};

/// An agent's life state at the end of a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    /// Month the snapshot was taken in (0 before the first month).
    pub month: u32,
    /// Agent label.
    pub label: AgentLabel,
    /// Agent display name.
    pub name: String,
    /// Physical state.
    pub physical: f64,
    /// Love state.
    pub love: f64,
    /// Career state.
    pub career: f64,
    /// Social state.
    pub social: f64,
    /// Intelligence state.
    pub intelligence: f64,
    /// Energy state.
    pub energy: f64,
    /// Trauma level.
    pub trauma_level: f64,
}

/// Append-only list of snapshots, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldHistory {
    /// Every recorded snapshot.
    pub snapshots: Vec<AgentSnapshot>,
}

impl WorldHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one snapshot.
    pub fn push(&mut self, snapshot: AgentSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Distinct recorded months, ascending.
    pub fn months(&self) -> Vec<u32> {
        let mut months: Vec<u32> = self.snapshots.iter().map(|s| s.month).collect();
        months.sort_unstable();
        months.dedup();
        months
    }

    /// Snapshots recorded for `month`.
    pub fn for_month(&self, month: u32) -> impl Iterator<Item = &AgentSnapshot> {
        self.snapshots.iter().filter(move |s| s.month == month)
    }

    /// Snapshots of one agent, in recording order.
    pub fn for_agent<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a AgentSnapshot> {
        self.snapshots.iter().filter(move |s| s.label.as_str() == label)
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snapshot(month: u32, label: &str) -> AgentSnapshot {
        AgentSnapshot {
            month,
            label: AgentLabel::from(label),
            name: label.to_uppercase(),
            physical: 50.0,
            love: 50.0,
            career: 50.0,
            social: 50.0,
            intelligence: 50.0,
            energy: 50.0,
            trauma_level: 0.0,
        }
    }

    #[test]
    fn months_are_distinct_and_sorted() {
        let mut history = WorldHistory::new();
        for month in [0, 0, 1, 1, 2] {
            history.push(snapshot(month, "vayu"));
        }
        assert_eq!(history.months(), vec![0, 1, 2]);
        assert_eq!(history.for_month(1).count(), 2);
    }

    #[test]
    fn filters_by_agent() {
        let mut history = WorldHistory::new();
        history.push(snapshot(0, "vayu"));
        history.push(snapshot(0, "agni"));
        history.push(snapshot(1, "vayu"));
        let months: Vec<u32> = history.for_agent("vayu").map(|s| s.month).collect();
        assert_eq!(months, vec![0, 1]);
    }

    #[test]
    fn snapshot_json_uses_plain_label() {
        let json = serde_json::to_value(snapshot(4, "neer")).unwrap();
        assert_eq!(json["label"], "neer");
        assert_eq!(json["month"], 4);
    }
}
