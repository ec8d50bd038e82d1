//! The month-indexed narrative feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Narrative lines grouped by month, in emission order within a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsFeed {
    entries: BTreeMap<u32, Vec<String>>,
}

impl EventsFeed {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to `month`.
    pub fn add_event(&mut self, month: u32, description: impl Into<String>) {
        self.entries.entry(month).or_default().push(description.into());
    }

    /// Lines recorded for `month`; empty when nothing happened.
    pub fn month_entries(&self, month: u32) -> &[String] {
        self.entries.get(&month).map_or(&[], Vec::as_slice)
    }

    /// Every month that has at least one line, in ascending order.
    pub fn chronological(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.entries
            .iter()
            .map(|(month, lines)| (*month, lines.as_slice()))
    }

    /// Total number of lines across all months.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the feed holds no lines.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unknown_month_is_empty() {
        let feed = EventsFeed::new();
        assert!(feed.month_entries(7).is_empty());
        assert!(feed.is_empty());
    }

    #[test]
    fn lines_keep_emission_order() {
        let mut feed = EventsFeed::new();
        feed.add_event(2, "b");
        feed.add_event(1, "a");
        feed.add_event(2, "c");

        assert_eq!(feed.month_entries(2), ["b".to_owned(), "c".to_owned()]);
        assert_eq!(feed.len(), 3);

        let months: Vec<u32> = feed.chronological().map(|(month, _)| month).collect();
        assert_eq!(months, vec![1, 2]);
    }

    #[test]
    fn serializes_as_month_map() {
        let mut feed = EventsFeed::new();
        feed.add_event(3, "Destiny flares around Agni, hinting at a pivot.");
        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(
            json["entries"]["3"][0],
            "Destiny flares around Agni, hinting at a pivot."
        );
    }
}
