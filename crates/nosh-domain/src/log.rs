//! Daily log - per-date food servings with a reversible command history

use crate::food::FoodServing;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A reversible log mutation, retained for undo.
///
/// Two cases: an add knows what it appended, a remove additionally
/// remembers where the entry sat so undo can restore the exact order.
#[derive(Debug, Clone)]
enum LogCommand {
    Add {
        date: NaiveDate,
        serving: FoodServing,
    },
    Remove {
        date: NaiveDate,
        serving: FoodServing,
        index: usize,
    },
}

/// The daily consumption log.
///
/// Maps each calendar date to the ordered sequence of servings logged
/// on it. A date with no entries is absent from the map, never present
/// with an empty sequence. Every mutation pushes an inverse record onto
/// a last-in-first-out history; the history is per-session state and is
/// never persisted.
#[derive(Debug, Default)]
pub struct DailyLog {
    entries: BTreeMap<NaiveDate, Vec<FoodServing>>,
    history: Vec<LogCommand>,
}

impl DailyLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from stored entries.
    ///
    /// Used by the persistence layer. The entries become the log's
    /// current state; the undo history starts empty.
    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, FoodServing)>) -> Self {
        let mut log = Self::new();
        for (date, serving) in entries {
            log.entries.entry(date).or_default().push(serving);
        }
        log
    }

    /// Log a serving on the given date.
    ///
    /// Appends to the date's sequence, creating it if absent, and
    /// records the addition in the history. Never fails.
    pub fn add_food_serving(&mut self, date: NaiveDate, serving: FoodServing) {
        self.entries
            .entry(date)
            .or_default()
            .push(serving.clone());
        self.history.push(LogCommand::Add { date, serving });
    }

    /// Remove a serving from the given date's log.
    ///
    /// The serving is located by value equality. Returns false, leaving
    /// the log and history untouched, when the date has no entries or
    /// no entry matches. On success the original index is recorded in
    /// the history so an undo restores the exact order.
    pub fn remove_food_serving(&mut self, date: NaiveDate, serving: &FoodServing) -> bool {
        let Some(day) = self.entries.get_mut(&date) else {
            return false;
        };
        let Some(index) = day.iter().position(|entry| entry == serving) else {
            return false;
        };

        let removed = day.remove(index);
        if day.is_empty() {
            self.entries.remove(&date);
        }
        self.history.push(LogCommand::Remove {
            date,
            serving: removed,
            index,
        });
        true
    }

    /// Undo the most recent add or remove.
    ///
    /// Returns false when there is nothing to undo. Undone operations
    /// are not themselves recorded, so there is no redo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.history.pop() else {
            return false;
        };

        match command {
            LogCommand::Add { date, serving } => {
                if let Some(day) = self.entries.get_mut(&date) {
                    // Drop the last matching entry so an equal serving
                    // logged earlier keeps its place.
                    if let Some(index) = day.iter().rposition(|entry| entry == &serving) {
                        day.remove(index);
                    }
                    if day.is_empty() {
                        self.entries.remove(&date);
                    }
                }
            }
            LogCommand::Remove {
                date,
                serving,
                index,
            } => {
                let day = self.entries.entry(date).or_default();
                let index = index.min(day.len());
                day.insert(index, serving);
            }
        }
        true
    }

    /// All servings logged on a date, in log order.
    ///
    /// An unknown date yields an empty slice; no entry is created.
    pub fn food_servings_for_date(&self, date: NaiveDate) -> &[FoodServing] {
        self.entries
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total calories logged on a date, 0 when nothing was logged
    pub fn total_calories(&self, date: NaiveDate) -> f64 {
        self.food_servings_for_date(date)
            .iter()
            .map(|serving| serving.calories())
            .sum()
    }

    /// Per-date calorie totals over an inclusive date range.
    ///
    /// Only dates with at least one logged entry appear in the result;
    /// empty days are omitted, not zero-filled. The caller guarantees
    /// `start <= end`.
    pub fn calorie_summary(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, f64> {
        self.entries
            .range(start..=end)
            .map(|(date, day)| {
                let total = day.iter().map(|serving| serving.calories()).sum();
                (*date, total)
            })
            .collect()
    }

    /// Iterate all (date, servings) pairs in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[FoodServing])> {
        self.entries
            .iter()
            .map(|(date, day)| (*date, day.as_slice()))
    }

    /// True when at least one operation can be undone
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::{Food, SimpleFood};
    use std::rc::Rc;

    fn serving(identifier: &str, calories: f64, servings: f64) -> FoodServing {
        let food = Rc::new(Food::Simple(SimpleFood::new(identifier, vec![], calories)));
        FoodServing::new(food, servings)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_add_appends_in_log_order() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("Apple", 95.0, 1.0));
        log.add_food_serving(date(1), serving("Bread", 80.0, 2.0));

        let day = log.food_servings_for_date(date(1));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].food().identifier(), "Apple");
        assert_eq!(day[1].food().identifier(), "Bread");
    }

    #[test]
    fn test_absent_date_reads_are_empty_and_allocate_nothing() {
        let mut log = DailyLog::new();
        assert!(log.food_servings_for_date(date(5)).is_empty());
        assert_eq!(log.total_calories(date(5)), 0.0);

        // Reading must not have created an entry that undo or summary
        // could observe.
        assert!(log.calorie_summary(date(1), date(31)).is_empty());
        assert!(!log.undo());
    }

    #[test]
    fn test_remove_missing_serving_returns_false() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("Apple", 95.0, 1.0));

        assert!(!log.remove_food_serving(date(2), &serving("Apple", 95.0, 1.0)));
        assert!(!log.remove_food_serving(date(1), &serving("Apple", 95.0, 3.0)));
        assert_eq!(log.food_servings_for_date(date(1)).len(), 1);
    }

    #[test]
    fn test_remove_collapses_empty_date() {
        let mut log = DailyLog::new();
        let apple = serving("Apple", 95.0, 1.0);
        log.add_food_serving(date(1), apple.clone());

        assert!(log.remove_food_serving(date(1), &apple));
        assert!(log.calorie_summary(date(1), date(1)).is_empty());
    }

    #[test]
    fn test_undo_add_restores_pre_add_state() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("Apple", 95.0, 1.0));
        log.add_food_serving(date(1), serving("Bread", 80.0, 1.0));
        let before: Vec<FoodServing> = log.food_servings_for_date(date(1)).to_vec();

        log.add_food_serving(date(1), serving("Apple", 95.0, 1.0));
        assert!(log.undo());

        assert_eq!(log.food_servings_for_date(date(1)), &before[..]);
    }

    #[test]
    fn test_undo_add_of_duplicate_keeps_earlier_entry_in_place() {
        let mut log = DailyLog::new();
        let apple = serving("Apple", 95.0, 1.0);
        log.add_food_serving(date(1), apple.clone());
        log.add_food_serving(date(1), serving("Bread", 80.0, 1.0));
        log.add_food_serving(date(1), apple.clone());

        assert!(log.undo());

        let day = log.food_servings_for_date(date(1));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].food().identifier(), "Apple");
        assert_eq!(day[1].food().identifier(), "Bread");
    }

    #[test]
    fn test_undo_remove_reinserts_at_original_index() {
        let mut log = DailyLog::new();
        let entries = [
            serving("A", 10.0, 1.0),
            serving("B", 20.0, 1.0),
            serving("C", 30.0, 1.0),
            serving("D", 40.0, 1.0),
        ];
        for entry in &entries {
            log.add_food_serving(date(1), entry.clone());
        }

        assert!(log.remove_food_serving(date(1), &entries[2]));
        assert!(log.undo());

        let day = log.food_servings_for_date(date(1));
        let order: Vec<&str> = day.iter().map(|entry| entry.food().identifier()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_undo_remove_recreates_collapsed_date() {
        let mut log = DailyLog::new();
        let apple = serving("Apple", 95.0, 1.0);
        log.add_food_serving(date(1), apple.clone());
        assert!(log.remove_food_serving(date(1), &apple));

        assert!(log.undo());
        assert_eq!(log.food_servings_for_date(date(1)).len(), 1);
    }

    #[test]
    fn test_undo_chain_unwinds_in_reverse_order() {
        let mut log = DailyLog::new();
        let apple = serving("Apple", 95.0, 1.0);
        let bread = serving("Bread", 80.0, 1.0);

        log.add_food_serving(date(1), apple.clone());
        log.add_food_serving(date(1), bread.clone());
        log.remove_food_serving(date(1), &apple);

        assert!(log.undo()); // apple back at index 0
        assert!(log.undo()); // bread gone
        assert!(log.undo()); // apple gone
        assert!(!log.undo());
        assert!(log.food_servings_for_date(date(1)).is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_returns_false() {
        let mut log = DailyLog::new();
        assert!(!log.undo());
        assert!(!log.can_undo());
    }

    #[test]
    fn test_total_calories_multiplies_servings() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("Snack", 190.0, 2.0));
        assert!((log.total_calories(date(1)) - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_summary_omits_empty_days() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("A", 100.0, 1.0));
        log.add_food_serving(date(3), serving("B", 200.0, 1.0));

        let summary = log.calorie_summary(date(1), date(3));
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[&date(1)], 100.0);
        assert_eq!(summary[&date(3)], 200.0);
        assert!(!summary.contains_key(&date(2)));
    }

    #[test]
    fn test_calorie_summary_bounds_are_inclusive() {
        let mut log = DailyLog::new();
        log.add_food_serving(date(1), serving("A", 100.0, 1.0));
        log.add_food_serving(date(5), serving("B", 200.0, 1.0));
        log.add_food_serving(date(9), serving("C", 300.0, 1.0));

        let summary = log.calorie_summary(date(1), date(5));
        assert_eq!(summary.len(), 2);
        assert!(summary.contains_key(&date(1)));
        assert!(summary.contains_key(&date(5)));
    }

    #[test]
    fn test_from_entries_has_empty_history() {
        let log = DailyLog::from_entries(vec![
            (date(1), serving("Apple", 95.0, 1.0)),
            (date(1), serving("Bread", 80.0, 2.0)),
        ]);

        assert_eq!(log.food_servings_for_date(date(1)).len(), 2);
        assert!(!log.can_undo());
    }
}
