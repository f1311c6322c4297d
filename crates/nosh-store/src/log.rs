//! Daily log persistence

use crate::{StoreError, TextStore};
use chrono::NaiveDate;
use nosh_domain::{DailyLog, FoodCatalog, FoodServing};

impl TextStore {
    /// Save the daily log, one line per serving in date order.
    ///
    /// Only the logged entries are written; the undo history is
    /// transient and stays in memory.
    pub fn save_log(&self, log: &DailyLog) -> Result<(), StoreError> {
        let mut contents = String::new();
        for (date, servings) in log.iter() {
            for serving in servings {
                contents.push_str(&format!(
                    "{}|{}|{}\n",
                    date.format("%Y-%m-%d"),
                    serving.food().identifier(),
                    serving.servings()
                ));
            }
        }
        self.write_file(&self.daily_log_path(), &contents)
    }

    /// Load the daily log, resolving food identifiers against the
    /// given catalog.
    ///
    /// Lines that fail to parse or name a food the catalog does not
    /// know are skipped with a warning. The loaded log starts with an
    /// empty undo history.
    pub fn load_log(&self, catalog: &FoodCatalog) -> Result<DailyLog, StoreError> {
        let mut entries = Vec::new();

        for line in self.read_lines(&self.daily_log_path())? {
            let fields: Vec<&str> = line.split('|').collect();
            let [date, identifier, servings] = fields.as_slice() else {
                tracing::warn!(%line, "skipping malformed log line");
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
                tracing::warn!(%line, "skipping log line with unparseable date");
                continue;
            };
            let Ok(servings) = servings.trim().parse::<f64>() else {
                tracing::warn!(%line, "skipping log line with unparseable servings");
                continue;
            };
            let Some(food) = catalog.food(identifier.trim()) else {
                tracing::warn!(food = %identifier, "skipping log line for unknown food");
                continue;
            };

            entries.push((date, FoodServing::new(food, servings)));
        }

        Ok(DailyLog::from_entries(entries))
    }
}
