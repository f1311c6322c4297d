//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::NaiveDate;
use colored::*;
use nosh_domain::{Food, FoodServing};
use serde_json;
use std::collections::BTreeMap;
use std::rc::Rc;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of foods.
    pub fn format_foods(&self, foods: &[Rc<Food>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_foods_json(foods),
            OutputFormat::Table => self.format_foods_table(foods),
            OutputFormat::Quiet => Ok(foods
                .iter()
                .map(|food| food.identifier().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_foods_json(&self, foods: &[Rc<Food>]) -> Result<String> {
        let json_foods: Vec<serde_json::Value> = foods
            .iter()
            .map(|food| {
                serde_json::json!({
                    "identifier": food.identifier(),
                    "kind": kind(food),
                    "keywords": food.keywords(),
                    "calories_per_serving": food.calories_per_serving(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_foods)?)
    }

    fn format_foods_table(&self, foods: &[Rc<Food>]) -> Result<String> {
        if foods.is_empty() {
            return Ok(self.colorize("No foods found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Identifier", "Kind", "Keywords", "Calories/Serving"]);

        for food in foods {
            builder.push_record([
                food.identifier(),
                kind(food),
                &food.keywords().join(", "),
                &format!("{:.2}", food.calories_per_serving()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format one day's log: the servings, the total, and how the total
    /// compares to the daily target when one is known.
    pub fn format_day(
        &self,
        date: NaiveDate,
        servings: &[FoodServing],
        target: Option<f64>,
    ) -> Result<String> {
        let total: f64 = servings.iter().map(|serving| serving.calories()).sum();

        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = servings
                    .iter()
                    .map(|serving| {
                        serde_json::json!({
                            "food": serving.food().identifier(),
                            "servings": serving.servings(),
                            "calories": serving.calories(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "date": date.to_string(),
                    "entries": entries,
                    "total_calories": total,
                    "target_calories": target,
                }))?)
            }
            OutputFormat::Quiet => Ok(format!("{:.2}", total)),
            OutputFormat::Table => {
                if servings.is_empty() {
                    return Ok(self.colorize(&format!("Nothing logged on {}.", date), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Food", "Servings", "Calories"]);
                for (index, serving) in servings.iter().enumerate() {
                    builder.push_record([
                        &(index + 1).to_string(),
                        serving.food().identifier(),
                        &format!("{:.2}", serving.servings()),
                        &format!("{:.2}", serving.calories()),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = format!("{}\n{}", date, table);
                out.push_str(&format!("\nTotal: {:.2} calories", total));
                if let Some(target) = target {
                    let difference = target - total;
                    if difference >= 0.0 {
                        out.push_str(&format!(
                            "\nTarget: {:.2} calories ({:.2} remaining)",
                            target, difference
                        ));
                    } else {
                        out.push_str(&format!(
                            "\nTarget: {:.2} calories ({:.2} over)",
                            target, -difference
                        ));
                    }
                }
                Ok(out)
            }
        }
    }

    /// Format a per-date calorie summary over a range.
    pub fn format_summary(&self, summary: &BTreeMap<NaiveDate, f64>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: serde_json::Map<String, serde_json::Value> = summary
                    .iter()
                    .map(|(date, calories)| (date.to_string(), serde_json::json!(calories)))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(summary
                .iter()
                .map(|(date, calories)| format!("{} {:.2}", date, calories))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if summary.is_empty() {
                    return Ok(self.colorize("No entries in this range.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Date", "Calories"]);
                for (date, calories) in summary {
                    builder.push_record([&date.to_string(), &format!("{:.2}", calories)]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = table.to_string();
                if summary.len() > 1 {
                    let average: f64 =
                        summary.values().sum::<f64>() / summary.len() as f64;
                    out.push_str(&format!("\nAverage: {:.2} calories/day", average));
                }
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn kind(food: &Food) -> &'static str {
    match food {
        Food::Simple(_) => "simple",
        Food::Composite(_) => "composite",
    }
}
