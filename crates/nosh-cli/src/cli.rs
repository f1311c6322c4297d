//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nosh_domain::{ActivityLevel, Sex, TargetStrategy};
use std::path::PathBuf;

/// nosh - a personal diet tracker.
#[derive(Debug, Parser)]
#[command(name = "nosh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding the food database and log files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers / bare numbers only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a simple food to the catalog
    Add(AddArgs),

    /// Create a composite food from existing foods
    Compose(ComposeArgs),

    /// Search foods by keywords
    Search(SearchArgs),

    /// List every food in the catalog
    Foods,

    /// Log a food serving for a date
    Log(LogArgs),

    /// Remove a logged serving
    Remove(RemoveArgs),

    /// Undo the most recent log change
    Undo,

    /// Show one day's log and calorie total
    Show(ShowArgs),

    /// Per-day calorie summary over a date range
    Summary(SummaryArgs),

    /// Set up or show the diet profile
    Profile(ProfileArgs),

    /// Show the daily calorie target
    Target,

    /// Write the database files to disk
    Save,

    /// Enter interactive mode
    Repl,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Food identifier, unique across the catalog
    pub identifier: String,

    /// Calories in one serving
    #[arg(short, long)]
    pub calories: f64,

    /// Search keywords (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Arguments for the compose command.
#[derive(Debug, Parser)]
pub struct ComposeArgs {
    /// Composite food identifier, unique across the catalog
    pub identifier: String,

    /// A component as "food:servings"; repeat for each component
    #[arg(short = 'c', long = "component")]
    pub components: Vec<String>,

    /// Search keywords (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Keywords to match (empty matches every food)
    pub keywords: Vec<String>,

    /// Require every keyword to match instead of any
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the log command.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Identifier of the food to log
    pub identifier: String,

    /// Number of servings
    #[arg(short, long, default_value = "1")]
    pub servings: f64,

    /// Date (ISO-8601), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the remove command.
#[derive(Debug, Parser)]
pub struct RemoveArgs {
    /// Identifier of the logged food
    pub identifier: String,

    /// Number of servings of the entry to remove
    #[arg(short, long, default_value = "1")]
    pub servings: f64,

    /// Date (ISO-8601), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Date (ISO-8601), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the summary command.
#[derive(Debug, Parser)]
pub struct SummaryArgs {
    /// First date of the range (ISO-8601)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last date of the range (ISO-8601), inclusive
    #[arg(long)]
    pub to: NaiveDate,
}

/// Arguments for the profile command.
///
/// With no flags the current profile is shown; with flags it is created
/// or updated.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    /// Biological sex (male/female)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Activity level (sedentary/light/moderate/high/extreme)
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Target strategy (harris-benedict/mifflin-st-jeor)
    #[arg(long)]
    pub strategy: Option<TargetStrategy>,
}
