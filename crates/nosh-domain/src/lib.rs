//! Nosh Domain Layer
//!
//! This crate contains the core business logic and domain model for nosh,
//! a personal diet tracker. It defines the food model, the catalog that
//! owns foods, the daily consumption log with its undo history, and the
//! calorie-target arithmetic.
//!
//! ## Key Concepts
//!
//! - **Food**: A simple food with stored calories, or a composite food
//!   whose calories derive from servings of other foods
//! - **Food Catalog**: Sole owner of all foods; enforces identifier
//!   uniqueness and answers keyword searches
//! - **Daily Log**: Per-date serving records with a reversible command
//!   history (last-in-first-out undo)
//! - **Calorie Targets**: Closed-form BMR strategies applied to a user
//!   profile
//!
//! ## Architecture
//!
//! Foods are immutable after construction and shared by reference
//! (`Rc<Food>`): the catalog creates and owns them, search results and
//! log entries hold read-only handles. Everything here is synchronous
//! and single-threaded; persistence lives in `nosh-store` and the
//! interactive surface in `nosh-cli`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod food;
pub mod log;
pub mod profile;
pub mod target;

// Re-exports for convenience
pub use catalog::{CatalogError, FoodCatalog};
pub use food::{CompositeFood, Food, FoodServing, SimpleFood};
pub use log::DailyLog;
pub use profile::{ActivityLevel, DietProfile, Sex};
pub use target::{CalorieTarget, HarrisBenedict, MifflinStJeor, TargetStrategy};
