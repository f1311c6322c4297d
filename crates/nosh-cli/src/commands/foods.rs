//! Food management commands: add, compose, list.

use crate::cli::{AddArgs, ComposeArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use nosh_domain::{FoodCatalog, FoodServing};

/// Calories per serving accepted from the UI.
const CALORIE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10_000.0;

/// Serving counts accepted from the UI.
const SERVING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Execute the add command.
pub fn execute_add(args: AddArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    validate_calories(args.calories)?;

    let food = session
        .catalog
        .add_simple_food(args.identifier, args.keywords, args.calories)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Added food: {} ({:.2} calories/serving)",
            food.identifier(),
            food.calories_per_serving()
        ))
    );
    Ok(())
}

/// Execute the compose command.
pub fn execute_compose(
    args: ComposeArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    let mut components = Vec::new();
    for raw in &args.components {
        components.push(parse_component(&session.catalog, raw)?);
    }

    let food = session
        .catalog
        .add_composite_food(args.identifier, args.keywords, components)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Added composite food: {} ({:.2} calories/serving)",
            food.identifier(),
            food.calories_per_serving()
        ))
    );
    Ok(())
}

/// Execute the foods (list) command.
pub fn execute_foods(session: &Session, formatter: &Formatter) -> Result<()> {
    let foods = session.catalog.search(&[], false);
    println!("{}", formatter.format_foods(&foods)?);
    Ok(())
}

/// Parse a "food:servings" component against the catalog.
///
/// The split is on the last `:`, so identifiers may contain anything
/// but a colon.
pub(crate) fn parse_component(catalog: &FoodCatalog, raw: &str) -> Result<FoodServing> {
    let Some((identifier, servings)) = raw.rsplit_once(':') else {
        return Err(CliError::InvalidInput(format!(
            "Component must be \"food:servings\", got \"{}\"",
            raw
        )));
    };

    let servings: f64 = servings.trim().parse().map_err(|_| {
        CliError::InvalidInput(format!("Invalid serving count: {}", servings))
    })?;
    validate_servings(servings)?;

    let food = catalog.food(identifier.trim()).ok_or_else(|| {
        CliError::InvalidInput(format!("Unknown food: {}", identifier.trim()))
    })?;

    Ok(FoodServing::new(food, servings))
}

pub(crate) fn validate_servings(servings: f64) -> Result<()> {
    if !SERVING_RANGE.contains(&servings) {
        return Err(CliError::InvalidInput(format!(
            "Servings must be between {} and {}",
            SERVING_RANGE.start(),
            SERVING_RANGE.end()
        )));
    }
    Ok(())
}

pub(crate) fn validate_calories(calories: f64) -> Result<()> {
    if !CALORIE_RANGE.contains(&calories) {
        return Err(CliError::InvalidInput(format!(
            "Calories must be between {} and {}",
            CALORIE_RANGE.start(),
            CALORIE_RANGE.end()
        )));
    }
    Ok(())
}
