//! Daily log commands: log, remove, undo, show, summary.

use crate::cli::{LogArgs, RemoveArgs, ShowArgs, SummaryArgs};
use crate::commands::foods::validate_servings;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use chrono::NaiveDate;
use nosh_domain::FoodServing;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Execute the log command.
pub fn execute_log(args: LogArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    validate_servings(args.servings)?;
    let date = args.date.unwrap_or_else(today);

    let food = session.catalog.food(&args.identifier).ok_or_else(|| {
        CliError::InvalidInput(format!("Unknown food: {}", args.identifier))
    })?;
    let serving = FoodServing::new(food, args.servings);
    let calories = serving.calories();
    session.log.add_food_serving(date, serving);

    println!(
        "{}",
        formatter.success(&format!(
            "Logged {:.2} serving(s) of {} on {} ({:.2} calories)",
            args.servings, args.identifier, date, calories
        ))
    );
    Ok(())
}

/// Execute the remove command.
///
/// A serving that is not in the day's log is reported as a warning, not
/// an error; there is simply nothing to do.
pub fn execute_remove(
    args: RemoveArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    let date = args.date.unwrap_or_else(today);

    let Some(food) = session.catalog.food(&args.identifier) else {
        return Err(CliError::InvalidInput(format!(
            "Unknown food: {}",
            args.identifier
        )));
    };
    let serving = FoodServing::new(food, args.servings);

    if session.log.remove_food_serving(date, &serving) {
        println!(
            "{}",
            formatter.success(&format!(
                "Removed {:.2} serving(s) of {} from {}",
                args.servings, args.identifier, date
            ))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!(
                "No matching entry for {} on {}",
                args.identifier, date
            ))
        );
    }
    Ok(())
}

/// Execute the undo command.
pub fn execute_undo(session: &mut Session, formatter: &Formatter) -> Result<()> {
    if session.log.undo() {
        println!("{}", formatter.success("Undid the last log change"));
    } else {
        println!("{}", formatter.warning("Nothing to undo"));
    }
    Ok(())
}

/// Execute the show command.
pub fn execute_show(
    args: ShowArgs,
    session: &Session,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let date = args.date.unwrap_or_else(today);
    let servings = session.log.food_servings_for_date(date);

    let target = config
        .diet
        .map(|diet| diet.strategy.strategy().daily_target(&diet.profile));

    println!("{}", formatter.format_day(date, servings, target)?);
    Ok(())
}

/// Execute the summary command.
pub fn execute_summary(
    args: SummaryArgs,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    if args.from > args.to {
        return Err(CliError::InvalidInput(format!(
            "Range start {} is after range end {}",
            args.from, args.to
        )));
    }

    let summary = session.log.calorie_summary(args.from, args.to);
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
