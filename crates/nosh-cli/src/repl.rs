//! Interactive mode - a readline loop over the same command set.
//!
//! The session keeps a working date, shown in the prompt and passed
//! explicitly into every log operation. Multi-word food names are
//! written in double quotes.

use crate::cli::{
    AddArgs, ComposeArgs, LogArgs, ProfileArgs, RemoveArgs, SearchArgs, ShowArgs, SummaryArgs,
};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use chrono::NaiveDate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive session.
pub fn run_repl(session: &mut Session, config: &mut Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("nosh - type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = history_path()?;
    let _ = editor.load_history(&history_path);

    let mut working_date = chrono::Local::now().date_naive();

    loop {
        let prompt = format!("nosh {}> ", working_date);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line, working_date) {
                    Ok(ReplCommand::Exit) => {
                        session.save()?;
                        println!("{}", formatter.info("Saved. Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::SetDate(date)) => {
                        working_date = date;
                        println!(
                            "{}",
                            formatter.info(&format!("Working date is now {}", working_date))
                        );
                    }
                    Ok(ReplCommand::Command(command)) => {
                        if let Err(e) = execute_repl_command(command, session, config, formatter)
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                session.save()?;
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Commands recognized by the interactive loop.
enum ReplCommand {
    Exit,
    Help,
    SetDate(NaiveDate),
    Command(Action),
}

/// An action against the session, with its parsed arguments.
enum Action {
    Add(AddArgs),
    Compose(ComposeArgs),
    Search(SearchArgs),
    Foods,
    Log(LogArgs),
    Remove(RemoveArgs),
    Undo,
    Show(ShowArgs),
    Summary(SummaryArgs),
    Profile(ProfileArgs),
    Target,
    Save,
}

/// Parse a command line into a command.
fn parse_repl_command(line: &str, working_date: NaiveDate) -> Result<ReplCommand> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match head.as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "date" => parse_date_command(args),
        "add" => parse_add_command(args).map(ReplCommand::Command),
        "compose" => parse_compose_command(args).map(ReplCommand::Command),
        "search" => Ok(ReplCommand::Command(parse_search_command(args))),
        "foods" => Ok(ReplCommand::Command(Action::Foods)),
        "log" => parse_serving_command(args, working_date)
            .map(|(identifier, servings, date)| {
                ReplCommand::Command(Action::Log(LogArgs {
                    identifier,
                    servings,
                    date: Some(date),
                }))
            }),
        "remove" => parse_serving_command(args, working_date)
            .map(|(identifier, servings, date)| {
                ReplCommand::Command(Action::Remove(RemoveArgs {
                    identifier,
                    servings,
                    date: Some(date),
                }))
            }),
        "undo" => Ok(ReplCommand::Command(Action::Undo)),
        "show" => parse_show_command(args, working_date).map(ReplCommand::Command),
        "summary" => parse_summary_command(args).map(ReplCommand::Command),
        "profile" => parse_profile_command(args).map(ReplCommand::Command),
        "target" => Ok(ReplCommand::Command(Action::Target)),
        "save" => Ok(ReplCommand::Command(Action::Save)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

/// Execute a parsed command against the session.
fn execute_repl_command(
    command: Action,
    session: &mut Session,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match command {
        Action::Add(args) => commands::execute_add(args, session, formatter),
        Action::Compose(args) => commands::execute_compose(args, session, formatter),
        Action::Search(args) => commands::execute_search(args, session, formatter),
        Action::Foods => commands::execute_foods(session, formatter),
        Action::Log(args) => commands::execute_log(args, session, formatter),
        Action::Remove(args) => commands::execute_remove(args, session, formatter),
        Action::Undo => commands::execute_undo(session, formatter),
        Action::Show(args) => commands::execute_show(args, session, config, formatter),
        Action::Summary(args) => commands::execute_summary(args, session, formatter),
        Action::Profile(args) => commands::execute_profile(args, config, formatter),
        Action::Target => commands::execute_target(config, formatter),
        Action::Save => {
            session.save()?;
            println!("{}", formatter.success("Database saved"));
            Ok(())
        }
    }
}

fn parse_date_command(args: &[String]) -> Result<ReplCommand> {
    let date = match args {
        [] => chrono::Local::now().date_naive(),
        [value] => parse_date(value)?,
        _ => {
            return Err(CliError::InvalidInput(
                "Usage: date [YYYY-MM-DD|today]".to_string(),
            ))
        }
    };
    Ok(ReplCommand::SetDate(date))
}

fn parse_add_command(args: &[String]) -> Result<Action> {
    let [identifier, calories, keywords @ ..] = args else {
        return Err(CliError::InvalidInput(
            "Usage: add <identifier> <calories> [keywords...]".to_string(),
        ));
    };
    let calories: f64 = calories
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid calories: {}", calories)))?;

    Ok(Action::Add(AddArgs {
        identifier: identifier.clone(),
        calories,
        keywords: keywords.to_vec(),
    }))
}

fn parse_compose_command(args: &[String]) -> Result<Action> {
    let [identifier, rest @ ..] = args else {
        return Err(CliError::InvalidInput(
            "Usage: compose <identifier> <food:servings>... [keywords...]".to_string(),
        ));
    };

    // Tokens containing ':' are components, the rest are keywords.
    let (components, keywords): (Vec<String>, Vec<String>) = rest
        .iter()
        .cloned()
        .partition(|token| token.contains(':'));

    if components.is_empty() {
        return Err(CliError::InvalidInput(
            "A composite food needs at least one food:servings component".to_string(),
        ));
    }

    Ok(Action::Compose(ComposeArgs {
        identifier: identifier.clone(),
        components,
        keywords,
    }))
}

fn parse_search_command(args: &[String]) -> Action {
    let all = args.iter().any(|token| token == "--all");
    let keywords = args
        .iter()
        .filter(|token| *token != "--all")
        .cloned()
        .collect();
    Action::Search(SearchArgs { keywords, all })
}

/// Parse `<identifier> [servings] [date]`, shared by log and remove.
fn parse_serving_command(
    args: &[String],
    working_date: NaiveDate,
) -> Result<(String, f64, NaiveDate)> {
    match args {
        [identifier] => Ok((identifier.clone(), 1.0, working_date)),
        [identifier, servings] => {
            let servings: f64 = servings.parse().map_err(|_| {
                CliError::InvalidInput(format!("Invalid serving count: {}", servings))
            })?;
            Ok((identifier.clone(), servings, working_date))
        }
        [identifier, servings, date] => {
            let servings: f64 = servings.parse().map_err(|_| {
                CliError::InvalidInput(format!("Invalid serving count: {}", servings))
            })?;
            Ok((identifier.clone(), servings, parse_date(date)?))
        }
        _ => Err(CliError::InvalidInput(
            "Usage: log|remove <identifier> [servings] [date]".to_string(),
        )),
    }
}

fn parse_show_command(args: &[String], working_date: NaiveDate) -> Result<Action> {
    let date = match args {
        [] => working_date,
        [value] => parse_date(value)?,
        _ => return Err(CliError::InvalidInput("Usage: show [date]".to_string())),
    };
    Ok(Action::Show(ShowArgs { date: Some(date) }))
}

fn parse_summary_command(args: &[String]) -> Result<Action> {
    let [from, to] = args else {
        return Err(CliError::InvalidInput(
            "Usage: summary <from> <to>".to_string(),
        ));
    };
    Ok(Action::Summary(SummaryArgs {
        from: parse_date(from)?,
        to: parse_date(to)?,
    }))
}

fn parse_profile_command(args: &[String]) -> Result<Action> {
    match args {
        [] => Ok(Action::Profile(ProfileArgs {
            sex: None,
            weight: None,
            height: None,
            age: None,
            activity: None,
            strategy: None,
        })),
        [sex, weight, height, age, activity, rest @ ..] => {
            let strategy = match rest {
                [] => None,
                [value] => Some(value.parse().map_err(CliError::InvalidInput)?),
                _ => {
                    return Err(CliError::InvalidInput(
                        "Usage: profile [<sex> <weight> <height> <age> <activity> [strategy]]"
                            .to_string(),
                    ))
                }
            };
            Ok(Action::Profile(ProfileArgs {
                sex: Some(sex.parse().map_err(CliError::InvalidInput)?),
                weight: Some(weight.parse().map_err(|_| {
                    CliError::InvalidInput(format!("Invalid weight: {}", weight))
                })?),
                height: Some(height.parse().map_err(|_| {
                    CliError::InvalidInput(format!("Invalid height: {}", height))
                })?),
                age: Some(age.parse().map_err(|_| {
                    CliError::InvalidInput(format!("Invalid age: {}", age))
                })?),
                activity: Some(activity.parse().map_err(CliError::InvalidInput)?),
                strategy,
            }))
        }
        _ => Err(CliError::InvalidInput(
            "Usage: profile [<sex> <weight> <height> <age> <activity> [strategy]]".to_string(),
        )),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    if value == "today" {
        return Ok(chrono::Local::now().date_naive());
    }
    value
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid date (want YYYY-MM-DD): {}", value)))
}

/// Split a line into tokens, honoring double quotes so food names may
/// contain spaces.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
            }
            ch if ch.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            ch => current.push(ch),
        }
    }

    if in_quotes {
        return Err(CliError::InvalidInput("Unclosed quote".to_string()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Commands:"));
    println!("  add <identifier> <calories> [keywords...]   add a simple food");
    println!("  compose <identifier> <food:servings>... [keywords...]");
    println!("                                              create a composite food");
    println!("  search [keywords...] [--all]                search foods");
    println!("  foods                                       list all foods");
    println!("  log <identifier> [servings] [date]          log a serving");
    println!("  remove <identifier> [servings] [date]       remove a logged serving");
    println!("  undo                                        undo the last log change");
    println!("  show [date]                                 show a day's log");
    println!("  summary <from> <to>                         calorie summary for a range");
    println!("  date [YYYY-MM-DD|today]                     set the working date");
    println!("  profile [<sex> <weight> <height> <age> <activity> [strategy]]");
    println!("                                              show or set the diet profile");
    println!("  target                                      show the daily calorie target");
    println!("  save                                        write the database to disk");
    println!("  help, exit");
    println!();
    println!("Quote multi-word food names: log \"Peanut Butter\" 0.5");
}

fn history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".nosh").join("history"))
}
