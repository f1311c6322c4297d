//! nosh - a personal diet tracker.

use clap::Parser;
use nosh_cli::commands;
use nosh_cli::repl;
use nosh_cli::{Cli, Command, Config, Formatter, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> nosh_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override the data directory if specified
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            let mut session = Session::open(config.resolved_data_dir()?)?;
            repl::run_repl(&mut session, &mut config, &formatter)?;
        }
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter)?;
        }
        Some(Command::Target) => {
            commands::execute_target(&config, &formatter)?;
        }
        Some(cmd) => {
            // Commands that operate on the database
            let mut session = Session::open(config.resolved_data_dir()?)?;

            let mutated = match cmd {
                Command::Add(args) => {
                    commands::execute_add(args, &mut session, &formatter)?;
                    true
                }
                Command::Compose(args) => {
                    commands::execute_compose(args, &mut session, &formatter)?;
                    true
                }
                Command::Search(args) => {
                    commands::execute_search(args, &session, &formatter)?;
                    false
                }
                Command::Foods => {
                    commands::execute_foods(&session, &formatter)?;
                    false
                }
                Command::Log(args) => {
                    commands::execute_log(args, &mut session, &formatter)?;
                    true
                }
                Command::Remove(args) => {
                    commands::execute_remove(args, &mut session, &formatter)?;
                    true
                }
                Command::Undo => {
                    commands::execute_undo(&mut session, &formatter)?;
                    true
                }
                Command::Show(args) => {
                    commands::execute_show(args, &session, &config, &formatter)?;
                    false
                }
                Command::Summary(args) => {
                    commands::execute_summary(args, &session, &formatter)?;
                    false
                }
                Command::Save => {
                    session.save()?;
                    println!("{}", formatter.success("Database saved"));
                    false
                }
                _ => unreachable!(),
            };

            // One-shot invocations persist their changes immediately;
            // the interactive session saves on exit instead.
            if mutated {
                session.save()?;
            }
        }
    }

    Ok(())
}
