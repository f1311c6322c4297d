//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let results = session.catalog.search(&args.keywords, args.all);
    println!("{}", formatter.format_foods(&results)?);
    Ok(())
}
