//! Open command: resolve a runapp:// URI and launch the registered program.

use std::path::Path;

use anyhow::Result;
use runapp_core::{Dispatcher, ExpandedCommand, Launch, Reporter, is_scheme_uri};
use tracing::debug;

use crate::cli_utils::SYNTAX;

/// What an open invocation ended with.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The argument was not a runapp:// URI; syntax help was shown.
    Syntax,
    /// Dry run: resolved but not started.
    Resolved(ExpandedCommand),
    Launched(ExpandedCommand),
}

pub fn run(uri: &str, config_path: &Path, dry_run: bool, reporter: &dyn Reporter) -> Result<()> {
    let dispatcher = Dispatcher::with_system_launcher(config_path);
    match open(uri, &dispatcher, dry_run, reporter)? {
        Outcome::Resolved(command) => println!("{command}"),
        Outcome::Launched(command) => debug!("Started {command}"),
        Outcome::Syntax => {}
    }
    Ok(())
}

/// Route a single argument. Non-URIs never reach the config file.
pub fn open<L: Launch>(
    uri: &str,
    dispatcher: &Dispatcher<L>,
    dry_run: bool,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    if !is_scheme_uri(uri) {
        debug!("Not a runapp URI: {uri}");
        reporter.info(SYNTAX);
        return Ok(Outcome::Syntax);
    }

    if dry_run {
        return Ok(Outcome::Resolved(dispatcher.resolve(uri)?));
    }

    Ok(Outcome::Launched(dispatcher.dispatch(uri)?))
}
