pub(crate) mod bugreport;
pub(crate) mod chunk;
pub(crate) mod complete;
pub(crate) mod convert;
pub(crate) mod locate;

use crate::cli::{Cli, Commands};

/// Runs the action selected on the command line.
pub fn entry(cli: Cli) -> anyhow::Result<()> {
    match cli.commands {
        Some(Commands::Chunk(cmd)) => cmd.execute(),
        Some(Commands::Locate(cmd)) => cmd.execute(),
        Some(Commands::Complete(cmd)) => cmd.execute(),
        Some(Commands::BugReport(cmd)) => cmd.execute(),
        None => cli.convert.execute(),
    }
}

pub(crate) trait Command {
    fn execute(self) -> anyhow::Result<()>;
}
