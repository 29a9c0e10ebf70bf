use crate::{command::Command, locate::find_saved_levels};
use clap::Parser;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct LocateCommand;

impl Command for LocateCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        let saved_levels = find_saved_levels()
            .ok_or_else(|| anyhow::anyhow!("SavedLevels folder not detected"))?;
        println!("{}", saved_levels.display());
        Ok(())
    }
}
