use crate::command::Command;
use bugreport::{bugreport, collector::*, format::Markdown};
use clap::Parser;

/// Variables the SavedLevels lookup depends on.
const LOCATOR_VARIABLES: [&str; 5] = [
    "HOME",
    "USERPROFILE",
    "PROGRAMFILES",
    "PROGRAMFILES(X86)",
    "PROGRAMW6432",
];

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct BugReportCommand;

impl Command for BugReportCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        bugreport!()
            .info(SoftwareVersion::default())
            .info(OperatingSystem::default())
            .info(CommandLine::default())
            .info(EnvironmentVariables::list(&LOCATOR_VARIABLES))
            .info(CompileTimeInformation::default())
            .print::<Markdown>();
        Ok(())
    }
}
