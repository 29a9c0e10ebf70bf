use crate::command::{
    bugreport::BugReportCommand, chunk::ChunkCommand, complete::CompleteCommand,
    convert::ConvertArgs, locate::LocateCommand,
};
use clap::{ArgGroup, Args, Parser, Subcommand};
use log::LevelFilter;

const AFTER_LONG_HELP: &str = "\
How it works:
  Worms Armageddon only loads special PNG files called colour maps. They use an
  8-bit palette of at most 112 colours, and their width and height must be
  multiples of 8. One palette entry may be transparent: those pixels become
  empty space in-game. Map settings such as water level are kept in a hidden
  PNG chunk (w2lv or waLV).

What wamap does for you:
  - reshapes the picture to a legal map size
  - reduces the colours so the game can display it
  - makes one colour transparent (black unless told otherwise)
  - copies map settings from an existing map with --template

Examples:
  Make a simple map:
      wamap input.png output.png
  Make pure magenta the see-through colour:
      wamap input.png output.png -c 255 0 255
  Copy settings (water, etc.) from another map:
      wamap input.png output.png --template my_map.png

Afterwards put the PNG into User/SavedLevels/ of your W:A folder (see
`wamap locate`) and choose it in the map editor.";

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    name = "wamap",
    version,
    about = "Convert any normal image into a Worms Armageddon map",
    after_long_help = AFTER_LONG_HELP,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(flatten)]
    pub(crate) convert: ConvertArgs,
    #[command(subcommand)]
    pub(crate) commands: Option<Commands>,
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
}

impl Cli {
    pub fn init_logger(&self) -> Result<(), log::SetLoggerError> {
        crate::logger::init(self.verbosity.log_level_filter())
    }

    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        crate::command::entry(self)
    }
}

#[derive(Args, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[command(group(ArgGroup::new("verbosity").args(["quiet", "verbose"])))]
pub(crate) struct VerbosityArgs {
    #[arg(short, long, help = "Only report errors")]
    quiet: bool,
    #[arg(short, long, help = "Report each conversion step")]
    verbose: bool,
}

impl VerbosityArgs {
    #[inline]
    pub(crate) const fn log_level_filter(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Error,
            (_, true) => LevelFilter::Debug,
            (false, false) => LevelFilter::Info,
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "Inspect the chunks of a PNG file")]
    Chunk(ChunkCommand),
    #[command(about = "Print the detected Worms Armageddon SavedLevels folder")]
    Locate(LocateCommand),
    #[command(about = "Generate shell auto complete")]
    Complete(CompleteCommand),
    #[command(about = "Generate bug report template")]
    BugReport(BugReportCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn verbosity_levels() {
        let cli = Cli::parse_from(["wamap", "in.png", "out.png"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Info);
        let cli = Cli::parse_from(["wamap", "--quiet", "in.png", "out.png"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Error);
        let cli = Cli::parse_from(["wamap", "-v", "in.png", "out.png"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn subcommand_without_positionals() {
        let cli = Cli::parse_from(["wamap", "locate"]);
        assert!(matches!(cli.commands, Some(Commands::Locate(_))));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["wamap", "-q", "-v", "in.png", "out.png"]).is_err());
    }
}
