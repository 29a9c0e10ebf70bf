use crate::{cli::Cli, command::Command};
use clap::{Args, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::io;

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct CompleteCommand {
    #[arg(help = "shell")]
    shell: Shell,
}

impl Command for CompleteCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        let cmd = &mut Cli::command();
        print_completions(self.shell, cmd);
        Ok(())
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout().lock());
}
