use std::{fs, path::PathBuf, process};

use clap::{CommandFactory, Parser};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match args.command {
        Command::Mangen(args) => mangen(args),
    }
}

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for wamap")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate man pages for the CLI
    Mangen(MangenArgs),
}

#[derive(Parser)]
struct MangenArgs {
    /// Output directory for man pages
    #[arg(short, long, default_value = "target/man")]
    output: PathBuf,
}

fn mangen(args: MangenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = &args.output;
    fs::create_dir_all(out_dir)?;

    // Subcommand pages are named after the binary, not the package
    let cmd = wa_map_maker::cli::Cli::command().name("wamap");
    clap_mangen::generate_to(cmd, out_dir)?;

    eprintln!("Man pages generated in: {}", out_dir.display());
    Ok(())
}
