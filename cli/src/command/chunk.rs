use crate::command::Command;
use clap::{Parser, ValueHint};
use libwamap::{ChunkType, prelude::*};
use std::{fs, path::PathBuf};
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub(crate) struct ChunkCommand {
    #[command(subcommand)]
    command: ChunkCommands,
}

impl Command for ChunkCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            ChunkCommands::List(cmd) => cmd.execute(),
        }
    }
}

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ChunkCommands {
    #[command(about = "List chunks")]
    List(ListCommand),
}

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(short, long, help = "Display chunk property flags and body")]
    pub(crate) long: bool,
    #[arg(long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg(value_hint = ValueHint::FilePath)]
    pub(crate) file: PathBuf,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        list_png_chunks(self)
    }
}

fn list_png_chunks(args: ListCommand) -> anyhow::Result<()> {
    let bytes = fs::read(&args.file)?;
    if !libwamap::is_png(&bytes) {
        log::warn!("{} does not start with a PNG signature", args.file.display());
    }
    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset", "CRC"]
                .into_iter()
                .chain(args.long.then_some(["Flags", "Body"]).into_iter().flatten()),
        )
    }
    let mut end = libwamap::PNG_SIGNATURE.len();
    for (idx, chunk) in libwamap::chunks(&bytes).enumerate() {
        end = chunk.offset() + chunk.bytes_len();
        builder.push_record(
            [
                (idx + 1).to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{:#06x}", chunk.offset()),
                if chunk.is_intact() { "ok" } else { "broken" }.to_string(),
            ]
            .into_iter()
            .chain(
                args.long
                    .then(|| {
                        [
                            flags(chunk.ty()),
                            std::str::from_utf8(chunk.data())
                                .unwrap_or_default()
                                .to_string(),
                        ]
                    })
                    .into_iter()
                    .flatten(),
            ),
        );
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    println!("{table}");
    if end < bytes.len() {
        log::warn!("{} trailing bytes could not be read as chunks", bytes.len() - end);
    }
    Ok(())
}

/// `c` critical, `p` private, `s` safe to copy; `-` where the bit is unset.
fn flags(ty: ChunkType) -> String {
    [
        (ty.is_critical(), 'c'),
        (ty.is_private(), 'p'),
        (ty.is_safe_to_copy(), 's'),
    ]
    .into_iter()
    .map(|(set, c)| if set { c } else { '-' })
    .collect()
}
