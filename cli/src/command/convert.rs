use crate::command::Command;
use anyhow::Context;
use clap::{Args, ValueHint};
use image::Rgb;
use libwamap::{ConvertOptions, MaxColours, parse_channel};
use std::path::PathBuf;

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ConvertArgs {
    #[arg(help = "Input image file", required = true, value_hint = ValueHint::FilePath)]
    pub(crate) input: Option<PathBuf>,
    #[arg(help = "Output PNG file for W:A", required = true, value_hint = ValueHint::FilePath)]
    pub(crate) output: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Template W:A map to copy the w2lv/waLV chunk from",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) template: Option<PathBuf>,
    #[arg(
        short,
        long = "maxcolours",
        value_name = "N",
        default_value_t = MaxColours::default(),
        help = "Maximum number of colours (1-112)"
    )]
    pub(crate) max_colours: MaxColours,
    #[arg(
        short = 'c',
        long = "transparent-colour",
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values = ["0", "0", "0"],
        value_parser = parse_channel,
        allow_negative_numbers = true,
        help = "Colour to treat as transparent"
    )]
    pub(crate) transparent_colour: Vec<u8>,
    #[arg(long, help = "Do not add a transparent palette entry")]
    pub(crate) no_transparency: bool,
    #[arg(long, help = "Enable dithering when reducing colours")]
    pub(crate) dither: bool,
}

impl ConvertArgs {
    fn options(&self) -> ConvertOptions {
        let transparent_colour = match self.transparent_colour[..] {
            [r, g, b] if !self.no_transparency => Some(Rgb([r, g, b])),
            _ => None,
        };
        ConvertOptions::builder()
            .max_colours(self.max_colours)
            .transparent_colour(transparent_colour)
            .dither(self.dither)
            .build()
    }
}

impl Command for ConvertArgs {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        convert_image(self)
    }
}

fn convert_image(args: ConvertArgs) -> anyhow::Result<()> {
    let options = args.options();
    let (Some(input), Some(output)) = (args.input, args.output) else {
        anyhow::bail!("input and output paths are required");
    };
    log::debug!("Converting {} with {options:?}", input.display());
    libwamap::convert(&input, &output, args.template.as_deref(), &options)
        .with_context(|| format!("could not create map from {}", input.display()))?;
    log::info!("Created W:A map: {}", output.display());
    Ok(())
}
