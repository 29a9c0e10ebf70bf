use crate::{
    encode::write_indexed,
    error::ConvertError,
    options::ConvertOptions,
    quantize::Quantizer,
    splice::copy_level_chunk,
};
use image::{DynamicImage, Rgba, RgbaImage, imageops::FilterType};
use std::{fs, path::Path};

/// Map sizes are a multiple of this many pixels in each direction.
pub const MAP_ALIGNMENT: u32 = 8;

/// Returns the map size for an image of `width` x `height` pixels.
///
/// Each dimension is rounded down to a multiple of 8, or to 8 when that would
/// leave nothing.
///
/// # Examples
/// ```
/// use libwamap::map_dimensions;
///
/// assert_eq!(map_dimensions(1921, 1080), (1920, 1080));
/// assert_eq!(map_dimensions(5, 17), (8, 16));
/// ```
#[inline]
pub const fn map_dimensions(width: u32, height: u32) -> (u32, u32) {
    const fn align(v: u32) -> u32 {
        match v / MAP_ALIGNMENT * MAP_ALIGNMENT {
            0 => MAP_ALIGNMENT,
            v => v,
        }
    }
    (align(width), align(height))
}

/// Encodes `image` as a colour map PNG.
///
/// The image is resized to [`map_dimensions`] with nearest neighbour sampling,
/// pixels matching the transparent colour are masked out, the rest are reduced
/// to at most `max_colours` colours. When transparency is enabled, one extra
/// palette entry holding the transparent colour is appended and every masked
/// pixel points at it.
pub fn encode_map(image: &DynamicImage, options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    let mut rgba = image.to_rgba8();
    let (width, height) = map_dimensions(rgba.width(), rgba.height());
    if (width, height) != rgba.dimensions() {
        log::debug!(
            "Resizing {}x{} to {width}x{height}",
            rgba.width(),
            rgba.height()
        );
        rgba = image::imageops::resize(&rgba, width, height, FilterType::Nearest);
    }
    apply_transparency(&mut rgba, options);

    let quantizer = Quantizer::new(options.max_colours().get(), options.dither());
    let mut indexed = quantizer.quantize(&rgba)?;
    log::debug!("Reduced to {} colours", indexed.palette.len());

    let transparent_index = options.transparent_colour().map(|colour| {
        let index = indexed.palette.len() as u8;
        indexed.palette.push(colour);
        for (idx, px) in indexed.indices.iter_mut().zip(rgba.pixels()) {
            if px.0[3] == 0 {
                *idx = index;
            }
        }
        index
    });

    let mut out = Vec::new();
    write_indexed(
        &mut out,
        (width, height),
        &indexed.palette,
        transparent_index,
        &indexed.indices,
    )?;
    Ok(out)
}

/// Rewrites alpha: 0 where RGB equals the transparent colour, 255 elsewhere.
fn apply_transparency(image: &mut RgbaImage, options: &ConvertOptions) {
    let key = options.transparent_colour();
    for Rgba([r, g, b, a]) in image.pixels_mut() {
        let hidden = key.is_some_and(|key| key.0 == [*r, *g, *b]);
        *a = if hidden { 0 } else { u8::MAX };
    }
}

/// Converts the image at `input` into a map written to `output`.
///
/// When `template` names an existing file, its `w2lv`/`waLV` chunk is copied
/// into the output. Any existing file at `output` is overwritten. Nothing is
/// written when conversion fails.
pub fn convert<I, O>(
    input: I,
    output: O,
    template: Option<&Path>,
    options: &ConvertOptions,
) -> Result<(), ConvertError>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    fn inner(
        input: &Path,
        output: &Path,
        template: Option<&Path>,
        options: &ConvertOptions,
    ) -> Result<(), ConvertError> {
        log::debug!("Reading {}", input.display());
        let image = image::ImageReader::open(input)?
            .with_guessed_format()?
            .decode()?;
        let mut png = encode_map(&image, options)?;
        match template {
            Some(path) if path.is_file() => {
                let template = fs::read(path)?;
                png = copy_level_chunk(png, &template);
            }
            Some(path) => log::warn!("Template {} is not a file, ignoring", path.display()),
            None => {}
        }
        fs::write(output, png)?;
        Ok(())
    }
    inner(input.as_ref(), output.as_ref(), template, options)
}
