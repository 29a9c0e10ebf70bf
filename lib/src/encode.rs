use image::Rgb;
use png::{BitDepth, ColorType, Encoder, EncodingError};
use std::io::Write;

/// Writes an 8-bit palette PNG.
///
/// When `transparent` is set, a `tRNS` chunk marks that palette entry fully
/// transparent and every entry before it fully opaque.
pub(crate) fn write_indexed<W: Write>(
    w: W,
    (width, height): (u32, u32),
    palette: &[Rgb<u8>],
    transparent: Option<u8>,
    indices: &[u8],
) -> Result<(), EncodingError> {
    let mut encoder = Encoder::new(w, width, height);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_palette(palette.iter().flat_map(|c| c.0).collect::<Vec<_>>());
    if let Some(index) = transparent {
        let mut trns = vec![u8::MAX; usize::from(index) + 1];
        trns[usize::from(index)] = 0;
        encoder.set_trns(trns);
    }
    let mut writer = encoder.write_header()?;
    writer.write_image_data(indices)?;
    writer.finish()
}
