use image::{Rgb, RgbImage};
use libwamap::{ChunkType, ChunkWriter, PNG_SIGNATURE};
use std::{fs, path::Path};

/// Writes a 20x12 picture: black border column on the left, colours elsewhere.
pub fn write_picture(path: &Path) {
    RgbImage::from_fn(20, 12, |x, y| {
        if x < 4 {
            Rgb([0, 0, 0])
        } else {
            Rgb([(x * 12) as u8 | 1, (y * 20) as u8, 128])
        }
    })
    .save(path)
    .unwrap();
}

/// Writes a minimal map file carrying a `waLV` chunk and returns that chunk's bytes.
pub fn write_template(path: &Path, settings: &[u8]) -> Vec<u8> {
    let mut writer = ChunkWriter::from(Vec::new());
    writer.write_raw(PNG_SIGNATURE).unwrap();
    writer.write_chunk(ChunkType::IHDR, &[0; 13]).unwrap();
    let start = PNG_SIGNATURE.len() + 12 + 13;
    writer.write_chunk(ChunkType::waLV, settings).unwrap();
    writer.write_chunk(ChunkType::IEND, &[]).unwrap();
    let bytes = writer.into_inner();
    fs::write(path, &bytes).unwrap();
    bytes[start..start + 12 + settings.len()].to_vec()
}
