use crate::{
    chunk::{Chunk, ChunkType},
    stream::chunks,
};

/// Chunk types the game stores landscape settings in.
pub const LEVEL_CHUNK_TYPES: [ChunkType; 2] = [ChunkType::w2lv, ChunkType::waLV];

/// Returns the raw bytes (length, type, data and CRC) of the first chunk whose
/// type matches one of `names`, ignoring ASCII case.
///
/// A trailing chunk whose declared length runs past the end of `data` is
/// never matched, even when its type is one of `names`.
///
/// # Examples
/// ```
/// use libwamap::{ChunkType, ChunkWriter, PNG_SIGNATURE, find_chunk};
///
/// let mut writer = ChunkWriter::from(Vec::new());
/// writer.write_raw(PNG_SIGNATURE).unwrap();
/// writer.write_chunk(ChunkType(*b"WALV"), b"level").unwrap();
/// writer.write_chunk(ChunkType::IEND, &[]).unwrap();
/// let bytes = writer.into_inner();
///
/// let chunk = find_chunk(&bytes, &[ChunkType::waLV]).unwrap();
/// assert_eq!(&chunk[4..8], b"WALV");
/// assert!(find_chunk(&bytes, &[ChunkType::tRNS]).is_none());
/// ```
pub fn find_chunk<'a>(data: &'a [u8], names: &[ChunkType]) -> Option<&'a [u8]> {
    chunks(data)
        .find(|span| names.iter().any(|name| span.ty().eq_ignore_ascii_case(name)))
        .map(|span| span.as_bytes())
}

/// Inserts `chunk` immediately before the `IEND` chunk of `png`.
///
/// When no `IEND` chunk can be found the chunk is appended instead. A
/// truncated `IEND` at the end of `png` does not count as found.
pub fn insert_before_iend(png: &[u8], chunk: &[u8]) -> Vec<u8> {
    let at = chunks(png)
        .find(|span| span.ty() == ChunkType::IEND)
        .map_or(png.len(), |span| span.offset());
    let mut out = Vec::with_capacity(png.len() + chunk.len());
    out.extend_from_slice(&png[..at]);
    out.extend_from_slice(chunk);
    out.extend_from_slice(&png[at..]);
    out
}

/// Copies the landscape settings chunk of `template` into `png`.
///
/// Returns `png` unchanged when the template carries no such chunk.
pub fn copy_level_chunk(png: Vec<u8>, template: &[u8]) -> Vec<u8> {
    match find_chunk(template, &LEVEL_CHUNK_TYPES) {
        Some(chunk) => {
            log::debug!("Copying {} byte level chunk from template", chunk.len());
            insert_before_iend(&png, chunk)
        }
        None => {
            log::debug!("Template has no w2lv/waLV chunk");
            png
        }
    }
}
