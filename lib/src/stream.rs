use crate::chunk::{Chunk, ChunkType, RawChunk, split_chunk_from_slice};
use std::iter::FusedIterator;

/// The magic number every PNG file starts with.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

/// Returns `true` when `bytes` starts with [`PNG_SIGNATURE`].
#[inline]
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(PNG_SIGNATURE)
}

/// A chunk located inside a PNG byte stream.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChunkSpan<'a> {
    offset: usize,
    chunk: RawChunk<&'a [u8]>,
    raw: &'a [u8],
}

impl<'a> ChunkSpan<'a> {
    /// Byte offset of the chunk's length field from the start of the stream.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The parsed chunk, carrying its CRC as stored.
    #[inline]
    pub fn chunk(&self) -> &RawChunk<&'a [u8]> {
        &self.chunk
    }

    /// The complete chunk bytes: length, type, data and CRC.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }
}

impl Chunk for ChunkSpan<'_> {
    #[inline]
    fn length(&self) -> u32 {
        self.chunk.length()
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.chunk.ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        self.chunk.data()
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.chunk.crc()
    }
}

/// Iterator over the chunks of a PNG byte stream, see [`chunks`].
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = ChunkSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.offset..)?;
        match split_chunk_from_slice(rest) {
            Ok((chunk, remaining)) => {
                let len = rest.len() - remaining.len();
                let span = ChunkSpan {
                    offset: self.offset,
                    chunk,
                    raw: &rest[..len],
                };
                self.offset += len;
                Some(span)
            }
            Err(_) => {
                self.offset = self.bytes.len() + 1;
                None
            }
        }
    }
}

impl FusedIterator for Chunks<'_> {}

/// Scans the chunks of a PNG byte stream in file order.
///
/// The scan starts right after the 8-byte signature, which is skipped without
/// being checked. Chunks are treated as opaque byte ranges and their CRCs are
/// not verified. Scanning stops at the first chunk whose declared length runs
/// past the end of `bytes`.
///
/// # Examples
/// ```
/// use libwamap::{ChunkType, ChunkWriter, PNG_SIGNATURE, chunks, prelude::*};
///
/// let mut writer = ChunkWriter::from(Vec::new());
/// writer.write_raw(PNG_SIGNATURE).unwrap();
/// writer.write_chunk(ChunkType::waLV, b"level").unwrap();
/// writer.write_chunk(ChunkType::IEND, &[]).unwrap();
/// let bytes = writer.into_inner();
///
/// let types = chunks(&bytes).map(|c| c.ty()).collect::<Vec<_>>();
/// assert_eq!(types, [ChunkType::waLV, ChunkType::IEND]);
/// ```
#[inline]
pub fn chunks(bytes: &[u8]) -> Chunks<'_> {
    Chunks {
        bytes,
        offset: PNG_SIGNATURE.len(),
    }
}
