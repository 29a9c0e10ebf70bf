use crate::chunk::{Chunk, ChunkType, MIN_CHUNK_BYTES_SIZE};
use std::io::{self, Write};

/// Writes chunks with a freshly computed length and CRC.
pub struct ChunkWriter<W> {
    w: W,
}

impl<W> ChunkWriter<W> {
    /// Returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W> From<W> for ChunkWriter<W>
where
    W: Write,
{
    #[inline]
    fn from(writer: W) -> Self {
        Self { w: writer }
    }
}

impl<W: Write> ChunkWriter<W> {
    /// Writes raw bytes that are not part of a chunk, such as the PNG signature.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.w.write_all(bytes)?;
        Ok(bytes.len())
    }

    /// Writes one chunk and returns the number of bytes written.
    pub fn write_chunk(&mut self, type_: ChunkType, data: &[u8]) -> io::Result<usize> {
        let chunk = (type_, data);

        // write length
        let length = chunk.length();
        self.w.write_all(&length.to_be_bytes())?;

        // write chunk type
        self.w.write_all(&chunk.ty().0)?;

        // write data
        self.w.write_all(chunk.data())?;

        // write crc32
        self.w.write_all(&chunk.crc().to_be_bytes())?;
        Ok(MIN_CHUNK_BYTES_SIZE + chunk.data().len())
    }
}
