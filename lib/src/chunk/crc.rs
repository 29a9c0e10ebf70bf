use crc32fast::Hasher;

/// CRC-32 as used by PNG chunks, computed over the chunk type and data.
pub(crate) struct Crc32(Hasher);

impl Crc32 {
    #[inline]
    pub(crate) fn new() -> Self {
        Self(Hasher::new())
    }

    #[inline]
    pub(crate) fn update(&mut self, buf: &[u8]) {
        self.0.update(buf)
    }

    #[inline]
    pub(crate) fn finalize(self) -> u32 {
        self.0.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iend_crc() {
        let mut crc = Crc32::new();
        crc.update(b"IEND");
        assert_eq!(crc.finalize(), 0xAE42_6082);
    }
}
