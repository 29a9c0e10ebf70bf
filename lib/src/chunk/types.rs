use std::fmt::{self, Display, Formatter};

/// A 4-byte chunk type code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Palette
    pub const PLTE: ChunkType = ChunkType(*b"PLTE");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image end
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    // -- Auxiliary chunks --
    /// Palette transparency
    #[allow(non_upper_case_globals)]
    pub const tRNS: ChunkType = ChunkType(*b"tRNS");
    /// Worms Armageddon landscape settings, as written by Worms World Party
    #[allow(non_upper_case_globals)]
    pub const w2lv: ChunkType = ChunkType(*b"w2lv");
    /// Worms Armageddon landscape settings
    #[allow(non_upper_case_globals)]
    pub const waLV: ChunkType = ChunkType(*b"waLV");

    /// Compares two chunk types ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use libwamap::ChunkType;
    ///
    /// assert!(ChunkType(*b"WALV").eq_ignore_ascii_case(&ChunkType::waLV));
    /// assert!(!ChunkType::IEND.eq_ignore_ascii_case(&ChunkType::IDAT));
    /// ```
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &ChunkType) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Critical chunks have an uppercase first letter.
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.0[0] & 0x20 == 0
    }

    /// Private chunks have a lowercase second letter.
    #[inline]
    pub const fn is_private(&self) -> bool {
        self.0[1] & 0x20 != 0
    }

    /// Safe-to-copy chunks have a lowercase fourth letter.
    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 0x20 != 0
    }
}

impl Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if self.0.iter().all(u8::is_ascii_graphic) => Display::fmt(s, f),
            _ => self
                .0
                .iter()
                .try_for_each(|b| write!(f, "{}", b.escape_ascii())),
        }
    }
}
