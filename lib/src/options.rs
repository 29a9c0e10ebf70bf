use crate::error::OptionError;
use image::Rgb;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Upper bound on the number of opaque palette entries a map may use.
///
/// The game reserves the rest of the 256 entry palette for its own sprites;
/// one further entry may be used for transparency.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MaxColours(u8);

impl MaxColours {
    /// Largest accepted value.
    pub const MAX: u8 = 112;

    /// Returns `None` unless `1 <= value <= 112`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for MaxColours {
    #[inline]
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl Display for MaxColours {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for MaxColours {
    type Error = OptionError;

    #[inline]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(OptionError::MaxColours)
    }
}

impl FromStr for MaxColours {
    type Err = OptionError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|_| OptionError::MaxColours)?;
        Self::try_from(value)
    }
}

/// Parses one colour component, accepting only integers in `0..=255`.
///
/// # Examples
/// ```
/// use libwamap::{OptionError, parse_channel};
///
/// assert_eq!(parse_channel(" 255 "), Ok(255));
/// assert_eq!(parse_channel("256"), Err(OptionError::ColourRange));
/// assert_eq!(parse_channel("red"), Err(OptionError::Colour));
/// ```
pub fn parse_channel(s: &str) -> Result<u8, OptionError> {
    let value = s.trim().parse::<i64>().map_err(|_| OptionError::Colour)?;
    u8::try_from(value).map_err(|_| OptionError::ColourRange)
}

/// Options for converting an image into a map.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConvertOptions {
    max_colours: MaxColours,
    transparent_colour: Option<Rgb<u8>>,
    dither: bool,
}

impl ConvertOptions {
    /// Returns a builder for [ConvertOptions].
    ///
    /// # Examples
    /// ```
    /// use image::Rgb;
    /// use libwamap::{ConvertOptions, MaxColours};
    ///
    /// let options = ConvertOptions::builder()
    ///     .max_colours(MaxColours::new(96).unwrap())
    ///     .transparent_colour(Some(Rgb([255, 0, 255])))
    ///     .dither(true)
    ///     .build();
    /// assert_eq!(options.max_colours().get(), 96);
    /// ```
    #[inline]
    pub const fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder::new()
    }

    /// Converts [ConvertOptions] into a [ConvertOptionsBuilder].
    #[inline]
    pub fn into_builder(self) -> ConvertOptionsBuilder {
        self.into()
    }

    /// Maximum number of opaque palette entries.
    #[inline]
    pub const fn max_colours(&self) -> MaxColours {
        self.max_colours
    }

    /// Colour made fully transparent, or `None` for a solid map.
    #[inline]
    pub const fn transparent_colour(&self) -> Option<Rgb<u8>> {
        self.transparent_colour
    }

    /// Whether error diffusion dithering is applied while reducing colours.
    #[inline]
    pub const fn dither(&self) -> bool {
        self.dither
    }
}

impl Default for ConvertOptions {
    /// 112 colours, black is transparent, no dithering.
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ConvertOptions`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConvertOptionsBuilder {
    max_colours: MaxColours,
    transparent_colour: Option<Rgb<u8>>,
    dither: bool,
}

impl Default for ConvertOptionsBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<ConvertOptions> for ConvertOptionsBuilder {
    #[inline]
    fn from(value: ConvertOptions) -> Self {
        Self {
            max_colours: value.max_colours,
            transparent_colour: value.transparent_colour,
            dither: value.dither,
        }
    }
}

impl ConvertOptionsBuilder {
    const fn new() -> Self {
        Self {
            max_colours: MaxColours(MaxColours::MAX),
            transparent_colour: Some(Rgb([0, 0, 0])),
            dither: false,
        }
    }

    /// Sets the [`MaxColours`].
    #[inline]
    pub fn max_colours(&mut self, max_colours: MaxColours) -> &mut Self {
        self.max_colours = max_colours;
        self
    }

    /// Sets the transparent colour, `None` disables transparency.
    #[inline]
    pub fn transparent_colour(&mut self, colour: Option<Rgb<u8>>) -> &mut Self {
        self.transparent_colour = colour;
        self
    }

    /// Enables or disables dithering.
    #[inline]
    pub fn dither(&mut self, dither: bool) -> &mut Self {
        self.dither = dither;
        self
    }

    /// Creates a new [`ConvertOptions`] from this builder.
    #[inline]
    pub fn build(&self) -> ConvertOptions {
        ConvertOptions {
            max_colours: self.max_colours,
            transparent_colour: self.transparent_colour,
            dither: self.dither,
        }
    }
}
