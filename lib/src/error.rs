use std::io;

/// An invalid conversion parameter.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum OptionError {
    #[error("max colours must be an integer between 1 and {}", crate::MaxColours::MAX)]
    MaxColours,
    #[error("colour must be three integers")]
    Colour,
    #[error("colour values must be between 0 and 255")]
    ColourRange,
}

/// Error returned by map conversion.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to reduce colours: {0}")]
    Quantize(#[from] imagequant::Error),
    #[error("failed to encode map: {0}")]
    Encode(#[from] png::EncodingError),
}
