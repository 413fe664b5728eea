/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::ZByteIoError;
use texel_core::colorspace::ColorSpace;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// A valid BMP feature this decoder does not handle,
    /// e.g RLE compression or an unknown header size
    UnsupportedFormat(&'static str),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// The palette is missing, too large, or a pixel
    /// refers to an entry it does not have
    BadPalette(&'static str),
    /// Header fields contradict each other
    CorruptData(&'static str),
    /// The output buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Generic allocated message
    Generic(String),
    /// A calculation overflowed
    OverFlowOccurred,
    IoErrors(ZByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::UnsupportedFormat(format) => {
                writeln!(f, "Unsupported BMP: {format}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::BadPalette(reason) => {
                writeln!(f, "Bad palette: {reason}")
            }
            Self::CorruptData(reason) => {
                writeln!(f, "Corrupt BMP: {reason}")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::Generic(message) => {
                writeln!(f, "{}", message)
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpDecoderErrors {}

impl From<ZByteIoError> for BmpDecoderErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

/// BMP errors that can occur during encoding
pub enum BmpEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only 8 bit input can be encoded
    UnsupportedDepth(BitDepth),
    /// The dimension does not fit the header's signed 32 bit fields
    TooLargeDimensions(usize),
    Generic(&'static str),
    IoError(ZByteIoError)
}

impl Debug for BmpEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BmpEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into BMP, supported ones are {supported:?}")
            }
            BmpEncodeErrors::UnsupportedDepth(depth) => {
                writeln!(f, "Cannot encode {depth:?} images into BMP, only 8 bit images are supported")
            }
            BmpEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, BMP can only encode images less than {}",
                    i32::MAX
                )
            }
            BmpEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            BmpEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for BmpEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpEncodeErrors {}

impl From<ZByteIoError> for BmpEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
