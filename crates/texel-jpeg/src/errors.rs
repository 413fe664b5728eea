/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Contains most common errors that may be encountered in encoding a JPEG image

use core::fmt::{Debug, Display, Formatter};

use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::ZByteIoError;
use texel_core::colorspace::ColorSpace;

/// Errors possible during encoding
pub enum JpegEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only 8 bit samples can be encoded
    UnsupportedDepth(BitDepth),
    /// Too large dimensions
    /// The dimension cannot be stored in the frame header's 16 bit fields
    TooLargeDimensions(usize),
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for JpegEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            JpegEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into JPEG, supported ones are {supported:?}")
            }
            JpegEncodeErrors::UnsupportedDepth(depth) => {
                writeln!(f, "Cannot encode {depth:?} images, only 8 bit samples are supported")
            }
            JpegEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, JPEG can only encode images up to {}",
                    u16::MAX
                )
            }
            JpegEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            JpegEncodeErrors::IoErrors(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for JpegEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for JpegEncodeErrors {}

impl From<ZByteIoError> for JpegEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        JpegEncodeErrors::IoErrors(value)
    }
}
