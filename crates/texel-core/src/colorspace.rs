/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information
//!
//! Codecs describe the interleaved byte layout they produce or consume with
//! a [`ColorSpace`], surfaces use the richer [`PixelFormat`](crate::format::PixelFormat).

use crate::format::PixelFormat;

/// Interleaved 8 bit channel layouts the codecs speak
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// YUV colorspace
    YCbCr,
    /// Grayscale colorspace
    Luma,
    /// Grayscale with alpha colorspace
    LumaA,
    /// Blue, Green, Red
    BGR,
    /// Blue, Green, Red, Alpha
    BGRA,
    /// Alpha Red Green Blue
    ARGB,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB | Self::YCbCr | Self::BGR => 3,
            Self::RGBA | Self::BGRA | Self::ARGB => 4,
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Unknown => 0
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA | Self::LumaA | Self::BGRA | Self::ARGB)
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::LumaA | Self::Luma)
    }

    /// Returns the position of the alpha pixel in a pixel
    ///
    /// That is for an array of color components say `[0,1,2,3]` if the image has an alpha channel
    /// and is in RGBA format, this will return `Some(3)`, but for `ARGB` it returns `Some(0)`
    ///
    /// If an image doesn't have an alpha channel returns `None`
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            ColorSpace::RGBA => Some(3),
            ColorSpace::LumaA => Some(1),
            ColorSpace::BGRA => Some(3),
            ColorSpace::ARGB => Some(0),
            _ => None
        }
    }

    /// The 8 bit array pixel format with the same byte layout
    ///
    /// Grayscale layouts have no surface counterpart since
    /// surfaces carry color, they map to `None`
    pub const fn pixel_format(&self) -> Option<PixelFormat> {
        match self {
            ColorSpace::RGB => Some(PixelFormat::RGB8),
            ColorSpace::RGBA => Some(PixelFormat::RGBA8),
            ColorSpace::BGR => Some(PixelFormat::BGR8),
            ColorSpace::BGRA => Some(PixelFormat::BGRA8),
            ColorSpace::ARGB => Some(PixelFormat::ARGB8),
            _ => None
        }
    }
}

/// Encapsulates all colorspaces supported by
/// the library
pub static ALL_COLORSPACES: [ColorSpace; 8] = [
    ColorSpace::RGB,
    ColorSpace::RGBA,
    ColorSpace::LumaA,
    ColorSpace::Luma,
    ColorSpace::BGRA,
    ColorSpace::BGR,
    ColorSpace::YCbCr,
    ColorSpace::ARGB
];
