/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use texel_core::colorspace::ColorSpace;

/// Size of the `BITMAPFILEHEADER`, the info header follows it
pub(crate) const FILE_HEADER_SIZE: u32 = 14;

/// Info header sizes the decoder understands
///
/// - 12: OS/2 `BITMAPCOREHEADER`
/// - 40: `BITMAPINFOHEADER`
/// - 56: `BITMAPV3INFOHEADER`
/// - 108: `BITMAPV4HEADER`
/// - 124: `BITMAPV5HEADER`
pub(crate) const SUPPORTED_HEADER_SIZES: [u32; 5] = [12, 40, 56, 108, 124];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    BITFIELDS,
    Unknown
}

impl BmpCompression {
    /// Map the header's compression field
    ///
    /// Returns `None` for the RLE schemes and anything newer,
    /// none of which are supported.
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            3 => Some(BmpCompression::BITFIELDS),
            _ => None
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpPixelFormat {
    None,
    /// 1, 2, 4 or 8 bit indices into a palette
    PAL8,
    /// 24 bit BGR or masked data without alpha
    RGB,
    /// Masked data with an alpha mask
    RGBA
}

impl BmpPixelFormat {
    pub fn num_components(&self) -> usize {
        match self {
            BmpPixelFormat::None => 0,
            BmpPixelFormat::PAL8 | BmpPixelFormat::RGB => 3,
            BmpPixelFormat::RGBA => 4
        }
    }
    pub fn into_colorspace(self) -> ColorSpace {
        match self {
            BmpPixelFormat::None => ColorSpace::Unknown,
            BmpPixelFormat::PAL8 | BmpPixelFormat::RGB => ColorSpace::RGB,
            BmpPixelFormat::RGBA => ColorSpace::RGBA
        }
    }
}
