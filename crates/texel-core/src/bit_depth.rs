/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth, information and manipulations

/// The image bit depth.
///
/// Codecs in this family move 8 bit samples, surfaces
/// use wider storage through their pixel format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth
    ///
    /// Images with such bit depths use [`u16`] to store values and use the whole range
    /// i.e 0-65535
    ///
    /// Data is stored and processed in native endian.
    Sixteen,
    /// Floating point depth, values are nominally in 0.0-1.0
    ///
    /// Data is stored and processed in native endian.
    Float32,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Get the max value supported by the bit depth
    ///
    /// Floats are normalized so their max is 1, reported as 1
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => u8::MAX as u16,
            Self::Sixteen => u16::MAX,
            Self::Float32 => 1,
            Self::Unknown => 0
        }
    }

    /// Get the number of bytes needed to store a sample of this depth
    ///
    /// ```
    /// use texel_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Sixteen.size_of(),2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Float32 => 4,
            Self::Unknown => 0
        }
    }
}
