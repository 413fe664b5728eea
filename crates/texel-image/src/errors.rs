/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during surface processing
use std::fmt::{Debug, Display, Formatter};

use texel_core::colorspace::ColorSpace;

/// All possible surface errors that can occur.
pub enum ImageErrors {
    /// The buffer length does not match what the
    /// dimensions and format require
    ///
    /// # Arguments
    /// - expected length
    /// - found length
    DimensionsMisMatch(usize, usize),
    /// A palette was empty or larger than its index format can address
    ///
    /// # Arguments
    /// - palette length
    /// - largest allowed length
    BadPalette(usize, usize),
    /// A codec layout that has no pixel format counterpart
    UnsupportedColorspace(ColorSpace),
    GenericStr(&'static str),
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::BadPalette(found, max) => {
                writeln!(
                    f,
                    "Invalid palette size {found}, palettes must hold between 1 and {max} colors"
                )
            }
            Self::UnsupportedColorspace(colorspace) => {
                writeln!(f, "Colorspace {colorspace:?} has no pixel format")
            }
            Self::GenericStr(err) => writeln!(f, "{err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStr(value)
    }
}

impl From<String> for ImageErrors {
    fn from(value: String) -> Self {
        Self::GenericString(value)
    }
}
