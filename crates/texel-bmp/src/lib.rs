/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A small BMP decoder
//!
//! This crate features a BMP decoder for the uncompressed and
//! bitfield flavours of the format, which covers what most
//! programs write, and an encoder writing uncompressed files.
//!
//! # Features
//! - `no_std` by default with `alloc` feature
//! - Reads from any [`ZByteReaderTrait`](texel_core::bytestream::ZByteReaderTrait) source
//! - Bottom-up and top-down images
//!
//! # Supported formats
//! - Paletted images (1 bit, 2 bits, 4 bits and 8 bits)
//! - 24 bit BGR images
//! - Masked images (16 bit and 32 bit formats)
//!
//! # Unsupported formats
//! - RLE compressed images
//! - Embedded PNG and JPEGs
//!
//! Output is always 8 bit RGB or RGBA, top row first.
#![no_std]
#![macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncodeErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
mod utils;
