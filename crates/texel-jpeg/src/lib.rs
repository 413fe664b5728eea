/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A baseline JPEG encoder
//!
//! This crate writes sequential, Huffman coded JPEG files using the
//! standard Huffman tables of the JPEG specification (Annex K) and the
//! standard quantization tables scaled by a quality factor.
//!
//! # Features
//! - Qualities 1 to 100, 4:2:0 chroma subsampling up to quality 90
//!   and full resolution chroma above it
//! - RGB(A), BGR(A), ARGB and grayscale input, alpha is dropped
//! - Any dimension up to 65535, edge blocks repeat the last row and column
//! - Writes to any [`ZByteWriterTrait`](texel_core::bytestream::ZByteWriterTrait) sink
//!
//! # Example
//! ```
//! use texel_core::bit_depth::BitDepth;
//! use texel_core::colorspace::ColorSpace;
//! use texel_core::options::EncoderOptions;
//! use texel_jpeg::JpegEncoder;
//!
//! let pixels = vec![128_u8; 16 * 16 * 3];
//! let options = EncoderOptions::new(16, 16, ColorSpace::RGB, BitDepth::Eight).set_quality(90);
//! let mut sink = vec![];
//! let size = JpegEncoder::new(&pixels, options).encode(&mut sink).unwrap();
//! assert_eq!(size, sink.len());
//! assert_eq!(&sink[..2], &[0xFF, 0xD8]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::encoder::JpegEncoder;
pub use crate::errors::JpegEncodeErrors;

pub mod bitstream;
mod color_convert;
mod encoder;
mod errors;
mod fdct;
pub mod huffman;
mod misc;
mod quant;
