/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all texel libraries
//!
//! This crate provides the pieces every decoder, encoder and surface
//! in the texel family builds on.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace and bit depth information shared by codecs
//! - Image decoder and encoder options
//! - The pixel format descriptor and the pixel codec that converts
//!   raw pixels to and from a canonical floating point [`Color`](color::Color)
//! - IEEE-754 half float conversion
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables `std::io` readers and writers and `std::error::Error` impls
//!
//!  - `log`: Routes the [`log`] macros to the `log` crate, otherwise they are no-ops
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod color;
pub mod colorspace;
pub mod format;
pub mod geometry;
pub mod half;
pub mod log;
pub mod options;
pub mod pixel;
mod serde;
