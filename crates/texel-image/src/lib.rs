/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel surfaces
//!
//! This crate provides [`Surface`](surface::Surface), a width by height buffer
//! of pixels in any [`PixelFormat`](texel_core::format::PixelFormat), and the
//! operations on it
//!
//! - Pixel access through the canonical [`Color`](texel_core::color::Color)
//! - Format conversion and byte compatible reinterpretation
//! - Flips, rotations and crops
//! - Nearest and bilinear resampling, box filtered mipmaps
//!
//! It also provides palette indexed surfaces with 1, 2, 4 or 8 bit indices
//! and a median cut quantizer that builds them from true color surfaces.
//!
//! # Features
//! - `log`: Log through the `log` crate
//! - `serde-support`: Serialize surface metadata
//! - `std`: Enables the std readers, writers and error impls of texel-core
pub mod errors;
pub mod filters;
pub mod palette;
pub mod quantize;
mod serde;
pub mod surface;

pub use texel_core;
