/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw buffer operations behind [`Surface`](crate::surface::Surface)
//!
//! Geometric operations treat a pixel as an opaque group of `pixel_size`
//! bytes and never look inside it. Resampling looks inside through the
//! pixel format, per element for array formats and through the pixel
//! codec for packed ones.
pub mod crop;
pub mod flip;
pub mod mipmap;
pub mod resize;
pub mod rotate;
