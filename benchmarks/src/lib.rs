/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Noise with smooth gradients mixed in, so codecs see both
/// flat and busy regions
pub fn sample_pixels(width: usize, height: usize, components: usize) -> Vec<u8> {
    let mut rng = WyRand::new_seed(0x7E7E1);
    let mut pixels = vec![0_u8; width * height * components];

    for (i, pix) in pixels.chunks_exact_mut(components).enumerate() {
        let (x, y) = (i % width, i / width);

        if (x / 64 + y / 64) % 2 == 0 {
            rng.fill_bytes(&mut *pix);
        } else {
            pix.fill(((x + y) % 256) as u8);
        }
    }
    pixels
}
