/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Rotate an image by 180 degrees in place
pub fn rotate_180(in_out_image: &mut [u8], pixel_size: usize) {
    if pixel_size == 0 {
        return;
    }
    let pixels = in_out_image.len() / pixel_size;
    let (top, bottom) = in_out_image.split_at_mut((pixels / 2) * pixel_size);

    for (a, b) in top
        .chunks_exact_mut(pixel_size)
        .zip(bottom.rchunks_exact_mut(pixel_size))
    {
        a.swap_with_slice(b);
    }
}

/// Rotate an image by 90 degrees clockwise
///
/// The output is `height` pixels wide and `width` pixels tall.
///
/// ```text
///
///old image     new image
///┌─────┐       ┌─────┐
///│a b c│       │d a  │
///│d e f│       │e b  │
///└─────┘       │f c  │
///              └─────┘
///```
pub fn rotate_90_cw(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, pixel_size: usize
) {
    for y in 0..height {
        for x in 0..width {
            let src = (y * width + x) * pixel_size;
            // column height-1-y, row x of the rotated image
            let dst = (x * height + (height - 1 - y)) * pixel_size;
            out_image[dst..dst + pixel_size].copy_from_slice(&in_image[src..src + pixel_size]);
        }
    }
}

/// Rotate an image by 90 degrees counter clockwise
///
/// The output is `height` pixels wide and `width` pixels tall.
pub fn rotate_90_ccw(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, pixel_size: usize
) {
    for y in 0..height {
        for x in 0..width {
            let src = (y * width + x) * pixel_size;
            let dst = ((width - 1 - x) * height + y) * pixel_size;
            out_image[dst..dst + pixel_size].copy_from_slice(&in_image[src..src + pixel_size]);
        }
    }
}
