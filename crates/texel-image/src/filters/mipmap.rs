/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box filtered mip chains
use texel_core::format::PixelFormat;

use crate::filters::resize::blend_pixels;

/// Halve an image by averaging each 2x2 block
///
/// The output is `in_width / 2` by `in_height / 2`. Blocks on an odd edge
/// repeat their last row or column.
pub fn box_half(
    in_image: &[u8], out_image: &mut [u8], in_width: usize, in_height: usize, format: PixelFormat
) {
    let pixel_size = format.pixel_size();
    let (out_width, out_height) = (in_width / 2, in_height / 2);

    if out_width == 0 || out_height == 0 || pixel_size == 0 {
        return;
    }
    let in_stride = in_width * pixel_size;
    let pixel_at = |x: usize, y: usize| {
        let start = y * in_stride + x * pixel_size;
        &in_image[start..start + pixel_size]
    };

    for (y, out_row) in out_image
        .chunks_exact_mut(out_width * pixel_size)
        .take(out_height)
        .enumerate()
    {
        let y0 = y * 2;
        let y1 = (y0 + 1).min(in_height - 1);

        for (x, out_px) in out_row.chunks_exact_mut(pixel_size).enumerate() {
            let x0 = x * 2;
            let x1 = (x0 + 1).min(in_width - 1);

            let samples = [
                (pixel_at(x0, y0), 0.25),
                (pixel_at(x1, y0), 0.25),
                (pixel_at(x0, y1), 0.25),
                (pixel_at(x1, y1), 0.25)
            ];
            blend_pixels(format, &samples, out_px);
        }
    }
}
