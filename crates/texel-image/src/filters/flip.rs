/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Flip every row around its vertical center line
///
/// ```text
///
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
pub fn flip_horizontal(in_out_image: &mut [u8], width: usize, pixel_size: usize) {
    let stride = width * pixel_size;

    if stride == 0 {
        return;
    }
    for row in in_out_image.chunks_exact_mut(stride) {
        let (left_to_right, right_to_left) = row.split_at_mut((width / 2) * pixel_size);

        // iterate and swap
        for (ltr, rtl) in left_to_right
            .chunks_exact_mut(pixel_size)
            .zip(right_to_left.rchunks_exact_mut(pixel_size))
        {
            ltr.swap_with_slice(rtl);
        }
    }
}

/// Flip an image on the horizontal axis
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
pub fn flip_vertical(in_out_image: &mut [u8], width: usize, height: usize, pixel_size: usize) {
    let stride = width * pixel_size;

    if stride == 0 {
        return;
    }
    let (top, bottom) = in_out_image.split_at_mut((height / 2) * stride);

    for (t, b) in top
        .chunks_exact_mut(stride)
        .zip(bottom.rchunks_exact_mut(stride))
    {
        t.swap_with_slice(b);
    }
}

#[cfg(test)]
mod tests {
    use crate::filters::flip::{flip_horizontal, flip_vertical};

    #[test]
    fn horizontal_keeps_pixel_bytes_together() {
        // 3x1, two bytes per pixel
        let mut data = [1, 2, 3, 4, 5, 6];
        flip_horizontal(&mut data, 3, 2);
        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn vertical_with_odd_height() {
        let mut data = [1, 1, 2, 2, 3, 3];
        flip_vertical(&mut data, 2, 3, 1);
        assert_eq!(data, [3, 3, 2, 2, 1, 1]);
    }
}
