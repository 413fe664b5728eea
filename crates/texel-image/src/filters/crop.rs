/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use texel_core::geometry::Rect;

/// Crop an image
///
/// ```text
///
///old image     crop(x=1,y=0,width=2,height=2)
///┌─────────┐   ┌─────┐
///│a b c d e│   │b c  │
///│f g h i j│   │g h  │
///│k l m n o│   └─────┘
///└─────────┘
///```
///
/// `rect` must lie inside the image, see [`Rect::clip`].
///
/// # Arguments
/// - in_image: Input image, `in_width * pixel_size` bytes per row
/// - out_image: Output, must be exactly `rect.width * rect.height * pixel_size` bytes
pub fn crop(
    in_image: &[u8], in_width: usize, pixel_size: usize, out_image: &mut [u8], rect: Rect
) {
    let in_stride = in_width * pixel_size;
    let out_stride = rect.width * pixel_size;

    if in_stride == 0 || out_stride == 0 {
        // these generate panic paths for chunks_exact so just eliminate them
        return;
    }
    for (single_in_width, single_out_width) in in_image
        .chunks_exact(in_stride)
        .skip(rect.y)
        .zip(out_image.chunks_exact_mut(out_stride))
    {
        let start = rect.x * pixel_size;
        single_out_width.copy_from_slice(&single_in_width[start..start + out_stride]);
    }
}
