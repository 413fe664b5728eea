/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB to YCbCr conversion of one MCU
use texel_core::colorspace::ColorSpace;

/// Byte offsets of red, green and blue inside one pixel.
///
/// Grayscale inputs read channel zero for all three.
pub const fn channel_offsets(colorspace: ColorSpace) -> Option<[usize; 3]> {
    match colorspace {
        ColorSpace::RGB | ColorSpace::RGBA => Some([0, 1, 2]),
        ColorSpace::BGR | ColorSpace::BGRA => Some([2, 1, 0]),
        ColorSpace::ARGB => Some([1, 2, 3]),
        ColorSpace::Luma | ColorSpace::LumaA => Some([0, 0, 0]),
        _ => None
    }
}

#[inline(always)]
pub fn rgb_to_ycbcr(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b - 128.0;
    let cb = -0.168_74 * r - 0.331_26 * g + 0.5 * b;
    let cr = 0.5 * r - 0.418_69 * g - 0.081_31 * b;
    (y, cb, cr)
}

/// Where an MCU reads its pixels from
pub struct McuSource<'a> {
    pub pixels:     &'a [u8],
    pub width:      usize,
    pub height:     usize,
    pub components: usize,
    pub offsets:    [usize; 3]
}

impl McuSource<'_> {
    /// Convert the `size`x`size` square whose top left corner is `(x, y)`.
    ///
    /// Samples past the right or bottom edge repeat the last column or row.
    /// Output planes are `size` samples wide.
    pub fn convert(
        &self, x: usize, y: usize, size: usize, luma: &mut [f32], cb: &mut [f32], cr: &mut [f32]
    ) {
        let [r_off, g_off, b_off] = self.offsets;
        let stride = self.width * self.components;

        for row in 0..size {
            let src_row = (y + row).min(self.height - 1);
            let base = src_row * stride;

            for col in 0..size {
                let src_col = (x + col).min(self.width - 1);
                let p = base + src_col * self.components;
                let pos = row * size + col;

                let (l, u, v) = rgb_to_ycbcr(
                    f32::from(self.pixels[p + r_off]),
                    f32::from(self.pixels[p + g_off]),
                    f32::from(self.pixels[p + b_off])
                );
                luma[pos] = l;
                cb[pos] = u;
                cr[pos] = v;
            }
        }
    }
}

/// Average 2x2 neighbourhoods of a 16x16 plane into an 8x8 block.
pub fn downsample_420(plane: &[f32; 256], out: &mut [f32; 64]) {
    for (pos, out) in out.iter_mut().enumerate() {
        let (yy, xx) = (pos / 8, pos % 8);
        let j = yy * 32 + xx * 2;
        *out = (plane[j] + plane[j + 1] + plane[j + 16] + plane[j + 17]) * 0.25;
    }
}
