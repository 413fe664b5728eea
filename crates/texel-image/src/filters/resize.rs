/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Nearest neighbour and bilinear resampling
use texel_core::color::Color;
use texel_core::format::{PixelFormat, StorageClass};
use texel_core::pixel::{decode_pixel, encode_pixel, read_element, write_element};

/// Resampling methods understood by [`Surface::resize`](crate::surface::Surface::resize)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Copy the closest source pixel, exact for any format
    Nearest,
    /// Weighted mix of the four surrounding source pixels
    Bilinear
}

/// Resize an image by copying the nearest source pixel
///
/// Destination `(x, y)` samples source `(x * in_width / out_width, y * in_height / out_height)`.
/// A source with no pixels zero fills the destination.
pub fn nearest(
    in_image: &[u8], out_image: &mut [u8], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize, pixel_size: usize
) {
    if in_width == 0 || in_height == 0 {
        out_image.fill(0);
        return;
    }
    let out_stride = out_width * pixel_size;

    if out_stride == 0 {
        return;
    }
    for (y, out_row) in out_image
        .chunks_exact_mut(out_stride)
        .take(out_height)
        .enumerate()
    {
        let src_y = y * in_height / out_height;
        let in_row = &in_image[src_y * in_width * pixel_size..];

        for (x, out_px) in out_row.chunks_exact_mut(pixel_size).enumerate() {
            let src_x = x * in_width / out_width;
            let start = src_x * pixel_size;
            out_px.copy_from_slice(&in_row[start..start + pixel_size]);
        }
    }
}

/// Source position of one destination index along an axis
#[derive(Copy, Clone, Debug)]
struct AxisWeight {
    index: usize,
    // 0 at the last source index so the second neighbour repeats the first
    next:  usize,
    frac:  f64
}

#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn axis_weights(in_dim: usize, out_dim: usize) -> Vec<AxisWeight> {
    let scale = in_dim as f64 / out_dim as f64;

    (0..out_dim)
        .map(|i| {
            let coord = (i as f64 * scale - 0.5).max(0.0);
            let index = (coord as usize).min(in_dim - 1);
            let frac = coord - index as f64;
            let next = usize::from(index + 1 < in_dim);

            AxisWeight { index, next, frac }
        })
        .collect()
}

/// Write the weighted sum of `samples` into `out`
///
/// Array formats are mixed element by element, integer elements rounded and
/// clamped to their range. Packed formats go through the pixel codec since
/// their channels do not sit on byte boundaries.
pub(crate) fn blend_pixels(format: PixelFormat, samples: &[(&[u8], f64)], out: &mut [u8]) {
    match format.storage_class() {
        StorageClass::Packed => {
            let mut acc = [0.0_f64; 4];

            for (raw, weight) in samples {
                let color = decode_pixel(raw, format).to_array();
                for (a, c) in acc.iter_mut().zip(color) {
                    *a += f64::from(c) * weight;
                }
            }
            let mixed = Color::new(acc[0] as f32, acc[1] as f32, acc[2] as f32, acc[3] as f32);
            encode_pixel(mixed, format, out);
        }
        StorageClass::ArrayUint | StorageClass::ArrayFloat => {
            for element in 0..format.channel_count() {
                let sum = samples
                    .iter()
                    .map(|(raw, weight)| read_element(raw, format, element) * weight)
                    .sum();
                write_element(out, format, element, sum);
            }
        }
        StorageClass::Unknown => ()
    }
}

/// Resize an image with bilinear interpolation
///
/// Source coordinates are `dst_index * in_dim / out_dim - 0.5`, clamped at zero,
/// so edge pixels repeat rather than reading outside the image.
pub fn bilinear(
    in_image: &[u8], out_image: &mut [u8], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize, format: PixelFormat
) {
    let pixel_size = format.pixel_size();

    if in_width == 0 || in_height == 0 {
        out_image.fill(0);
        return;
    }
    if out_width == 0 || out_height == 0 || pixel_size == 0 {
        return;
    }
    let x_weights = axis_weights(in_width, out_width);
    let y_weights = axis_weights(in_height, out_height);

    let in_stride = in_width * pixel_size;
    let pixel_at = |x: usize, y: usize| {
        let start = y * in_stride + x * pixel_size;
        &in_image[start..start + pixel_size]
    };

    for (out_row, yw) in out_image
        .chunks_exact_mut(out_width * pixel_size)
        .zip(&y_weights)
    {
        let (y0, y1) = (yw.index, yw.index + yw.next);

        for (out_px, xw) in out_row.chunks_exact_mut(pixel_size).zip(&x_weights) {
            let (x0, x1) = (xw.index, xw.index + xw.next);
            let (a, b) = (xw.frac, yw.frac);

            let samples = [
                (pixel_at(x0, y0), (1.0 - a) * (1.0 - b)),
                (pixel_at(x1, y0), a * (1.0 - b)),
                (pixel_at(x0, y1), (1.0 - a) * b),
                (pixel_at(x1, y1), a * b)
            ];
            blend_pixels(format, &samples, out_px);
        }
    }
}
