/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median cut color quantization
//!
//! The distinct colors of a surface start in one box. The box with the widest
//! spread along a single R, G or B axis is sorted along that axis and split in
//! two at its median until there are enough boxes or every box holds a single
//! color. Each box then contributes the mean of its colors to the palette.
//!
//! The process is deterministic, the same surface always gives the same palette.
use std::collections::{HashMap, HashSet};

use texel_core::color::Color;
use texel_core::log::trace;

use crate::errors::ImageErrors;
use crate::palette::{IndexFormat, Palette, PaletteSurface};
use crate::surface::Surface;

fn color_key(color: &Color) -> [u32; 4] {
    color.to_array().map(f32::to_bits)
}

/// Spread of a box along R, G and B
fn extents(colors: &[Color]) -> [f32; 3] {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];

    for color in colors {
        let c = color.to_array();
        for i in 0..3 {
            min[i] = min[i].min(c[i]);
            max[i] = max[i].max(c[i]);
        }
    }
    [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
}

/// Axis with the widest spread, earlier channels win ties
fn widest_axis(extent: [f32; 3]) -> usize {
    if extent[0] >= extent[1] && extent[0] >= extent[2] {
        0
    } else if extent[1] >= extent[2] {
        1
    } else {
        2
    }
}

fn mean(colors: &[Color]) -> Color {
    let mut sum = [0.0_f64; 4];

    for color in colors {
        for (s, c) in sum.iter_mut().zip(color.to_array()) {
            *s += f64::from(c);
        }
    }
    let n = colors.len() as f64;
    Color::from_array(sum.map(|s| (s / n) as f32))
}

fn median_cut(distinct: Vec<Color>, target: usize) -> Vec<Color> {
    let mut boxes = vec![distinct];

    while boxes.len() < target {
        // (box, axis, extent) of the widest splittable box
        let mut widest: Option<(usize, usize, f32)> = None;

        for (i, b) in boxes.iter().enumerate() {
            if b.len() < 2 {
                continue;
            }
            let extent = extents(b);
            let axis = widest_axis(extent);

            if widest.map_or(true, |(_, _, e)| extent[axis] > e) {
                widest = Some((i, axis, extent[axis]));
            }
        }
        let Some((index, axis, _)) = widest else {
            break;
        };
        let current = &mut boxes[index];
        current.sort_by(|a, b| a.to_array()[axis].total_cmp(&b.to_array()[axis]));

        let upper = current.split_off(current.len() / 2);
        boxes.push(upper);
    }
    boxes.iter().map(|b| mean(b)).collect()
}

/// Reduce a surface to at most `palette_size` colors
///
/// The returned surface uses the narrowest index format able to address
/// `palette_size` colors. A surface with no more distinct colors than
/// `palette_size` is reproduced exactly.
///
/// # Errors
/// - [`ImageErrors::BadPalette`] when `palette_size` is not in `1..=256`
/// - [`ImageErrors::GenericStr`] when the surface has no pixels
pub fn quantize(surface: &Surface, palette_size: usize) -> Result<PaletteSurface, ImageErrors> {
    let index_format = match IndexFormat::for_palette_size(palette_size) {
        Some(format) if palette_size > 0 => format,
        _ => return Err(ImageErrors::BadPalette(palette_size, Palette::MAX_COLORS))
    };
    let (width, height) = surface.dimensions();

    if width == 0 || height == 0 {
        return Err(ImageErrors::GenericStr("Cannot quantize an empty surface"));
    }
    let default = Color::default();
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let color = surface.get_pixel(x, y, default);
            if seen.insert(color_key(&color)) {
                distinct.push(color);
            }
        }
    }
    trace!("Quantizing {} distinct colors to {palette_size}", distinct.len());

    let palette = Palette::new(median_cut(distinct, palette_size))?;
    let mut out = PaletteSurface::new(width, height, index_format, palette.clone())?;
    let mut cache: HashMap<[u32; 4], usize> = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            let color = surface.get_pixel(x, y, default);
            let index = *cache
                .entry(color_key(&color))
                .or_insert_with(|| palette.nearest_index(&color));
            out.write_pixel_index(x, y, index);
        }
    }
    Ok(out)
}
