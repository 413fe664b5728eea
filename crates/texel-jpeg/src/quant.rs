/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Quality scaled quantization tables

use crate::misc::{AASF, CHROMA_QUANT, LUMA_QUANT, ZIGZAG};

/// Quality used when a caller passes zero
pub const DEFAULT_QUALITY: u8 = 90;

/// Map a user quality to the 1..=100 range the tables are defined for.
pub const fn normalize_quality(quality: u8) -> u8 {
    match quality {
        0 => DEFAULT_QUALITY,
        101.. => 100,
        q => q
    }
}

/// Percentage the base tables are scaled by, the IJG curve.
pub const fn quality_scale(quality: u8) -> u32 {
    let quality = normalize_quality(quality) as u32;

    if quality < 50 {
        5000 / quality
    } else {
        200 - quality * 2
    }
}

/// Quantization tables for one quality setting
pub struct QuantTables {
    /// Luminance table in zig-zag order, as stored in the DQT segment
    pub luma:   [u8; 64],
    /// Chrominance table in zig-zag order
    pub chroma: [u8; 64],
    /// Per coefficient multipliers in natural order, folding in AAN descaling
    luma_multipliers:   [f32; 64],
    chroma_multipliers: [f32; 64]
}

impl QuantTables {
    pub fn new(quality: u8) -> QuantTables {
        let scale = quality_scale(quality);

        let luma = scale_table(&LUMA_QUANT, scale);
        let chroma = scale_table(&CHROMA_QUANT, scale);

        QuantTables {
            luma_multipliers: multipliers(&luma),
            chroma_multipliers: multipliers(&chroma),
            luma,
            chroma
        }
    }

    pub fn luma_multipliers(&self) -> &[f32; 64] {
        &self.luma_multipliers
    }

    pub fn chroma_multipliers(&self) -> &[f32; 64] {
        &self.chroma_multipliers
    }
}

fn scale_table(base: &[u8; 64], scale: u32) -> [u8; 64] {
    let mut table = [0_u8; 64];

    for (natural, value) in base.iter().enumerate() {
        let scaled = (u32::from(*value) * scale + 50) / 100;
        table[ZIGZAG[natural]] = scaled.clamp(1, 255) as u8;
    }
    table
}

fn multipliers(zigzag_table: &[u8; 64]) -> [f32; 64] {
    let mut out = [0.0; 64];

    for (k, out) in out.iter_mut().enumerate() {
        let (row, col) = (k / 8, k % 8);
        let divisor = f32::from(zigzag_table[ZIGZAG[k]]) * AASF[row] * AASF[col];
        *out = 1.0 / divisor;
    }
    out
}

/// Quantize a transformed block at `offset` in a buffer with rows `stride`
/// samples apart, returning coefficients in zig-zag order.
///
/// Values are rounded half away from zero.
pub fn quantize_block(
    coefficients: &[f32], offset: usize, stride: usize, multipliers: &[f32; 64]
) -> [i32; 64] {
    let mut out = [0; 64];

    for (k, multiplier) in multipliers.iter().enumerate() {
        let v = coefficients[offset + (k / 8) * stride + (k % 8)] * multiplier;
        // `as` truncates toward zero
        out[ZIGZAG[k]] = (if v < 0.0 { v - 0.5 } else { v + 0.5 }) as i32;
    }
    out
}
