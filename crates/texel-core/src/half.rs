/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! IEEE-754 half precision conversion
//!
//! Half floats only appear as storage, arithmetic happens in `f32`.
//! Values too small for a normal half are flushed to a signed zero
//! instead of becoming subnormals, in both directions.

const EXPONENT_BIAS_DIFF: u32 = 127 - 15;

/// Convert a single precision float to half precision bits
///
/// The mantissa is truncated, overflow becomes infinity and any NaN
/// becomes a quiet NaN.
pub fn f32_to_f16(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exponent = (bits >> 23) & 0xFF;
    let mantissa = bits & 0x7F_FFFF;

    if exponent == 0xFF {
        return if mantissa == 0 {
            sign | 0x7C00
        } else {
            sign | 0x7E00
        };
    }
    if exponent <= EXPONENT_BIAS_DIFF {
        return sign;
    }
    let exponent = exponent - EXPONENT_BIAS_DIFF;

    if exponent >= 0x1F {
        return sign | 0x7C00;
    }
    sign | ((exponent as u16) << 10) | ((mantissa >> 13) as u16)
}

/// Convert half precision bits to a single precision float
pub fn f16_to_f32(half: u16) -> f32 {
    let sign = u32::from(half & 0x8000) << 16;
    let exponent = u32::from((half >> 10) & 0x1F);
    let mantissa = u32::from(half & 0x3FF);

    let bits = match exponent {
        // zero, subnormals flush
        0 => sign,
        0x1F if mantissa == 0 => sign | 0x7F80_0000,
        0x1F => sign | 0x7FC0_0000 | (mantissa << 13),
        _ => sign | ((exponent + EXPONENT_BIAS_DIFF) << 23) | (mantissa << 13)
    };
    f32::from_bits(bits)
}
