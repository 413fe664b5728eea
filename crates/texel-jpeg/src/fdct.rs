/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Forward discrete cosine transform
//!
//! Arai, Agui and Nakajima's scaled 1-D DCT applied to rows then columns.
//! Outputs are scaled by the AAN factors, the quantizer divisors
//! in [`quant`](crate::quant) undo that scaling.

/// One 8 point transform on `data[start + k * step]` for k in 0..8
#[inline(always)]
#[allow(clippy::identity_op, clippy::erasing_op)]
fn fdct_1d(data: &mut [f32], start: usize, step: usize) {
    let d0 = data[start + 0 * step];
    let d1 = data[start + 1 * step];
    let d2 = data[start + 2 * step];
    let d3 = data[start + 3 * step];
    let d4 = data[start + 4 * step];
    let d5 = data[start + 5 * step];
    let d6 = data[start + 6 * step];
    let d7 = data[start + 7 * step];

    let tmp0 = d0 + d7;
    let tmp7 = d0 - d7;
    let tmp1 = d1 + d6;
    let tmp6 = d1 - d6;
    let tmp2 = d2 + d5;
    let tmp5 = d2 - d5;
    let tmp3 = d3 + d4;
    let tmp4 = d3 - d4;

    // even part
    let tmp10 = tmp0 + tmp3;
    let tmp13 = tmp0 - tmp3;
    let tmp11 = tmp1 + tmp2;
    let tmp12 = tmp1 - tmp2;

    let z1 = (tmp12 + tmp13) * 0.707_106_78;

    data[start + 0 * step] = tmp10 + tmp11;
    data[start + 4 * step] = tmp10 - tmp11;
    data[start + 2 * step] = tmp13 + z1;
    data[start + 6 * step] = tmp13 - z1;

    // odd part
    let tmp10 = tmp4 + tmp5;
    let tmp11 = tmp5 + tmp6;
    let tmp12 = tmp6 + tmp7;

    let z5 = (tmp10 - tmp12) * 0.382_683_43;
    let z2 = tmp10 * 0.541_196_1 + z5;
    let z4 = tmp12 * 1.306_563 + z5;
    let z3 = tmp11 * 0.707_106_78;

    let z11 = tmp7 + z3;
    let z13 = tmp7 - z3;

    data[start + 5 * step] = z13 + z2;
    data[start + 3 * step] = z13 - z2;
    data[start + 1 * step] = z11 + z4;
    data[start + 7 * step] = z11 - z4;
}

/// Transform the 8x8 block starting at `offset` of a buffer whose rows are
/// `stride` samples apart, in place.
pub fn fdct_block(data: &mut [f32], offset: usize, stride: usize) {
    for row in 0..8 {
        fdct_1d(data, offset + row * stride, 1);
    }
    for column in 0..8 {
        fdct_1d(data, offset + column, stride);
    }
}
