/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Split a row of packed palette indices into one byte per index
///
/// Indices are stored most significant bits first. `out` determines how
/// many indices are produced, `input` must hold at least that many.
pub(crate) fn expand_bits_to_byte(depth: usize, input: &[u8], out: &mut [u8]) {
    match depth {
        8 => {
            let len = out.len().min(input.len());
            out[..len].copy_from_slice(&input[..len]);
        }
        1 | 2 | 4 => {
            let per_byte = 8 / depth;
            let mask = (1_u8 << depth) - 1;

            // each input byte fills `per_byte` outputs, the last chunk may be short
            for (in_val, out_vals) in input.iter().zip(out.chunks_mut(per_byte)) {
                for (pos, out_val) in out_vals.iter_mut().enumerate() {
                    let shift = 8 - depth * (pos + 1);
                    *out_val = (in_val >> shift) & mask;
                }
            }
        }
        _ => ()
    }
}

/// Move a masked value so that its highest bit lands in bit 7, then
/// widen it to 8 bits by repeating its bits
///
/// # Arguments
/// - v: The pixel value with the mask already applied
/// - shift: Position of the mask's highest bit minus 7, negative shifts left
/// - bits: Number of bits in the mask
pub(crate) fn shift_signed(mut v: u32, shift: i32, mut bits: u32) -> u32 {
    const MUL_TABLE: [u32; 9] = [
        0,    /*no bits*/
        0xff, /*0b11111111*/
        0x55, /*0b01010101*/
        0x49, /*0b01001001*/
        0x11, /*0b00010001*/
        0x21, /*0b00100001*/
        0x41, /*0b01000001*/
        0x81, /*0b10000001*/
        0x01  /*0b00000001*/
    ];
    const SHIFT_TABLE: [i32; 9] = [0, 0, 0, 1, 0, 2, 4, 6, 0];

    if shift < 0 {
        v <<= -shift;
    } else {
        v >>= shift;
    }

    debug_assert!(v < 256);

    bits = bits.clamp(0, 8);
    v >>= 8 - bits;
    (v * MUL_TABLE[bits as usize]) >> SHIFT_TABLE[bits as usize]
}

/// Shift amount for [`shift_signed`] of a mask
pub(crate) fn mask_shift(mask: u32) -> i32 {
    (32 - mask.leading_zeros() as i32) - 8
}
