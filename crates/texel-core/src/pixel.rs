/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between raw pixels and [`Color`]
//!
//! Every routine here is total: a pixel format without a valid
//! [`channel_layout`](PixelFormat::channel_layout) decodes to the zero color and
//! encodes to zero bytes, short buffers are padded with zeros on decode and
//! left untouched on encode.
//!
//! Integer channels are scaled by their maximum value and rounded half away
//! from zero, then clamped to the channel range. Float channels are stored
//! unscaled.
use alloc::vec;
use alloc::vec::Vec;

use bytemuck::{bytes_of, pod_read_unaligned};

use crate::color::Color;
use crate::format::{PixelFormat, StorageClass};
use crate::half::{f16_to_f32, f32_to_f16};

/// Largest pixel any format describes, four 64 bit channels
pub const MAX_PIXEL_SIZE: usize = 32;

/// Round half away from zero and clamp into `0..=max`
///
/// NaN maps to zero.
#[inline]
pub fn round_clamp(value: f64, max: f64) -> u64 {
    if !(value > 0.0) {
        return 0;
    }
    if value >= max {
        return max as u64;
    }
    (value + 0.5) as u64
}

#[inline]
fn read_word(raw: &[u8], size: usize) -> u32 {
    match size {
        1 => u32::from(raw[0]),
        2 => u32::from(pod_read_unaligned::<u16>(&raw[..2])),
        4 => pod_read_unaligned::<u32>(&raw[..4]),
        _ => 0
    }
}

#[inline]
fn write_word(out: &mut [u8], size: usize, word: u32) {
    match size {
        1 => out[0] = word as u8,
        2 => out[..2].copy_from_slice(bytes_of(&(word as u16))),
        4 => out[..4].copy_from_slice(bytes_of(&word)),
        _ => ()
    }
}

/// Read element `index` of an array format pixel as a plain number
///
/// Integers are returned unscaled, half floats widened. Packed formats
/// and out of range reads give zero.
pub fn read_element(raw: &[u8], format: PixelFormat, index: usize) -> f64 {
    let size = format.element_size();
    let Some(bytes) = raw.get(index * size..(index + 1) * size) else {
        return 0.0;
    };
    match (format.storage_class(), size) {
        (StorageClass::ArrayUint, 1) => f64::from(bytes[0]),
        (StorageClass::ArrayUint, 2) => f64::from(pod_read_unaligned::<u16>(bytes)),
        (StorageClass::ArrayUint, 4) => f64::from(pod_read_unaligned::<u32>(bytes)),
        (StorageClass::ArrayUint, 8) => pod_read_unaligned::<u64>(bytes) as f64,
        (StorageClass::ArrayFloat, 2) => f64::from(f16_to_f32(pod_read_unaligned::<u16>(bytes))),
        (StorageClass::ArrayFloat, 4) => f64::from(pod_read_unaligned::<f32>(bytes)),
        _ => 0.0
    }
}

/// Write element `index` of an array format pixel
///
/// Integer elements are rounded and clamped to their range.
pub fn write_element(out: &mut [u8], format: PixelFormat, index: usize, value: f64) {
    let size = format.element_size();
    let Some(bytes) = out.get_mut(index * size..(index + 1) * size) else {
        return;
    };
    match (format.storage_class(), size) {
        (StorageClass::ArrayUint, 1) => bytes[0] = round_clamp(value, f64::from(u8::MAX)) as u8,
        (StorageClass::ArrayUint, 2) => {
            let v = round_clamp(value, f64::from(u16::MAX)) as u16;
            bytes.copy_from_slice(bytes_of(&v));
        }
        (StorageClass::ArrayUint, 4) => {
            let v = round_clamp(value, f64::from(u32::MAX)) as u32;
            bytes.copy_from_slice(bytes_of(&v));
        }
        (StorageClass::ArrayUint, 8) => {
            let v = round_clamp(value, u64::MAX as f64);
            bytes.copy_from_slice(bytes_of(&v));
        }
        (StorageClass::ArrayFloat, 2) => {
            bytes.copy_from_slice(bytes_of(&f32_to_f16(value as f32)));
        }
        (StorageClass::ArrayFloat, 4) => bytes.copy_from_slice(bytes_of(&(value as f32))),
        _ => ()
    }
}

/// Decode one pixel into a color
///
/// Channels the format lacks decode to zero, a missing alpha decodes to one.
pub fn decode_pixel(raw: &[u8], format: PixelFormat) -> Color {
    let layout = format.channel_layout();

    if layout.is_empty() {
        return Color::default();
    }
    let size = format.pixel_size();
    let mut scratch = [0_u8; MAX_PIXEL_SIZE];

    let raw = match raw.get(..size) {
        Some(raw) => raw,
        None => {
            scratch[..raw.len()].copy_from_slice(raw);
            &scratch[..size]
        }
    };
    let mut color = [0.0, 0.0, 0.0, 1.0];

    match format.storage_class() {
        StorageClass::Packed => {
            let word = read_word(raw, size);

            for (out, info) in color.iter_mut().zip(layout.channels()) {
                if info.is_present() {
                    let value = (word & info.mask_or_index) >> info.shift;
                    *out = (f64::from(value) / info.max_value() as f64) as f32;
                }
            }
        }
        StorageClass::ArrayUint => {
            for (out, info) in color.iter_mut().zip(layout.channels()) {
                if info.is_present() {
                    let value = read_element(raw, format, info.mask_or_index as usize);
                    *out = (value / info.max_value() as f64) as f32;
                }
            }
        }
        StorageClass::ArrayFloat => {
            for (out, info) in color.iter_mut().zip(layout.channels()) {
                if info.is_present() {
                    *out = read_element(raw, format, info.mask_or_index as usize) as f32;
                }
            }
        }
        StorageClass::Unknown => return Color::default()
    }
    Color::from_array(color)
}

/// Encode a color into one pixel
///
/// `out` must hold at least `format.pixel_size()` bytes, otherwise it is left alone.
/// Padding slots are written as zero.
pub fn encode_pixel(color: Color, format: PixelFormat, out: &mut [u8]) {
    let size = format.pixel_size();
    let Some(out) = out.get_mut(..size) else {
        return;
    };
    out.fill(0);

    let layout = format.channel_layout();
    let values = color.to_array();

    match format.storage_class() {
        StorageClass::Packed => {
            let mut word = 0_u32;

            for (value, info) in values.iter().zip(layout.channels()) {
                if info.is_present() {
                    let max = info.max_value() as f64;
                    let quantized = round_clamp(f64::from(*value) * max, max) as u32;
                    word |= quantized << info.shift;
                }
            }
            write_word(out, size, word);
        }
        StorageClass::ArrayUint => {
            for (value, info) in values.iter().zip(layout.channels()) {
                if info.is_present() {
                    let scaled = f64::from(*value) * info.max_value() as f64;
                    write_element(out, format, info.mask_or_index as usize, scaled);
                }
            }
        }
        StorageClass::ArrayFloat => {
            for (value, info) in values.iter().zip(layout.channels()) {
                if info.is_present() {
                    write_element(out, format, info.mask_or_index as usize, f64::from(*value));
                }
            }
        }
        StorageClass::Unknown => ()
    }
}

/// Encode a color into a freshly allocated pixel
pub fn encode_to_vec(color: Color, format: PixelFormat) -> Vec<u8> {
    let mut out = vec![0; format.pixel_size()];
    encode_pixel(color, format, &mut out);
    out
}
