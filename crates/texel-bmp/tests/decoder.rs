/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder behaviour on hand built files

use texel_bmp::{BmpDecoder, BmpDecoderErrors};
use texel_core::bytestream::ZCursor;
use texel_core::colorspace::ColorSpace;
use texel_core::options::DecoderOptions;

/// A BMP with an info header of `header_size` bytes
///
/// The info header carries width, height, planes, depth and compression,
/// the rest is zero. `extra` goes between the header and the pixels.
fn build(
    header_size: u32, width: i32, height: i32, depth: u16, compression: u32, extra: &[u8],
    pixels: &[u8]
) -> Vec<u8> {
    let offset = 14 + header_size + extra.len() as u32;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&offset.to_le_bytes());

    let mut header = Vec::new();
    header.extend_from_slice(&header_size.to_le_bytes());
    if header_size == 12 {
        header.extend_from_slice(&(width as u16).to_le_bytes());
        header.extend_from_slice(&(height as u16).to_le_bytes());
    } else {
        header.extend_from_slice(&width.to_le_bytes());
        header.extend_from_slice(&height.to_le_bytes());
    }
    header.extend_from_slice(&1_u16.to_le_bytes());
    header.extend_from_slice(&depth.to_le_bytes());
    if header_size >= 40 {
        header.extend_from_slice(&compression.to_le_bytes());
    }
    header.resize(header_size as usize, 0);

    out.extend_from_slice(&header);
    out.extend_from_slice(extra);
    out.extend_from_slice(pixels);
    out
}

fn decode(file: &[u8]) -> Result<Vec<u8>, BmpDecoderErrors> {
    BmpDecoder::new(ZCursor::new(file)).decode()
}

#[test]
fn decode_24_bit_2x2() {
    #[rustfmt::skip]
    let pixels = [
        // bottom row: blue, white, padding
        255, 0, 0,   255, 255, 255,   0, 0,
        // top row: red, green, padding
        0, 0, 255,   0, 255, 0,       0, 0,
    ];
    let file = build(40, 2, 2, 24, 0, &[], &pixels);
    let mut decoder = BmpDecoder::new(ZCursor::new(&file));
    let out = decoder.decode().unwrap();

    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
    assert_eq!(
        out,
        [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
    );
}

#[test]
fn header_size_64_is_unsupported() {
    let file = build(64, 2, 2, 24, 0, &[], &[0; 16]);
    assert!(matches!(
        decode(&file),
        Err(BmpDecoderErrors::UnsupportedFormat(_))
    ));
}

#[test]
fn one_bit_palette_with_padding() {
    // black and white palette, BGR0
    let palette = [0, 0, 0, 0, 255, 255, 255, 0];
    // 10 pixels wide, 2 bytes of bits and 2 of padding per row
    #[rustfmt::skip]
    let pixels = [
        0b0000_0000, 0b0100_0000, 0xAA, 0xAA,
        0b1010_0000, 0b1100_0000, 0xAA, 0xAA,
    ];
    let file = build(40, 10, 2, 1, 0, &palette, &pixels);
    let out = decode(&file).unwrap();

    let top: Vec<u8> = out[..30].chunks_exact(3).map(|x| x[0]).collect();
    let bottom: Vec<u8> = out[30..].chunks_exact(3).map(|x| x[0]).collect();
    assert_eq!(top, [255, 0, 255, 0, 0, 0, 0, 0, 255, 255]);
    assert_eq!(bottom, [0, 0, 0, 0, 0, 0, 0, 0, 0, 255]);
}

#[test]
fn four_bit_palette_core_header() {
    // OS/2 core header, 3 byte palette entries
    let palette = [0, 0, 255, 0, 255, 0, 255, 0, 0];
    // 3 pixels: 0, 1, 2 plus padding
    let pixels = [0x01, 0x20, 0, 0];
    let file = build(12, 3, 1, 4, 0, &palette, &pixels);
    let out = decode(&file).unwrap();
    assert_eq!(out, [255, 0, 0, 0, 255, 0, 0, 0, 255]);
}

#[test]
fn index_beyond_palette() {
    let palette = [0, 0, 0, 0, 255, 255, 255, 0];
    let pixels = [5, 0, 0, 0];
    let file = build(40, 1, 1, 8, 0, &palette, &pixels);
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::BadPalette(_))));
}

#[test]
fn two_bit_depth_depends_on_strict_mode() {
    let palette = [0, 0, 0, 0, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 0];
    // indices 1, 2, 3 then padding
    let pixels = [0b0110_1100, 0, 0, 0];
    let file = build(40, 3, 1, 2, 0, &palette, &pixels);

    assert_eq!(decode(&file).unwrap(), [255, 0, 0, 0, 255, 0, 0, 0, 255]);

    let mut decoder = BmpDecoder::new_with_options(ZCursor::new(&file), DecoderOptions::new_strict());
    assert!(matches!(
        decoder.decode_headers(),
        Err(BmpDecoderErrors::UnsupportedFormat(_))
    ));
}

#[test]
fn missing_palette() {
    let file = build(40, 1, 1, 8, 0, &[], &[0; 4]);
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::BadPalette(_))));
}

#[test]
fn top_down_rows() {
    #[rustfmt::skip]
    let pixels = [
        // stored first, is the top row
        0, 0, 255, 0,
        255, 0, 0, 0,
    ];
    let file = build(40, 1, -2, 24, 0, &[], &pixels);
    assert_eq!(decode(&file).unwrap(), [255, 0, 0, 0, 0, 255]);
}

#[test]
fn zero_alpha_becomes_opaque() {
    let pixels = [1, 2, 3, 0, 4, 5, 6, 0];
    let file = build(40, 2, 1, 32, 0, &[], &pixels);
    let mut decoder = BmpDecoder::new(ZCursor::new(&file));
    let out = decoder.decode().unwrap();
    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGBA));
    assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
}

#[test]
fn alpha_kept_when_present() {
    let pixels = [1, 2, 3, 0, 4, 5, 6, 128];
    let file = build(40, 2, 1, 32, 0, &[], &pixels);
    assert_eq!(decode(&file).unwrap(), [3, 2, 1, 0, 6, 5, 4, 128]);
}

#[test]
fn v4_alpha_bitfields() {
    // A4R4G4B4 in a 108 byte header, masks start at offset 54
    let file = {
        let mut masks = [0_u8; 16];
        for (chunk, mask) in masks
            .chunks_exact_mut(4)
            .zip([0x0F00_u32, 0x00F0, 0x000F, 0xF000])
        {
            chunk.copy_from_slice(&mask.to_le_bytes());
        }
        let mut file = build(108, 1, 1, 16, 3, &[], &[0x0F, 0x80, 0, 0]);
        file[54..70].copy_from_slice(&masks);
        file
    };
    let mut decoder = BmpDecoder::new(ZCursor::new(&file));
    let out = decoder.decode().unwrap();
    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGBA));
    // 0x800F: alpha 8, red 0, green 0, blue 15
    assert_eq!(out, [0, 0, 255, 0x88]);
}

#[test]
fn truncated_pixels_are_io_errors() {
    let file = build(40, 4, 4, 24, 0, &[], &[0; 20]);
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::IoErrors(_))));
}

#[test]
fn bad_magic() {
    let mut file = build(40, 1, 1, 24, 0, &[], &[0; 4]);
    file[0] = b'P';
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::InvalidMagicBytes)));
}

#[test]
fn zero_dimensions_and_planes() {
    let file = build(40, 0, 1, 24, 0, &[], &[]);
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::CorruptData(_))));

    let mut file = build(40, 1, 1, 24, 0, &[], &[0; 4]);
    // planes live at 26
    file[26] = 2;
    assert!(matches!(decode(&file), Err(BmpDecoderErrors::CorruptData(_))));
}

#[test]
fn respects_max_dimensions() {
    let file = build(40, 64, 1, 24, 0, &[], &[0; 64 * 3]);
    let options = DecoderOptions::default().set_max_width(32);
    let result = BmpDecoder::new_with_options(ZCursor::new(&file), options).decode();
    assert!(matches!(
        result,
        Err(BmpDecoderErrors::TooLargeDimensions("width", 32, 64))
    ));
}

#[test]
fn wide_masks_are_unsupported() {
    let mut masks = Vec::new();
    for mask in [0x3FF0_0000_u32, 0x000F_FC00, 0x0000_03FF] {
        masks.extend_from_slice(&mask.to_le_bytes());
    }
    let file = build(40, 1, 1, 32, 3, &masks, &[0; 4]);
    assert!(matches!(
        decode(&file),
        Err(BmpDecoderErrors::UnsupportedFormat(_))
    ));
}
