/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use texel_core::bit_depth::BitDepth;
use texel_core::colorspace::ColorSpace;
use texel_core::options::EncoderOptions;
use texel_jpeg::JpegEncoder;

fn encode(pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, quality: u8) -> Vec<u8> {
    let options =
        EncoderOptions::new(width, height, colorspace, BitDepth::Eight).set_quality(quality);
    let mut sink = Vec::new();
    JpegEncoder::new(pixels, options).encode(&mut sink).unwrap();
    sink
}

fn decode(jpeg: &[u8]) -> (Vec<u8>, usize, usize) {
    let mut decoder = jpeg_decoder::Decoder::new(jpeg);
    let pixels = decoder.decode().unwrap();
    let info = decoder.info().unwrap();
    (pixels, usize::from(info.width), usize::from(info.height))
}

/// Bytes between the scan header and the end of image marker
fn entropy_data(jpeg: &[u8]) -> &[u8] {
    let sos = jpeg
        .windows(2)
        .position(|x| x == [0xFF, 0xDA])
        .unwrap();
    let header_length = usize::from(u16::from_be_bytes([jpeg[sos + 2], jpeg[sos + 3]]));
    &jpeg[sos + 2 + header_length..jpeg.len() - 2]
}

#[test]
fn uniform_color_round_trips() {
    let color = [200_u8, 100, 50];
    let pixels = color.repeat(16 * 16);

    let jpeg = encode(&pixels, 16, 16, ColorSpace::RGB, 90);
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);

    let (decoded, width, height) = decode(&jpeg);
    assert_eq!((width, height), (16, 16));

    for pix in decoded.chunks_exact(3) {
        for (a, b) in pix.iter().zip(color.iter()) {
            assert!(a.abs_diff(*b) <= 3, "{pix:?} vs {color:?}");
        }
    }
}

#[test]
fn entropy_data_is_stuffed() {
    let mut rng = WyRand::new_seed(42);

    for quality in [10, 50, 90, 100] {
        let mut pixels = vec![0_u8; 37 * 23 * 3];
        rng.fill_bytes(&mut pixels);

        let jpeg = encode(&pixels, 37, 23, ColorSpace::RGB, quality);
        let data = entropy_data(&jpeg);

        for (i, byte) in data.iter().enumerate() {
            if *byte == 0xFF {
                assert_eq!(data.get(i + 1), Some(&0x00), "unstuffed 0xFF at {i}");
            }
        }
        // random data still decodes
        let (_, width, height) = decode(&jpeg);
        assert_eq!((width, height), (37, 23));
    }
}

#[test]
fn smooth_gradient_is_close() {
    let (width, height) = (33, 19);
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 7) as u8, (y * 12) as u8, 128]);
        }
    }
    for quality in [95, 100] {
        let jpeg = encode(&pixels, width, height, ColorSpace::RGB, quality);
        let (decoded, w, h) = decode(&jpeg);
        assert_eq!((w, h), (width, height));

        let total: usize = decoded
            .iter()
            .zip(pixels.iter())
            .map(|(a, b)| usize::from(a.abs_diff(*b)))
            .sum();
        let mean = total as f64 / pixels.len() as f64;
        assert!(mean < 3.0, "quality {quality} mean error {mean}");
    }
}

#[test]
fn channel_orders_agree() {
    let (width, height) = (12, 9);
    let mut rng = WyRand::new_seed(7);
    let mut rgb = vec![0_u8; width * height * 3];
    rng.fill_bytes(&mut rgb);

    let mut bgra = Vec::with_capacity(width * height * 4);
    let mut argb = Vec::with_capacity(width * height * 4);
    for pix in rgb.chunks_exact(3) {
        bgra.extend_from_slice(&[pix[2], pix[1], pix[0], 17]);
        argb.extend_from_slice(&[99, pix[0], pix[1], pix[2]]);
    }

    let expected = encode(&rgb, width, height, ColorSpace::RGB, 80);
    // alpha is dropped, so the streams are identical
    assert_eq!(encode(&bgra, width, height, ColorSpace::BGRA, 80), expected);
    assert_eq!(encode(&argb, width, height, ColorSpace::ARGB, 80), expected);
}

#[test]
fn grayscale_stays_gray() {
    let (width, height) = (20, 20);
    let luma: Vec<u8> = (0..width * height).map(|x| (x % 256) as u8).collect();
    let expanded: Vec<u8> = luma.iter().flat_map(|x| [*x, *x, *x]).collect();

    let from_luma = encode(&luma, width, height, ColorSpace::Luma, 70);
    assert_eq!(from_luma, encode(&expanded, width, height, ColorSpace::RGB, 70));

    let luma_alpha: Vec<u8> = luma.iter().flat_map(|x| [*x, 255]).collect();
    assert_eq!(from_luma, encode(&luma_alpha, width, height, ColorSpace::LumaA, 70));
}
