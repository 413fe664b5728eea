/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use nanorand::{Rng, WyRand};
use texel_bmp::BmpDecoder;
use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::ZCursor;
use texel_core::colorspace::ColorSpace;
use texel_core::options::EncoderOptions;
use texel_jpeg::JpegEncoder;

use crate::bmp::bmp_path;
use crate::{hash, read_entries};

fn encode(pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, quality: u8) -> Vec<u8> {
    let options =
        EncoderOptions::new(width, height, colorspace, BitDepth::Eight).set_quality(quality);
    let mut sink = Vec::new();
    let size = JpegEncoder::new(pixels, options).encode(&mut sink).unwrap();
    assert_eq!(size, sink.len());
    sink
}

#[test]
fn bmp_fixtures_encode_to_valid_jpeg() {
    for path in read_entries("bmp.json") {
        if path.error.is_some() {
            continue;
        }
        let contents = read(bmp_path().join(&path.name)).unwrap();
        let mut decoder = BmpDecoder::new(ZCursor::new(contents));
        let pixels = decoder.decode().unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        let colorspace = decoder.colorspace().unwrap();

        for quality in [30, 95] {
            let jpeg = encode(&pixels, width, height, colorspace, quality);

            let mut jpeg_decoder = jpeg_decoder::Decoder::new(jpeg.as_slice());
            let decoded = jpeg_decoder.decode().unwrap();
            let info = jpeg_decoder.info().unwrap();

            assert_eq!(
                (usize::from(info.width), usize::from(info.height)),
                (width, height),
                "{}",
                path.name
            );
            assert_eq!(decoded.len(), width * height * 3);
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let mut rng = WyRand::new_seed(42);
    let mut pixels = vec![0_u8; 61 * 47 * 4];
    rng.fill_bytes(&mut pixels);

    let first = encode(&pixels, 61, 47, ColorSpace::RGBA, 85);
    let second = encode(&pixels, 61, 47, ColorSpace::RGBA, 85);
    assert_eq!(hash(&first), hash(&second));
}

#[test]
fn higher_quality_is_larger() {
    let mut rng = WyRand::new_seed(3);
    let mut pixels = vec![0_u8; 64 * 64 * 3];
    rng.fill_bytes(&mut pixels);

    let low = encode(&pixels, 64, 64, ColorSpace::RGB, 10);
    let mid = encode(&pixels, 64, 64, ColorSpace::RGB, 60);
    let high = encode(&pixels, 64, 64, ColorSpace::RGB, 100);

    assert!(low.len() < mid.len());
    assert!(mid.len() < high.len());
}
