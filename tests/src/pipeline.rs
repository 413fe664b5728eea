/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tests that move images between the codecs and surfaces

use std::fs::read;

use nanorand::{Rng, WyRand};
use texel_bmp::{BmpDecoder, BmpEncoder};
use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::ZCursor;
use texel_core::color::Color;
use texel_core::colorspace::ColorSpace;
use texel_core::format::PixelFormat;
use texel_core::geometry::Rect;
use texel_core::options::EncoderOptions;
use texel_image::filters::resize::ResizeMethod;
use texel_image::quantize::quantize;
use texel_image::surface::Surface;
use texel_jpeg::JpegEncoder;

use crate::bmp::bmp_path;
use crate::hash;

fn load_surface(name: &str) -> Surface {
    let contents = read(bmp_path().join(name)).unwrap();
    let mut decoder = BmpDecoder::new(ZCursor::new(contents));
    let pixels = decoder.decode().unwrap();
    let (width, height) = decoder.dimensions().unwrap();

    Surface::from_colorspace(width, height, decoder.colorspace().unwrap(), pixels).unwrap()
}

fn random_surface(width: usize, height: usize, format: PixelFormat, seed: u64) -> Surface {
    let mut rng = WyRand::new_seed(seed);
    let mut surface = Surface::new(width, height, format);
    rng.fill_bytes(surface.data_mut());
    surface
}

#[test]
fn palette_bmp_quantizes_losslessly() {
    // five distinct colors
    let surface = load_surface("pal4_5x3.bmp");

    for size in [8, 16, 256] {
        let palette = quantize(&surface, size).unwrap();
        assert!(palette.palette().len() <= 5);

        let back = palette.to_surface(surface.format());
        assert_eq!(hash(back.data()), hash(surface.data()), "palette size {size}");
    }
}

#[test]
fn quantized_colors_come_from_the_image() {
    let surface = random_surface(32, 32, PixelFormat::RGB8, 9);
    let palette = quantize(&surface, 16).unwrap();

    assert_eq!(palette.palette().len(), 16);
    assert_eq!(palette.dimensions(), surface.dimensions());
    for color in palette.pixels() {
        assert!(palette.palette().colors().contains(&color));
    }
}

#[test]
fn bmp_encoder_round_trips_surfaces() {
    for format in [PixelFormat::RGB8, PixelFormat::RGBA8] {
        let mut surface = random_surface(13, 7, format, 5);
        if format == PixelFormat::RGBA8 {
            // keep alpha away from the all zero heuristic
            surface.set_pixel(0, 0, Color::WHITE);
        }
        let colorspace = if format == PixelFormat::RGB8 {
            ColorSpace::RGB
        } else {
            ColorSpace::RGBA
        };
        let options = EncoderOptions::new(13, 7, colorspace, BitDepth::Eight);

        let mut bmp = Vec::new();
        BmpEncoder::new(surface.data(), options)
            .encode(&mut bmp)
            .unwrap();

        let mut decoder = BmpDecoder::new(ZCursor::new(bmp));
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.colorspace(), Some(colorspace));
        assert_eq!(hash(&pixels), hash(surface.data()));
    }
}

#[test]
fn transformed_surface_encodes_to_jpeg() {
    let mut surface = load_surface("rgb24_3x3.bmp");
    surface.resize(40, 25, ResizeMethod::Bilinear);
    surface.rotate_90_cw();

    let (width, height) = surface.dimensions();
    assert_eq!((width, height), (25, 40));

    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
    let mut jpeg = Vec::new();
    JpegEncoder::new(surface.data(), options)
        .encode(&mut jpeg)
        .unwrap();

    let mut decoder = jpeg_decoder::Decoder::new(jpeg.as_slice());
    decoder.decode().unwrap();
    let info = decoder.info().unwrap();
    assert_eq!((info.width, info.height), (25, 40));
}

#[test]
fn geometric_transforms_are_reversible() {
    let original = random_surface(17, 11, PixelFormat::RGBA8, 1);
    let expected = hash(original.data());

    let mut surface = original.clone();
    surface.rotate_90_cw();
    surface.rotate_90_ccw();
    assert_eq!(hash(surface.data()), expected);

    surface.flip_x();
    surface.flip_y();
    surface.rotate_180();
    assert_eq!(hash(surface.data()), expected);

    let cropped = surface.crop(Rect::new(0, 0, 17, 11));
    assert_eq!(cropped, original);
}

#[test]
fn mipmaps_of_decoded_image() {
    let surface = load_surface("pal1_10x2.bmp");
    let levels = surface.generate_mipmaps(8);

    assert_eq!(levels[0].dimensions(), (5, 1));
    assert!(levels.iter().all(|x| x.format() == PixelFormat::RGB8));
}

#[test]
fn surface_metadata_serializes() {
    let surface = Surface::new(3, 2, PixelFormat::RGBA8);
    let json = serde_json::to_value(&surface).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "width": 3, "height": 2, "format": "RGBA8", "pixel_size": 4, "stride": 12
        })
    );

    let quantized = quantize(&surface, 2).unwrap();
    let json = serde_json::to_value(&quantized).unwrap();

    assert_eq!(json["index_format"], "Index1Msb");
    assert_eq!(json["palette"].as_array().unwrap().len(), 1);
    assert_eq!(json["palette"][0]["a"], 0.0);
}
