/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use texel_benches::sample_pixels;
use texel_core::bit_depth::BitDepth;
use texel_core::colorspace::ColorSpace;
use texel_core::options::EncoderOptions;
use texel_jpeg::JpegEncoder;

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;

fn encode_jpeg(pixels: &[u8], quality: u8) -> Vec<u8> {
    let options =
        EncoderOptions::new(WIDTH, HEIGHT, ColorSpace::RGB, BitDepth::Eight).set_quality(quality);
    let mut out = Vec::new();
    JpegEncoder::new(pixels, options).encode(&mut out).unwrap();
    out
}

fn encode_jpeg_image_rs(pixels: &[u8], quality: u8) -> Vec<u8> {
    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality)
        .encode(pixels, WIDTH as u32, HEIGHT as u32, image::ColorType::Rgb8)
        .unwrap();
    out
}

fn encode_bench(c: &mut Criterion, name: &str, quality: u8) {
    let pixels = sample_pixels(WIDTH, HEIGHT, 3);
    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes(pixels.len() as u64));

    group.bench_function("texel-jpeg", |b| {
        b.iter(|| black_box(encode_jpeg(&pixels, quality)))
    });

    group.bench_function("image-rs/jpeg", |b| {
        b.iter(|| black_box(encode_jpeg_image_rs(&pixels, quality)))
    });
}

fn encode_subsampled(c: &mut Criterion) {
    encode_bench(c, "jpeg: 4:2:0 encode", 80);
}

fn encode_full_chroma(c: &mut Criterion) {
    encode_bench(c, "jpeg: 4:4:4 encode", 95);
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=encode_subsampled, encode_full_chroma);

criterion_main!(benches);
