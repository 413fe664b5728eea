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
use texel_bmp::{BmpDecoder, BmpEncoder};
use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::ZCursor;
use texel_core::colorspace::ColorSpace;
use texel_core::options::EncoderOptions;

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;

fn create_bmp(colorspace: ColorSpace) -> Vec<u8> {
    let pixels = sample_pixels(WIDTH, HEIGHT, colorspace.num_components());
    let options = EncoderOptions::new(WIDTH, HEIGHT, colorspace, BitDepth::Eight);

    let mut out = Vec::new();
    BmpEncoder::new(&pixels, options).encode(&mut out).unwrap();
    out
}

fn decode_bmp(buf: &[u8]) -> Vec<u8> {
    let mut d = BmpDecoder::new(ZCursor::new(buf));

    d.decode().unwrap()
}

fn decode_bmp_image_rs(buf: &[u8]) -> image::DynamicImage {
    image::load_from_memory_with_format(buf, image::ImageFormat::Bmp).unwrap()
}

fn decode_bmp_bench(c: &mut Criterion, name: &str, colorspace: ColorSpace) {
    let data = create_bmp(colorspace);
    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("texel-bmp", |b| {
        b.iter(|| black_box(decode_bmp(data.as_slice())))
    });

    group.bench_function("image-rs/bmp", |b| {
        b.iter(|| black_box(decode_bmp_image_rs(data.as_slice())))
    });
}

fn decode_24_bit(c: &mut Criterion) {
    decode_bmp_bench(c, "bmp: 24 bit decode", ColorSpace::RGB);
}

fn decode_32_bit(c: &mut Criterion) {
    decode_bmp_bench(c, "bmp: 32 bit bitfields decode", ColorSpace::RGBA);
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(5))
      };
    targets=decode_24_bit, decode_32_bit);

criterion_main!(benches);
