/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use texel_core::colorspace::ColorSpace;
use xxhash_rust::xxh3::xxh3_128;

mod bmp;
#[cfg(test)]
mod jpeg;
#[cfg(test)]
mod pipeline;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColorspace {
    RGB,
    RGBA
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::RGB => ColorSpace::RGB,
            Self::RGBA => ColorSpace::RGBA
        }
    }
}

/// One fixture, either a file that decodes to `pixels` or one that
/// fails with the error kind named in `error`
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub comment:    Option<String>,
    pub width:      Option<usize>,
    pub height:     Option<usize>,
    pub colorspace: Option<JsonColorspace>,
    /// Expected output, hex encoded
    pub pixels:     Option<String>,
    pub error:      Option<String>
}

impl TestEntry {
    pub fn expected_pixels(&self) -> Option<Vec<u8>> {
        self.pixels.as_deref().map(from_hex)
    }
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn read_entries(json: &str) -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(json);
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

fn from_hex(hex: &str) -> Vec<u8> {
    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let digits = std::str::from_utf8(pair).unwrap();
            u8::from_str_radix(digits, 16).unwrap()
        })
        .collect()
}
