/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use texel_bmp::{BmpDecoder, BmpDecoderErrors};
use texel_core::bytestream::ZCursor;
use texel_core::options::DecoderOptions;

use crate::{hash, read_entries, sample_path, TestEntry};

pub fn bmp_path() -> PathBuf {
    sample_path().join("test-images/bmp")
}

fn error_kind(error: &BmpDecoderErrors) -> &'static str {
    match error {
        BmpDecoderErrors::InvalidMagicBytes => "invalid_magic",
        BmpDecoderErrors::UnsupportedFormat(_) => "unsupported_format",
        BmpDecoderErrors::TooLargeDimensions(..) => "max_size",
        BmpDecoderErrors::BadPalette(_) => "bad_palette",
        BmpDecoderErrors::CorruptData(_) => "corrupt_data",
        BmpDecoderErrors::IoErrors(_) => "io",
        _ => "other"
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_bmp() {
    let paths = read_entries("bmp.json");

    let default_path = bmp_path();
    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let file_name = default_path.join(&path.name);

        // load file
        let file_contents = ZCursor::new(read(&file_name).unwrap());

        let options = DecoderOptions::default();
        let mut decoder = BmpDecoder::new_with_options(file_contents, options);

        let result = decoder.decode();

        let failure = match (&path.error, result) {
            (Some(kind), Ok(_)) => Some(format!("expected a {} error but decoding succeeded", kind)),
            (Some(kind), Err(e)) if error_kind(&e) != kind.as_str() => {
                Some(format!("expected a {} error but found {:?}", kind, e))
            }
            (Some(_), Err(_)) => None,
            (None, Err(e)) => Some(format!("decoding failed with {:?}", e)),
            (None, Ok(pixels)) => {
                let expected = path.expected_pixels().unwrap();
                let colorspace = path.colorspace.map(|x| x.to_colorspace());

                if hash(&pixels) != hash(&expected) {
                    Some(format!(
                        "Hash mismatch\nExpected {:?}\nbut found {:?}",
                        expected, pixels
                    ))
                } else if decoder.dimensions() != path.width.zip(path.height) {
                    Some(format!("wrong dimensions {:?}", decoder.dimensions()))
                } else if decoder.colorspace() != colorspace {
                    Some(format!("wrong colorspace {:?}", decoder.colorspace()))
                } else {
                    None
                }
            }
        };

        if let Some(err) = failure {
            error = true;
            files.push(path.to_owned());
            // report error
            eprintln!("{:?}: {}\nConfig:{:#?}\n", file_name, err, path);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn file_and_memory_readers_agree() {
    for path in read_entries("bmp.json") {
        if path.error.is_some() {
            continue;
        }
        let file_name = bmp_path().join(&path.name);

        let in_memory = BmpDecoder::new(ZCursor::new(read(&file_name).unwrap()))
            .decode()
            .unwrap();
        let from_file = BmpDecoder::new(BufReader::new(File::open(&file_name).unwrap()))
            .decode()
            .unwrap();

        assert_eq!(hash(&in_memory), hash(&from_file), "{}", path.name);
    }
}

#[test]
fn small_max_dimensions_are_enforced() {
    let file_name = bmp_path().join("pal1_10x2.bmp");
    let options = DecoderOptions::default().set_max_width(9);

    let mut decoder = BmpDecoder::new_with_options(ZCursor::new(read(file_name).unwrap()), options);
    assert!(matches!(
        decoder.decode(),
        Err(BmpDecoderErrors::TooLargeDimensions("width", 9, 10))
    ));
}
