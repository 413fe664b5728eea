/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Baseline JPEG encoder
//!
//! Writes a JFIF file with three components, Y at full resolution and
//! Cb/Cr either subsampled 2x2 (quality 90 and below) or at full resolution.
//! All components share one interleaved scan.

use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};
use texel_core::colorspace::ColorSpace;
use texel_core::log::{trace, warn};
use texel_core::options::EncoderOptions;

use crate::bitstream::BitWriter;
use crate::color_convert::{channel_offsets, downsample_420, McuSource};
use crate::errors::JpegEncodeErrors;
use crate::fdct::fdct_block;
use crate::huffman::HuffmanTable;
use crate::misc::{
    APP0, DEFINE_HUFFMAN_TABLE, DEFINE_QUANT_TABLE, END_OF_IMAGE, START_OF_FRAME_BASE,
    START_OF_IMAGE, START_OF_SCAN
};
use crate::quant::{normalize_quality, quantize_block, QuantTables};

const SUPPORTED_COLORSPACES: [ColorSpace; 7] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA,
    ColorSpace::BGR,
    ColorSpace::BGRA,
    ColorSpace::ARGB
];

/// Highest quality that still subsamples chroma
const MAX_SUBSAMPLED_QUALITY: u8 = 90;

/// Huffman tables for one component
struct ComponentTables<'a> {
    dc:          &'a HuffmanTable,
    ac:          &'a HuffmanTable,
    multipliers: &'a [f32; 64]
}

/// A JPEG encoder
///
/// # Example
/// ```
/// use texel_core::bit_depth::BitDepth;
/// use texel_core::colorspace::ColorSpace;
/// use texel_core::options::EncoderOptions;
/// use texel_jpeg::JpegEncoder;
///
/// fn main() -> Result<(), texel_jpeg::JpegEncodeErrors> {
///     // a 20x10 red and blue image
///     let mut pixels = vec![0_u8; 20 * 10 * 3];
///     for (i, pix) in pixels.chunks_exact_mut(3).enumerate() {
///         pix[(i % 2) * 2] = 255;
///     }
///     let options = EncoderOptions::new(20, 10, ColorSpace::RGB, BitDepth::Eight);
///     let encoder = JpegEncoder::new(&pixels, options);
///
///     let mut sink = vec![];
///     encoder.encode(&mut sink)?;
///     assert_eq!(&sink[sink.len() - 2..], &[0xFF, 0xD9]);
///     Ok(())
/// }
/// ```
pub struct JpegEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> JpegEncoder<'a> {
    /// Create a new encoder
    ///
    /// # Arguments
    /// - data: Interleaved 8 bit pixels, laid out as `options.colorspace()` says
    /// - options: Width, height, colorspace and quality of the image.
    ///   A quality of zero selects the default of 90, anything above 100 is treated as 100
    pub fn new(data: &'a [u8], options: EncoderOptions) -> JpegEncoder<'a> {
        JpegEncoder { data, options }
    }

    /// The quality the encoder will use after clamping
    pub fn quality(&self) -> u8 {
        normalize_quality(self.options.quality())
    }

    /// Whether chroma planes are written at half resolution
    pub fn subsampled(&self) -> bool {
        self.quality() <= MAX_SUBSAMPLED_QUALITY
    }

    fn validate(&self) -> Result<[usize; 3], JpegEncodeErrors> {
        let (width, height) = (self.options.width(), self.options.height());
        let colorspace = self.options.colorspace();

        if width == 0 || height == 0 {
            return Err(JpegEncodeErrors::Generic("Image width or height is zero"));
        }
        if width > usize::from(u16::MAX) {
            return Err(JpegEncodeErrors::TooLargeDimensions(width));
        }
        if height > usize::from(u16::MAX) {
            return Err(JpegEncodeErrors::TooLargeDimensions(height));
        }
        if self.options.depth() != BitDepth::Eight {
            return Err(JpegEncodeErrors::UnsupportedDepth(self.options.depth()));
        }
        let offsets = channel_offsets(colorspace).ok_or(
            JpegEncodeErrors::UnsupportedColorspace(colorspace, &SUPPORTED_COLORSPACES)
        )?;

        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()));

        if expected != Some(self.data.len()) {
            return Err(JpegEncodeErrors::Generic(
                "Pixel data length does not match width, height and colorspace"
            ));
        }
        Ok(offsets)
    }

    /// Encode the image into a sink
    ///
    /// # Returns
    /// - Ok(size): Number of bytes written to the sink
    /// - Err: The error encountered, nothing useful was written
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, JpegEncodeErrors> {
        let offsets = self.validate()?;

        if self.options.quality() == 0 || self.options.quality() > 100 {
            warn!(
                "Quality {} is out of range, using {}",
                self.options.quality(),
                self.quality()
            );
        }
        let subsample = self.subsampled();
        let tables = QuantTables::new(self.quality());

        trace!(
            "Encoding {}x{} {:?} image as JPEG, quality {}, subsampled: {}",
            self.options.width(),
            self.options.height(),
            self.options.colorspace(),
            self.quality(),
            subsample
        );

        let luma_dc = HuffmanTable::luma_dc();
        let luma_ac = HuffmanTable::luma_ac();
        let chroma_dc = HuffmanTable::chroma_dc();
        let chroma_ac = HuffmanTable::chroma_ac();

        let mut writer = ZWriter::new(sink);

        self.write_headers(
            &mut writer,
            &tables,
            subsample,
            [&luma_dc, &luma_ac, &chroma_dc, &chroma_ac]
        )?;

        let source = McuSource {
            pixels: self.data,
            width: self.options.width(),
            height: self.options.height(),
            components: self.options.colorspace().num_components(),
            offsets
        };
        let luma = ComponentTables {
            dc:          &luma_dc,
            ac:          &luma_ac,
            multipliers: tables.luma_multipliers()
        };
        let chroma = ComponentTables {
            dc:          &chroma_dc,
            ac:          &chroma_ac,
            multipliers: tables.chroma_multipliers()
        };
        {
            let mut bits = BitWriter::new(&mut writer);

            if subsample {
                encode_scan_420(&source, &mut bits, &luma, &chroma)?;
            } else {
                encode_scan_444(&source, &mut bits, &luma, &chroma)?;
            }
            bits.flush()?;
        }
        writer.write_u16_be_err(END_OF_IMAGE)?;
        writer.flush()?;

        Ok(writer.bytes_written())
    }

    fn write_headers<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>, tables: &QuantTables, subsample: bool,
        huffman: [&HuffmanTable; 4]
    ) -> Result<(), ZByteIoError> {
        writer.write_u16_be_err(START_OF_IMAGE)?;

        // JFIF 1.1, no units, 1:1 aspect, no thumbnail
        writer.write_u16_be_err(APP0)?;
        writer.write_u16_be_err(16)?;
        writer.write_all(b"JFIF\0")?;
        writer.write_all(&[1, 1, 0])?;
        writer.write_u16_be_err(1)?;
        writer.write_u16_be_err(1)?;
        writer.write_all(&[0, 0])?;

        // both tables in one segment, 8 bit precision
        writer.write_u16_be_err(DEFINE_QUANT_TABLE)?;
        writer.write_u16_be_err(2 + 2 * 65)?;
        writer.write_u8_err(0)?;
        writer.write_all(&tables.luma)?;
        writer.write_u8_err(1)?;
        writer.write_all(&tables.chroma)?;

        let luma_sampling = if subsample { 0x22 } else { 0x11 };

        writer.write_u16_be_err(START_OF_FRAME_BASE)?;
        writer.write_u16_be_err(17)?;
        writer.write_u8_err(8)?;
        // dimensions were validated to fit
        writer.write_u16_be_err(self.options.height() as u16)?;
        writer.write_u16_be_err(self.options.width() as u16)?;
        writer.write_u8_err(3)?;
        // id, sampling factors, quant table
        writer.write_all(&[1, luma_sampling, 0])?;
        writer.write_all(&[2, 0x11, 1])?;
        writer.write_all(&[3, 0x11, 1])?;

        // luma dc, luma ac, chroma dc, chroma ac
        const TABLE_IDS: [u8; 4] = [0x00, 0x10, 0x01, 0x11];

        let length: usize = huffman.iter().map(|x| 17 + x.values().len()).sum();
        writer.write_u16_be_err(DEFINE_HUFFMAN_TABLE)?;
        writer.write_u16_be_err((2 + length) as u16)?;

        for (id, table) in TABLE_IDS.iter().zip(huffman.iter()) {
            writer.write_u8_err(*id)?;
            writer.write_all(table.bits())?;
            writer.write_all(table.values())?;
        }

        writer.write_u16_be_err(START_OF_SCAN)?;
        writer.write_u16_be_err(12)?;
        writer.write_u8_err(3)?;
        // component id, dc table << 4 | ac table
        writer.write_all(&[1, 0x00])?;
        writer.write_all(&[2, 0x11])?;
        writer.write_all(&[3, 0x11])?;
        // spectral selection 0..63, no successive approximation
        writer.write_all(&[0, 63, 0])?;

        Ok(())
    }
}

fn encode_scan_444<T: ZByteWriterTrait>(
    source: &McuSource, bits: &mut BitWriter<T>, luma: &ComponentTables,
    chroma: &ComponentTables
) -> Result<(), ZByteIoError> {
    let (mut dc_y, mut dc_u, mut dc_v) = (0, 0, 0);
    let (mut y, mut u, mut v) = ([0.0; 64], [0.0; 64], [0.0; 64]);

    for mcu_y in (0..source.height).step_by(8) {
        for mcu_x in (0..source.width).step_by(8) {
            source.convert(mcu_x, mcu_y, 8, &mut y, &mut u, &mut v);

            dc_y = encode_block(bits, &mut y, 0, 8, dc_y, luma)?;
            dc_u = encode_block(bits, &mut u, 0, 8, dc_u, chroma)?;
            dc_v = encode_block(bits, &mut v, 0, 8, dc_v, chroma)?;
        }
    }
    Ok(())
}

fn encode_scan_420<T: ZByteWriterTrait>(
    source: &McuSource, bits: &mut BitWriter<T>, luma: &ComponentTables,
    chroma: &ComponentTables
) -> Result<(), ZByteIoError> {
    let (mut dc_y, mut dc_u, mut dc_v) = (0, 0, 0);
    let (mut y, mut u, mut v) = ([0.0; 256], [0.0; 256], [0.0; 256]);
    let (mut sub_u, mut sub_v) = ([0.0; 64], [0.0; 64]);

    for mcu_y in (0..source.height).step_by(16) {
        for mcu_x in (0..source.width).step_by(16) {
            source.convert(mcu_x, mcu_y, 16, &mut y, &mut u, &mut v);

            // four luma blocks, left to right then top to bottom
            for offset in [0, 8, 128, 136] {
                dc_y = encode_block(bits, &mut y, offset, 16, dc_y, luma)?;
            }
            downsample_420(&u, &mut sub_u);
            downsample_420(&v, &mut sub_v);

            dc_u = encode_block(bits, &mut sub_u, 0, 8, dc_u, chroma)?;
            dc_v = encode_block(bits, &mut sub_v, 0, 8, dc_v, chroma)?;
        }
    }
    Ok(())
}

/// Category (bit length) of a coefficient and the bits that follow its code
#[inline(always)]
fn magnitude_bits(value: i32) -> (u32, u8) {
    let category = (32 - value.unsigned_abs().leading_zeros()) as u8;
    let biased = if value < 0 { value - 1 } else { value };
    let mask = (1_u32 << category) - 1;

    ((biased as u32) & mask, category)
}

/// Transform, quantize and entropy code one block, returning its DC value
fn encode_block<T: ZByteWriterTrait>(
    bits: &mut BitWriter<T>, data: &mut [f32], offset: usize, stride: usize, previous_dc: i32,
    tables: &ComponentTables
) -> Result<i32, ZByteIoError> {
    fdct_block(data, offset, stride);
    let block = quantize_block(data, offset, stride, tables.multipliers);

    let diff = block[0] - previous_dc;
    let (value, category) = magnitude_bits(diff);
    let code = tables.dc.code(category);

    bits.put_bits(u32::from(code.code), code.length)?;
    if category > 0 {
        bits.put_bits(value, category)?;
    }

    let end_of_block = tables.ac.code(0x00);
    let sixteen_zeroes = tables.ac.code(0xF0);

    let last_non_zero = match block[1..].iter().rposition(|x| *x != 0) {
        Some(pos) => pos + 1,
        None => {
            bits.put_bits(u32::from(end_of_block.code), end_of_block.length)?;
            return Ok(block[0]);
        }
    };

    let mut run = 0;
    for coefficient in &block[1..=last_non_zero] {
        if *coefficient == 0 {
            run += 1;
            continue;
        }
        while run >= 16 {
            bits.put_bits(u32::from(sixteen_zeroes.code), sixteen_zeroes.length)?;
            run -= 16;
        }
        let (value, category) = magnitude_bits(*coefficient);
        let code = tables.ac.code((run << 4) | category);

        bits.put_bits(u32::from(code.code), code.length)?;
        bits.put_bits(value, category)?;
        run = 0;
    }
    if last_non_zero != 63 {
        bits.put_bits(u32::from(end_of_block.code), end_of_block.length)?;
    }
    Ok(block[0])
}
