/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;

use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::{ZByteWriterTrait, ZWriter};
use texel_core::colorspace::ColorSpace;
use texel_core::log::trace;
use texel_core::options::EncoderOptions;

use crate::common::FILE_HEADER_SIZE;
use crate::BmpEncodeErrors;

const SUPPORTED_COLORSPACES: [ColorSpace; 6] = [
    ColorSpace::RGB,
    ColorSpace::BGR,
    ColorSpace::Luma,
    ColorSpace::RGBA,
    ColorSpace::BGRA,
    ColorSpace::LumaA
];
/// `LCS_sRGB`, "sRGB" read as a little endian u32
const LCS_SRGB: u32 = 0x7352_4742;
/// 72 DPI
const PIXELS_PER_METER: i32 = 2835;

/// BMP encoder
///
/// Images without alpha are written as 24 bit BGR with a
/// `BITMAPINFOHEADER`, images with alpha as 32 bit BGRA with
/// BITFIELDS compression and a `BITMAPV4HEADER` so readers know
/// the fourth byte is alpha. Rows are written bottom row first.
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use texel_core::bit_depth::BitDepth;
/// use texel_core::colorspace::ColorSpace;
/// use texel_core::options::EncoderOptions;
/// use texel_bmp::BmpEncoder;
/// use texel_bmp::BmpEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), BmpEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let encoder = BmpEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert_eq!(size, sink.len());
///     Ok(())
///}
/// ```
pub struct BmpEncoder<'a> {
    // raw pixels, in the layout `options.colorspace()` describes
    pixel_data: &'a [u8],
    options:    EncoderOptions
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> BmpEncoder<'a> {
        BmpEncoder {
            pixel_data: data,
            options
        }
    }

    /// Bytes per stored pixel, 3 or 4
    fn output_components(&self) -> usize {
        if self.options.colorspace().has_alpha() {
            4
        } else {
            3
        }
    }
    fn header_size(&self) -> u32 {
        if self.output_components() == 4 {
            108
        } else {
            40
        }
    }
    /// Bytes of a stored row including padding, `None` on overflow
    fn row_size(&self) -> Option<usize> {
        let bytes = self.options.width().checked_mul(self.output_components())?;
        Some(bytes.checked_add(3)? & !3)
    }
    fn image_size(&self) -> Option<usize> {
        self.row_size()?.checked_mul(self.options.height())
    }

    /// Return the exact size of the encoded image
    ///
    /// Saturates at `usize::MAX` for dimensions no BMP can hold.
    pub fn max_size(&self) -> usize {
        let headers = (FILE_HEADER_SIZE + self.header_size()) as usize;

        self.image_size()
            .and_then(|size| size.checked_add(headers))
            .unwrap_or(usize::MAX)
    }

    /// Validate the options and write both headers
    ///
    /// Returns the padded size of a stored row.
    fn encode_headers<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<usize, BmpEncodeErrors> {
        let options = &self.options;

        if !SUPPORTED_COLORSPACES.contains(&options.colorspace()) {
            return Err(BmpEncodeErrors::UnsupportedColorspace(
                options.colorspace(),
                &SUPPORTED_COLORSPACES
            ));
        }
        if options.depth() != BitDepth::Eight {
            return Err(BmpEncodeErrors::UnsupportedDepth(options.depth()));
        }
        if options.width() == 0 || options.height() == 0 {
            return Err(BmpEncodeErrors::Generic("Zero sized images cannot be encoded"));
        }
        let width = i32::try_from(options.width())
            .map_err(|_| BmpEncodeErrors::TooLargeDimensions(options.width()))?;
        let height = i32::try_from(options.height())
            .map_err(|_| BmpEncodeErrors::TooLargeDimensions(options.height()))?;

        let row_size = self
            .row_size()
            .ok_or(BmpEncodeErrors::TooLargeDimensions(options.width()))?;
        let image_size = self
            .image_size()
            .and_then(|size| u32::try_from(size).ok())
            .ok_or(BmpEncodeErrors::TooLargeDimensions(options.height()))?;
        let data_offset = FILE_HEADER_SIZE + self.header_size();
        let file_size = data_offset
            .checked_add(image_size)
            .ok_or(BmpEncodeErrors::TooLargeDimensions(options.height()))?;

        let expected_len = options
            .width()
            .checked_mul(options.height())
            .and_then(|pixels| pixels.checked_mul(options.colorspace().num_components()))
            .ok_or(BmpEncodeErrors::TooLargeDimensions(options.width()))?;

        if self.pixel_data.len() != expected_len {
            return Err(BmpEncodeErrors::Generic(
                "Expected length doesn't match pixels length"
            ));
        }

        let is_alpha = self.output_components() == 4;

        // file header
        writer.write_all(b"BM")?;
        writer.write_u32_le_err(file_size)?;
        // reserved
        writer.write_u32_le_err(0)?;
        writer.write_u32_le_err(data_offset)?;

        // info header
        writer.write_u32_le_err(self.header_size())?;
        writer.write_i32_le_err(width)?;
        // positive, bottom row first
        writer.write_i32_le_err(height)?;
        // planes
        writer.write_u16_le_err(1)?;
        writer.write_u16_le_err(if is_alpha { 32 } else { 24 })?;
        // compression, BI_BITFIELDS or BI_RGB
        writer.write_u32_le_err(if is_alpha { 3 } else { 0 })?;
        writer.write_u32_le_err(image_size)?;
        writer.write_i32_le_err(PIXELS_PER_METER)?;
        writer.write_i32_le_err(PIXELS_PER_METER)?;
        // colors used, important colors
        writer.write_u32_le_err(0)?;
        writer.write_u32_le_err(0)?;

        if is_alpha {
            // v4 extension: masks, color space, endpoints and gamma
            for mask in [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000_u32] {
                writer.write_u32_le_err(mask)?;
            }
            writer.write_u32_le_err(LCS_SRGB)?;
            // 36 bytes of CIEXYZTRIPLE endpoints and 12 of gamma, unused for sRGB
            writer.write_all(&[0; 48])?;
        }
        Ok(row_size)
    }

    /// Encode the image into a sink
    ///
    /// # Arguments.
    /// - sink: Where the encoded bytes are written to
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, BmpEncodeErrors> {
        let mut stream = ZWriter::new(sink);

        let row_size = self.encode_headers(&mut stream)?;
        stream.reserve(self.max_size())?;

        let colorspace = self.options.colorspace();
        let in_components = colorspace.num_components();
        let out_components = self.output_components();

        trace!(
            "Encoding {}x{} {:?} image as {} bit BMP",
            self.options.width(),
            self.options.height(),
            colorspace,
            out_components * 8
        );

        let mut row = vec![0_u8; row_size];

        for in_row in self
            .pixel_data
            .rchunks_exact(self.options.width() * in_components)
        {
            for (out, pix) in row
                .chunks_exact_mut(out_components)
                .zip(in_row.chunks_exact(in_components))
            {
                // out is always BGR(A)
                match colorspace {
                    ColorSpace::RGB | ColorSpace::RGBA => {
                        out[0] = pix[2];
                        out[1] = pix[1];
                        out[2] = pix[0];
                    }
                    ColorSpace::BGR | ColorSpace::BGRA => out[0..3].copy_from_slice(&pix[0..3]),
                    _ => out[0..3].fill(pix[0])
                }
                if out_components == 4 {
                    out[3] = pix[in_components - 1];
                }
            }
            stream.write_all(&row)?;
        }
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}
