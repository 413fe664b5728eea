/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// BMP has been extended many times, the layout this decoder reads is
//
// - A 14 byte file header: the magic number ("BM"), file size, two reserved
//   u16's and the offset to the pixel data.
// - An info header whose first u32 is its own size. 12 bytes for the OS/2
//   core header (u16 width and height), 40 for BITMAPINFOHEADER and 56, 108
//   or 124 for the later versions which extend the 40 byte header.
// - For BITFIELDS compression, red, green and blue masks directly after the
//   40 byte header, at file offset 54. Headers of 56 bytes and more also
//   carry an alpha mask.
// - The color table for depths below 16, BGR for the core header and BGR0
//   otherwise. It runs up to the pixel data.
// - Pixel rows, bottom row first unless the height is negative, each padded
//   to a multiple of 4 bytes.

use alloc::vec::Vec;
use alloc::{format, vec};

use texel_core::bit_depth::BitDepth;
use texel_core::bytestream::{ZByteReaderTrait, ZReader};
use texel_core::colorspace::ColorSpace;
use texel_core::log::{trace, warn};
use texel_core::options::DecoderOptions;

use crate::common::{BmpCompression, BmpPixelFormat, FILE_HEADER_SIZE, SUPPORTED_HEADER_SIZES};
use crate::utils::{expand_bits_to_byte, mask_shift, shift_signed};
use crate::BmpDecoderErrors;

/// Masks of 32 bit BI_RGB data, which is BGRA in memory
const DEFAULT_MASKS_32: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];
/// Masks of 16 bit BI_RGB data, X1R5G5B5
const DEFAULT_MASKS_16: [u32; 4] = [0x7C00, 0x03E0, 0x001F, 0];

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14..18) {
                let sz = u32::from_le_bytes([sz[0], sz[1], sz[2], sz[3]]);
                return SUPPORTED_HEADER_SIZES.contains(&sz);
            }
        }
    }
    false
}

/// A single palette entry for bmp
#[derive(Clone, Copy, Default, Debug)]
struct PaletteEntry {
    red:   u8,
    green: u8,
    blue:  u8
}

/// A BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// - use `decode_headers`+ utility functions to get information
/// ```no_run
/// use texel_bmp::BmpDecoder;
/// use texel_core::bytestream::ZCursor;
///
/// fn main()->Result<(),texel_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(b"BMP");
///     let mut decoder = BmpDecoder::new(source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     // unwrap won't panic
///     let (w,h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}",w,h);
///     println!("Colorspace: {:?}\t",decoder.colorspace().unwrap());
///
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
///
/// ```no_run
/// use texel_bmp::BmpDecoder;
/// use texel_core::bytestream::ZCursor;
///
/// fn main()->Result<(),texel_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(b"BMP");
///     let mut decoder = BmpDecoder::new(source);
///     let pixels = decoder.decode()?;
///     println!("Pixels length:{}",pixels.len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    bytes:           ZReader<T>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    /// Rows are stored top row first
    top_down:        bool,
    rgb_bitfields:   [u32; 4],
    decoded_headers: bool,
    pix_fmt:         BmpPixelFormat,
    comp:            BmpCompression,
    data_offset:     u32,
    palette:         Vec<PaletteEntry>,
    depth:           u16
}

impl<T> BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    ///
    /// # Arguments
    /// - `data`: The buffer from which we will read bytes from
    ///
    /// # Returns
    /// - A BMP decoder instance
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`:  Specialized options for this decoder
    ///
    /// returns: A BMP Decoder instance
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ZReader::new(data),
            options,
            decoded_headers: false,
            width: 0,
            height: 0,
            comp: BmpCompression::Unknown,
            rgb_bitfields: [0; 4],
            pix_fmt: BmpPixelFormat::None,
            top_down: false,
            data_offset: 0,
            depth: 0,
            palette: vec![]
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, most information fields will be filled
    /// except the actual decoding bytes
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        if self.bytes.get_u8_err()? != b'B' || self.bytes.get_u8_err()? != b'M' {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        // 4 bytes file size
        // skip 4 reserved bytes
        self.bytes.skip(8)?;

        let data_offset = self.bytes.get_u32_le_err()?;
        let ihsize = self.bytes.get_u32_le_err()?;

        if !SUPPORTED_HEADER_SIZES.contains(&ihsize) {
            return Err(BmpDecoderErrors::UnsupportedFormat(
                "Unknown information header size"
            ));
        }
        if ihsize.saturating_add(FILE_HEADER_SIZE) > data_offset {
            return Err(BmpDecoderErrors::CorruptData(
                "Pixel data offset points inside the headers"
            ));
        }

        let (width, height): (i64, i64) = if ihsize == 12 {
            // os/2 core header
            (
                i64::from(self.bytes.get_u16_le_err()?),
                i64::from(self.bytes.get_u16_le_err()?)
            )
        } else {
            (
                i64::from(self.bytes.get_i32_le_err()?),
                i64::from(self.bytes.get_i32_le_err()?)
            )
        };

        if width <= 0 {
            return Err(BmpDecoderErrors::CorruptData("Width is zero or negative"));
        }
        if height == 0 {
            return Err(BmpDecoderErrors::CorruptData("Height is zero"));
        }
        // negative heights store the top row first
        self.top_down = height < 0;

        self.width = usize::try_from(width).map_err(|_| BmpDecoderErrors::OverFlowOccurred)?;
        self.height =
            usize::try_from(height.unsigned_abs()).map_err(|_| BmpDecoderErrors::OverFlowOccurred)?;

        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }

        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        // planes
        if self.bytes.get_u16_le_err()? != 1 {
            return Err(BmpDecoderErrors::CorruptData("Number of planes is not 1"));
        }

        let depth = self.bytes.get_u16_le_err()?;

        let compression = if ihsize >= 40 {
            match BmpCompression::from_u32(self.bytes.get_u32_le_err()?) {
                Some(c) => c,
                None => {
                    return Err(BmpDecoderErrors::UnsupportedFormat(
                        "Unsupported BMP compression scheme"
                    ));
                }
            }
        } else {
            BmpCompression::RGB
        };

        self.pix_fmt = match depth {
            1 | 2 | 4 | 8 => {
                if depth == 2 {
                    if self.options.strict_mode() {
                        return Err(BmpDecoderErrors::UnsupportedFormat(
                            "Depth of 2 is not part of the BMP format"
                        ));
                    }
                    warn!("Depth of 2 not officially supported");
                }
                BmpPixelFormat::PAL8
            }
            24 => BmpPixelFormat::RGB,
            16 | 32 => {
                self.read_bitfields(ihsize, depth, compression)?;

                if self.rgb_bitfields[3] == 0 {
                    BmpPixelFormat::RGB
                } else {
                    BmpPixelFormat::RGBA
                }
            }
            _ => {
                let message = format!("Depth {depth} unsupported");
                return Err(BmpDecoderErrors::Generic(message));
            }
        };

        if compression == BmpCompression::BITFIELDS && !(depth == 16 || depth == 32) {
            return Err(BmpDecoderErrors::UnsupportedFormat(
                "BITFIELDS compression needs a depth of 16 or 32"
            ));
        }

        if self.pix_fmt == BmpPixelFormat::PAL8 {
            self.read_palette(ihsize, data_offset)?;
        }

        trace!("Pixel format : {:?}", self.pix_fmt);
        trace!("Compression  : {:?}", compression);
        trace!("Bit depth: {:?}", depth);
        self.comp = compression;
        self.depth = depth;
        self.data_offset = data_offset;
        self.bytes.set_position(data_offset as usize)?;

        self.decoded_headers = true;

        Ok(())
    }

    fn read_bitfields(
        &mut self, ihsize: u32, depth: u16, compression: BmpCompression
    ) -> Result<(), BmpDecoderErrors> {
        if compression == BmpCompression::BITFIELDS {
            // masks live right after the 40 byte header
            self.bytes.set_position((FILE_HEADER_SIZE + 40) as usize)?;

            self.rgb_bitfields[0] = self.bytes.get_u32_le_err()?;
            self.rgb_bitfields[1] = self.bytes.get_u32_le_err()?;
            self.rgb_bitfields[2] = self.bytes.get_u32_le_err()?;

            if ihsize >= 56 {
                self.rgb_bitfields[3] = self.bytes.get_u32_le_err()?;
            }
        } else if depth == 16 {
            self.rgb_bitfields = DEFAULT_MASKS_16;
        } else {
            self.rgb_bitfields = DEFAULT_MASKS_32;
        }
        let [mr, mg, mb, _] = self.rgb_bitfields;

        if mr == mg && mg == mb {
            return Err(BmpDecoderErrors::CorruptData("Identical color masks"));
        }
        if self.rgb_bitfields.iter().any(|x| x.count_ones() > 8) {
            return Err(BmpDecoderErrors::UnsupportedFormat(
                "Color masks wider than 8 bits"
            ));
        }
        trace!("Bitfields: {:X?}", self.rgb_bitfields);
        Ok(())
    }

    fn read_palette(&mut self, ihsize: u32, data_offset: u32) -> Result<(), BmpDecoderErrors> {
        // OS/2 bitmap, 3 bytes per palette entry
        let entry_size = if ihsize == 12 { 3 } else { 4 };

        let colors = (data_offset - FILE_HEADER_SIZE - ihsize) / entry_size;

        if colors == 0 {
            return Err(BmpDecoderErrors::BadPalette("No palette present"));
        }
        if colors > 256 {
            return Err(BmpDecoderErrors::BadPalette("More than 256 palette entries"));
        }
        // palette location
        self.bytes
            .set_position((FILE_HEADER_SIZE + ihsize) as usize)?;

        self.palette.clear();
        for _ in 0..colors {
            let [b, g, r] = self.bytes.read_fixed_bytes_or_error::<3>()?;

            if entry_size == 4 {
                // reserved, alpha is not honoured in palettes
                self.bytes.skip(1)?;
            }
            self.palette.push(PaletteEntry {
                red:   r,
                green: g,
                blue:  b
            });
        }
        trace!("Palette entries: {}", colors);
        Ok(())
    }

    /// Return the expected size of the output buffer for which
    /// a contiguous slice of `&[u8]` can store it without needing reallocation
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        if !self.decoded_headers {
            return None;
        }
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.pix_fmt.num_components())
    }

    /// Return the BMP bit depth
    ///
    /// This is always [BitDepth::Eight](texel_core::bit_depth::BitDepth::Eight)
    /// since it's the only one the decoder outputs
    ///
    /// Images with less than 8 bits per pixel are expanded to eight bits
    pub fn depth(&self) -> BitDepth {
        BitDepth::Eight
    }
    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }
    /// Get the image colorspace or none if the headers weren't decoded
    ///
    /// # Returns
    /// - `Some(colorspace)`: The colorspace of the image, RGB or RGBA
    /// - `None`: Indicates headers weren't decoded or an error occured
    /// during decoding of headers
    pub fn colorspace(&self) -> Option<ColorSpace> {
        if !self.decoded_headers {
            return None;
        }
        Some(self.pix_fmt.into_colorspace())
    }
    /// Decode an image returning the decoded bytes as an
    /// allocated `Vec<u8>` or an error if decoding could not be completed
    ///
    /// Also see [`decode_into`](Self::decode_into) which decodes into
    /// a pre-allocated buffer
    pub fn decode(&mut self) -> Result<Vec<u8>, BmpDecoderErrors> {
        self.decode_headers()?;
        let mut output = vec![
            0_u8;
            self.output_buf_size()
                .ok_or(BmpDecoderErrors::OverFlowOccurred)?
        ];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode an encoded image into a buffer or return an error
    /// if something bad occurred
    ///
    /// The buffer must be at least [`output_buf_size`](Self::output_buf_size) bytes,
    /// only that many bytes are written.
    ///
    /// Also see [`decode`](Self::decode) which allocates and decodes into buffer
    pub fn decode_into(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if buf.len() < output_size {
            return Err(BmpDecoderErrors::TooSmallBuffer(output_size, buf.len()));
        }
        let buf = &mut buf[0..output_size];

        self.bytes.set_position(self.data_offset as usize)?;

        // NOTE: The row loops below iterate the output with rchunks, this
        // writes the bottom-up rows BMP usually stores straight into their
        // final place.
        //
        //   ┌───────────────┐
        //   │               │
        //   │               │
        //   │               │
        //   │[x,1]          │
        //   └───────────────┘
        //
        // Top-down images come out upside down from this and are flipped at the end.
        match self.pix_fmt {
            BmpPixelFormat::PAL8 => self.decode_palette(buf)?,
            BmpPixelFormat::RGB if self.depth == 24 => self.decode_bgr(buf)?,
            BmpPixelFormat::RGB | BmpPixelFormat::RGBA => {
                if self.depth == 32 && self.rgb_bitfields == DEFAULT_MASKS_32 {
                    self.decode_bgra(buf)?;
                } else {
                    self.decode_masked(buf)?;
                }
            }
            BmpPixelFormat::None => {
                return Err(BmpDecoderErrors::UnsupportedFormat("Unknown pixel format"));
            }
        }

        if self.pix_fmt == BmpPixelFormat::RGBA && buf.chunks_exact(4).all(|x| x[3] == 0) {
            // writers that don't know about alpha leave it zeroed,
            // such images are meant to be opaque
            warn!("All alpha values are zero, treating image as opaque");
            for pix in buf.chunks_exact_mut(4) {
                pix[3] = 255;
            }
        }

        if self.top_down {
            // undo the implicit flip of the rchunks iteration
            let length = self.width * self.pix_fmt.num_components();

            let mid = (self.height / 2) * length;
            let (in_img_top, in_img_bottom) = buf.split_at_mut(mid);

            for (in_dim, out_dim) in in_img_top
                .chunks_exact_mut(length)
                .zip(in_img_bottom.rchunks_exact_mut(length))
            {
                in_dim.swap_with_slice(out_dim);
            }
        }

        Ok(())
    }

    /// Bytes of a stored row, rounded up to a multiple of 4
    fn padded_row_bytes(&self) -> Result<usize, BmpDecoderErrors> {
        let bits = self
            .width
            .checked_mul(usize::from(self.depth))
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        Ok(((bits + 31) / 32) * 4)
    }

    fn decode_palette(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        // a whole row is read before expanding, indices are packed
        // MSB first for depths below 8
        let mut in_row = vec![0_u8; self.padded_row_bytes()?];
        let mut indices = vec![0_u8; self.width];

        for out_row in buf.rchunks_exact_mut(self.width * 3) {
            self.bytes.read_exact_bytes(&mut in_row)?;

            expand_bits_to_byte(usize::from(self.depth), &in_row, &mut indices);

            for (index, pix) in indices.iter().zip(out_row.chunks_exact_mut(3)) {
                let entry = self
                    .palette
                    .get(usize::from(*index))
                    .ok_or(BmpDecoderErrors::BadPalette("Index beyond palette"))?;

                pix[0] = entry.red;
                pix[1] = entry.green;
                pix[2] = entry.blue;
            }
        }
        Ok(())
    }

    fn decode_bgr(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        // bmp rounds up each line to be a multiple of 4, padding the end if necessary
        let out_width = self.width * 3;
        let mut padding = [0_u8; 3];
        let pad = self.padded_row_bytes()? - out_width;

        for out in buf.rchunks_exact_mut(out_width) {
            self.bytes.read_exact_bytes(out)?;
            // skip padding bytes
            self.bytes.read_exact_bytes(&mut padding[..pad])?;
            // then flip bgr to rgb
            for pix_pair in out.chunks_exact_mut(3) {
                pix_pair.swap(0, 2);
            }
        }
        Ok(())
    }

    fn decode_bgra(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        // bpp of 32 doesn't have padding, rows are whole u32's already
        for out in buf.rchunks_exact_mut(self.width * 4) {
            self.bytes.read_exact_bytes(out)?;

            for pix in out.chunks_exact_mut(4) {
                pix.swap(0, 2);
            }
        }
        Ok(())
    }

    fn decode_masked(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        let [mr, mg, mb, ma] = self.rgb_bitfields;

        let (rshift, gshift, bshift, ashift) =
            (mask_shift(mr), mask_shift(mg), mask_shift(mb), mask_shift(ma));
        let (rcount, gcount, bcount, acount) =
            (mr.count_ones(), mg.count_ones(), mb.count_ones(), ma.count_ones());

        let components = self.pix_fmt.num_components();
        let bytes_per_pixel = usize::from(self.depth / 8);
        let mut in_row = vec![0_u8; self.padded_row_bytes()?];

        for out in buf.rchunks_exact_mut(self.width * components) {
            self.bytes.read_exact_bytes(&mut in_row)?;

            for (a, raw) in out
                .chunks_exact_mut(components)
                .zip(in_row.chunks_exact(bytes_per_pixel))
            {
                let v = match *raw {
                    [lo, hi] => u32::from(u16::from_le_bytes([lo, hi])),
                    [b0, b1, b2, b3] => u32::from_le_bytes([b0, b1, b2, b3]),
                    _ => 0
                };
                a[0] = shift_signed(v & mr, rshift, rcount) as u8;
                a[1] = shift_signed(v & mg, gshift, gcount) as u8;
                a[2] = shift_signed(v & mb, bshift, bcount) as u8;

                if components == 4 {
                    a[3] = shift_signed(v & ma, ashift, acount) as u8;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use texel_core::bytestream::ZCursor;
    use texel_core::colorspace::ColorSpace;

    use crate::{probe_bmp, BmpDecoder, BmpDecoderErrors};

    /// File and 40 byte info header, `extra` is anything between the
    /// header and the pixels (masks or palette)
    fn bmp(width: i32, height: i32, depth: u16, compression: u32, extra: &[u8], pixels: &[u8]) -> Vec<u8> {
        let offset = 14 + 40 + extra.len() as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(offset + pixels.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&depth.to_le_bytes());
        out.extend_from_slice(&compression.to_le_bytes());
        out.extend_from_slice(&[0; 20]);
        out.extend_from_slice(extra);
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn probe() {
        let file = bmp(1, 1, 24, 0, &[], &[0; 4]);
        assert!(probe_bmp(&file));
        assert!(!probe_bmp(b"BM"));
        assert!(!probe_bmp(b"PNG is not a bmp file"));
    }

    #[test]
    fn headers_then_metadata() {
        let file = bmp(3, 2, 24, 0, &[], &[0; 24]);
        let mut decoder = BmpDecoder::new(ZCursor::new(&file));
        assert!(decoder.dimensions().is_none());
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((3, 2)));
        assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
        assert_eq!(decoder.output_buf_size(), Some(18));
    }

    #[test]
    fn small_output_buffer() {
        let file = bmp(1, 1, 24, 0, &[], &[0; 4]);
        let mut decoder = BmpDecoder::new(ZCursor::new(&file));
        let mut out = [0; 2];
        assert!(matches!(
            decoder.decode_into(&mut out),
            Err(BmpDecoderErrors::TooSmallBuffer(3, 2))
        ));
    }

    #[test]
    fn sixteen_bit_default_masks() {
        // X1R5G5B5, one pixel of pure red, padded to 4 bytes
        let file = bmp(1, 1, 16, 0, &[], &[0x00, 0x7C, 0, 0]);
        let pixels = BmpDecoder::new(ZCursor::new(&file)).decode().unwrap();
        assert_eq!(pixels, [255, 0, 0]);
    }

    #[test]
    fn bitfields_565() {
        let mut masks = Vec::new();
        for mask in [0xF800_u32, 0x07E0, 0x001F] {
            masks.extend_from_slice(&mask.to_le_bytes());
        }
        // green then blue on one row
        let file = bmp(2, 1, 16, 3, &masks, &[0xE0, 0x07, 0x1F, 0x00]);
        let mut decoder = BmpDecoder::new(ZCursor::new(&file));
        let pixels = decoder.decode().unwrap();
        assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
        assert_eq!(pixels, [0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn bitfields_need_masked_depth() {
        let file = bmp(1, 1, 24, 3, &[0; 12], &[0; 4]);
        let result = BmpDecoder::new(ZCursor::new(&file)).decode();
        assert!(matches!(result, Err(BmpDecoderErrors::UnsupportedFormat(_))));
    }

    #[test]
    fn identical_masks_are_corrupt() {
        let mut masks = Vec::new();
        for _ in 0..3 {
            masks.extend_from_slice(&0xFF_u32.to_le_bytes());
        }
        let file = bmp(1, 1, 32, 3, &masks, &[0; 4]);
        let result = BmpDecoder::new(ZCursor::new(&file)).decode();
        assert!(matches!(result, Err(BmpDecoderErrors::CorruptData(_))));
    }

    #[test]
    fn rle_is_unsupported() {
        let file = bmp(1, 1, 8, 1, &[0; 4], &[0; 4]);
        let result = BmpDecoder::new(ZCursor::new(&file)).decode();
        assert!(matches!(result, Err(BmpDecoderErrors::UnsupportedFormat(_))));
    }
}
