/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entropy coded segment writer
//!
//! Bits are packed MSB first. Every `0xFF` byte that lands in the
//! entropy coded segment is followed by a stuffed `0x00` so a decoder
//! does not confuse it with a marker.

use texel_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};

/// Pads the last byte of a scan with one bits
const FILL_BITS: (u32, u8) = (0x7F, 7);

pub struct BitWriter<'a, T: ZByteWriterTrait> {
    writer: &'a mut ZWriter<T>,
    buffer: u32,
    bits:   u8
}

impl<'a, T: ZByteWriterTrait> BitWriter<'a, T> {
    pub fn new(writer: &'a mut ZWriter<T>) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            buffer: 0,
            bits: 0
        }
    }

    /// Append the low `length` bits of `value`.
    ///
    /// `length` must be at most 16.
    #[inline]
    pub fn put_bits(&mut self, value: u32, length: u8) -> Result<(), ZByteIoError> {
        debug_assert!(length <= 16);

        self.bits += length;
        self.buffer |= value << (24 - u32::from(self.bits));

        while self.bits >= 8 {
            let byte = ((self.buffer >> 16) & 255) as u8;

            self.writer.write_u8_err(byte)?;
            if byte == 0xFF {
                self.writer.write_u8_err(0x00)?;
            }
            self.buffer <<= 8;
            self.bits -= 8;
        }
        Ok(())
    }

    /// Pad the final partial byte with one bits and write it out.
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.put_bits(FILL_BITS.0, FILL_BITS.1)?;
        self.buffer = 0;
        self.bits = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use texel_core::bytestream::ZWriter;

    use crate::bitstream::BitWriter;

    fn write(codes: &[(u32, u8)]) -> Vec<u8> {
        let mut sink = Vec::new();
        let mut writer = ZWriter::new(&mut sink);
        let mut bits = BitWriter::new(&mut writer);

        for (value, length) in codes {
            bits.put_bits(*value, *length).unwrap();
        }
        bits.flush().unwrap();
        sink
    }

    #[test]
    fn stuffs_after_ff() {
        assert_eq!(write(&[(0xFF, 8)]), [0xFF, 0x00]);
        assert_eq!(write(&[(0xFFFF, 16), (1, 8)]), [0xFF, 0x00, 0xFF, 0x00, 0x01]);
    }

    #[test]
    fn pads_with_ones() {
        assert_eq!(write(&[(0b101, 3)]), [0b1011_1111]);
        // a full byte of ones from padding is stuffed too
        assert_eq!(write(&[(0b1, 1)]), [0xFF, 0x00]);
    }

    #[test]
    fn packs_msb_first() {
        assert_eq!(write(&[(0b10, 2), (0b011, 3), (0b110, 3)]), [0b1001_1110]);
        assert_eq!(write(&[(0x1234, 16)]), [0x12, 0x34]);
    }
}
