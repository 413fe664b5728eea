/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

mod no_std_writer;
mod std_writer;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// The writer counts every byte it hands to the sink so encoders
/// can report the encoded size.
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the stream
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Destroy this writer returning the underlying sink
    pub fn inner(self) -> T {
        self.buffer
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use texel_core::bytestream::ZWriter;
    /// let mut sink = vec![];
    /// let mut stream = ZWriter::new(&mut sink);
    /// stream.write_u16_be_err(0xFFD8).unwrap();
    /// assert_eq!(stream.bytes_written(),2);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Write bytes, returning how many were accepted by the sink
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, ZByteIoError> {
        let bytes = self.buffer.write_bytes(buf)?;
        self.bytes_written += bytes;
        Ok(bytes)
    }
    /// Write all bytes or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    pub fn write_const_bytes<const N: usize>(
        &mut self, byte: &[u8; N]
    ) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(byte)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the bytestream or error out
    /// if the sink cannot take it
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Write a single byte, ignoring sink errors.
    pub fn write_u8(&mut self, byte: u8) {
        let _ = self.write_const_bytes(&[byte]);
    }
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
    /// Hint the sink about the number of bytes that will follow
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<T: ZByteWriterTrait> ZWriter<T> {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: Mode) -> Result<(), ZByteIoError> {
                // mode is a compile time constant, the match
                // is folded away
                let bytes = match mode {
                    Mode::BE => byte.to_be_bytes(),
                    Mode::LE => byte.to_le_bytes()
                };
                self.write_const_bytes(&bytes)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name2(&mut self, byte: $int_type) -> Result<(), ZByteIoError> {
                self.$name(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) -> Result<(), ZByteIoError> {
                self.$name(byte, Mode::LE)
            }
        }
    };
}

write_single_type!(write_u64_inner_or_die, write_u64_be_err, write_u64_le_err, u64);
write_single_type!(write_u32_inner_or_die, write_u32_be_err, write_u32_le_err, u32);
write_single_type!(write_i32_inner_or_die, write_i32_be_err, write_i32_le_err, i32);
write_single_type!(write_u16_inner_or_die, write_u16_be_err, write_u16_le_err, u16);
