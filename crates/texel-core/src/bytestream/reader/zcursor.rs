/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// A cursor over an in memory buffer
///
/// This is the preferred source for decoding from memory, reads are
/// plain slice copies and never allocate.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Move the position forward, saturating at the end of the stream
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num);
    }
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }
    /// Destroy the cursor returning the inner buffer
    pub fn into_inner(self) -> T {
        self.stream
    }

    #[inline(always)]
    fn remaining(&self) -> &[u8] {
        let buf = self.stream.as_ref();
        let start = self.position.min(buf.len());
        &buf[start..]
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        let byte = self.remaining().first().copied().unwrap_or(0);
        self.position += 1;
        byte
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let remaining = self.remaining();
        if remaining.len() < buf.len() {
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), remaining.len()));
        }
        buf.copy_from_slice(&remaining[..buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]) {
        if let Some(bytes) = self.remaining().get(..N) {
            buf.copy_from_slice(bytes);
            self.position += N;
        }
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let remaining = self.remaining();
        let len = remaining.len().min(buf.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.position += len;
        Ok(len)
    }

    #[inline(always)]
    fn peek_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let bytes_read = self.read_bytes(buf)?;
        self.rewind(bytes_read);
        Ok(bytes_read)
    }

    #[inline(always)]
    fn peek_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)?;
        self.rewind(buf.len());
        Ok(())
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => i64::try_from(position)?,
            ZSeekFrom::End(position) => {
                i64::try_from(self.stream.as_ref().len())?.saturating_add(position)
            }
            ZSeekFrom::Current(position) => {
                i64::try_from(self.position)?.saturating_add(position)
            }
        };
        if new_position < 0 {
            return Err(ZByteIoError::SeekError("Cannot seek before the start of the stream"));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.stream.as_ref().len())
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }
}
