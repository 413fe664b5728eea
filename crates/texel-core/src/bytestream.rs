/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main traits that allow for
//! reading and writing bytes, [`ZByteReaderTrait`] and [`ZByteWriterTrait`],
//! and the two wrappers the codecs talk to, [`ZReader`] and [`ZWriter`].
//!
//! Decoders are generic over where bytes come from, an in memory
//! buffer wrapped in a [`ZCursor`] or, with the `std` feature, a
//! [`BufReader`](std::io::BufReader) over a file whose internal buffer
//! provides the read-ahead.

pub use reader::zcursor::ZCursor;
pub use reader::{ZByteIoError, ZReader, ZSeekFrom};
pub use traits::*;
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
