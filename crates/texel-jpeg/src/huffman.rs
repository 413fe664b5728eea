/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Canonical Huffman code construction
//!
//! A table is described the way a DHT segment stores it: the number of
//! codes of each length from 1 to 16 followed by the symbols in order of
//! increasing code length. Codes are assigned canonically, each length
//! continuing from the last code of the previous length shifted left by one.

use crate::misc::{
    AC_CHROMA_BITS, AC_CHROMA_VALUES, AC_LUMA_BITS, AC_LUMA_VALUES, DC_CHROMA_BITS,
    DC_CHROMA_VALUES, DC_LUMA_BITS, DC_LUMA_VALUES
};

/// A single Huffman code, `length` low bits of `code` are used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HuffmanCode {
    pub code:   u16,
    pub length: u8
}

/// Encoder side Huffman table mapping a symbol to its code.
#[derive(Clone)]
pub struct HuffmanTable {
    bits:   [u8; 16],
    values: &'static [u8],
    codes:  [HuffmanCode; 256]
}

impl HuffmanTable {
    /// Build a table from code length counts and symbols.
    ///
    /// Symbols not present in `values` map to a zero length code.
    pub fn new(bits: &[u8; 16], values: &'static [u8]) -> HuffmanTable {
        let mut codes = [HuffmanCode::default(); 256];
        let mut code: u16 = 0;
        let mut symbols = values.iter();

        for (length, count) in (1_u8..=16).zip(bits.iter()) {
            for _ in 0..*count {
                if let Some(symbol) = symbols.next() {
                    codes[usize::from(*symbol)] = HuffmanCode { code, length };
                }
                code = code.wrapping_add(1);
            }
            code <<= 1;
        }

        HuffmanTable {
            bits: *bits,
            values,
            codes
        }
    }

    /// Standard luminance DC table
    pub fn luma_dc() -> HuffmanTable {
        HuffmanTable::new(&DC_LUMA_BITS, &DC_LUMA_VALUES)
    }

    /// Standard luminance AC table
    pub fn luma_ac() -> HuffmanTable {
        HuffmanTable::new(&AC_LUMA_BITS, &AC_LUMA_VALUES)
    }

    /// Standard chrominance DC table
    pub fn chroma_dc() -> HuffmanTable {
        HuffmanTable::new(&DC_CHROMA_BITS, &DC_CHROMA_VALUES)
    }

    /// Standard chrominance AC table
    pub fn chroma_ac() -> HuffmanTable {
        HuffmanTable::new(&AC_CHROMA_BITS, &AC_CHROMA_VALUES)
    }

    #[inline(always)]
    pub fn code(&self, symbol: u8) -> HuffmanCode {
        self.codes[usize::from(symbol)]
    }

    pub const fn bits(&self) -> &[u8; 16] {
        &self.bits
    }

    pub const fn values(&self) -> &'static [u8] {
        self.values
    }
}
