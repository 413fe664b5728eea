/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
///
/// Not all options are respected by all decoders,
/// each option lists who respects it
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height:  usize,
    /// Treat some warnings as errors
    ///
    /// - Default value: false
    /// - Respected by: `bmp`
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create the decoder with options setting most configurable
    /// options to be their safe counterparts
    ///
    /// This is the same as `default`
    pub fn new_safe() -> DecoderOptions {
        DecoderOptions::default()
    }
    /// Create decoder options that reject non standard files
    /// the decoders would otherwise accept with a warning
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and invalid
    /// samples will be rejected by the decoder
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn defaults_and_setters() {
        let options = DecoderOptions::default();
        assert_eq!(options.max_width(), 16384);
        assert_eq!(options.max_height(), 16384);
        assert!(!options.strict_mode());

        let options = options.set_max_width(10).set_max_height(20);
        assert_eq!((options.max_width(), options.max_height()), (10, 20));
        assert!(DecoderOptions::new_strict().strict_mode());
    }
}
