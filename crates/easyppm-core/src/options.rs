/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options

/// Decoder options
///
/// Options are plain values, every setter consumes and returns the
/// options so they can be chained.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:  usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height: usize,
    /// Whether content after the last pixel is an error
    ///
    /// - Default value: false
    strict:     bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14,
            strict:     false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create options that tolerate trailing content after pixel data
    ///
    /// This is the same as `default`
    pub fn new_safe() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Create options that reject any non-whitespace content after
    /// the last pixel
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    pub const fn get_strict_mode(&self) -> bool {
        self.strict
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether trailing content after the pixel data is an error
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }
}

/// Encoder options
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    /// Longest line, in characters, the encoder writes
    /// for pixel data.
    ///
    /// A line always holds at least one pixel group, so a
    /// value smaller than a group still makes progress.
    ///
    /// - Default value: 70
    max_line_width: usize
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { max_line_width: 70 }
    }
}

impl EncoderOptions {
    /// Get the maximum line width for pixel data
    pub const fn get_max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Set the maximum line width for pixel data
    pub fn set_max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }
}
