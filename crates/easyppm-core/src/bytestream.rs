/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A cursor over in-memory bytes for whitespace separated text formats.
//!
//! Netpbm plain files are a stream of ASCII tokens separated by whitespace,
//! with `#` starting a comment that runs to the end of the line.

/// An in-memory reader over a byte slice
///
/// Reads never fail, reading past the end returns `None`
pub struct TokenReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> TokenReader<'a> {
    /// Create a new reader positioned at the start of `stream`
    pub const fn new(stream: &'a [u8]) -> TokenReader<'a> {
        TokenReader {
            stream,
            position: 0
        }
    }

    /// Whether all bytes have been consumed
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Current byte offset from the start of the stream
    #[inline]
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Return the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return the next byte and advance past it
    #[inline]
    pub fn get_u8(&mut self) -> Option<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Some(byte)
    }

    /// Skip all whitespace characters and comments
    /// until one hits a character that isn't a space or
    /// we reach eof
    pub fn skip_spaces(&mut self) {
        while let Some(byte) = self.peek_u8() {
            if byte == b'#' {
                // skip the whole comment, the newline is
                // whitespace and goes with the next iteration
                while let Some(byte) = self.peek_u8() {
                    if byte == b'\n' {
                        break;
                    }
                    self.position += 1;
                }
            } else if byte.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Skip leading whitespace and comments then return the bytes up to the
    /// next whitespace, comment start or end of stream.
    ///
    /// Returns `None` if the stream holds no further token
    pub fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_spaces();

        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if byte.is_ascii_whitespace() || byte == b'#' {
                break;
            }
            self.position += 1;
        }
        if start == self.position {
            return None;
        }
        Some(&self.stream[start..self.position])
    }
}
