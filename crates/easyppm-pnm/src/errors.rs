/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Possible errors that may occur during decoding
pub enum PnmDecodeErrors {
    /// The stream does not start with a `P1`, `P2` or `P3` tag
    UnknownTag(String),
    /// The stream is a binary netpbm variant,
    /// the argument is the digit following `P`
    UnsupportedBinary(u8),
    /// Missing or malformed header field
    InvalidHeader(String),
    /// A token that should be an integer is not one
    InvalidToken(String),
    /// A sample larger than the maximum allowed
    ///
    /// # Arguments
    /// - 1st argument is the value found
    /// - 2nd argument is the maximum allowed
    ValueOutOfRange(u64, u64),
    /// Width or height is zero or negative
    InvalidDimensions(i64, i64),
    /// Too large dimensions
    ///
    /// # Arguments
    /// - 1st argument is the configured maximum
    /// - 2nd argument is the value found
    LargeDimensions(usize, usize),
    /// The stream ended before all pixels were read
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels expected
    /// - 2nd argument is the number of complete pixels found
    TruncatedData(usize, usize),
    /// Non-whitespace content after the last pixel in strict mode,
    /// the argument is the byte offset where it starts
    TrailingData(usize),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTag(tag) => {
                writeln!(f, "Unknown netpbm tag `{tag}`, expected one of P1, P2 or P3")
            }
            Self::UnsupportedBinary(version) => {
                writeln!(
                    f,
                    "Binary netpbm variant P{} is not supported, only plain P1, P2 and P3 are",
                    *version as char
                )
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::InvalidToken(token) => {
                writeln!(f, "Expected an integer but found `{token}`")
            }
            Self::ValueOutOfRange(value, max) => {
                writeln!(f, "Sample value {value} is larger than the maximum value {max}")
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be positive"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient pixel data, expected {expected} pixels but found {found}"
                )
            }
            Self::TrailingData(position) => {
                writeln!(f, "Unexpected data after the last pixel at byte {position}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}")
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PnmDecodeErrors {}

impl From<&'static str> for PnmDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

/// Errors occurring during encoding
pub enum PnmEncodeErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PnmEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PnmEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PnmEncodeErrors::IoErrors(err) => Some(err),
            PnmEncodeErrors::Static(_) => None
        }
    }
}
