/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when creating, modifying, reading or writing pixel buffers
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use easyppm_core::kind::ImageKind;
use easyppm_pnm::{PnmDecodeErrors, PnmEncodeErrors};

use crate::color::Color;

/// All possible errors reported by the pixel buffer
pub enum ImageErrors {
    /// Width or height is zero or negative
    InvalidDimension(i64, i64),
    /// A pixel coordinate outside the buffer
    OutOfBounds {
        x:      i64,
        y:      i64,
        width:  usize,
        height: usize
    },
    /// A color that cannot be written to a buffer of the given kind
    InvalidColor(Color, ImageKind),
    /// An operation parameter outside its valid domain
    InvalidParameter(String),
    /// Opening, reading or writing a file or stream failed
    IoError(io::Error),
    /// The netpbm text is malformed or truncated
    ParseError(PnmDecodeErrors),
    /// The encoder rejected the pixel data
    EncodeError(PnmEncodeErrors),
    /// The path has no `.` in its file name
    MalformedPath(PathBuf),
    /// The path extension does not agree with the image kind
    ExtensionMismatch { path: PathBuf, expected: ImageKind }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be positive"
                )
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is outside the {width}x{height} image"
                )
            }
            Self::InvalidColor(color, kind) => {
                writeln!(f, "Color {color} cannot be written to a {kind} image")
            }
            Self::InvalidParameter(reason) => {
                writeln!(f, "Invalid parameter: {reason}")
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error {err}")
            }
            Self::ParseError(err) => {
                writeln!(f, "Netpbm decoding failed: {err:?}")
            }
            Self::EncodeError(err) => {
                writeln!(f, "Netpbm encoding failed: {err:?}")
            }
            Self::MalformedPath(path) => {
                writeln!(f, "No extension for file {path:?}")
            }
            Self::ExtensionMismatch { path, expected } => {
                writeln!(
                    f,
                    "File {path:?} does not have the .{} extension expected for a {expected} image",
                    expected.extension()
                )
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::EncodeError(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for ImageErrors {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<PnmDecodeErrors> for ImageErrors {
    fn from(err: PnmDecodeErrors) -> Self {
        match err {
            PnmDecodeErrors::InvalidDimensions(width, height) => {
                Self::InvalidDimension(width, height)
            }
            err => Self::ParseError(err)
        }
    }
}

impl From<PnmEncodeErrors> for ImageErrors {
    fn from(err: PnmEncodeErrors) -> Self {
        match err {
            PnmEncodeErrors::IoErrors(err) => Self::IoError(err),
            err => Self::EncodeError(err)
        }
    }
}
