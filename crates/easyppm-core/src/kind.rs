/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image kind and origin information.

use core::fmt::{Display, Formatter};

/// The pixel encodings understood by the plain text netpbm family
///
/// The kind decides how many bytes a pixel occupies in a buffer
/// and which magic tag is written to a file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageKind {
    /// Portable bitmap, `P1`
    ///
    /// One byte per pixel, stored as `0` (black) or `1` (white)
    Bitmap,
    /// Portable graymap, `P2`
    ///
    /// One byte per pixel, `0..=255`
    Greyscale,
    /// Portable pixmap, `P3`
    ///
    /// Three bytes per pixel in R,G,B order
    Color
}

impl ImageKind {
    /// Number of bytes a single pixel of this kind occupies
    ///
    /// E.g. `Color` returns 3 since it contains R,G and B to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Bitmap | Self::Greyscale => 1,
            Self::Color => 3
        }
    }

    /// The plain text magic tag for this kind, e.g. `P3` for `Color`
    pub const fn magic(&self) -> &'static str {
        match self {
            Self::Bitmap => "P1",
            Self::Greyscale => "P2",
            Self::Color => "P3"
        }
    }

    /// Map the digit following `P` in a plain text header to a kind
    ///
    /// Returns `None` for anything other than `1`, `2` and `3`
    pub const fn from_magic(version: u8) -> Option<ImageKind> {
        match version {
            b'1' => Some(Self::Bitmap),
            b'2' => Some(Self::Greyscale),
            b'3' => Some(Self::Color),
            _ => None
        }
    }

    /// Whether the header of this kind carries a max value token.
    ///
    /// Bitmaps are one bit per pixel and therefore have none.
    pub const fn has_max_value(&self) -> bool {
        !matches!(self, Self::Bitmap)
    }

    /// Whether pixels of this kind hold a single intensity,
    /// so a color written to them must have equal channels
    pub const fn is_monochrome(&self) -> bool {
        matches!(self, Self::Bitmap | Self::Greyscale)
    }

    /// The conventional file extension, without the leading dot
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Bitmap => "pbm",
            Self::Greyscale => "pgm",
            Self::Color => "ppm"
        }
    }

    /// Return the kind whose conventional extension is `ext`
    ///
    /// Matching is ASCII case-insensitive and `ext` should not
    /// contain the leading dot.
    pub fn from_extension(ext: &str) -> Option<ImageKind> {
        ALL_KINDS
            .iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
            .copied()
    }
}

impl Display for ImageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bitmap => write!(f, "bitmap ({})", self.magic()),
            Self::Greyscale => write!(f, "greyscale ({})", self.magic()),
            Self::Color => write!(f, "color ({})", self.magic())
        }
    }
}

/// All kinds supported by the library
pub static ALL_KINDS: [ImageKind; 3] = [ImageKind::Bitmap, ImageKind::Greyscale, ImageKind::Color];

/// Where pixel coordinate `(0, 0)` lies.
///
/// The origin only affects how a `y` coordinate passed to pixel accessors
/// maps to a stored row, storage is always top to bottom.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Origin {
    /// `y = 0` is the top row
    #[default]
    UpperLeft,
    /// `y = 0` is the bottom row
    LowerLeft
}

impl Origin {
    /// Map a `y` coordinate to the stored row index.
    ///
    /// `y` must be less than `height`.
    pub const fn row(&self, y: usize, height: usize) -> usize {
        match self {
            Self::UpperLeft => y,
            Self::LowerLeft => height - 1 - y
        }
    }
}
