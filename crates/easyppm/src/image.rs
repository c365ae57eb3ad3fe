/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixel buffer representation
//!
//! A buffer owns `width * height * kind.num_components()` bytes laid out
//! row-major with the top row first. Pixel `(x, row)` starts at byte
//! `kind.num_components() * (x + row * width)`.
use easyppm_core::kind::{ImageKind, Origin};
use easyppm_core::log::trace;

use crate::color::Color;
use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// An in-memory image whose pixel layout is decided by its [`ImageKind`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    kind:   ImageKind,
    origin: Origin,
    data:   Vec<u8>
}

impl PixelBuffer {
    /// Create a new zero filled buffer with an upper left origin
    ///
    /// Every pixel reads back as black `(0, 0, 0)`.
    ///
    /// # Errors
    /// `InvalidDimension` if width or height is not positive
    ///
    /// # Example
    /// ```
    /// use easyppm::{Color, ImageKind, PixelBuffer};
    ///
    /// let mut image = PixelBuffer::new(4, 3, ImageKind::Color).unwrap();
    /// image.set(1, 2, Color::rgb(10, 20, 30)).unwrap();
    ///
    /// assert_eq!(image.get(1, 2).unwrap(), Color::rgb(10, 20, 30));
    /// assert!(PixelBuffer::new(0, 3, ImageKind::Color).is_err());
    /// ```
    pub fn new(width: i64, height: i64, kind: ImageKind) -> Result<PixelBuffer, ImageErrors> {
        PixelBuffer::new_with_origin(width, height, kind, Origin::default())
    }

    /// Create a new zero filled buffer whose `y` coordinates follow `origin`
    pub fn new_with_origin(
        width: i64, height: i64, kind: ImageKind, origin: Origin
    ) -> Result<PixelBuffer, ImageErrors> {
        let invalid = || ImageErrors::InvalidDimension(width, height);

        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;

        let size = w
            .checked_mul(h)
            .and_then(|x| x.checked_mul(kind.num_components()))
            .ok_or_else(invalid)?;

        trace!("Allocating {w}x{h} {kind} buffer of {size} bytes");

        Ok(PixelBuffer {
            width: w,
            height: h,
            kind,
            origin,
            data: vec![0; size]
        })
    }

    /// Wrap already laid out pixel bytes
    ///
    /// Callers guarantee `data.len() == width * height * kind.num_components()`
    /// and, for bitmaps, that every byte is `0` or `1`.
    pub(crate) fn from_raw(width: usize, height: usize, kind: ImageKind, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * kind.num_components());

        PixelBuffer {
            width,
            height,
            kind,
            origin: Origin::default(),
            data
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn kind(&self) -> ImageKind {
        self.kind
    }

    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Return a copy of this buffer addressed through a different origin
    ///
    /// Stored rows are not moved, only how `y` maps to them changes
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> PixelBuffer {
        self.origin = origin;
        self
    }

    /// Number of pixels, `width * height`
    pub const fn num_pixels(&self) -> usize {
        self.width * self.height
    }

    /// The raw stored bytes, top row first
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// A summary of the buffer layout
    pub const fn metadata(&self) -> ImageMetadata {
        ImageMetadata {
            width:  self.width,
            height: self.height,
            kind:   self.kind,
            origin: self.origin
        }
    }

    /// Byte offset of the pixel at `(x, y)`
    fn offset(&self, x: i64, y: i64) -> Result<usize, ImageErrors> {
        let out_of_bounds = || ImageErrors::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height
        };
        let col = usize::try_from(x).map_err(|_| out_of_bounds())?;
        let y = usize::try_from(y).map_err(|_| out_of_bounds())?;

        if col >= self.width || y >= self.height {
            return Err(out_of_bounds());
        }
        let row = self.origin.row(y, self.height);

        Ok(self.kind.num_components() * (col + row * self.width))
    }

    /// Read the color at `(x, y)`
    ///
    /// Single channel kinds replicate their stored byte into all three channels
    ///
    /// # Errors
    /// `OutOfBounds` if `x` or `y` lie outside the image
    pub fn get(&self, x: i64, y: i64) -> Result<Color, ImageErrors> {
        let offset = self.offset(x, y)?;

        match self.kind {
            ImageKind::Bitmap | ImageKind::Greyscale => Ok(Color::grey(self.data[offset])),
            ImageKind::Color => Ok(Color::rgb(
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2]
            ))
        }
    }

    /// Write `color` at `(x, y)`
    ///
    /// Color buffers store all three channels, greyscale stores the red channel
    /// and bitmaps store `0` when red is zero and `1` (white) otherwise.
    ///
    /// # Errors
    /// `OutOfBounds` if `x` or `y` lie outside the image
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> Result<(), ImageErrors> {
        let offset = self.offset(x, y)?;
        let kind = self.kind;

        store_pixel(kind, &mut self.data[offset..offset + kind.num_components()], color);

        Ok(())
    }

    /// Release the buffer storage
    ///
    /// This is the same as dropping the buffer
    pub fn destroy(self) {
        trace!("Releasing {} byte buffer", self.data.len());
    }
}

/// Write `color` to a single pixel slot of `kind`
pub(crate) fn store_pixel(kind: ImageKind, pixel: &mut [u8], color: Color) {
    match kind {
        ImageKind::Bitmap => pixel[0] = u8::from(color.r != 0),
        ImageKind::Greyscale => pixel[0] = color.r,
        ImageKind::Color => pixel.copy_from_slice(&color.to_array())
    }
}
