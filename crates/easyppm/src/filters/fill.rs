/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fill filter: set every pixel to one color
use easyppm_core::kind::ImageKind;

use crate::color::Color;
use crate::errors::ImageErrors;
use crate::image::{store_pixel, PixelBuffer};

/// Whether `color` may fill an image of `kind`
///
/// - Bitmaps take black or white, i.e a monochrome color of `0`, `1` or `255`
/// - Greyscale takes any monochrome color
/// - Color takes anything
pub fn color_fits_kind(color: Color, kind: ImageKind) -> bool {
    if kind.is_monochrome() && !color.is_monochrome() {
        return false;
    }
    match kind {
        ImageKind::Bitmap => matches!(color.r, 0 | 1 | 255),
        ImageKind::Greyscale | ImageKind::Color => true
    }
}

/// Set every pixel of `pixels`, a buffer of `kind`, to `color`
pub fn fill(pixels: &mut [u8], kind: ImageKind, color: Color) {
    let components = kind.num_components();

    let mut value = [0_u8; 3];
    store_pixel(kind, &mut value[..components], color);

    for pixel in pixels.chunks_exact_mut(components) {
        pixel.copy_from_slice(&value[..components]);
    }
}

impl PixelBuffer {
    /// Set every pixel to `color`
    ///
    /// # Errors
    /// `InvalidColor` if the color does not suit the buffer kind,
    /// see [`color_fits_kind`]. The buffer is left untouched.
    pub fn fill(&mut self, color: Color) -> Result<(), ImageErrors> {
        if !color_fits_kind(color, self.kind()) {
            return Err(ImageErrors::InvalidColor(color, self.kind()));
        }
        self.fill_unvalidated(color);

        Ok(())
    }

    /// Set every pixel to `color` without validating it
    ///
    /// Channels are stored with the same rules as [`set`](PixelBuffer::set)
    pub fn fill_unvalidated(&mut self, color: Color) {
        let kind = self.kind();
        fill(self.data_mut(), kind, color);
    }
}
