/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gamma correction: raise every normalized channel to `1 / gamma`
use easyppm_core::kind::ImageKind;
use easyppm_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::PixelBuffer;

/// Apply `pow(c / 255, 1 / value) * 255`, rounded, to every byte of `pixels`
///
/// `value` must be positive and finite.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::needless_range_loop,
    clippy::cast_precision_loss
)]
pub fn gamma(pixels: &mut [u8], value: f32) {
    let mut lut = [0_u8; 256];

    {
        // create a lookup table for conversion.
        let exponent = 1.0 / value;

        for x in 0..=255_usize {
            let pixel_f32 = (x as f32) / 255.0;
            let corrected = (pixel_f32.powf(exponent) * 255.0).round();

            lut[x] = corrected.clamp(0.0, 255.0) as u8;
        }
    }
    // now do gamma correction
    for px in pixels {
        *px = lut[usize::from(*px)];
    }
}

impl PixelBuffer {
    /// Gamma correct every channel in place
    ///
    /// Bitmaps are left unchanged, their stored values are black/white flags
    /// and both ends of the range are fixed points of the curve.
    ///
    /// # Errors
    /// `InvalidParameter` if `value` is not a positive finite number,
    /// the buffer is left untouched.
    pub fn gamma_correct(&mut self, value: f32) -> Result<(), ImageErrors> {
        if !(value.is_finite() && value > 0.0) {
            return Err(ImageErrors::InvalidParameter(format!(
                "gamma must be a positive finite number, found {value}"
            )));
        }
        if self.kind() == ImageKind::Bitmap {
            return Ok(());
        }
        trace!("Gamma correcting with {value}");

        gamma(self.data_mut(), value);

        Ok(())
    }
}
